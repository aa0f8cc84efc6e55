pub mod editor;
pub mod error;
pub mod grid;
pub mod seed;
pub mod state;
pub mod store;
pub mod tile;
pub mod zoom;

pub use editor::{EditorState, DEFAULT_TILE_HTML};
pub use error::GridError;
pub use grid::{TileCoord, GRID_CELL_COUNT, GRID_SIZE, TILE_SIZE_PX};
pub use seed::{demo_tiles, DemoTile, DEMO_TILES};
pub use state::{GridAction, GridState};
pub use store::TileStore;
pub use tile::{exceeds_guideline, Tile, HTML_SIZE_GUIDELINE_BYTES};
pub use zoom::{Zoom, ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
