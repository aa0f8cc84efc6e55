use std::rc::Rc;

use crate::editor::EditorState;
use crate::grid::TileCoord;
use crate::seed::demo_tiles;
use crate::store::TileStore;
use crate::tile::Tile;
use crate::zoom::Zoom;

#[derive(Clone, Debug)]
pub enum GridAction {
    ZoomIn,
    ZoomOut,
    OpenTile { coord: TileCoord },
    EditDraft { html: String },
    Cancel,
    Save { now_ms: u64 },
}

#[derive(Clone, Debug, Default)]
pub struct GridState {
    /// Shared so readers can hold the store while the editor changes; only a
    /// save replaces it.
    pub tiles: Rc<TileStore>,
    pub zoom: Zoom,
    pub editor: EditorState,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh page state with the demo tiles in place.
    pub fn seeded(now_ms: u64) -> Self {
        Self {
            tiles: Rc::new(demo_tiles(now_ms).collect()),
            ..Self::default()
        }
    }

    pub fn tile_at(&self, coord: TileCoord) -> Option<&Tile> {
        self.tiles.get(coord)
    }

    pub fn open_tile(&mut self, coord: TileCoord) {
        let existing = self.tiles.get(coord).map(|tile| tile.html.as_str());
        self.editor = EditorState::open(coord, existing);
    }

    pub fn edit_draft(&mut self, html: String) -> bool {
        self.editor.set_draft(html)
    }

    pub fn cancel(&mut self) -> bool {
        self.editor.close().is_some()
    }

    /// Writes the draft into the selected cell and closes the editor.
    /// Returns `false` without touching anything when nothing is selected.
    pub fn save(&mut self, now_ms: u64) -> bool {
        let Some((coord, draft)) = self.editor.close() else {
            return false;
        };
        Rc::make_mut(&mut self.tiles).upsert(Tile::new(coord, draft, now_ms));
        true
    }

    /// Applies one UI message. Returns whether anything changed.
    pub fn apply(&mut self, action: GridAction) -> bool {
        match action {
            GridAction::ZoomIn => self.zoom.zoom_in(),
            GridAction::ZoomOut => self.zoom.zoom_out(),
            GridAction::OpenTile { coord } => {
                self.open_tile(coord);
                true
            }
            GridAction::EditDraft { html } => self.edit_draft(html),
            GridAction::Cancel => self.cancel(),
            GridAction::Save { now_ms } => self.save(now_ms),
        }
    }
}
