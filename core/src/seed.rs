use crate::grid::TileCoord;
use crate::tile::Tile;

#[derive(Clone, Copy, Debug)]
pub struct DemoTile {
    pub coord: TileCoord,
    pub html: &'static str,
}

pub const DEMO_TILES: &[DemoTile] = &[
    DemoTile {
        coord: TileCoord::new(0, 0),
        html: r#"<div style="background: linear-gradient(45deg, #ff00ff, #00ffff); padding: 20px; text-align: center; color: white; font-weight: bold;">Welcome to<br/>CodePlace!</div>"#,
    },
    DemoTile {
        coord: TileCoord::new(1, 0),
        html: r#"<div style="background: #1a1a1a; color: #00ff00; padding: 10px; font-family: monospace;">console.log("Hello World!");<br/>// Edit any tile<br/>// Upload HTML<br/>// Create chaos!</div>"#,
    },
    DemoTile {
        coord: TileCoord::new(0, 1),
        html: "<div style=\"background: radial-gradient(circle, #ff6b6b, #4ecdc4); padding: 20px; animation: pulse 2s infinite;\"><style>@keyframes pulse { 0% { transform: scale(1); } 50% { transform: scale(1.05); } 100% { transform: scale(1); } }</style>\u{1F308} MEME ZONE \u{1F308}</div>",
    },
];

pub fn demo_tiles(timestamp: u64) -> impl Iterator<Item = Tile> {
    DEMO_TILES
        .iter()
        .map(move |demo| Tile::new(demo.coord, demo.html, timestamp))
}
