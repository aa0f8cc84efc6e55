use serde::{Deserialize, Serialize};

use crate::grid::TileCoord;

/// Size the editor advertises for tile markup. Shown, never enforced.
pub const HTML_SIZE_GUIDELINE_BYTES: usize = 2048;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub html: String,
    pub timestamp: u64,
}

impl Tile {
    pub fn new(coord: TileCoord, html: impl Into<String>, timestamp: u64) -> Self {
        Self {
            id: Self::id_for(coord),
            x: coord.x,
            y: coord.y,
            html: html.into(),
            timestamp,
        }
    }

    pub fn id_for(coord: TileCoord) -> String {
        format!("{}-{}", coord.x, coord.y)
    }

    pub fn coord(&self) -> TileCoord {
        TileCoord::new(self.x, self.y)
    }

    pub fn html_len(&self) -> usize {
        self.html.len()
    }

    pub fn exceeds_guideline(&self) -> bool {
        exceeds_guideline(&self.html)
    }
}

/// Whether markup is over the advertised size. Used for the editor's counter.
pub fn exceeds_guideline(html: &str) -> bool {
    html.len() > HTML_SIZE_GUIDELINE_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_derived_from_coordinates() {
        let tile = Tile::new(TileCoord::new(12, 4), "<p>x</p>", 7);
        assert_eq!(tile.id, "12-4");
        assert_eq!(tile.coord(), TileCoord::new(12, 4));
        assert_eq!(TileCoord::parse_id(&tile.id), Ok(tile.coord()));
    }

    #[test]
    fn oversized_html_is_kept() {
        let html = "a".repeat(HTML_SIZE_GUIDELINE_BYTES + 1);
        let tile = Tile::new(TileCoord::new(0, 0), html.clone(), 0);
        assert!(tile.exceeds_guideline());
        assert_eq!(tile.html, html);
        assert!(!exceeds_guideline(&html[1..]));
    }
}
