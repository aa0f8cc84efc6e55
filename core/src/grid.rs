use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

pub const GRID_SIZE: u32 = 20;
pub const GRID_CELL_COUNT: u32 = GRID_SIZE * GRID_SIZE;
pub const TILE_SIZE_PX: f32 = 120.0;

/// A cell address on the grid. Ordered row-major, so iterating a sorted
/// collection of coordinates walks the grid the same way the view lays it out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn checked(x: u32, y: u32) -> Result<Self, GridError> {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            return Err(GridError::OutOfBounds {
                x,
                y,
                size: GRID_SIZE,
            });
        }
        Ok(Self { x, y })
    }

    pub const fn from_index(index: u32) -> Self {
        Self {
            x: index % GRID_SIZE,
            y: index / GRID_SIZE,
        }
    }

    pub const fn index(self) -> u32 {
        self.y * GRID_SIZE + self.x
    }

    /// Parses `x-y` (tile id form) or `x,y` (label form).
    pub fn parse_id(value: &str) -> Result<Self, GridError> {
        let trimmed = value.trim();
        let invalid = || GridError::InvalidId {
            value: trimmed.to_string(),
        };
        let (raw_x, raw_y) = trimmed
            .split_once('-')
            .or_else(|| trimmed.split_once(','))
            .ok_or_else(invalid)?;
        let x = parse_axis(raw_x).ok_or_else(invalid)?;
        let y = parse_axis(raw_y).ok_or_else(invalid)?;
        Ok(Self { x, y })
    }

    pub fn all() -> impl Iterator<Item = TileCoord> {
        (0..GRID_CELL_COUNT).map(TileCoord::from_index)
    }
}

impl Ord for TileCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for TileCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl std::str::FromStr for TileCoord {
    type Err = GridError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse_id(value)
    }
}

// Digits only: `u32::from_str` would also take a leading `+`.
fn parse_axis(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Pixel edge of one cell at the given zoom factor.
pub fn tile_size_px(zoom: f32) -> f32 {
    TILE_SIZE_PX * zoom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        assert_eq!(TileCoord::from_index(0), TileCoord::new(0, 0));
        assert_eq!(TileCoord::from_index(19), TileCoord::new(19, 0));
        assert_eq!(TileCoord::from_index(20), TileCoord::new(0, 1));
        assert_eq!(TileCoord::from_index(399), TileCoord::new(19, 19));
        for index in 0..GRID_CELL_COUNT {
            assert_eq!(TileCoord::from_index(index).index(), index);
        }
    }

    #[test]
    fn ordering_follows_rows() {
        let mut coords = vec![
            TileCoord::new(0, 1),
            TileCoord::new(5, 0),
            TileCoord::new(1, 0),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                TileCoord::new(1, 0),
                TileCoord::new(5, 0),
                TileCoord::new(0, 1)
            ]
        );
    }

    #[test]
    fn checked_rejects_outside_grid() {
        assert!(TileCoord::checked(19, 19).is_ok());
        assert_eq!(
            TileCoord::checked(20, 3),
            Err(GridError::OutOfBounds {
                x: 20,
                y: 3,
                size: GRID_SIZE
            })
        );
    }

    #[test]
    fn parse_accepts_id_and_label_forms() {
        assert_eq!(TileCoord::parse_id("2-3"), Ok(TileCoord::new(2, 3)));
        assert_eq!(TileCoord::parse_id(" 4, 7 "), Ok(TileCoord::new(4, 7)));
        assert!(TileCoord::parse_id("4").is_err());
        assert!(TileCoord::parse_id("a-b").is_err());
        assert!(TileCoord::parse_id("-1-2").is_err());
    }

    #[test]
    fn parse_rejects_signed_axes() {
        assert!(TileCoord::parse_id("+3,4").is_err());
        assert!(TileCoord::parse_id("3,+4").is_err());
        assert!(TileCoord::parse_id("+3-4").is_err());
        assert!(TileCoord::parse_id(",4").is_err());
        assert_eq!(TileCoord::parse_id("03,4"), Ok(TileCoord::new(3, 4)));
    }

    #[test]
    fn label_uses_comma() {
        assert_eq!(TileCoord::new(3, 11).to_string(), "3,11");
    }

    #[test]
    fn size_scales_with_zoom() {
        assert_eq!(tile_size_px(1.0), 120.0);
        assert_eq!(tile_size_px(0.5), 60.0);
        assert_eq!(tile_size_px(2.0), 240.0);
    }
}
