use std::collections::BTreeMap;

use crate::grid::TileCoord;
use crate::tile::Tile;

/// Sparse tile storage: only occupied cells have an entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileStore {
    tiles: BTreeMap<TileCoord, Tile>,
}

impl TileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coord: TileCoord) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    pub fn is_occupied(&self, coord: TileCoord) -> bool {
        self.tiles.contains_key(&coord)
    }

    /// Stores `tile` at its coordinate and hands back whatever it replaced.
    pub fn upsert(&mut self, tile: Tile) -> Option<Tile> {
        self.tiles.insert(tile.coord(), tile)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }
}

impl FromIterator<Tile> for TileStore {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut store = TileStore::new();
        for tile in iter {
            store.upsert(tile);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_replaces_existing_tile() {
        let mut store = TileStore::new();
        let coord = TileCoord::new(2, 3);
        assert_eq!(store.upsert(Tile::new(coord, "<div>A</div>", 1)), None);
        let replaced = store.upsert(Tile::new(coord, "<div>B</div>", 2));
        assert_eq!(replaced.map(|tile| tile.html), Some("<div>A</div>".to_string()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(coord).map(|tile| tile.html.as_str()), Some("<div>B</div>"));
    }

    #[test]
    fn iter_walks_grid_order() {
        let store: TileStore = [
            Tile::new(TileCoord::new(0, 1), "c", 0),
            Tile::new(TileCoord::new(1, 0), "b", 0),
            Tile::new(TileCoord::new(0, 0), "a", 0),
        ]
        .into_iter()
        .collect();
        let ids: Vec<&str> = store.iter().map(|tile| tile.id.as_str()).collect();
        assert_eq!(ids, vec!["0-0", "1-0", "0-1"]);
    }

    #[test]
    fn missing_coordinate_reads_empty() {
        let store = TileStore::new();
        assert!(store.is_empty());
        assert!(store.get(TileCoord::new(9, 9)).is_none());
        assert!(!store.is_occupied(TileCoord::new(9, 9)));
    }
}
