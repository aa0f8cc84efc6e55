use crate::grid::TileCoord;

pub const DEFAULT_TILE_HTML: &str =
    r#"<div style="padding: 20px; background: #2a2a2a; color: #00ffff;">Your HTML here...</div>"#;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Open {
        coord: TileCoord,
        draft: String,
    },
}

impl EditorState {
    pub fn open(coord: TileCoord, existing: Option<&str>) -> Self {
        EditorState::Open {
            coord,
            draft: existing.unwrap_or(DEFAULT_TILE_HTML).to_string(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditorState::Open { .. })
    }

    pub fn selected(&self) -> Option<TileCoord> {
        match self {
            EditorState::Open { coord, .. } => Some(*coord),
            EditorState::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditorState::Open { draft, .. } => Some(draft.as_str()),
            EditorState::Closed => None,
        }
    }

    /// Replaces the draft text. Ignored while closed.
    pub fn set_draft(&mut self, text: String) -> bool {
        match self {
            EditorState::Open { draft, .. } => {
                *draft = text;
                true
            }
            EditorState::Closed => false,
        }
    }

    /// Closes the editor and returns what was being edited, if anything.
    pub fn close(&mut self) -> Option<(TileCoord, String)> {
        match std::mem::take(self) {
            EditorState::Open { coord, draft } => Some((coord, draft)),
            EditorState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_prefills_existing_or_default() {
        let coord = TileCoord::new(4, 4);
        assert_eq!(
            EditorState::open(coord, None).draft(),
            Some(DEFAULT_TILE_HTML)
        );
        assert_eq!(
            EditorState::open(coord, Some("<b>hi</b>")).draft(),
            Some("<b>hi</b>")
        );
    }

    #[test]
    fn closed_ignores_draft_edits() {
        let mut editor = EditorState::Closed;
        assert!(!editor.set_draft("ignored".to_string()));
        assert_eq!(editor, EditorState::Closed);
        assert_eq!(editor.close(), None);
    }

    #[test]
    fn close_returns_selection_and_draft() {
        let coord = TileCoord::new(1, 2);
        let mut editor = EditorState::open(coord, None);
        assert!(editor.set_draft(String::new()));
        assert_eq!(editor.close(), Some((coord, String::new())));
        assert!(!editor.is_open());
        assert_eq!(editor.selected(), None);
    }
}
