use std::cell::RefCell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use js_sys::Date;

use codeplace_core::{EditorState, GridAction, GridState, Tile, TileCoord, TileStore, Zoom};

pub(crate) type AppSubscriber = Rc<dyn Fn()>;

/// Shared page state. Mutations go through `dispatch`, which notifies every
/// live subscriber once the state has been updated.
pub(crate) struct AppCore {
    state: RefCell<GridState>,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

#[derive(Clone, PartialEq)]
pub(crate) struct AppSnapshot {
    pub(crate) tiles: Rc<TileStore>,
    pub(crate) zoom: Zoom,
    pub(crate) editor: EditorState,
}

impl AppSnapshot {
    pub(crate) fn tile_at(&self, coord: TileCoord) -> Option<&Tile> {
        self.tiles.get(coord)
    }
}

impl AppCore {
    pub(crate) fn new() -> Rc<Self> {
        Self::with_state(GridState::seeded(now_ms()))
    }

    pub(crate) fn with_state(state: GridState) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(state),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: AppSubscriber) -> AppSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        AppSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }

    pub(crate) fn snapshot(&self) -> AppSnapshot {
        let state = self.state.borrow();
        AppSnapshot {
            tiles: Rc::clone(&state.tiles),
            zoom: state.zoom,
            editor: state.editor.clone(),
        }
    }

    pub(crate) fn dispatch(&self, action: GridAction) -> bool {
        let changed = {
            let mut state = self.state.borrow_mut();
            state.apply(action)
        };
        if changed {
            self.notify();
        }
        changed
    }

    pub(crate) fn open_tile(&self, coord: TileCoord) {
        self.dispatch(GridAction::OpenTile { coord });
    }

    pub(crate) fn edit_draft(&self, html: String) {
        self.dispatch(GridAction::EditDraft { html });
    }

    pub(crate) fn cancel_edit(&self) {
        self.dispatch(GridAction::Cancel);
    }

    pub(crate) fn save_tile(&self) -> Option<TileCoord> {
        let (selected, replacing) = {
            let state = self.state.borrow();
            let selected = state.editor.selected();
            let replacing = selected.is_some_and(|coord| state.tiles.is_occupied(coord));
            (selected, replacing)
        };
        let Some(coord) = selected else {
            gloo::console::warn!("save ignored (no tile selected)");
            return None;
        };
        if !self.dispatch(GridAction::Save { now_ms: now_ms() }) {
            return None;
        }
        let len = self
            .state
            .borrow()
            .tile_at(coord)
            .map(|tile| tile.html_len())
            .unwrap_or(0);
        let verb = if replacing { "tile replaced" } else { "tile saved" };
        gloo::console::log!(verb, coord.to_string(), len as u32);
        Some(coord)
    }

    pub(crate) fn zoom_in(&self) {
        self.dispatch(GridAction::ZoomIn);
    }

    pub(crate) fn zoom_out(&self) {
        self.dispatch(GridAction::ZoomOut);
    }

    pub(crate) fn set_zoom(&self, zoom: Zoom) {
        let changed = {
            let mut state = self.state.borrow_mut();
            let changed = state.zoom != zoom;
            state.zoom = zoom;
            changed
        };
        if changed {
            self.notify();
        }
    }
}

pub(crate) struct AppSubscription {
    subscriber: AppSubscriber,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

impl Drop for AppSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

fn now_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|duration| duration.as_millis() as u64)
            .unwrap_or(0)
    }
}
