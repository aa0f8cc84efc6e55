use gloo::events::EventListener;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlTextAreaElement, InputEvent, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::app_core::AppCore;
use crate::app_router::{PageConfig, SandboxPolicy};
use crate::boot;
use codeplace_core::grid::tile_size_px;
use codeplace_core::{
    exceeds_guideline, EditorState, Tile, TileCoord, TileStore, Zoom, GRID_SIZE,
    HTML_SIZE_GUIDELINE_BYTES, TILE_SIZE_PX,
};

const APP_TITLE: &str = "CodePlace";
const APP_SUBTITLE: &str = "Collaborative HTML Grid World";
const DRAFT_PLACEHOLDER: &str = "<div>Your HTML here...</div>";
const EDITOR_ROWS: u32 = 10;

#[derive(Properties)]
pub(crate) struct AppProps {
    pub(crate) core: Rc<AppCore>,
    pub(crate) config: PageConfig,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core) && self.config == other.config
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let app_core = props.core.clone();
    let sandbox = props.config.sandbox;
    let snapshot = use_state(|| app_core.snapshot());
    {
        let app_core = app_core.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let core_for_hook = app_core.clone();
            let snapshot_for_hook = snapshot.clone();
            let subscription = app_core.subscribe(Rc::new(move || {
                snapshot_for_hook.set(core_for_hook.snapshot());
            }));
            // Pick up anything dispatched between first render and subscribing.
            snapshot.set(app_core.snapshot());
            boot::ready();
            move || drop(subscription)
        });
    }
    let editor_open = snapshot.editor.is_open();
    {
        let app_core = app_core.clone();
        use_effect_with(editor_open, move |open| {
            let listener = if *open {
                web_sys::window().map(|window| {
                    EventListener::new(&window, "keydown", move |event: &Event| {
                        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                            if event.key() == "Escape" {
                                app_core.cancel_edit();
                            }
                        }
                    })
                })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    // Built once per mount so `Header` and `GridView` props compare equal
    // while only the editor draft changes.
    let on_select = {
        let app_core = app_core.clone();
        use_memo((), move |_| {
            Callback::from(move |coord: TileCoord| {
                app_core.open_tile(coord);
            })
        })
    };
    let on_zoom_in = {
        let app_core = app_core.clone();
        use_memo((), move |_| {
            Callback::from(move |_: MouseEvent| {
                app_core.zoom_in();
            })
        })
    };
    let on_zoom_out = {
        let app_core = app_core.clone();
        use_memo((), move |_| {
            Callback::from(move |_: MouseEvent| {
                app_core.zoom_out();
            })
        })
    };
    let on_draft = {
        let app_core = app_core.clone();
        Callback::from(move |html: String| {
            app_core.edit_draft(html);
        })
    };
    let on_cancel = {
        let app_core = app_core.clone();
        Callback::from(move |_: ()| {
            app_core.cancel_edit();
        })
    };
    let on_save = {
        let app_core = app_core.clone();
        Callback::from(move |_: ()| {
            app_core.save_tile();
        })
    };

    let overlay = match &snapshot.editor {
        EditorState::Open { coord, draft } => html! {
            <EditorOverlay
                coord={*coord}
                draft={draft.clone()}
                {sandbox}
                on_draft={on_draft}
                on_cancel={on_cancel}
                on_save={on_save}
            />
        },
        EditorState::Closed => html! {},
    };

    // The dialog is modal: everything behind it leaves the tab order.
    let page_inert = editor_open.then_some("");
    html! {
        <div class="app">
            <div class="app-page" inert={page_inert}>
                <Header
                    zoom={snapshot.zoom}
                    on_zoom_in={(*on_zoom_in).clone()}
                    on_zoom_out={(*on_zoom_out).clone()}
                />
                <GridView
                    tiles={snapshot.tiles.clone()}
                    zoom={snapshot.zoom}
                    {sandbox}
                    on_select={(*on_select).clone()}
                />
            </div>
            {overlay}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    zoom: Zoom,
    on_zoom_in: Callback<MouseEvent>,
    on_zoom_out: Callback<MouseEvent>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="app-header">
            <div class="brand">
                <h1 class="brand-title terminal-glow">
                    <span class="brand-glyph">{ ">_" }</span>
                    { APP_TITLE }
                </h1>
                <div class="brand-subtitle">{ APP_SUBTITLE }</div>
            </div>
            <div class="zoom-controls">
                <button
                    class="button button-outline"
                    title="Zoom out"
                    disabled={!props.zoom.can_zoom_out()}
                    onclick={props.on_zoom_out.clone()}
                >
                    { "\u{2212}" }
                </button>
                <span class="zoom-value">{ format!("{}%", props.zoom.percent()) }</span>
                <button
                    class="button button-outline"
                    title="Zoom in"
                    disabled={!props.zoom.can_zoom_in()}
                    onclick={props.on_zoom_in.clone()}
                >
                    { "+" }
                </button>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct GridViewProps {
    tiles: Rc<TileStore>,
    zoom: Zoom,
    sandbox: SandboxPolicy,
    on_select: Callback<TileCoord>,
}

#[function_component(GridView)]
fn grid_view(props: &GridViewProps) -> Html {
    let size = tile_size_px(props.zoom.value());
    let scroll_style = format!("background-size: {size}px {size}px;");
    let grid_style = format!("grid-template-columns: repeat({GRID_SIZE}, {size}px);");
    let cells = TileCoord::all().map(|coord| {
        html! {
            <TileCell
                key={Tile::id_for(coord)}
                {coord}
                tile={props.tiles.get(coord).cloned()}
                {size}
                sandbox={props.sandbox}
                on_select={props.on_select.clone()}
            />
        }
    });
    html! {
        <div class="grid-scroll" style={scroll_style}>
            <div class="grid" style={grid_style}>
                { for cells }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TileCellProps {
    coord: TileCoord,
    tile: Option<Tile>,
    size: f32,
    sandbox: SandboxPolicy,
    on_select: Callback<TileCoord>,
}

#[function_component(TileCell)]
fn tile_cell(props: &TileCellProps) -> Html {
    let coord = props.coord;
    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(coord))
    };
    let size = props.size;
    let style = format!(
        "width: {size}px; height: {size}px; min-width: {size}px; min-height: {size}px;"
    );
    let (class, body) = match &props.tile {
        Some(tile) => (
            classes!("tile", "tile-occupied"),
            html! {
                <iframe
                    class="tile-frame"
                    srcdoc={tile.html.clone()}
                    sandbox={props.sandbox.attribute()}
                    title={format!("Tile {coord}")}
                />
            },
        ),
        None => (
            classes!("tile", "tile-empty"),
            html! { <div class="tile-placeholder">{ "+" }</div> },
        ),
    };
    html! {
        <div {class} {style} data-coord={coord.to_string()} {onclick}>
            {body}
            <div class="tile-label">{ coord.to_string() }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EditorOverlayProps {
    coord: TileCoord,
    draft: String,
    sandbox: SandboxPolicy,
    on_draft: Callback<String>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
}

#[function_component(EditorOverlay)]
fn editor_overlay(props: &EditorOverlayProps) -> Html {
    let textarea_ref = use_node_ref();
    {
        let textarea_ref = textarea_ref.clone();
        use_effect_with(props.coord, move |_| {
            if let Some(textarea) = textarea_ref.cast::<HtmlTextAreaElement>() {
                let _ = textarea.focus();
            }
            || ()
        });
    }
    let on_input = {
        let on_draft = props.on_draft.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlTextAreaElement = event.target_unchecked_into();
            on_draft.emit(input.value());
        })
    };
    let on_backdrop = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(target) = event.target_dyn_into::<Element>() else {
                return;
            };
            if target.class_list().contains("overlay-backdrop") {
                on_cancel.emit(());
            }
        })
    };
    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let on_save_click = {
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(()))
    };
    let draft_len = props.draft.len();
    let size_class = if exceeds_guideline(&props.draft) {
        classes!("draft-size", "draft-size-over")
    } else {
        classes!("draft-size")
    };
    let preview_style = format!("height: {TILE_SIZE_PX}px;");
    html! {
        <div class="overlay-backdrop" onclick={on_backdrop}>
            <div class="dialog" role="dialog" aria-modal="true">
                <h2 class="dialog-title terminal-glow">
                    { format!("Edit Tile {}", props.coord) }
                </h2>
                <div class="dialog-body">
                    <div class="field">
                        <label class="field-label" for="tile-html">{ "HTML Code (max 2KB):" }</label>
                        <textarea
                            id="tile-html"
                            ref={textarea_ref}
                            class="code-input"
                            rows={EDITOR_ROWS.to_string()}
                            placeholder={DRAFT_PLACEHOLDER}
                            value={props.draft.clone()}
                            oninput={on_input}
                        />
                        <div class={size_class}>
                            { format!("{draft_len} / {HTML_SIZE_GUIDELINE_BYTES} bytes") }
                        </div>
                    </div>
                    <div class="field">
                        <label class="field-label">{ "Preview:" }</label>
                        <div class="preview" style={preview_style}>
                            <iframe
                                class="preview-frame"
                                srcdoc={props.draft.clone()}
                                sandbox={props.sandbox.attribute()}
                                title="Preview"
                            />
                        </div>
                    </div>
                    <div class="dialog-actions">
                        <button class="button button-outline" onclick={on_cancel_click}>
                            { "Cancel" }
                        </button>
                        <button class="button button-primary" onclick={on_save_click}>
                            { "Save Tile" }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Debug)]
pub(crate) enum MountError {
    NoDocument,
    MissingRoot(&'static str),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::NoDocument => write!(f, "document unavailable"),
            MountError::MissingRoot(id) => write!(f, "missing #{id} root"),
        }
    }
}

impl std::error::Error for MountError {}

const ROOT_ID: &str = "app";

pub(crate) fn run(core: Rc<AppCore>, config: PageConfig) -> Result<(), MountError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(MountError::NoDocument)?;
    let root = document
        .get_element_by_id(ROOT_ID)
        .ok_or(MountError::MissingRoot(ROOT_ID))?;
    let _app_handle = yew::Renderer::<App>::with_root_and_props(root, AppProps { core, config })
        .render();
    Ok(())
}
