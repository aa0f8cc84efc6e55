//! Loading splash hooks exposed by `index.html` as `window.__CP_BOOT`.
//! The page runs fine without the splash, so a missing hook is ignored.

/// Startup steps shown on the splash, in the order `main` runs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BootPhase {
    Config,
    Mount,
}

impl BootPhase {
    /// Short code shown on the splash and reused as the failure code.
    pub(crate) fn code(self) -> &'static str {
        match self {
            BootPhase::Config => "config",
            BootPhase::Mount => "mount",
        }
    }

    fn detail(self) -> &'static str {
        match self {
            BootPhase::Config => "reading page options",
            BootPhase::Mount => "rendering grid",
        }
    }
}

pub(crate) fn enter(phase: BootPhase) {
    splash_call("setPhase", &[phase.code(), phase.detail()]);
}

pub(crate) fn fail(phase: BootPhase, message: &str) {
    splash_call("fail", &[phase.code(), message]);
}

/// Removes the splash. Repeat calls find nothing left to remove.
pub(crate) fn ready() {
    splash_call("ready", &[]);
}

#[cfg(target_arch = "wasm32")]
fn splash_call(method: &str, args: &[&str]) {
    use js_sys::{Array, Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(splash) = Reflect::get(&window, &JsValue::from_str("__CP_BOOT"))
        .ok()
        .filter(JsValue::is_object)
    else {
        return;
    };
    let Some(hook) = Reflect::get(&splash, &JsValue::from_str(method))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
    else {
        return;
    };
    let args: Array = args.iter().map(|arg| JsValue::from_str(arg)).collect();
    if let Err(err) = hook.apply(&splash, &args) {
        gloo::console::warn!("boot splash hook failed", method.to_string(), err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn splash_call(_method: &str, _args: &[&str]) {}
