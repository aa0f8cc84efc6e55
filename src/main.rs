mod app_core;
mod app_router;
mod boot;
mod yew_app;

use app_core::AppCore;
use boot::BootPhase;

fn main() {
    console_error_panic_hook::set_once();
    boot::enter(BootPhase::Config);
    let config = app_router::load_page_config();
    let core = AppCore::new();
    if let Some(zoom) = config.zoom {
        core.set_zoom(zoom);
    }
    if let Some(coord) = config.select {
        core.open_tile(coord);
    }
    boot::enter(BootPhase::Mount);
    gloo::console::log!(
        "codeplace start",
        format!("zoom {}%", core.snapshot().zoom.percent()),
        config.sandbox.attribute()
    );
    if let Err(err) = yew_app::run(core, config) {
        let message = err.to_string();
        gloo::console::warn!("mount failed", message.clone());
        boot::fail(BootPhase::Mount, &message);
    }
}
