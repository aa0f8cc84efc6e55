use web_sys::UrlSearchParams;

use codeplace_core::{TileCoord, Zoom};

/// Sandbox attribute applied to every tile and preview frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum SandboxPolicy {
    #[default]
    SameOrigin,
    Strict,
}

impl SandboxPolicy {
    pub(crate) fn attribute(self) -> &'static str {
        match self {
            SandboxPolicy::SameOrigin => "allow-same-origin",
            SandboxPolicy::Strict => "",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("strict") {
            Some(SandboxPolicy::Strict)
        } else if trimmed.eq_ignore_ascii_case("same-origin")
            || trimmed.eq_ignore_ascii_case("same_origin")
        {
            Some(SandboxPolicy::SameOrigin)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct PageConfig {
    pub(crate) zoom: Option<Zoom>,
    pub(crate) sandbox: SandboxPolicy,
    pub(crate) select: Option<TileCoord>,
}

pub(crate) fn load_page_config() -> PageConfig {
    let Some(window) = web_sys::window() else {
        return PageConfig::default();
    };
    let search = window.location().search().unwrap_or_default();
    parse_page_config(&search)
}

pub(crate) fn parse_page_config(search: &str) -> PageConfig {
    let search = search.trim();
    if search.is_empty() {
        return PageConfig::default();
    }
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return PageConfig::default();
    };
    page_config_from_values(
        params.get("zoom").as_deref(),
        params.get("sandbox").as_deref(),
        params.get("select").as_deref(),
    )
}

fn page_config_from_values(
    zoom: Option<&str>,
    sandbox: Option<&str>,
    select: Option<&str>,
) -> PageConfig {
    let mut config = PageConfig::default();
    if let Some(raw) = zoom {
        match Zoom::parse(raw) {
            Ok(value) => config.zoom = Some(value),
            Err(err) => {
                gloo::console::warn!("ignoring zoom param", err.to_string());
            }
        }
    }
    if let Some(raw) = sandbox {
        match SandboxPolicy::parse(raw) {
            Some(policy) => config.sandbox = policy,
            None => {
                gloo::console::warn!("ignoring sandbox param", raw.to_string());
            }
        }
    }
    if let Some(raw) = select {
        let parsed = TileCoord::parse_id(raw).and_then(|coord| TileCoord::checked(coord.x, coord.y));
        match parsed {
            Ok(coord) => config.select = Some(coord),
            Err(err) => {
                gloo::console::warn!("ignoring select param", err.to_string());
            }
        }
    }
    config
}
