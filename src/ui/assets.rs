use std::{borrow::Cow, sync::OnceLock};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css`, or an empty stylesheet if it is missing.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| {
            load_asset("main.css")
                .and_then(|bytes| String::from_utf8(bytes.into_owned()).ok())
                .unwrap_or_else(|| {
                    log::error!("embedded main.css missing or not UTF-8");
                    String::new()
                })
        })
        .as_str()
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| {
            load_asset("favicon.svg")
                .map(|bytes| format!("data:image/svg+xml;base64,{}", STANDARD.encode(bytes)))
                .unwrap_or_default()
        })
        .as_str()
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    EmbeddedAssets::get(path).map(|file| file.data)
}
