pub const APP_NAME: &str = "CowFarm Consumer Portal";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// `git describe` of the checkout this binary was built from, when known.
pub const BUILD_DESCRIBE: Option<&str> = option_env!("COW_MARKETPLACE_BUILD");

pub fn version_label() -> String {
    label_for(APP_VERSION, BUILD_DESCRIBE)
}

fn label_for(version: &str, build: Option<&str>) -> String {
    match build {
        Some(build) if build.trim_start_matches('v') != version => {
            format!("v{version} ({build})")
        }
        _ => format!("v{version}"),
    }
}
