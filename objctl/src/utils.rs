//! Utility functions

use std::sync::OnceLock;

/// Version information for objctl
#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub version: String,
    pub git_hash: String,
    pub build_time: String,
}

/// Get version information
pub fn version_info() -> VersionInfo {
    VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: option_env!("GIT_HASH").unwrap_or("unknown").to_string(),
        build_time: option_env!("BUILD_TIME").unwrap_or("unknown").to_string(),
    }
}

/// Version line shown by `--version`
pub fn version_string() -> &'static str {
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        let info = version_info();
        format!("{} ({} {})", info.version, info.git_hash, info.build_time)
    })
}
