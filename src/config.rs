//! Application Configuration
//!
//! Values are baked in at compile time from `COACH_ADMIN_*` environment
//! variables; anything missing or unparsable falls back to the defaults.

use log::LevelFilter;

pub const DEFAULT_API_BASE: &str = "https://site2demo.in/marriageapp/api";
pub const DEFAULT_ASSET_BASE: &str = "https://site2demo.in/marriageapp";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_TOAST_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// REST root, without trailing slash
    pub api_base: String,
    /// Prefix for relative image paths returned by the API
    pub asset_base: String,
    pub page_size: usize,
    pub toast_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            toast_ms: DEFAULT_TOAST_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "COACH_ADMIN_API_BASE" => option_env!("COACH_ADMIN_API_BASE"),
            "COACH_ADMIN_ASSET_BASE" => option_env!("COACH_ADMIN_ASSET_BASE"),
            "COACH_ADMIN_PAGE_SIZE" => option_env!("COACH_ADMIN_PAGE_SIZE"),
            "COACH_ADMIN_TOAST_MS" => option_env!("COACH_ADMIN_TOAST_MS"),
            "COACH_ADMIN_LOG" => option_env!("COACH_ADMIN_LOG"),
            _ => None,
        })
    }

    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| lookup(key).map(str::trim).filter(|v| !v.is_empty());

        Self {
            api_base: text("COACH_ADMIN_API_BASE")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            asset_base: text("COACH_ADMIN_ASSET_BASE")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.asset_base),
            page_size: text("COACH_ADMIN_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.page_size),
            toast_ms: text("COACH_ADMIN_TOAST_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.toast_ms),
            log_level: text("COACH_ADMIN_LOG")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
