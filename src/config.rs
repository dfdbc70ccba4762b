//! Dashboard configuration
//!
//! Supports configuration injection by the hosting page. The server can
//! inject settings via `<meta>` tags in the HTML, a global JS object, or
//! they can be baked in at build time.

use wasm_bindgen::JsCast;

/// Default backend base URL when nothing is injected
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default stats polling period in milliseconds
pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 500;

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Backend base URL (e.g., "http://localhost:8000")
    pub api_url: String,
    /// Stats polling period in milliseconds
    pub refresh_interval_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from various sources (priority order):
    /// 1. `<meta name="dronewatch:...">` tags (server-injected)
    /// 2. `window.__DRONEWATCH_CONFIG__` object (JavaScript injection)
    /// 3. Build-time environment (`DRONEWATCH_API_URL`,
    ///    `DRONEWATCH_REFRESH_INTERVAL_MS`)
    /// 4. Built-in defaults
    pub fn load() -> Self {
        let document = web_sys::window().and_then(|w| w.document());

        let meta_url = document
            .as_ref()
            .and_then(|d| get_meta_content(d, "dronewatch:api-url"));
        let meta_interval = document
            .as_ref()
            .and_then(|d| get_meta_content(d, "dronewatch:refresh-interval"));

        let api_url = resolve_setting(
            meta_url,
            get_js_config("api_url"),
            option_env!("DRONEWATCH_API_URL"),
        )
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let refresh_interval_ms = parse_refresh_interval(resolve_setting(
            meta_interval,
            get_js_config("refresh_interval_ms"),
            option_env!("DRONEWATCH_REFRESH_INTERVAL_MS"),
        ));

        Self {
            api_url,
            refresh_interval_ms,
        }
    }

    /// Get the backend base URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// Pick the first non-empty value in priority order
fn resolve_setting(
    meta: Option<String>,
    js: Option<String>,
    build: Option<&str>,
) -> Option<String> {
    meta.filter(|v| !v.is_empty())
        .or_else(|| js.filter(|v| !v.is_empty()))
        .or_else(|| build.map(str::to_string).filter(|v| !v.is_empty()))
}

/// Parse a refresh interval, falling back to the default on junk input
fn parse_refresh_interval(raw: Option<String>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|&ms| ms > 0)
        .unwrap_or(DEFAULT_REFRESH_INTERVAL_MS)
}

/// Get content from a `<meta name="...">` tag
fn get_meta_content(document: &web_sys::Document, name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

/// Get a value from `window.__DRONEWATCH_CONFIG__`
fn get_js_config(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &"__DRONEWATCH_CONFIG__".into()).ok()?;

    if config.is_undefined() || config.is_null() {
        return None;
    }

    let value = js_sys::Reflect::get(&config, &key.into()).ok()?;
    // Numbers are accepted too; the refresh interval is often injected as one.
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.refresh_interval_ms, DEFAULT_REFRESH_INTERVAL_MS);
    }

    #[test]
    fn test_resolve_setting_priority() {
        let picked = resolve_setting(
            Some("from-meta".to_string()),
            Some("from-js".to_string()),
            Some("from-env"),
        );
        assert_eq!(picked.as_deref(), Some("from-meta"));

        let picked = resolve_setting(None, Some("from-js".to_string()), Some("from-env"));
        assert_eq!(picked.as_deref(), Some("from-js"));

        let picked = resolve_setting(Some(String::new()), None, Some("from-env"));
        assert_eq!(picked.as_deref(), Some("from-env"));

        assert_eq!(resolve_setting(None, None, None), None);
    }

    #[test]
    fn test_parse_refresh_interval() {
        assert_eq!(parse_refresh_interval(Some("250".to_string())), 250);
        assert_eq!(parse_refresh_interval(Some(" 1000 ".to_string())), 1000);
        assert_eq!(
            parse_refresh_interval(Some("not-a-number".to_string())),
            DEFAULT_REFRESH_INTERVAL_MS
        );
        assert_eq!(
            parse_refresh_interval(Some("0".to_string())),
            DEFAULT_REFRESH_INTERVAL_MS
        );
        assert_eq!(parse_refresh_interval(None), DEFAULT_REFRESH_INTERVAL_MS);
    }
}
