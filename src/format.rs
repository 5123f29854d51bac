//! Display Helpers
//!
//! Formatting shared by the table pages.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/50";

/// Render an API timestamp as `05 Mar 2024`. Input that is not a known
/// timestamp shape is shown unchanged; missing input renders as `-`.
pub fn display_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return "-".to_string();
    };
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Absolute URLs are kept, relative paths are joined onto `asset_base`
pub fn image_url(raw: Option<&str>, asset_base: &str) -> String {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => PLACEHOLDER_IMAGE.to_string(),
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => url.to_string(),
        Some(path) => format!(
            "{}/{}",
            asset_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        ),
    }
}

/// `"12%"` → 12, `"-3.5 %"` → -3.5; words such as "Stable" → 0
pub fn parse_percent(raw: &str) -> f64 {
    raw.trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Bar width in percent of `max`, clamped to `0..=100`
pub fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_shapes() {
        assert_eq!(display_date(Some("2024-03-05T10:11:12.000000Z")), "05 Mar 2024");
        assert_eq!(display_date(Some("2024-03-05 10:11:12")), "05 Mar 2024");
        assert_eq!(display_date(Some("2024-12-31")), "31 Dec 2024");
    }

    #[test]
    fn test_display_date_fallbacks() {
        assert_eq!(display_date(None), "-");
        assert_eq!(display_date(Some("  ")), "-");
        assert_eq!(display_date(Some("yesterday")), "yesterday");
    }

    #[test]
    fn test_image_url_resolution() {
        let base = "https://site2demo.in/marriageapp";
        assert_eq!(image_url(Some("https://cdn.x/a.png"), base), "https://cdn.x/a.png");
        assert_eq!(image_url(Some("/uploads/a.png"), base), "https://site2demo.in/marriageapp/uploads/a.png");
        assert_eq!(image_url(Some("uploads/a.png"), base), "https://site2demo.in/marriageapp/uploads/a.png");
        assert_eq!(image_url(None, base), PLACEHOLDER_IMAGE);
        assert_eq!(image_url(Some(""), base), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("12%"), 12.0);
        assert_eq!(parse_percent(" -3.5 % "), -3.5);
        assert_eq!(parse_percent("40"), 40.0);
        assert_eq!(parse_percent("Stable"), 0.0);
        assert_eq!(parse_percent(""), 0.0);
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(50.0, 200.0), 25.0);
        assert_eq!(bar_width(300.0, 200.0), 100.0);
        assert_eq!(bar_width(-5.0, 100.0), 0.0);
        assert_eq!(bar_width(5.0, 0.0), 0.0);
    }
}
