//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the stylesheet URL, fingerprinted when the build could hash it.
///
/// Usage in templates: `{{ ""|css_href }}`
#[askama::filter_fn]
pub fn css_href(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(stylesheet_href(env!("CSS_HASH")))
}

fn stylesheet_href(hash: &str) -> String {
    if hash.is_empty() {
        "/static/css/main.css".to_string()
    } else {
        format!("/static/css/derived/main.{hash}.css")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_href() {
        assert_eq!(stylesheet_href(""), "/static/css/main.css");
        assert_eq!(
            stylesheet_href("deadbeef"),
            "/static/css/derived/main.deadbeef.css"
        );
    }
}
