//! HTML section renderers for the storefront pages.

mod card;
mod footer;
mod grid;
mod hero;
mod services;

pub use card::*;
pub use footer::*;
pub use grid::*;
pub use hero::*;
pub use services::*;

/// Escape text for safe interpolation into HTML.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::html_escape;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"Tom & Jerry"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&quot;&lt;/b&gt;"
        );
    }
}
