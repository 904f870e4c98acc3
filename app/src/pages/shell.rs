//! HTML document shell wrapping page bodies.

use storefront_core::StorefrontConfig;

use crate::sections::html_escape;

/// Wrap a rendered page body in the full HTML document.
pub fn render_document(config: &StorefrontConfig, title: &str, body: &str) -> String {
    let css_link = config
        .css_path
        .as_deref()
        .map(|p| format!(r#"<link rel="stylesheet" href="{}">"#, p))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    {css_link}
</head>
<body>
{body}
</body>
</html>"#,
        title = html_escape(title),
        css_link = css_link,
        body = body,
    )
}
