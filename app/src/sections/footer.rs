//! Site footer: static navigation and store identity.

use storefront_core::Route;

use super::html_escape;

/// Render the footer with links into the main route targets.
pub fn render_footer(store_name: &str) -> String {
    let links = [
        ("Home", Route::Home),
        ("Products", Route::Products),
        ("Compare", Route::Compare),
        ("Dashboard", Route::Dashboard),
        ("Contact", Route::Contact),
    ];

    let nav: String = links
        .iter()
        .map(|(label, route)| format!(r#"<a href="{}">{}</a>"#, route.path(), label))
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<footer class="site-footer" data-section="footer">
    <div class="footer-brand">
        <h3>{name}</h3>
        <p>A marketplace of independent vendors.</p>
    </div>
    <nav class="footer-nav">
        {nav}
    </nav>
    <p class="footer-copyright">&copy; {name}. All rights reserved.</p>
</footer>"#,
        name = html_escape(store_name),
        nav = nav,
    )
}
