//! Services section: fixed marketing tiles.

use super::html_escape;

/// One service highlight tile.
#[derive(Debug, Clone)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Service {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// The fixed set of storefront service highlights.
pub fn default_services() -> Vec<Service> {
    vec![
        Service::new(
            "\u{1F69A}",
            "Free Shipping",
            "Free standard delivery on orders over $50.",
        ),
        Service::new(
            "\u{21A9}",
            "Easy Returns",
            "30-day hassle-free returns on every order.",
        ),
        Service::new(
            "\u{1F4AC}",
            "24/7 Support",
            "Talk to a real person whenever you need help.",
        ),
        Service::new(
            "\u{1F512}",
            "Secure Payments",
            "Your payment details are encrypted end to end.",
        ),
    ]
}

/// Render the services section.
pub fn render_services(services: &[Service]) -> String {
    let tiles: String = services
        .iter()
        .map(|s| {
            format!(
                r#"<div class="service-tile animate-rise">
        <span class="service-icon">{}</span>
        <h3>{}</h3>
        <p>{}</p>
    </div>"#,
                s.icon,
                html_escape(&s.title),
                html_escape(&s.description)
            )
        })
        .collect();

    format!(
        r#"<section class="services" data-section="services">
    <div class="services-grid">
        {}
    </div>
</section>"#,
        tiles
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_services_rendered() {
        let html = render_services(&default_services());
        assert_eq!(html.matches("service-tile").count(), 4);
        assert!(html.contains("Free Shipping"));
        assert!(html.contains("Secure Payments"));
    }

    #[test]
    fn test_empty_services_renders_empty_grid() {
        let html = render_services(&[]);
        assert!(html.contains("services-grid"));
        assert!(!html.contains("service-tile"));
    }
}
