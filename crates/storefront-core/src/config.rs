//! Storefront configuration and setup.

/// Configuration for a storefront application.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Store name.
    pub name: String,
    /// Base URL of the backend API.
    pub api_base: String,
    /// Default page title.
    pub default_title: String,
    /// CSS file path.
    pub css_path: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "Storefront".to_string(),
            api_base: "http://localhost:8080".to_string(),
            default_title: "Marketplace Storefront".to_string(),
            css_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Create a new configuration with the given store name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the backend API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the default page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Set the CSS file path.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.css_path = Some(path.into());
        self
    }
}
