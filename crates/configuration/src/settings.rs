use crate::error::ConfigError;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Config {
    /// Rejects settings the render path cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host must not be empty".to_string(),
            ));
        }
        if self.display.top_assets == 0 {
            return Err(ConfigError::ValidationError(
                "display.top_assets must be at least 1".to_string(),
            ));
        }
        if self.display.market_trends == 0 {
            return Err(ConfigError::ValidationError(
                "display.market_trends must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Contains the bind parameters for the web server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// The interface to bind (e.g. "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// The color palette passed into the rendering boundary.
///
/// Each field is a CSS hex color. The defaults are the product's minimalist
/// scheme; any subset can be overridden from `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    /// Brand blue, used for primary buttons and icons.
    #[serde(default = "default_primary")]
    pub primary: String,
    /// Brand green.
    #[serde(default = "default_secondary")]
    pub secondary: String,
    /// Amber highlight.
    #[serde(default = "default_accent")]
    pub accent: String,
    /// Heading text color.
    #[serde(default = "default_text")]
    pub text: String,
    /// Body text color.
    #[serde(default = "default_text_secondary")]
    pub text_secondary: String,
    /// Card border color.
    #[serde(default = "default_border")]
    pub border: String,
    /// Page background.
    #[serde(default = "default_background")]
    pub background: String,
    /// Color for rising price figures.
    #[serde(default = "default_positive")]
    pub positive: String,
    /// Color for falling or flat price figures.
    #[serde(default = "default_negative")]
    pub negative: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            secondary: default_secondary(),
            accent: default_accent(),
            text: default_text(),
            text_secondary: default_text_secondary(),
            border: default_border(),
            background: default_background(),
            positive: default_positive(),
            negative: default_negative(),
        }
    }
}

/// Contains the item counts for the dashboard sections.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    /// How many assets the "Top Performing Assets" grid shows.
    #[serde(default = "default_top_assets")]
    pub top_assets: usize,
    /// How many market trend cards the trends row shows.
    #[serde(default = "default_market_trends")]
    pub market_trends: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            top_assets: default_top_assets(),
            market_trends: default_market_trends(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_primary() -> String {
    "#2563EB".to_string()
}
fn default_secondary() -> String {
    "#10B981".to_string()
}
fn default_accent() -> String {
    "#F59E0B".to_string()
}
fn default_text() -> String {
    "#1F2937".to_string()
}
fn default_text_secondary() -> String {
    "#6B7280".to_string()
}
fn default_border() -> String {
    "#E5E7EB".to_string()
}
fn default_background() -> String {
    "#FFFFFF".to_string()
}
fn default_positive() -> String {
    "#10B981".to_string()
}
fn default_negative() -> String {
    "#EF4444".to_string()
}
fn default_top_assets() -> usize {
    8
}
fn default_market_trends() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_product_scheme() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.display.top_assets, 8);
        assert_eq!(config.display.market_trends, 3);
        assert_eq!(config.theme.primary, "#2563EB");
        assert_eq!(config.theme.positive, "#10B981");
        assert_eq!(config.theme.negative, "#EF4444");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_top_assets_is_rejected() {
        let mut config = Config::default();
        config.display.top_assets = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn empty_host_is_rejected() {
        let mut config = Config::default();
        config.server.host = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
