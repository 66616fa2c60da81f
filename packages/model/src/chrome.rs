//! Header and footer presentation records wrapping the newsletter body.

use crate::de::{lenient_bool, lenient_f64, lenient_string};
use crate::style::{Alignment, CssValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    #[default]
    Linear,
    Radial,
}

/// Solid color or two-stop gradient. With `use_gradient` set and at least two
/// gradient colors, `background_color` is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Background {
    pub background_color: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub use_gradient: Option<bool>,
    pub gradient_colors: Vec<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub gradient_direction: Option<f64>,
    pub gradient_type: GradientType,
}

impl Background {
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            background_color: color.into(),
            ..Default::default()
        }
    }

    pub fn gradient(colors: &[&str], direction: Option<f64>) -> Self {
        Self {
            use_gradient: Some(true),
            gradient_colors: colors.iter().map(|c| c.to_string()).collect(),
            gradient_direction: direction,
            ..Default::default()
        }
    }

    pub fn use_gradient(&self) -> bool {
        self.use_gradient.unwrap_or(false)
    }

    /// Direction in degrees, 180 when unset
    pub fn gradient_direction(&self) -> f64 {
        self.gradient_direction.unwrap_or(180.0)
    }

    /// True when a gradient is requested and has enough stops to draw
    pub fn has_usable_gradient(&self) -> bool {
        self.use_gradient() && self.gradient_colors.len() >= 2
    }
}

impl Default for Background {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            use_gradient: None,
            gradient_colors: Vec::new(),
            gradient_direction: None,
            gradient_type: GradientType::Linear,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    #[serde(deserialize_with = "lenient_string")]
    pub platform: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
}

impl SocialLink {
    pub fn new(platform: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SponsorConfig {
    #[serde(deserialize_with = "lenient_bool")]
    pub enabled: Option<bool>,
    #[serde(deserialize_with = "lenient_string")]
    pub label: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub logo_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
}

impl SponsorConfig {
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }
}

impl Default for SponsorConfig {
    fn default() -> Self {
        Self {
            enabled: None,
            label: "Patrocinado por".to_string(),
            name: String::new(),
            logo_url: String::new(),
            url: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderConfig {
    /// Falls back to the document title when empty
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: String,
    #[serde(deserialize_with = "lenient_string")]
    pub logo_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub logo_alt: String,
    pub logo_width: Option<CssValue>,
    #[serde(deserialize_with = "lenient_string")]
    pub banner_url: String,
    #[serde(flatten)]
    pub background: Background,
    pub text_color: String,
    pub alignment: Alignment,
    pub sponsor: SponsorConfig,
    pub social_links: Vec<SocialLink>,
    pub social_separator: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            logo_url: String::new(),
            logo_alt: "Logo".to_string(),
            logo_width: None,
            banner_url: String::new(),
            background: Background::default(),
            text_color: "#333333".to_string(),
            alignment: Alignment::Center,
            sponsor: SponsorConfig::default(),
            social_links: Vec::new(),
            social_separator: " | ".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterConfig {
    #[serde(deserialize_with = "lenient_string")]
    pub company_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(deserialize_with = "lenient_string")]
    pub contact_email: String,
    pub social_links: Vec<SocialLink>,
    pub social_separator: String,
    #[serde(deserialize_with = "lenient_string")]
    pub unsubscribe_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub unsubscribe_text: String,
    /// Replaces the generated "© {year} {company}" line when set
    #[serde(deserialize_with = "lenient_string")]
    pub copyright_text: String,
    #[serde(flatten)]
    pub background: Background,
    pub text_color: String,
    pub alignment: Alignment,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            address: String::new(),
            contact_email: String::new(),
            social_links: Vec::new(),
            social_separator: " | ".to_string(),
            unsubscribe_url: String::new(),
            unsubscribe_text: "Cancelar suscripción".to_string(),
            copyright_text: String::new(),
            background: Background::default(),
            text_color: "#666666".to_string(),
            alignment: Alignment::Center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_flattens_background() {
        let json = r##"{
            "title": "Semanal",
            "useGradient": true,
            "gradientColors": ["#ff0000", "#0000ff"],
            "gradientDirection": "90",
            "sponsor": {"enabled": true, "name": "ACME"}
        }"##;
        let header: HeaderConfig = serde_json::from_str(json).unwrap();

        assert_eq!(header.title, "Semanal");
        assert!(header.background.has_usable_gradient());
        assert_eq!(header.background.gradient_direction(), 90.0);
        assert!(header.sponsor.enabled());
        assert_eq!(header.sponsor.label, "Patrocinado por");
    }

    #[test]
    fn test_single_gradient_color_is_not_usable() {
        let background = Background::gradient(&["#fff"], None);
        assert!(background.use_gradient());
        assert!(!background.has_usable_gradient());
    }

    #[test]
    fn test_footer_defaults() {
        let footer: FooterConfig = serde_json::from_str(r#"{"companyName": "ACME"}"#).unwrap();
        assert_eq!(footer.company_name, "ACME");
        assert_eq!(footer.social_separator, " | ");
        assert_eq!(footer.background, Background::default());
    }
}
