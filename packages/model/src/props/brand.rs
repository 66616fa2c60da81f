use crate::de::{lenient_bool, lenient_f64, lenient_list, lenient_string, lenient_strings};
use crate::style::Alignment;
use serde::{Deserialize, Serialize};

/// One pill of a multi-category label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Categoria {
    #[serde(deserialize_with = "lenient_string")]
    pub texto: String,
    pub color_fondo: Option<String>,
    pub color_texto: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryProps {
    /// Legacy single-category background
    pub color: String,
    pub text_color: String,
    #[serde(deserialize_with = "lenient_list")]
    pub categorias: Vec<Categoria>,
    /// Marks the legacy `content` as editor markup rather than plain text
    #[serde(deserialize_with = "lenient_bool")]
    pub rich_content: Option<bool>,
}

impl CategoryProps {
    pub fn rich_content(&self) -> bool {
        self.rich_content.unwrap_or(false)
    }
}

impl Default for CategoryProps {
    fn default() -> Self {
        Self {
            color: "#e3f2fd".to_string(),
            text_color: "#1976d2".to_string(),
            categorias: Vec::new(),
            rich_content: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorProps {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub avatar: String,
    #[serde(deserialize_with = "lenient_string")]
    pub role: String,
}

impl Default for AuthorProps {
    fn default() -> Self {
        Self {
            name: "Nombre del autor".to_string(),
            email: String::new(),
            avatar: String::new(),
            role: String::new(),
        }
    }
}

/// A card of tool badges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HerramientasProps {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub tools: Vec<String>,
    pub icon: String,
    pub background_color: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub background_opacity: Option<f64>,
    pub text_color: String,
    pub icon_color: Option<String>,
    pub pill_color: String,
    pub pill_text_color: String,
}

impl HerramientasProps {
    /// Opacity clamped to `0.0..=1.0`; values above 1 are read as percentages
    pub fn background_opacity(&self) -> f64 {
        let raw = self.background_opacity.unwrap_or(1.0);
        let raw = if raw > 1.0 { raw / 100.0 } else { raw };
        raw.clamp(0.0, 1.0)
    }
}

impl Default for HerramientasProps {
    fn default() -> Self {
        Self {
            title: "Herramientas".to_string(),
            tools: vec!["Herramienta 1".to_string(), "Herramienta 2".to_string()],
            icon: "🛠️".to_string(),
            background_color: "#f5f5f5".to_string(),
            background_opacity: None,
            text_color: "#333333".to_string(),
            icon_color: None,
            pill_color: "#ffffff".to_string(),
            pill_text_color: "#333333".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackerLogo {
    #[serde(deserialize_with = "lenient_string")]
    pub src: String,
    #[serde(deserialize_with = "lenient_string")]
    pub alt: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
}

/// "Backed by" strip of partner logos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RespaldadoPorProps {
    #[serde(deserialize_with = "lenient_string")]
    pub label: String,
    #[serde(deserialize_with = "lenient_list")]
    pub logos: Vec<BackerLogo>,
    pub align: Alignment,
    pub text_color: String,
}

impl Default for RespaldadoPorProps {
    fn default() -> Self {
        Self {
            label: "Respaldado por".to_string(),
            logos: Vec::new(),
            align: Alignment::Center,
            text_color: "#666666".to_string(),
        }
    }
}
