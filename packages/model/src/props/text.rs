use crate::de::{lenient_bool, lenient_strings, lenient_u32};
use crate::style::{Alignment, CssValue};
use serde::{Deserialize, Serialize};

/// Heading sizes by level, 1 through 6
const HEADING_SIZES: [u32; 6] = [32, 24, 20, 18, 16, 14];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeadingProps {
    #[serde(deserialize_with = "lenient_u32")]
    pub level: Option<u32>,
    pub align: Option<Alignment>,
    pub color: Option<String>,
}

impl HeadingProps {
    pub fn level(&self) -> u32 {
        self.level.unwrap_or(2).clamp(1, 6)
    }

    /// Font size in pixels for the resolved level
    pub fn font_size(&self) -> u32 {
        HEADING_SIZES[(self.level() - 1) as usize]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParagraphProps {
    pub align: Option<Alignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulletListProps {
    #[serde(deserialize_with = "lenient_strings")]
    pub items: Vec<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub ordered: Option<bool>,
    pub bullet_color: Option<String>,
}

impl BulletListProps {
    pub fn ordered(&self) -> bool {
        self.ordered.unwrap_or(false)
    }
}

impl Default for BulletListProps {
    fn default() -> Self {
        Self {
            items: vec![
                "Elemento 1".to_string(),
                "Elemento 2".to_string(),
                "Elemento 3".to_string(),
            ],
            ordered: None,
            bullet_color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeSnippetProps {
    pub code: String,
    pub language: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub show_language: Option<bool>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
}

impl CodeSnippetProps {
    pub fn show_language(&self) -> bool {
        self.show_language.unwrap_or(true)
    }
}

impl Default for CodeSnippetProps {
    fn default() -> Self {
        Self {
            code: "console.log('Hola mundo');".to_string(),
            language: "javascript".to_string(),
            show_language: None,
            background_color: None,
            text_color: None,
        }
    }
}

/// Section title preceded by an emoji or icon glyph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TituloConIconoProps {
    pub icon: String,
    pub icon_color: Option<String>,
    pub text_color: Option<String>,
    pub font_size: Option<CssValue>,
    pub border_color: Option<String>,
}

impl Default for TituloConIconoProps {
    fn default() -> Self {
        Self {
            icon: "📌".to_string(),
            icon_color: None,
            text_color: None,
            font_size: None,
            border_color: None,
        }
    }
}
