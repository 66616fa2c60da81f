use crate::component::Component;
use crate::de::{lenient_bool, lenient_list, lenient_string_rows, lenient_strings, lenient_u32};
use crate::style::CssValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DividerProps {
    pub color: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub thickness: Option<u32>,
    pub line_style: String,
    pub width: String,
}

impl DividerProps {
    pub fn thickness(&self) -> u32 {
        self.thickness.unwrap_or(1)
    }
}

impl Default for DividerProps {
    fn default() -> Self {
        Self {
            color: "#e0e0e0".to_string(),
            thickness: None,
            line_style: "solid".to_string(),
            width: "100%".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacerProps {
    #[serde(deserialize_with = "lenient_u32")]
    pub height: Option<u32>,
}

impl SpacerProps {
    pub fn height(&self) -> u32 {
        self.height.unwrap_or(24)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableProps {
    #[serde(deserialize_with = "lenient_strings")]
    pub headers: Vec<String>,
    #[serde(deserialize_with = "lenient_string_rows")]
    pub rows: Vec<Vec<String>>,
    pub header_background: String,
    pub border_color: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub striped: Option<bool>,
}

impl TableProps {
    pub fn striped(&self) -> bool {
        self.striped.unwrap_or(false)
    }
}

impl Default for TableProps {
    fn default() -> Self {
        Self {
            headers: vec!["Columna 1".to_string(), "Columna 2".to_string()],
            rows: vec![vec!["Dato 1".to_string(), "Dato 2".to_string()]],
            header_background: "#f5f5f5".to_string(),
            border_color: "#e0e0e0".to_string(),
            striped: None,
        }
    }
}

/// Groups an imported note's components inside a bordered frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoteContainerProps {
    #[serde(deserialize_with = "lenient_list")]
    pub components_data: Vec<Component>,
    pub title: Option<String>,
    pub border_color: Option<String>,
    pub border_width: Option<CssValue>,
    pub border_radius: Option<CssValue>,
    pub padding: Option<CssValue>,
    pub max_width: Option<CssValue>,
    pub background_color: Option<String>,
}
