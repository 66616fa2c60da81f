use crate::de::{lenient_list, lenient_string, lenient_u32};
use crate::style::{Alignment, CssValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageProps {
    #[serde(deserialize_with = "lenient_string")]
    pub src: String,
    #[serde(deserialize_with = "lenient_string")]
    pub alt: String,
    pub align: Alignment,
    pub width: Option<CssValue>,
    #[serde(deserialize_with = "lenient_string")]
    pub caption: String,
    #[serde(deserialize_with = "lenient_string")]
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryImage {
    #[serde(deserialize_with = "lenient_string")]
    pub src: String,
    #[serde(deserialize_with = "lenient_string")]
    pub alt: String,
    #[serde(deserialize_with = "lenient_string")]
    pub caption: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryProps {
    #[serde(deserialize_with = "lenient_list")]
    pub images: Vec<GalleryImage>,
    #[serde(deserialize_with = "lenient_u32")]
    pub columns: Option<u32>,
    #[serde(deserialize_with = "lenient_u32")]
    pub gap: Option<u32>,
}

impl GalleryProps {
    pub fn columns(&self) -> u32 {
        self.columns.unwrap_or(2).clamp(1, 4)
    }

    pub fn gap(&self) -> u32 {
        self.gap.unwrap_or(8)
    }

    /// Images that actually have a source
    pub fn visible_images(&self) -> impl Iterator<Item = &GalleryImage> {
        self.images.iter().filter(|image| !image.src.trim().is_empty())
    }
}

/// Email clients cannot play video inline, so a video renders as a linked thumbnail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoProps {
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub thumbnail: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
}

impl Default for VideoProps {
    fn default() -> Self {
        Self {
            url: String::new(),
            thumbnail: String::new(),
            title: "Ver video".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioProps {
    #[serde(deserialize_with = "lenient_string")]
    pub src: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
}

impl Default for AudioProps {
    fn default() -> Self {
        Self {
            src: String::new(),
            title: "Escuchar audio".to_string(),
        }
    }
}
