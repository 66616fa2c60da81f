use crate::de::{lenient_list, lenient_string};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InfoCardProps {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    pub icon: String,
    pub background_color: String,
    pub border_color: String,
    pub text_color: Option<String>,
}

impl Default for InfoCardProps {
    fn default() -> Self {
        Self {
            title: "Información".to_string(),
            icon: "ℹ️".to_string(),
            background_color: "#e8f4fd".to_string(),
            border_color: "#2196f3".to_string(),
            text_color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HighlightBoxProps {
    pub background_color: String,
    pub border_color: String,
    pub icon: String,
}

impl Default for HighlightBoxProps {
    fn default() -> Self {
        Self {
            background_color: "#fff8e1".to_string(),
            border_color: "#ffc107".to_string(),
            icon: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExampleBoxProps {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    pub background_color: String,
    pub border_color: String,
}

impl Default for ExampleBoxProps {
    fn default() -> Self {
        Self {
            title: "Ejemplo".to_string(),
            background_color: "#f1f8e9".to_string(),
            border_color: "#8bc34a".to_string(),
        }
    }
}

/// Fixed presentation presets for summary boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryPreset {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub background_color: &'static str,
    pub icon_color: &'static str,
    pub text_color: &'static str,
}

pub const SUMMARY_PRESETS: &[SummaryPreset] = &[
    SummaryPreset {
        key: "resumen",
        label: "Resumen",
        icon: "📝",
        background_color: "#e3f2fd",
        icon_color: "#1976d2",
        text_color: "#0d47a1",
    },
    SummaryPreset {
        key: "concepto",
        label: "Concepto clave",
        icon: "💡",
        background_color: "#f3e5f5",
        icon_color: "#7b1fa2",
        text_color: "#4a148c",
    },
    SummaryPreset {
        key: "dato",
        label: "Dato curioso",
        icon: "📊",
        background_color: "#e8f5e9",
        icon_color: "#388e3c",
        text_color: "#1b5e20",
    },
    SummaryPreset {
        key: "tip",
        label: "Tip",
        icon: "✨",
        background_color: "#fff3e0",
        icon_color: "#f57c00",
        text_color: "#e65100",
    },
    SummaryPreset {
        key: "analogia",
        label: "Analogía",
        icon: "🔗",
        background_color: "#fce4ec",
        icon_color: "#c2185b",
        text_color: "#880e4f",
    },
];

impl SummaryPreset {
    /// Looks up a preset by key, falling back to "resumen"
    pub fn lookup(key: &str) -> &'static SummaryPreset {
        SUMMARY_PRESETS
            .iter()
            .find(|preset| preset.key == key)
            .unwrap_or(&SUMMARY_PRESETS[0])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryProps {
    pub summary_type: String,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub background_color: Option<String>,
    pub icon_color: Option<String>,
    pub text_color: Option<String>,
}

/// Summary presentation after per-field overrides have been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSummary {
    pub label: String,
    pub icon: String,
    pub background_color: String,
    pub icon_color: String,
    pub text_color: String,
}

impl SummaryProps {
    pub fn preset(&self) -> &'static SummaryPreset {
        SummaryPreset::lookup(&self.summary_type)
    }

    /// Merges explicit props over the preset, field by field. Empty strings
    /// count as unset.
    pub fn resolve(&self) -> ResolvedSummary {
        let preset = self.preset();
        let pick = |value: &Option<String>, fallback: &str| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(fallback)
                .to_string()
        };

        ResolvedSummary {
            label: pick(&self.label, preset.label),
            icon: pick(&self.icon, preset.icon),
            background_color: pick(&self.background_color, preset.background_color),
            icon_color: pick(&self.icon_color, preset.icon_color),
            text_color: pick(&self.text_color, preset.text_color),
        }
    }
}

impl Default for SummaryProps {
    fn default() -> Self {
        Self {
            summary_type: "resumen".to_string(),
            label: None,
            icon: None,
            background_color: None,
            icon_color: None,
            text_color: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconListItem {
    pub icon: String,
    #[serde(deserialize_with = "lenient_string")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconListProps {
    #[serde(deserialize_with = "lenient_list")]
    pub items: Vec<IconListItem>,
    pub icon_color: Option<String>,
}

impl Default for IconListProps {
    fn default() -> Self {
        Self {
            items: vec![
                IconListItem {
                    icon: "✅".to_string(),
                    text: "Primer punto".to_string(),
                },
                IconListItem {
                    icon: "✅".to_string(),
                    text: "Segundo punto".to_string(),
                },
            ],
            icon_color: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Step {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepProcessProps {
    #[serde(deserialize_with = "lenient_list")]
    pub steps: Vec<Step>,
    pub color: String,
}

impl Default for StepProcessProps {
    fn default() -> Self {
        Self {
            steps: vec![
                Step {
                    title: "Paso 1".to_string(),
                    description: "Descripción del primer paso".to_string(),
                },
                Step {
                    title: "Paso 2".to_string(),
                    description: "Descripción del segundo paso".to_string(),
                },
            ],
            color: "#007bff".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineItem {
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineProps {
    #[serde(deserialize_with = "lenient_list")]
    pub items: Vec<TimelineItem>,
    pub color: String,
}

impl Default for TimelineProps {
    fn default() -> Self {
        Self {
            items: vec![TimelineItem {
                date: "2024".to_string(),
                title: "Evento".to_string(),
                description: "Descripción del evento".to_string(),
            }],
            color: "#007bff".to_string(),
        }
    }
}
