use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Properties whose bare numbers are emitted without a `px` unit
const UNITLESS_PROPERTIES: &[&str] = &[
    "lineHeight",
    "fontWeight",
    "opacity",
    "zIndex",
    "flex",
    "flexGrow",
    "flexShrink",
    "order",
];

/// A single CSS value as persisted by the editor: either a bare number or a literal string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    Number(f64),
    Text(String),
}

impl CssValue {
    /// Render the value for `property`, appending `px` to bare numbers
    /// unless the property is unitless.
    pub fn to_css(&self, property: &str) -> String {
        match self {
            CssValue::Text(text) => text.clone(),
            CssValue::Number(n) if UNITLESS_PROPERTIES.contains(&property) => format_number(*n),
            CssValue::Number(n) => format!("{}px", format_number(*n)),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CssValue::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Number(n) => write!(f, "{}px", format_number(*n)),
            CssValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for CssValue {
    fn from(s: &str) -> Self {
        CssValue::Text(s.to_string())
    }
}

impl From<String> for CssValue {
    fn from(s: String) -> Self {
        CssValue::Text(s)
    }
}

impl From<f64> for CssValue {
    fn from(n: f64) -> Self {
        CssValue::Number(n)
    }
}

impl From<u32> for CssValue {
    fn from(n: u32) -> Self {
        CssValue::Number(n as f64)
    }
}

/// Formats `16.0` as `16` and `1.5` as `1.5`
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// camelCase style bag attached to every component.
///
/// Keys are kept sorted so the rendered declaration order never depends on
/// the order the editor happened to write them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, CssValue>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, property: &str) -> Option<&CssValue> {
        self.0.get(property)
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<CssValue>) {
        self.0.insert(property.into(), value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, property: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CssValue)> {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Editors persist nulls and booleans for cleared fields; those are dropped.
        // Backends that serialize an empty bag as `[]` get an empty map.
        let entries = match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Object(entries) => entries,
            _ => return Ok(StyleMap::new()),
        };
        let map = entries
            .into_iter()
            .filter_map(|(key, value)| match value {
                serde_json::Value::Number(n) => n.as_f64().map(|n| (key, CssValue::Number(n))),
                serde_json::Value::String(s) => Some((key, CssValue::Text(s))),
                _ => None,
            })
            .collect();
        Ok(StyleMap(map))
    }
}

impl<K: Into<String>, V: Into<CssValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        StyleMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Horizontal alignment shared by media, buttons and header/footer chrome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_get_px_unless_unitless() {
        assert_eq!(CssValue::Number(16.0).to_css("fontSize"), "16px");
        assert_eq!(CssValue::Number(1.5).to_css("lineHeight"), "1.5");
        assert_eq!(CssValue::Number(700.0).to_css("fontWeight"), "700");
        assert_eq!(CssValue::from("2em").to_css("fontSize"), "2em");
    }

    #[test]
    fn test_decode_drops_null_and_bool() {
        let json = r##"{"color": "#333", "fontSize": 14, "border": null, "bold": true}"##;
        let style: StyleMap = serde_json::from_str(json).unwrap();

        assert_eq!(style.len(), 2);
        assert_eq!(style.get("color"), Some(&CssValue::from("#333")));
        assert_eq!(style.get("fontSize"), Some(&CssValue::Number(14.0)));
    }

    #[test]
    fn test_decode_null_map() {
        let style: StyleMap = serde_json::from_str("null").unwrap();
        assert!(style.is_empty());
    }

    #[test]
    fn test_decode_non_map_is_empty() {
        for json in ["[]", "[1, 2]", "\"color: red\"", "42"] {
            let style: StyleMap = serde_json::from_str(json).unwrap();
            assert!(style.is_empty(), "{} should decode to an empty map", json);
        }
    }

    #[test]
    fn test_keys_are_sorted() {
        let style: StyleMap = [("zIndex", "1"), ("color", "red"), ("margin", "0")]
            .into_iter()
            .collect();
        let keys: Vec<&String> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["color", "margin", "zIndex"]);
    }
}
