//! Inline style assembly.
//!
//! Every fragment builds its `style="..."` attribute through [`Declarations`]
//! so conversion and ordering are identical everywhere: component defaults
//! first, then the component's own style bag in key order. Later
//! declarations win in CSS, so custom styles override defaults.

use crate::escape::escape_html;
use gazette_model::StyleMap;

/// Converts a camelCase property name to kebab-case.
///
/// `backgroundColor` becomes `background-color`, a leading uppercase vendor
/// prefix such as `WebkitTransition` becomes `-webkit-transition`, and names
/// that are already kebab-case pass through.
pub fn to_kebab_case(name: &str) -> String {
    let mut kebab = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i == 0 {
                kebab.push('-');
            } else if !kebab.ends_with('-') {
                kebab.push('-');
            }
            kebab.push(ch.to_ascii_lowercase());
        } else {
            kebab.push(ch);
        }
    }
    if kebab.starts_with("ms-") {
        kebab.insert(0, '-');
    }
    kebab
}

/// Ordered list of CSS declarations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    entries: Vec<(String, String)>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration. Empty values are skipped.
    pub fn push(mut self, property: &str, value: impl AsRef<str>) -> Self {
        let value = value.as_ref().trim();
        if !value.is_empty() {
            self.entries.push((to_kebab_case(property), value.to_string()));
        }
        self
    }

    /// Adds a declaration only when `value` is present
    pub fn push_opt(self, property: &str, value: Option<impl AsRef<str>>) -> Self {
        match value {
            Some(value) => self.push(property, value),
            None => self,
        }
    }

    /// Appends a raw declaration string such as `background: red`
    pub fn push_raw(mut self, declaration: &str) -> Self {
        if let Some((property, value)) = declaration.split_once(':') {
            let property = property.trim();
            let value = value.trim().trim_end_matches(';').trim();
            if !property.is_empty() && !value.is_empty() {
                self.entries.push((property.to_string(), value.to_string()));
            }
        }
        self
    }

    /// Appends a component's style bag after the current declarations
    pub fn extend_custom(mut self, style: &StyleMap) -> Self {
        for (property, value) in style.iter() {
            if value.is_empty() {
                continue;
            }
            self.entries
                .push((to_kebab_case(property), value.to_css(property).trim().to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `prop: value; prop: value;`
    pub fn to_inline(&self) -> String {
        self.entries
            .iter()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// ` style="..."` with the leading space, or nothing when empty
    pub fn to_attr(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!(" style=\"{}\"", escape_html(&self.to_inline()))
        }
    }
}

/// Default declarations followed by the component's style bag, as an inline
/// style string
pub fn inline_style(defaults: &[(&str, &str)], custom: &StyleMap) -> String {
    defaults
        .iter()
        .fold(Declarations::new(), |decls, (property, value)| {
            decls.push(property, value)
        })
        .extend_custom(custom)
        .to_inline()
}
