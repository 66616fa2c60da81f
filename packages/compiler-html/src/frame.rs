use crate::css::Declarations;
use gazette_model::props::NoteContainerProps;
use gazette_model::{CssValue, NoteFrame};

pub const DEFAULT_BORDER_WIDTH: &str = "1px";
pub const DEFAULT_BORDER_COLOR: &str = "#e0e0e0";
pub const DEFAULT_BORDER_RADIUS: &str = "12px";
pub const DEFAULT_PADDING: &str = "10px";
pub const DEFAULT_MAX_WIDTH: &str = "560px";

/// Bordered box a note (or a `noteContainer`) renders inside
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStyle {
    pub border_width: String,
    pub border_color: String,
    pub border_radius: String,
    pub padding: String,
    pub max_width: String,
    pub background_color: Option<String>,
}

fn length_or(value: &Option<CssValue>, property: &str, fallback: &str) -> String {
    value
        .as_ref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_css(property))
        .unwrap_or_else(|| fallback.to_string())
}

fn color_or(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

impl FrameStyle {
    pub fn from_note_frame(frame: &NoteFrame) -> Self {
        Self {
            border_width: length_or(&frame.border_width, "borderWidth", DEFAULT_BORDER_WIDTH),
            border_color: color_or(&frame.border_color, DEFAULT_BORDER_COLOR),
            border_radius: length_or(&frame.border_radius, "borderRadius", DEFAULT_BORDER_RADIUS),
            padding: length_or(&frame.padding, "padding", DEFAULT_PADDING),
            max_width: length_or(&frame.max_width, "maxWidth", DEFAULT_MAX_WIDTH),
            background_color: frame.background_color.clone().filter(|c| !c.trim().is_empty()),
        }
    }

    pub fn from_container(props: &NoteContainerProps) -> Self {
        Self::from_note_frame(&NoteFrame {
            border_width: props.border_width.clone(),
            border_color: props.border_color.clone(),
            border_radius: props.border_radius.clone(),
            padding: props.padding.clone(),
            max_width: props.max_width.clone(),
            background_color: props.background_color.clone(),
        })
    }

    pub fn declarations(&self) -> Declarations {
        Declarations::new()
            .push(
                "border",
                format!("{} solid {}", self.border_width, self.border_color),
            )
            .push("borderRadius", &self.border_radius)
            .push("padding", &self.padding)
            .push("maxWidth", &self.max_width)
            .push("margin", "0 auto")
            .push_opt("backgroundColor", self.background_color.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let frame = FrameStyle::from_note_frame(&NoteFrame::default());
        assert_eq!(
            frame.declarations().to_inline(),
            "border: 1px solid #e0e0e0; border-radius: 12px; padding: 10px; max-width: 560px; margin: 0 auto;"
        );
    }

    #[test]
    fn test_overrides() {
        let frame = FrameStyle::from_note_frame(&NoteFrame {
            border_width: Some(CssValue::Number(2.0)),
            border_color: Some("#ff0000".to_string()),
            border_radius: Some(CssValue::from("0")),
            padding: Some(CssValue::Number(20.0)),
            max_width: Some(CssValue::from("100%")),
            background_color: Some("#fafafa".to_string()),
        });
        assert_eq!(
            frame.declarations().to_inline(),
            "border: 2px solid #ff0000; border-radius: 0; padding: 20px; max-width: 100%; margin: 0 auto; background-color: #fafafa;"
        );
    }

    #[test]
    fn test_blank_overrides_use_defaults() {
        let frame = FrameStyle::from_note_frame(&NoteFrame {
            border_color: Some("  ".to_string()),
            padding: Some(CssValue::from("")),
            ..Default::default()
        });
        assert_eq!(frame.border_color, DEFAULT_BORDER_COLOR);
        assert_eq!(frame.padding, DEFAULT_PADDING);
    }
}
