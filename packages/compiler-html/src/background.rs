use gazette_model::{format_number, Background, GradientType};

/// Resolves a header/footer background to a single CSS declaration.
///
/// A gradient is emitted only when `useGradient` is set and at least two
/// colors are present; otherwise the solid `backgroundColor` is used.
/// Color strings are not validated.
pub fn resolve_background(background: &Background) -> String {
    if background.has_usable_gradient() {
        let first = &background.gradient_colors[0];
        let second = &background.gradient_colors[1];
        match background.gradient_type {
            GradientType::Linear => format!(
                "background: linear-gradient({}deg, {}, {})",
                format_number(background.gradient_direction()),
                first,
                second
            ),
            GradientType::Radial => {
                format!("background: radial-gradient(circle, {}, {})", first, second)
            }
        }
    } else {
        format!("background-color: {}", background.background_color)
    }
}

/// Solid color declaration placed before a gradient for clients that drop
/// gradients
pub fn background_fallback(background: &Background) -> Option<String> {
    background
        .has_usable_gradient()
        .then(|| format!("background-color: {}", background.gradient_colors[0]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_background() {
        let background = Background::solid("#123456");
        assert_eq!(resolve_background(&background), "background-color: #123456");
        assert_eq!(background_fallback(&background), None);
    }

    #[test]
    fn test_linear_gradient_default_direction() {
        let background = Background::gradient(&["#ff0000", "#0000ff"], None);
        assert_eq!(
            resolve_background(&background),
            "background: linear-gradient(180deg, #ff0000, #0000ff)"
        );
        assert_eq!(
            background_fallback(&background).as_deref(),
            Some("background-color: #ff0000")
        );
    }

    #[test]
    fn test_linear_gradient_custom_direction() {
        let background = Background::gradient(&["#fff", "#000", "#999"], Some(45.0));
        assert_eq!(
            resolve_background(&background),
            "background: linear-gradient(45deg, #fff, #000)"
        );
    }

    #[test]
    fn test_single_gradient_color_falls_back_to_solid() {
        let background = Background {
            background_color: "#abcdef".to_string(),
            ..Background::gradient(&["#fff"], None)
        };
        assert_eq!(resolve_background(&background), "background-color: #abcdef");
    }

    #[test]
    fn test_gradient_disabled_ignores_colors() {
        let background = Background {
            background_color: "#111111".to_string(),
            use_gradient: Some(false),
            gradient_colors: vec!["#fff".to_string(), "#000".to_string()],
            ..Default::default()
        };
        assert_eq!(resolve_background(&background), "background-color: #111111");
    }

    #[test]
    fn test_radial_gradient() {
        let background = Background {
            gradient_type: GradientType::Radial,
            ..Background::gradient(&["#fff", "#000"], None)
        };
        assert_eq!(
            resolve_background(&background),
            "background: radial-gradient(circle, #fff, #000)"
        );
    }

    #[test]
    fn test_invalid_color_passes_through() {
        let background = Background::solid("not-a-color");
        assert_eq!(resolve_background(&background), "background-color: not-a-color");
    }
}
