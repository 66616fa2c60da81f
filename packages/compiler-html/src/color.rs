use gazette_model::format_number;

/// Parses `#rgb` or `#rrggbb` into channels
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_string().repeat(2));
            Some((
                channel(&digits.next()?)?,
                channel(&digits.next()?)?,
                channel(&digits.next()?)?,
            ))
        }
        6 => Some((
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        _ => None,
    }
}

/// Applies `opacity` to a hex color as `rgba(...)`.
///
/// Fully opaque colors and colors that are not plain hex are returned as-is.
pub fn with_opacity(color: &str, opacity: f64) -> String {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity >= 1.0 {
        return color.to_string();
    }
    match parse_hex(color) {
        Some((r, g, b)) => format!(
            "rgba({}, {}, {}, {})",
            r,
            g,
            b,
            format_number((opacity * 100.0).round() / 100.0)
        ),
        None => color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ff8000"), Some((255, 128, 0)));
        assert_eq!(parse_hex("#f80"), Some((255, 136, 0)));
        assert_eq!(parse_hex("ff8000"), None);
        assert_eq!(parse_hex("#ggg"), None);
        assert_eq!(parse_hex("#ffff"), None);
    }

    #[test]
    fn test_with_opacity() {
        assert_eq!(with_opacity("#ff0000", 0.5), "rgba(255, 0, 0, 0.5)");
        assert_eq!(with_opacity("#000", 0.25), "rgba(0, 0, 0, 0.25)");
        assert_eq!(with_opacity("#ff0000", 1.0), "#ff0000");
        assert_eq!(with_opacity("rgb(1, 2, 3)", 0.5), "rgb(1, 2, 3)");
        assert_eq!(with_opacity("#ff0000", 0.0), "rgba(255, 0, 0, 0)");
    }
}
