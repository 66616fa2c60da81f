/// Escapes text for use in element content or a double-quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escapes a URL for an attribute, replacing script-capable schemes with `#`
pub fn escape_url(url: &str) -> String {
    let trimmed = url.trim();
    let scheme: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();

    let blocked = scheme.starts_with("javascript:")
        || scheme.starts_with("vbscript:")
        || (scheme.starts_with("data:") && !scheme.starts_with("data:image/"));

    if blocked {
        "#".to_string()
    } else {
        escape_html(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_script_tag() {
        assert_eq!(
            escape_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_url_blocks_script_schemes() {
        assert_eq!(escape_url("javascript:alert(1)"), "#");
        assert_eq!(escape_url("  JavaScript:alert(1)"), "#");
        assert_eq!(escape_url("java\tscript:alert(1)"), "#");
        assert_eq!(escape_url("data:text/html;base64,xx"), "#");
        assert_eq!(escape_url("data:image/png;base64,xx"), "data:image/png;base64,xx");
        assert_eq!(
            escape_url("https://example.com/?a=1&b=2"),
            "https://example.com/?a=1&amp;b=2"
        );
    }
}
