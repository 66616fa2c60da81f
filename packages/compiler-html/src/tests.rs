use crate::{
    generate_newsletter_html, render_component_to_html, resolve_background, CompileOptions,
};
use gazette_model::{
    decode_components, Background, FooterConfig, HeaderConfig, NewsletterNote, Note,
};

fn options() -> CompileOptions {
    CompileOptions {
        year: Some(2025),
        ..Default::default()
    }
}

fn note(id: &str, order: i64, json: &str) -> NewsletterNote {
    let components = decode_components(json).expect("Failed to decode components");
    NewsletterNote::new(Note::new(id, components), order)
}

fn render_json(json: &str) -> String {
    let components = decode_components(json).expect("Failed to decode components");
    components
        .iter()
        .map(|c| render_component_to_html(c, &options()))
        .collect()
}

#[test]
fn test_bullet_items_are_escaped() {
    let html = render_json(
        r#"[{"id": "l1", "type": "bulletList", "content": "",
            "props": {"items": ["<script>alert(1)</script>", "Tom & 'Jerry'"]}}]"#,
    );

    println!("Generated HTML:\n{}", html);

    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("Tom &amp; &#39;Jerry&#39;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_plain_text_props_are_escaped() {
    let html = render_json(
        r#"[
            {"id": "b", "type": "button", "content": "", "props": {"text": "<b>Ir</b>", "url": "https://example.com"}},
            {"id": "i", "type": "image", "content": "", "props": {"src": "https://example.com/a.png", "alt": "\"><img src=x>"}},
            {"id": "a", "type": "author", "content": "", "props": {"name": "<i>Ana</i>", "email": "a@b.c\"<"}}
        ]"#,
    );

    assert!(html.contains("&lt;b&gt;Ir&lt;/b&gt;"));
    assert!(html.contains("alt=\"&quot;&gt;&lt;img src=x&gt;\""));
    assert!(html.contains("&lt;i&gt;Ana&lt;/i&gt;"));
    assert!(html.contains("a@b.c&quot;&lt;"));
    assert_eq!(html.matches("<img").count(), 1);
}

#[test]
fn test_paragraph_rich_content_passthrough() {
    let html = render_json(
        r#"[{"id": "p1", "type": "paragraph", "content": "<strong>bold</strong>"}]"#,
    );

    assert!(html.starts_with("<div class=\"component-paragraph\""));
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("margin-top: 16px; margin-bottom: 0;"));
}

#[test]
fn test_custom_style_follows_defaults() {
    let html = render_json(
        r#"[{"id": "h1", "type": "heading", "content": "Hola",
            "style": {"fontSize": 40, "color": "red"}}]"#,
    );

    let default_size = html.find("font-size: 24px;").unwrap();
    let custom_size = html.find("font-size: 40px;").unwrap();
    assert!(default_size < custom_size);
    assert!(html.contains("color: red;"));
}

#[test]
fn test_heading_defaults() {
    let html = render_json(r#"[{"id": "h1", "type": "heading", "content": "Hola <em>mundo</em>"}]"#);

    assert!(html.contains("class=\"component-heading\""));
    assert!(html.contains("data-level=\"2\""));
    assert!(html.contains("font-size: 24px;"));
    assert!(html.contains("font-weight: bold;"));
    assert!(html.contains("Hola <em>mundo</em>"));
}

#[test]
fn test_unknown_type_fallback() {
    let html = render_json(
        r#"[{"id": "x", "type": "doesNotExist", "content": "contenido", "props": {"a": 1}}]"#,
    );

    assert!(html.contains("doesNotExist"));
    assert!(html.contains("contenido"));
    assert!(html.contains("component-unknown"));
}

#[test]
fn test_one_bad_prop_keeps_the_others() {
    let html = render_json(
        r#"[
            {"id": "i", "type": "image", "content": "", "props": {"src": "https://cdn.example.com/a.png", "align": null}},
            {"id": "j", "type": "image", "content": "", "props": {"src": "https://cdn.example.com/b.png", "align": "justify"}},
            {"id": "b", "type": "button", "content": "", "props": {"text": "Comprar ya", "backgroundColor": null}},
            {"id": "t", "type": "table", "content": "", "props": {"headers": ["Año", "Total"], "rows": [["2024", 15]]}}
        ]"#,
    );

    println!("Generated HTML:\n{}", html);

    assert!(!html.contains("component-placeholder"));
    assert!(html.contains("src=\"https://cdn.example.com/a.png\""));
    assert!(html.contains("src=\"https://cdn.example.com/b.png\""));
    assert!(html.contains("Comprar ya"));
    assert!(!html.contains("Haz clic aquí"));
    assert!(html.contains(">2024</td>"));
    assert!(html.contains(">15</td>"));
    assert!(!html.contains("Columna 1"));
}

#[test]
fn test_quiz_without_answer() {
    let html = render_json(
        r#"[{"id": "q", "type": "quiz", "content": "", "props": {"question": "¿?", "options": ["a", "b"], "correctAnswer": -1}}]"#,
    );

    assert!(html.contains("<strong>A.</strong> a"));
    assert!(!html.contains("Respuesta correcta"));
}

#[test]
fn test_array_style_renders_component() {
    let html = render_json(r#"[{"id": "p", "type": "paragraph", "content": "hola", "style": []}]"#);

    assert!(html.contains("component-paragraph"));
    assert!(html.contains(">hola</div>"));
}

#[test]
fn test_gradient_with_one_color_falls_back() {
    let background = Background {
        background_color: "#fafafa".to_string(),
        use_gradient: Some(true),
        gradient_colors: vec!["#fff".to_string()],
        ..Default::default()
    };

    assert_eq!(resolve_background(&background), "background-color: #fafafa");
}

#[test]
fn test_assembler_keeps_array_order() {
    let a = note(
        "a",
        2,
        r#"[{"id": "ha", "type": "heading", "content": "Nota A"}]"#,
    );
    let b = note(
        "b",
        0,
        r#"[{"id": "hb", "type": "heading", "content": "Nota B"}]"#,
    );

    let html = generate_newsletter_html(
        "Orden",
        "",
        &[a, b],
        &HeaderConfig::default(),
        &FooterConfig::default(),
        &options(),
    );

    let pos_a = html.find("Nota A").unwrap();
    let pos_b = html.find("Nota B").unwrap();
    assert!(pos_a < pos_b, "array order must win over the order field");
}

#[test]
fn test_component_order_within_note() {
    let n = note(
        "n",
        0,
        r#"[
            {"id": "1", "type": "paragraph", "content": "uno"},
            {"id": "2", "type": "paragraph", "content": "dos"},
            {"id": "3", "type": "paragraph", "content": "tres"}
        ]"#,
    );
    let html = generate_newsletter_html(
        "T",
        "",
        &[n],
        &HeaderConfig::default(),
        &FooterConfig::default(),
        &options(),
    );

    let uno = html.find(">uno<").unwrap();
    let dos = html.find(">dos<").unwrap();
    let tres = html.find(">tres<").unwrap();
    assert!(uno < dos && dos < tres);
}

#[test]
fn test_document_title_is_escaped_by_default() {
    let html = generate_newsletter_html(
        "<script>x</script>",
        "A & B",
        &[],
        &HeaderConfig::default(),
        &FooterConfig::default(),
        &options(),
    );

    assert!(!html.contains("<script>"));
    assert!(html.contains("<title>&lt;script&gt;x&lt;/script&gt;</title>"));
    assert!(html.contains("A &amp; B"));
}

#[test]
fn test_end_to_end_weekly() {
    let note1 = note(
        "note-1",
        0,
        r#"[
            {"id": "h", "type": "heading", "content": "Noticias de la semana"},
            {"id": "p", "type": "paragraph", "content": "<p>Todo sobre <b>Rust</b></p>"}
        ]"#,
    );
    let note2 = note(
        "note-2",
        1,
        r#"[{"id": "img", "type": "image", "content": "", "props": {"src": ""}}]"#,
    );
    let header = HeaderConfig::default();
    let footer = FooterConfig {
        company_name: "Gaceta S.A.".to_string(),
        ..Default::default()
    };

    let html = generate_newsletter_html(
        "Weekly",
        "desc",
        &[note1, note2],
        &header,
        &footer,
        &options(),
    );

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<!DOCTYPE html>"));
    let title = html.find(">Weekly</h1>").unwrap();
    let heading = html.find("Noticias de la semana").unwrap();
    let paragraph = html.find("<p>Todo sobre <b>Rust</b></p>").unwrap();
    let placeholder = html.find("component-image component-placeholder").unwrap();
    let company = html.find(">Gaceta S.A.</p>").unwrap();
    assert!(title < heading);
    assert!(heading < paragraph);
    assert!(paragraph < placeholder);
    assert!(placeholder < company);
    assert!(html.contains("© 2025 Gaceta S.A. Todos los derechos reservados."));

    for tag in ["table", "tr", "td", "div", "p", "html", "head", "body", "style"] {
        let opened = html.matches(&format!("<{}>", tag)).count()
            + html.matches(&format!("<{} ", tag)).count();
        let closed = html.matches(&format!("</{}>", tag)).count();
        assert_eq!(opened, closed, "unbalanced <{}>", tag);
    }
}

#[test]
fn test_end_to_end_export_omits_placeholder() {
    let note2 = note(
        "note-2",
        1,
        r#"[{"id": "img", "type": "image", "content": ""}]"#,
    );
    let html = generate_newsletter_html(
        "Weekly",
        "",
        &[note2],
        &HeaderConfig::default(),
        &FooterConfig::default(),
        &CompileOptions {
            year: Some(2025),
            ..CompileOptions::export()
        },
    );

    assert!(!html.contains("component-placeholder"));
    assert!(html.contains("data-note-id=\"note-2\""));
}
