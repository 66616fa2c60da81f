use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gazette_compiler_html::{generate_newsletter_html, render_component_to_html, CompileOptions};
use gazette_model::{
    decode_components, Component, FooterConfig, HeaderConfig, NewsletterNote, Note, KNOWN_TYPES,
};

fn render_single_component(c: &mut Criterion) {
    let components = decode_components(
        r##"[{"id": "p", "type": "paragraph", "content": "<p>Hola <b>mundo</b></p>",
            "style": {"color": "#333333", "fontSize": 18}}]"##,
    )
    .unwrap();
    let options = CompileOptions::default();

    c.bench_function("render_single_component", |b| {
        b.iter(|| render_component_to_html(black_box(&components[0]), &options))
    });
}

fn render_full_newsletter(c: &mut Criterion) {
    let notes: Vec<NewsletterNote> = (0..10)
        .map(|i| {
            let components = KNOWN_TYPES
                .iter()
                .map(|type_name| {
                    Component::with_defaults(type_name).with_id(format!("{}-{}", type_name, i))
                })
                .collect();
            NewsletterNote::new(Note::new(format!("note-{}", i), components), i)
        })
        .collect();
    let header = HeaderConfig {
        title: "Gaceta".to_string(),
        ..Default::default()
    };
    let footer = FooterConfig {
        company_name: "Gaceta S.A.".to_string(),
        ..Default::default()
    };
    let options = CompileOptions {
        year: Some(2025),
        ..Default::default()
    };

    c.bench_function("render_full_newsletter", |b| {
        b.iter(|| {
            generate_newsletter_html(
                black_box("Semanal"),
                black_box("Resumen de la semana"),
                black_box(&notes),
                &header,
                &footer,
                &options,
            )
        })
    });
}

criterion_group!(benches, render_single_component, render_full_newsletter);
criterion_main!(benches);
