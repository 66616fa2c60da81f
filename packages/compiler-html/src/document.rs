//! Document assembler: header, notes and footer laid out as an email-safe
//! table document.
//!
//! Notes are emitted in the order given. Callers that want `order`-sorted
//! output sort beforehand (see [`gazette_model::Newsletter::sorted_notes`]).

use crate::background::{background_fallback, resolve_background};
use crate::context::{CompileOptions, HtmlWriter};
use crate::css::Declarations;
use crate::escape::{escape_html, escape_url};
use crate::frame::FrameStyle;
use crate::render::{render_all, RenderContext};
use crate::stylesheet::STYLESHEET;
use gazette_model::{Background, Component, FooterConfig, HeaderConfig, NewsletterNote, SocialLink};
use tracing::{debug, instrument};

/// Generate a complete newsletter document
#[instrument(skip_all, fields(notes = notes.len()))]
pub fn generate_newsletter_html(
    title: &str,
    description: &str,
    notes: &[NewsletterNote],
    header: &HeaderConfig,
    footer: &FooterConfig,
    options: &CompileOptions,
) -> String {
    let mut writer = HtmlWriter::new(options);

    write_document(&mut writer, title, |w| {
        write_header(w, title, header);
        write_banner(w, header);
        write_description(w, description);
        for note in notes {
            debug!(
                note_id = note.id(),
                order = note.order,
                components = note.components().len(),
                "rendering note"
            );
            write_note(w, note.id(), note.components(), &FrameStyle::from_note_frame(&note.frame));
        }
        write_footer(w, footer);
    });

    writer.get_output()
}

/// Generate a document for one note's components, without header or footer
#[instrument(skip_all, fields(components = components.len()))]
pub fn generate_single_note_html(
    title: &str,
    components: &[Component],
    options: &CompileOptions,
) -> String {
    let mut writer = HtmlWriter::new(options);

    write_document(&mut writer, title, |w| {
        write_note(w, "", components, &FrameStyle::from_note_frame(&Default::default()));
    });

    writer.get_output()
}

/// Document-level text, escaped unless the caller opted into raw markup
fn document_text(options: &CompileOptions, text: &str) -> String {
    if options.escape_document_text {
        escape_html(text)
    } else {
        text.to_string()
    }
}

fn background_declarations(background: &Background) -> Declarations {
    let declarations = match background_fallback(background) {
        Some(fallback) => Declarations::new().push_raw(&fallback),
        None => Declarations::new(),
    };
    declarations.push_raw(&resolve_background(background))
}

fn write_document(writer: &mut HtmlWriter, title: &str, body: impl FnOnce(&mut HtmlWriter)) {
    let lang = escape_html(&writer.options().lang);
    let title = document_text(writer.options(), title);

    writer.add_line("<!DOCTYPE html>");
    writer.block(&format!("<html lang=\"{}\">", lang), "</html>", |w| {
        w.block("<head>", "</head>", |w| {
            w.add_line("<meta charset=\"UTF-8\">");
            w.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
            w.add_line("<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\">");
            w.add_line(&format!("<title>{}</title>", title));
            w.block("<style>", "</style>", |w| {
                for rule in STYLESHEET.lines() {
                    w.add_line(rule);
                }
            });
        });
        w.block("<body>", "</body>", |w| {
            w.block(
                "<table role=\"presentation\" class=\"email-wrapper\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">",
                "</table>",
                |w| {
                    w.block("<tr>", "</tr>", |w| {
                        w.block("<td align=\"center\" style=\"padding: 20px 0;\">", "</td>", |w| {
                            w.block(
                                "<table role=\"presentation\" class=\"email-container\" width=\"600\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">",
                                "</table>",
                                body,
                            );
                        });
                    });
                },
            );
        });
    });
}

/// One `<tr><td>` row of the container table
fn write_row(writer: &mut HtmlWriter, cell: &str, body: impl FnOnce(&mut HtmlWriter)) {
    writer.block("<tr>", "</tr>", |w| w.block(cell, "</td>", body));
}

fn social_links(writer: &HtmlWriter, links: &[SocialLink], color: &str) -> Vec<String> {
    links
        .iter()
        .filter(|link| !link.url.trim().is_empty())
        .map(|link| {
            let label = if link.platform.trim().is_empty() {
                link.url.as_str()
            } else {
                link.platform.as_str()
            };
            format!(
                "<a href=\"{}\" target=\"_blank\" style=\"color: {}; text-decoration: none;\">{}</a>",
                escape_url(&link.url),
                escape_html(color),
                document_text(writer.options(), label)
            )
        })
        .collect()
}

fn write_header(writer: &mut HtmlWriter, title: &str, header: &HeaderConfig) {
    let align = header.alignment.as_str();
    let style = background_declarations(&header.background)
        .push("color", &header.text_color)
        .push("textAlign", align);
    let cell = format!(
        "<td class=\"header-block\" align=\"{}\"{}>",
        align,
        style.to_attr()
    );

    write_row(writer, &cell, |w| {
        if !header.logo_url.trim().is_empty() {
            let logo = Declarations::new()
                .push_opt("width", header.logo_width.as_ref().map(|width| width.to_css("width")));
            w.add_line(&format!(
                "<img class=\"header-logo\" src=\"{}\" alt=\"{}\"{}>",
                escape_url(&header.logo_url),
                escape_html(&header.logo_alt),
                logo.to_attr()
            ));
        }

        if header.sponsor.enabled() {
            write_sponsor(w, header);
        }

        let heading = if header.title.trim().is_empty() {
            title
        } else {
            header.title.as_str()
        };
        if !heading.trim().is_empty() {
            w.add_line(&format!(
                "<h1 class=\"header-title\" style=\"color: {};\">{}</h1>",
                escape_html(&header.text_color),
                document_text(w.options(), heading)
            ));
        }

        if !header.subtitle.trim().is_empty() {
            w.add_line(&format!(
                "<p class=\"header-subtitle\">{}</p>",
                document_text(w.options(), &header.subtitle)
            ));
        }

        let links = social_links(w, &header.social_links, &header.text_color);
        if !links.is_empty() {
            let separator = document_text(w.options(), &header.social_separator);
            w.add_line(&format!(
                "<p class=\"header-social\" style=\"margin: 12px 0 0 0;\">{}</p>",
                links.join(&separator)
            ));
        }
    });
}

fn write_sponsor(writer: &mut HtmlWriter, header: &HeaderConfig) {
    let sponsor = &header.sponsor;
    let mut parts = Vec::new();

    if !sponsor.label.trim().is_empty() {
        parts.push(format!(
            "<span style=\"text-transform: uppercase; letter-spacing: 1px;\">{}</span>",
            document_text(writer.options(), &sponsor.label)
        ));
    }
    if !sponsor.logo_url.trim().is_empty() {
        parts.push(format!(
            "<img src=\"{}\" alt=\"{}\" style=\"max-height: 32px; vertical-align: middle; border: 0;\">",
            escape_url(&sponsor.logo_url),
            escape_html(&sponsor.name)
        ));
    }
    if !sponsor.name.trim().is_empty() {
        parts.push(format!(
            "<strong>{}</strong>",
            document_text(writer.options(), &sponsor.name)
        ));
    }
    if parts.is_empty() {
        return;
    }

    let mut inner = parts.join(" ");
    if !sponsor.url.trim().is_empty() {
        inner = format!(
            "<a href=\"{}\" target=\"_blank\" style=\"color: inherit; text-decoration: none;\">{}</a>",
            escape_url(&sponsor.url),
            inner
        );
    }
    writer.add_line(&format!("<div class=\"sponsor-block\">{}</div>", inner));
}

fn write_banner(writer: &mut HtmlWriter, header: &HeaderConfig) {
    if header.banner_url.trim().is_empty() {
        return;
    }
    write_row(writer, "<td class=\"banner-block\">", |w| {
        w.add_line(&format!(
            "<img src=\"{}\" alt=\"\" width=\"600\">",
            escape_url(&header.banner_url)
        ));
    });
}

fn write_description(writer: &mut HtmlWriter, description: &str) {
    if description.trim().is_empty() {
        return;
    }
    let text = document_text(writer.options(), description);
    write_row(writer, "<td class=\"description-block\">", |w| {
        w.add_line(&format!("<p style=\"margin: 0;\">{}</p>", text));
    });
}

fn write_note(writer: &mut HtmlWriter, note_id: &str, components: &[Component], frame: &FrameStyle) {
    let ctx = RenderContext::new(writer.options());
    let fragments = render_all(components, &ctx);

    let note_attr = if note_id.is_empty() {
        String::new()
    } else {
        format!(" data-note-id=\"{}\"", escape_html(note_id))
    };
    let open = format!(
        "<div class=\"note-container\"{}{}>",
        note_attr,
        frame.declarations().to_attr()
    );

    write_row(writer, "<td class=\"note-section\">", |w| {
        w.block(&open, "</div>", |w| {
            for fragment in &fragments {
                w.add_line(fragment);
            }
        });
    });
}

fn write_footer(writer: &mut HtmlWriter, footer: &FooterConfig) {
    let align = footer.alignment.as_str();
    let style = background_declarations(&footer.background)
        .push("color", &footer.text_color)
        .push("textAlign", align);
    let cell = format!(
        "<td class=\"footer-block\" align=\"{}\"{}>",
        align,
        style.to_attr()
    );
    let year = writer.options().resolved_year();

    write_row(writer, &cell, |w| {
        let company = footer.company_name.trim();
        if !company.is_empty() {
            w.add_line(&format!(
                "<p style=\"margin: 0; font-weight: bold;\">{}</p>",
                document_text(w.options(), company)
            ));
        }

        if !footer.address.trim().is_empty() {
            w.add_line(&format!(
                "<p style=\"margin: 4px 0 0 0;\">{}</p>",
                document_text(w.options(), &footer.address)
            ));
        }

        let email = footer.contact_email.trim();
        if !email.is_empty() {
            let email = escape_html(email);
            w.add_line(&format!(
                "<p style=\"margin: 4px 0 0 0;\"><a href=\"mailto:{}\" style=\"color: {};\">{}</a></p>",
                email,
                escape_html(&footer.text_color),
                email
            ));
        }

        let links = social_links(w, &footer.social_links, &footer.text_color);
        if !links.is_empty() {
            let separator = document_text(w.options(), &footer.social_separator);
            w.add_line(&format!(
                "<p class=\"footer-social\" style=\"margin: 12px 0 0 0;\">{}</p>",
                links.join(&separator)
            ));
        }

        if !footer.unsubscribe_url.trim().is_empty() {
            w.add_line(&format!(
                "<p style=\"margin: 12px 0 0 0;\"><a href=\"{}\" style=\"color: {};\">{}</a></p>",
                escape_url(&footer.unsubscribe_url),
                escape_html(&footer.text_color),
                document_text(w.options(), &footer.unsubscribe_text)
            ));
        }

        let copyright = if footer.copyright_text.trim().is_empty() {
            let holder = if company.is_empty() {
                String::new()
            } else {
                format!(" {}", company.trim_end_matches('.'))
            };
            document_text(
                w.options(),
                &format!("© {}{}. Todos los derechos reservados.", year, holder),
            )
        } else {
            document_text(w.options(), &footer.copyright_text)
        };
        w.add_line(&format!("<p class=\"footer-copyright\">{}</p>", copyright));
    });
}
