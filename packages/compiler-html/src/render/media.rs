use super::{non_empty, placeholder, RenderContext, RenderFragment};
use crate::css::Declarations;
use crate::escape::{escape_html, escape_url};
use gazette_model::props::{AudioProps, GalleryImage, GalleryProps, ImageProps, VideoProps};
use gazette_model::Component;

fn caption_html(caption: &str) -> String {
    match non_empty(caption) {
        Some(caption) => format!(
            "<p class=\"media-caption\" style=\"margin: 8px 0 0 0; font-size: 13px; color: #777777; text-align: center;\">{}</p>",
            escape_html(caption)
        ),
        None => String::new(),
    }
}

impl RenderFragment for ImageProps {
    fn render(&self, component: &Component, ctx: &RenderContext) -> String {
        let Some(src) = non_empty(&self.src) else {
            return placeholder(ctx, "component-image", "🖼️", "Imagen sin fuente");
        };

        let wrapper = Declarations::new()
            .push("textAlign", self.align.as_str())
            .push("margin", "16px 0");
        let img = Declarations::new()
            .push("maxWidth", "100%")
            .push("height", "auto")
            .push("display", "inline-block")
            .push("border", "0")
            .push_opt("width", self.width.as_ref().map(|w| w.to_css("width")))
            .extend_custom(&component.style);

        let mut image = format!(
            "<img src=\"{}\" alt=\"{}\"{}>",
            escape_url(src),
            escape_html(&self.alt),
            img.to_attr()
        );
        if let Some(link) = non_empty(&self.link) {
            image = format!("<a href=\"{}\" target=\"_blank\">{}</a>", escape_url(link), image);
        }

        format!(
            "<div class=\"component-image\"{}>{}{}</div>",
            wrapper.to_attr(),
            image,
            caption_html(&self.caption)
        )
    }
}

fn gallery_cell(image: Option<&GalleryImage>, width: u32, gap: u32) -> String {
    let cell = Declarations::new()
        .push("padding", format!("{}px", gap / 2))
        .push("verticalAlign", "top");
    let inner = match image {
        Some(image) => format!(
            "<img src=\"{}\" alt=\"{}\" style=\"width: 100%; height: auto; display: block; border: 0;\">{}",
            escape_url(&image.src),
            escape_html(&image.alt),
            caption_html(&image.caption)
        ),
        None => String::new(),
    };
    format!("<td width=\"{}%\"{}>{}</td>", width, cell.to_attr(), inner)
}

impl RenderFragment for GalleryProps {
    fn render(&self, component: &Component, ctx: &RenderContext) -> String {
        let images: Vec<&GalleryImage> = self.visible_images().collect();
        if images.is_empty() {
            return placeholder(ctx, "component-gallery", "🖼️", "Galería sin imágenes");
        }

        let columns = self.columns() as usize;
        let width = 100 / self.columns();
        let rows: String = images
            .chunks(columns)
            .map(|row| {
                let cells: String = (0..columns)
                    .map(|i| gallery_cell(row.get(i).copied(), width, self.gap()))
                    .collect();
                format!("<tr>{}</tr>", cells)
            })
            .collect();

        let table = Declarations::new()
            .push("margin", "16px 0")
            .extend_custom(&component.style);

        format!(
            "<table role=\"presentation\" class=\"component-gallery\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\"{}>{}</table>",
            table.to_attr(),
            rows
        )
    }
}

impl RenderFragment for VideoProps {
    fn render(&self, component: &Component, ctx: &RenderContext) -> String {
        let Some(url) = non_empty(&self.url) else {
            return placeholder(ctx, "component-video", "🎬", "Video sin URL");
        };
        let url = escape_url(url);
        let title = escape_html(non_empty(&self.title).unwrap_or("Ver video"));

        let wrapper = Declarations::new()
            .push("textAlign", "center")
            .push("margin", "16px 0")
            .extend_custom(&component.style);
        let link_style = "display: inline-block; margin-top: 8px; padding: 10px 20px; background-color: #222222; color: #ffffff; text-decoration: none; border-radius: 6px; font-weight: bold;";

        let thumbnail = match non_empty(&self.thumbnail) {
            Some(thumbnail) => format!(
                "<a href=\"{}\" target=\"_blank\"><img src=\"{}\" alt=\"{}\" style=\"max-width: 100%; height: auto; display: block; margin: 0 auto; border: 0; border-radius: 8px;\"></a>",
                url,
                escape_url(thumbnail),
                title
            ),
            None => String::new(),
        };

        format!(
            "<div class=\"component-video\"{}>{}<a href=\"{}\" target=\"_blank\" style=\"{}\">▶ {}</a></div>",
            wrapper.to_attr(),
            thumbnail,
            url,
            link_style,
            title
        )
    }
}

impl RenderFragment for AudioProps {
    fn render(&self, component: &Component, ctx: &RenderContext) -> String {
        let Some(src) = non_empty(&self.src) else {
            return placeholder(ctx, "component-audio", "🎧", "Audio sin fuente");
        };

        let wrapper = Declarations::new()
            .push("backgroundColor", "#f5f5f5")
            .push("borderRadius", "8px")
            .push("padding", "16px")
            .push("margin", "16px 0")
            .extend_custom(&component.style);

        format!(
            "<div class=\"component-audio\"{}><a href=\"{}\" target=\"_blank\" style=\"color: #007bff; text-decoration: none; font-weight: bold;\">🎧 {}</a></div>",
            wrapper.to_attr(),
            escape_url(src),
            escape_html(non_empty(&self.title).unwrap_or("Escuchar audio"))
        )
    }
}
