use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use gazette_compiler_html::{generate_single_note_html, CompileOptions};
use gazette_model::decode_components;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct NoteArgs {
    /// JSON file holding a component array (or `{"components": [...]}`)
    pub file: String,

    /// Document title (defaults to the file name)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Omit media placeholders, for sending
    #[arg(long)]
    pub export: bool,
}

pub fn note(args: NoteArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = PathBuf::from(cwd).join(&args.file);
    if !path.is_file() {
        return Err(anyhow!("Note file does not exist: {}", path.display()));
    }

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| file_stem(&path).to_string());
    let source =
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let html = render_note_source(&source, &title, &config.compile_options(args.export))?;

    if args.stdout {
        println!("{}", html);
        return Ok(());
    }

    let out_dir = config.get_out_dir(cwd, args.out_dir.as_deref());
    fs::create_dir_all(&out_dir)?;
    let output_file = out_dir.join(format!("{}.html", file_stem(&path)));
    fs::write(&output_file, html)?;

    println!(
        "  {} {} → {}",
        "✓".green(),
        args.file,
        output_file.display()
    );

    Ok(())
}

fn file_stem(path: &Path) -> &str {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("nota")
}

/// Renders the JSON text of a component list as a standalone document
pub fn render_note_source(source: &str, title: &str, options: &CompileOptions) -> Result<String> {
    let components = decode_components(source).context("invalid component data")?;
    Ok(generate_single_note_html(title, &components, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_note_source() {
        let html = render_note_source(
            r#"[{"id": "h", "type": "heading", "content": "Suelta"}]"#,
            "Mi nota",
            &CompileOptions::default(),
        )
        .unwrap();

        assert!(html.contains("<title>Mi nota</title>"));
        assert!(html.contains("Suelta"));
    }

    #[test]
    fn test_invalid_component_data() {
        let err = render_note_source("{\"components\": 3}", "x", &CompileOptions::default())
            .unwrap_err();
        assert!(format!("{:#}", err).contains("components"));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(Path::new("notas/bienvenida.json")), "bienvenida");
    }
}
