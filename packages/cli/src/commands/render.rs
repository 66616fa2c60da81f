use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use gazette_compiler_html::{generate_newsletter_html, CompileOptions};
use gazette_model::{Newsletter, NoteDecodeFailure, StoredNewsletter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

pub const NEWSLETTER_EXTENSION: &str = ".newsletter.json";

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Newsletter file or directory (defaults to the configured source directory)
    pub path: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Omit media placeholders, for sending
    #[arg(long)]
    pub export: bool,

    /// Render notes in file order instead of by their `order` field
    #[arg(long)]
    pub preserve_array_order: bool,
}

/// Status output goes to stderr while stdout carries rendered HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusStream {
    Stdout,
    Stderr,
}

impl StatusStream {
    fn for_mode(html_to_stdout: bool) -> Self {
        if html_to_stdout {
            StatusStream::Stderr
        } else {
            StatusStream::Stdout
        }
    }

    fn line(self, message: impl std::fmt::Display) {
        match self {
            StatusStream::Stdout => println!("{}", message),
            StatusStream::Stderr => eprintln!("{}", message),
        }
    }
}

/// A rendered newsletter and the notes that had to be skipped
pub struct RenderedNewsletter {
    pub html: String,
    pub skipped: Vec<NoteDecodeFailure>,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = match &args.path {
        Some(path) => PathBuf::from(cwd).join(path),
        None => config.get_src_dir(cwd),
    };

    if !input.exists() {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    }

    let (root, files) = if input.is_dir() {
        let files = find_newsletter_files(&input);
        (input, files)
    } else {
        let root = input.parent().map(Path::to_path_buf).unwrap_or_default();
        (root, vec![input])
    };

    if !args.stdout {
        println!("{}", "📰 Rendering newsletters...".bright_blue().bold());
    }

    if files.is_empty() {
        StatusStream::for_mode(args.stdout)
            .line(format!("⚠️  No {} files found", NEWSLETTER_EXTENSION).yellow());
        return Ok(());
    }

    let options = config.compile_options(args.export);
    let out_dir = config.get_out_dir(cwd, args.out_dir.as_deref());

    let mut success_count = 0;
    let mut error_count = 0;

    for file in &files {
        let relative_path = file.strip_prefix(&root).unwrap_or(file);
        match render_file(file, &config, &options, args.preserve_array_order) {
            Ok(rendered) => {
                for failure in &rendered.skipped {
                    eprintln!(
                        "  {} {}: nota {} omitida ({})",
                        "⚠️".yellow(),
                        relative_path.display(),
                        failure.note_id,
                        failure.error
                    );
                }

                if args.stdout {
                    println!("{}", rendered.html);
                    success_count += 1;
                    continue;
                }

                let output_file = out_dir.join(output_name(relative_path));
                if let Some(parent) = output_file.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&output_file, rendered.html)?;

                success_count += 1;
                println!(
                    "  {} {} → {}",
                    "✓".green(),
                    relative_path.display(),
                    output_file.display()
                );
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    format!("{:#}", e).red()
                );
            }
        }
    }

    if args.stdout {
        return Ok(());
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Rendered {} newsletters successfully",
            "✅".green(),
            success_count
        );
    } else {
        println!(
            "{} Rendered {} newsletters, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
    }

    Ok(())
}

pub fn find_newsletter_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .map(|name| name.ends_with(NEWSLETTER_EXTENSION))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

/// `weekly.newsletter.json` → `weekly.html`, keeping parent directories
pub fn output_name(relative_path: &Path) -> PathBuf {
    let file_name = relative_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("newsletter");
    let stem = file_name
        .strip_suffix(NEWSLETTER_EXTENSION)
        .or_else(|| file_name.strip_suffix(".json"))
        .unwrap_or(file_name);
    relative_path.with_file_name(format!("{}.html", stem))
}

fn render_file(
    path: &Path,
    config: &Config,
    options: &CompileOptions,
    preserve_array_order: bool,
) -> Result<RenderedNewsletter> {
    let source =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    render_source(&source, config, options, preserve_array_order)
}

/// Renders the JSON text of a stored newsletter
pub fn render_source(
    source: &str,
    config: &Config,
    options: &CompileOptions,
    preserve_array_order: bool,
) -> Result<RenderedNewsletter> {
    let stored: StoredNewsletter =
        serde_json::from_str(source).context("invalid newsletter document")?;
    let (newsletter, skipped) = Newsletter::from_stored(&stored, &config.header, &config.footer);

    for failure in &skipped {
        warn!(note_id = %failure.note_id, order = failure.order, error = %failure.error, "note skipped");
    }

    let notes = if preserve_array_order {
        newsletter.notes.clone()
    } else {
        newsletter.sorted_notes()
    };
    debug!(notes = notes.len(), preserve_array_order, "assembling newsletter");

    let html = generate_newsletter_html(
        &newsletter.title,
        &newsletter.description,
        &notes,
        &newsletter.header,
        &newsletter.footer,
        options,
    );

    Ok(RenderedNewsletter { html, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r##"{
        "title": "Semanal",
        "notes": [
            {"order": 5, "noteData": {"id": "tarde", "objData": "[{\"id\":\"a\",\"type\":\"paragraph\",\"content\":\"Tarde\"}]"}},
            {"order": 1, "noteData": {"id": "pronto", "objData": "[{\"id\":\"b\",\"type\":\"paragraph\",\"content\":\"Pronto\"}]"}},
            {"order": 3, "noteData": {"id": "rota", "objData": "[{\"id\":"}}
        ]
    }"##;

    fn options() -> CompileOptions {
        CompileOptions {
            year: Some(2025),
            ..Default::default()
        }
    }

    #[test]
    fn test_notes_sorted_by_order() {
        let rendered = render_source(SOURCE, &Config::default(), &options(), false).unwrap();
        let html = rendered.html;
        assert!(html.find("Pronto").unwrap() < html.find("Tarde").unwrap());
    }

    #[test]
    fn test_preserve_array_order() {
        let rendered = render_source(SOURCE, &Config::default(), &options(), true).unwrap();
        let html = rendered.html;
        assert!(html.find("Tarde").unwrap() < html.find("Pronto").unwrap());
    }

    #[test]
    fn test_malformed_note_is_skipped() {
        let rendered = render_source(SOURCE, &Config::default(), &options(), false).unwrap();
        assert_eq!(rendered.skipped.len(), 1);
        assert_eq!(rendered.skipped[0].note_id, "rota");
        assert!(!rendered.html.contains("data-note-id=\"rota\""));
    }

    #[test]
    fn test_config_chrome_is_the_fallback() {
        let mut config = Config::default();
        config.footer.company_name = "Desde config".to_string();

        let rendered = render_source(SOURCE, &config, &options(), false).unwrap();
        assert!(rendered.html.contains("Desde config"));

        let own_footer = r#"{"title": "T", "footer": {"companyName": "Propio"}, "notes": []}"#;
        let rendered = render_source(own_footer, &config, &options(), false).unwrap();
        assert!(rendered.html.contains("Propio"));
        assert!(!rendered.html.contains("Desde config"));
    }

    #[test]
    fn test_invalid_document_is_an_error() {
        assert!(render_source("{not json", &Config::default(), &options(), false).is_err());
    }

    #[test]
    fn test_status_goes_to_stderr_with_stdout_html() {
        assert_eq!(StatusStream::for_mode(true), StatusStream::Stderr);
        assert_eq!(StatusStream::for_mode(false), StatusStream::Stdout);
    }

    #[test]
    fn test_output_name() {
        assert_eq!(
            output_name(Path::new("2025/octubre.newsletter.json")),
            PathBuf::from("2025/octubre.html")
        );
        assert_eq!(output_name(Path::new("otro.json")), PathBuf::from("otro.html"));
    }

    #[test]
    fn test_find_newsletter_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.newsletter.json"), "{}").unwrap();
        fs::write(dir.path().join("sub/b.newsletter.json"), "{}").unwrap();
        fs::write(dir.path().join("notas.json"), "[]").unwrap();

        let files = find_newsletter_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.to_string_lossy().ends_with(NEWSLETTER_EXTENSION)));
    }
}
