use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use gazette_model::props::{ButtonProps, HeadingProps};
use gazette_model::{
    Component, ComponentKind, FooterConfig, HeaderConfig, NewsletterNote, Note, SocialLink,
    StoredNewsletter,
};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Source directory for newsletter documents
    #[arg(short, long, default_value = "newsletters")]
    pub src_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Gazette project...".bright_blue().bold());

    let src_dir = PathBuf::from(cwd).join(&args.src_dir);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    let sample_file = src_dir.join("sample.newsletter.json");
    if !sample_file.exists() || args.force {
        fs::write(&sample_file, serde_json::to_string_pretty(&sample_newsletter()?)?)?;
        println!("  {} Created sample.newsletter.json", "✓".green());
    }

    let config = Config {
        src_dir: args.src_dir.clone(),
        header: HeaderConfig {
            title: "Mi boletín".to_string(),
            subtitle: "Novedades de la semana".to_string(),
            ..Default::default()
        },
        footer: FooterConfig {
            company_name: "Mi empresa".to_string(),
            contact_email: "hola@example.com".to_string(),
            social_links: vec![SocialLink::new("Web", "https://example.com")],
            unsubscribe_url: "https://example.com/baja".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/sample.newsletter.json", args.src_dir);
    println!("  2. Run: gazette render");
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}

/// Two-note newsletter showing the stored document shape
fn sample_newsletter() -> Result<StoredNewsletter> {
    let welcome = Note {
        id: "bienvenida".to_string(),
        title: "Bienvenida".to_string(),
        components: vec![
            Component::new(ComponentKind::Heading(HeadingProps {
                level: Some(1),
                ..Default::default()
            }))
            .with_id("bienvenida-titulo")
            .with_content("¡Bienvenidos!"),
            Component::with_defaults("paragraph")
                .with_id("bienvenida-texto")
                .with_content("<p>Este es el primer número de nuestro <strong>boletín</strong>.</p>"),
        ],
    };
    let call_to_action = Note {
        id: "suscripcion".to_string(),
        title: "Suscripción".to_string(),
        components: vec![Component::new(ComponentKind::Button(ButtonProps {
            text: "Visita nuestra web".to_string(),
            url: "https://example.com".to_string(),
            ..Default::default()
        }))
        .with_id("suscripcion-boton")],
    };

    Ok(StoredNewsletter {
        title: "Boletín de ejemplo".to_string(),
        description: "Un boletín generado por gazette init".to_string(),
        header: None,
        footer: None,
        notes: vec![
            NewsletterNote::new(welcome, 0).to_stored()?,
            NewsletterNote::new(call_to_action, 1).to_stored()?,
        ],
    })
}
