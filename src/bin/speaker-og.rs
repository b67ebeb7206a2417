use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "speaker-og",
    version,
    about = "Generate OpenGraph images for conference speakers"
)]
struct Cli {
    /// Input JSON with `logo` and `speakers`.
    file: PathBuf,

    /// Font family.
    #[arg(long, value_enum, default_value_t = FontChoice::Geist)]
    font: FontChoice,

    /// Template image the cards are drawn on.
    #[arg(long, default_value = "templates/template.png")]
    template: PathBuf,

    /// Directory holding `<family>/regular.ttf` and `<family>/bold.ttf`.
    #[arg(long, default_value = "fonts")]
    fonts_dir: PathBuf,

    /// Output directory, created if missing.
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FontChoice {
    Geist,
    Roboto,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if !cli.file.exists() {
        println!("JSON file '{}' not found", cli.file.display());
        std::process::exit(1);
    }

    let config = speaker_og::RenderConfig {
        template_path: cli.template,
        fonts_dir: cli.fonts_dir,
        out_dir: cli.out_dir,
        font_family: match cli.font {
            FontChoice::Geist => speaker_og::FontFamily::Geist,
            FontChoice::Roboto => speaker_og::FontFamily::Roboto,
        },
    };

    let mut compositor =
        speaker_og::Compositor::from_config(&config).context("prepare template and fonts")?;
    let created = speaker_og::generate_all(&cli.file, &mut compositor)
        .with_context(|| format!("generate cards from '{}'", cli.file.display()))?;

    println!("\nCreated {} images:", created.len());
    for path in &created {
        println!("  {}", path.display());
    }
    Ok(())
}
