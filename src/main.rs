//! `pagemark` CLI - convert a document to Markdown

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pagemark::content::mime_from_extension;
use pagemark::{Config, ContentRouter};

#[derive(Parser)]
#[command(name = "pagemark")]
#[command(about = "Convert PDF and text documents to Markdown")]
#[command(version)]
struct Cli {
    /// Document to convert
    input: PathBuf,

    /// Write Markdown to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Content type (default: guessed from the file extension)
    #[arg(short = 't', long)]
    content_type: Option<String>,

    /// Render pages one at a time
    #[arg(long)]
    sequential: bool,

    /// Skip output normalization
    #[arg(long)]
    raw: bool,

    /// Config file (default: ~/.config/pagemark/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only markdown.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if cli.sequential {
        config.layout.parallel = false;
    }
    if cli.raw {
        config.output.normalize = false;
    }

    let content_type = cli
        .content_type
        .clone()
        .unwrap_or_else(|| guess_content_type(&cli.input).to_string());

    let bytes = std::fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let router = ContentRouter::with_config(&config);
    let result = router
        .convert(&bytes, &content_type)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;

    info!(
        content_type = %result.content_type,
        pages = ?result.page_count,
        elapsed_ms = result.elapsed_ms,
        "conversion complete"
    );

    match cli.output {
        Some(path) => {
            let mut file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            file.write_all(result.markdown.as_bytes())?;
            file.write_all(b"\n")?;
        }
        None => println!("{}", result.markdown),
    }

    Ok(())
}

fn guess_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    mime_from_extension(ext)
}
