use clap::{Parser, ValueEnum};
use oauth_callback_server::logging::initialize_stderr_tracing;
use oauth_callback_server::style::{OutputFormat, StyleManifest, write_rendered};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// `tailwind.config.js` ES module
    Js,
    /// Plain JSON
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Js => OutputFormat::Js,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Render the style manifest for the CSS build.
#[derive(Debug, Parser)]
#[command(name = "style-config", version)]
struct Args {
    /// Manifest file (yaml, json or toml). The built-in manifest is used if omitted.
    #[arg(long)]
    manifest: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Js)]
    format: Format,

    /// Write here instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    initialize_stderr_tracing();

    let args = Args::parse();

    let manifest = match &args.manifest {
        Some(path) => StyleManifest::load(path)?,
        None => {
            let manifest = StyleManifest::default();
            manifest.validate()?;
            manifest
        }
    };

    let rendered = manifest.render(args.format.into())?;
    write_rendered(&rendered, args.output.as_deref(), &mut std::io::stdout().lock())?;
    Ok(())
}
