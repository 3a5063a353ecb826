//! Utility-first styling manifest.
//!
//! Describes the inputs of the CSS build: which source files are scanned for class
//! names, the font-family tokens on offer and the plugins that extend the generator.
//! Nothing here runs at request time; the manifest is rendered once into the config
//! module the CSS tool loads.

pub mod manifest;
pub mod render;

pub use manifest::{OutputFormat, StyleManifest, StylePlugin, Theme, ThemeExtension};
pub use render::ConfigModule;

use std::io::{self, Write};
use std::path::Path;

/// Write rendered output to `output`, or to `stdout` when no path is given.
pub fn write_rendered(
    rendered: &str,
    output: Option<&Path>,
    stdout: &mut impl Write,
) -> io::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!(path = %path.display(), bytes = rendered.len(), "wrote style config");
            Ok(())
        }
        None => {
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()
        }
    }
}
