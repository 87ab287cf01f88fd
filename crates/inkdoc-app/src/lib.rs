//! inkdoc demo application.
//!
//! Draws a fixed picture (triangle, star, snowman and a greeting) and writes
//! it as SVG to stdout or to a file.

pub mod config;
pub mod figures;
pub mod picture;

use config::{Args, DemoConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}\n{usage}", usage = config::USAGE)]
    Usage(String),
    #[error("Invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Parse `args`, draw the picture and write it out.
pub fn run(args: impl IntoIterator<Item = String>) -> Result<(), AppError> {
    let config = Args::parse(args)?.resolve()?;
    write_picture(&config)
}

/// Render the demo picture to the configured output.
pub fn write_picture(config: &DemoConfig) -> Result<(), AppError> {
    let doc = picture::build_picture();
    match &config.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            doc.render_with(&mut out, &config.render)?;
            out.flush()?;
            log::info!("Wrote {} objects to {}", doc.len(), path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            doc.render_with(&mut out, &config.render)?;
            out.flush()?;
        }
    }
    Ok(())
}
