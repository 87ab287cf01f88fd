//! Command line and config file handling.

use crate::AppError;
use inkdoc_core::RenderConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const USAGE: &str = "usage: inkdoc [--config <file.json>] [--output <file.svg>]";

/// Settings read from the optional JSON config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Indentation settings, under the `render` key.
    pub render: RenderConfig,
    /// Where to write the SVG. Stdout when unset.
    pub output: Option<PathBuf>,
}

impl DemoConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&json).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Parsed command line arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, AppError> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let slot = match arg.as_str() {
                "--config" | "-c" => &mut parsed.config,
                "--output" | "-o" => &mut parsed.output,
                other => return Err(AppError::Usage(format!("unexpected argument '{}'", other))),
            };
            let value = args
                .next()
                .ok_or_else(|| AppError::Usage(format!("{} needs a value", arg)))?;
            *slot = Some(PathBuf::from(value));
        }
        Ok(parsed)
    }

    /// Merge the config file (if any) with command line overrides.
    pub fn resolve(&self) -> Result<DemoConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        Ok(config)
    }
}
