//! Report writers for the results step.

pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

use crate::formatting::FormattingConfig;
use crate::scoring::Analysis;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

/// Presentation settings shared by every writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Limit ranking and detail rows to the first N
    pub top: Option<usize>,
    pub formatting: FormattingConfig,
}

pub trait OutputWriter {
    fn write_analysis(&mut self, analysis: &Analysis, options: &ReportOptions)
        -> anyhow::Result<()>;
}

pub fn create_writer<'a>(format: OutputFormat, out: Box<dyn Write + 'a>) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out)),
    }
}
