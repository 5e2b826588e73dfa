use crate::config::{load_config, load_config_from, WsmConfig};
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, import_csv_file, OutputFormat, ReportOptions};
use crate::scoring::WeightPercentages;
use crate::wizard::SessionState;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// Where the destination records come from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    File(PathBuf),
    Sample,
}

pub struct RankConfig {
    pub source: DataSource,
    pub weights: Option<Vec<f64>>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub config: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

/// Drive a session through all three steps and return it in `ShowingResults`.
pub fn rank_session(
    source: &DataSource,
    weights: Option<WeightPercentages>,
    defaults: WeightPercentages,
) -> Result<SessionState> {
    let mut session = SessionState::new(defaults);

    match source {
        DataSource::File(path) => {
            let records = import_csv_file(path)
                .with_context(|| format!("Failed to import destinations from {}", path.display()))?;
            session.replace_records(records)?;
        }
        DataSource::Sample => {
            session.load_sample()?;
        }
    }

    session.continue_to_weights()?;
    if let Some(weights) = weights {
        session.set_weights(weights)?;
    }
    session.compute()?;
    Ok(session)
}

fn resolve_settings(path: Option<&PathBuf>) -> WsmConfig {
    match path {
        Some(path) => load_config_from(path),
        None => load_config(),
    }
}

pub fn handle_rank(config: RankConfig) -> Result<()> {
    let settings = resolve_settings(config.config.as_ref());
    let weights = config
        .weights
        .as_deref()
        .map(WeightPercentages::from_slice)
        .transpose()?;

    let session = rank_session(&config.source, weights, settings.default_weights())?;
    let analysis = session
        .analysis()
        .context("Scoring finished without producing results")?;

    let format = config.format.unwrap_or_else(|| settings.default_format());
    let options = ReportOptions {
        top: config.top.or_else(|| settings.top()),
        formatting: match config.output {
            // Files never get ANSI escapes
            Some(_) => FormattingConfig::plain(),
            None => config.formatting,
        },
    };
    options.formatting.apply();

    let out: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    let mut writer = create_writer(format, out);
    writer
        .write_analysis(analysis, &options)
        .context("Failed to write report")?;

    if let Some(path) = &config.output {
        info!(path = %path.display(), "Report written");
    }
    Ok(())
}
