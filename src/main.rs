use anyhow::Result;
use clap::Parser;
use wsmrank::cli::{Cli, Commands};
use wsmrank::commands::{self, DataSource, RankConfig, WizardConfig};
use wsmrank::formatting::{ColorMode, EmojiMode, FormattingConfig};
use wsmrank::observability::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            data,
            sample,
            weights,
            format,
            output,
            top,
            config,
            plain,
            verbosity,
        } => {
            init_logging(verbosity);
            let source = match data {
                Some(path) if !sample => DataSource::File(path),
                _ => DataSource::Sample,
            };
            commands::handle_rank(RankConfig {
                source,
                weights,
                format,
                output,
                top,
                config,
                formatting: create_formatting_config(plain),
            })
        }
        Commands::Wizard {
            data,
            config,
            plain,
            verbosity,
        } => {
            init_logging(verbosity);
            commands::handle_wizard(WizardConfig {
                data,
                config,
                formatting: create_formatting_config(plain),
            })
        }
        Commands::Template { output } => {
            init_logging(0);
            commands::export_template(&output)
        }
        Commands::Init { force } => {
            init_logging(0);
            commands::init_config(force)
        }
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never, EmojiMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}
