use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "wsmrank")]
#[command(
    about = "Rank travel destinations with the Weighted Sum Model",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score and rank destinations from a CSV file in one pass
    Rank {
        /// CSV file with destination data
        #[arg(required_unless_present = "sample")]
        data: Option<PathBuf>,

        /// Use the built-in example dataset instead of a file
        #[arg(long, conflicts_with = "data")]
        sample: bool,

        /// Criteria weights in percent: distance,cost,facility,rating (must total 100)
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        weights: Option<Vec<f64>>,

        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the top N destinations
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Plain ASCII output without colors or emoji
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Step through data entry, weights and results interactively
    Wizard {
        /// CSV file to import before the first prompt
        #[arg(long)]
        data: Option<PathBuf>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Plain ASCII output without colors or emoji
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write an empty CSV import template
    Template {
        /// Output file; "-" writes to stdout
        #[arg(short, long, default_value = crate::io::DEFAULT_TEMPLATE_NAME)]
        output: PathBuf,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rank_with_weights() {
        let cli = Cli::try_parse_from([
            "wsmrank", "rank", "data.csv", "--weights", "30,25,20,25", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Rank {
                data,
                weights,
                format,
                sample,
                ..
            } => {
                assert_eq!(data, Some(PathBuf::from("data.csv")));
                assert_eq!(weights, Some(vec![30.0, 25.0, 20.0, 25.0]));
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(!sample);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rank_requires_data_or_sample() {
        assert!(Cli::try_parse_from(["wsmrank", "rank"]).is_err());
        assert!(Cli::try_parse_from(["wsmrank", "rank", "--sample"]).is_ok());
        assert!(Cli::try_parse_from(["wsmrank", "rank", "x.csv", "--sample"]).is_err());
    }

    #[test]
    fn test_template_default_output() {
        let cli = Cli::try_parse_from(["wsmrank", "template"]).unwrap();
        match cli.command {
            Commands::Template { output } => {
                assert_eq!(output, PathBuf::from("template_destinasi.csv"))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
