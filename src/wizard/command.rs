//! Parser for the interactive wizard's line-oriented commands.

use crate::core::DestinationRecord;
use crate::errors::WizardError;
use crate::scoring::WeightPercentages;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum WizardCommand {
    Add(DestinationRecord),
    Import(PathBuf),
    Sample,
    List,
    Continue,
    Weights(WeightPercentages),
    Compute,
    Back,
    Results,
    NewAnalysis,
    Template(PathBuf),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("'{value}' is not a number ({field})")]
    NotANumber { field: &'static str, value: String },

    #[error(transparent)]
    Invalid(#[from] WizardError),
}

pub const ADD_USAGE: &str = "add NAME, DISTANCE_KM, COST, FACILITY(1-5), RATING(1-5)";
pub const WEIGHTS_USAGE: &str = "weights DISTANCE COST FACILITY RATING   (percent, total 100)";

pub const HELP_TEXT: &str = "\
Step 1 - destinations
  add NAME, DISTANCE_KM, COST, FACILITY, RATING   append a destination
  import PATH                                     load destinations from a CSV file
  sample                                          load the example dataset
  template PATH                                   write an empty CSV template
  list                                            show the destinations entered so far
  continue                                        go to the criteria weights
Step 2 - criteria weights
  weights D C F R                                 set weights in percent (must total 100)
  compute                                         compute scores and show the ranking
  back                                            return to the destinations
Step 3 - results
  results                                         show the ranking again
  new                                             discard everything and start over
Any step
  help                                            show this help
  quit                                            leave the wizard";

/// Parse one input line. Returns `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<WizardCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_lowercase().as_str() {
        "add" => WizardCommand::Add(parse_record(rest)?),
        "import" => WizardCommand::Import(require_path(rest, "import PATH")?),
        "template" => WizardCommand::Template(require_path(rest, "template PATH")?),
        "sample" => WizardCommand::Sample,
        "list" | "ls" => WizardCommand::List,
        "continue" | "next" => WizardCommand::Continue,
        "weights" | "weight" => WizardCommand::Weights(parse_weights(rest)?),
        "compute" | "calculate" => WizardCommand::Compute,
        "back" => WizardCommand::Back,
        "results" => WizardCommand::Results,
        "new" | "reset" => WizardCommand::NewAnalysis,
        "help" | "?" => WizardCommand::Help,
        "quit" | "exit" | "q" => WizardCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn require_path(rest: &str, usage: &'static str) -> Result<PathBuf, CommandError> {
    if rest.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(PathBuf::from(rest))
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, CommandError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| CommandError::NotANumber {
            field,
            value: value.trim().to_string(),
        })
}

fn parse_record(rest: &str) -> Result<DestinationRecord, CommandError> {
    let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
    let [name, distance, cost, facility, rating] = fields.as_slice() else {
        return Err(CommandError::Usage(ADD_USAGE));
    };

    let distance = parse_number("distance", distance)?;
    let cost = parse_number("cost", cost)?;
    let facility = facility
        .parse::<u8>()
        .map_err(|_| CommandError::NotANumber {
            field: "facility",
            value: facility.to_string(),
        })?;
    let rating = parse_number("rating", rating)?;

    Ok(DestinationRecord::new(*name, distance, cost, facility, rating)?)
}

fn parse_weights(rest: &str) -> Result<WeightPercentages, CommandError> {
    let values = rest
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| parse_number("weight", s))
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() != 4 {
        return Err(CommandError::Usage(WEIGHTS_USAGE));
    }
    Ok(WeightPercentages::from_slice(&values)?)
}
