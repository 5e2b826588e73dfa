//! Line-oriented driver for the three-step wizard.
//!
//! The loop is generic over its input and output so it can be driven by
//! stdin/stdout or by in-memory buffers in tests. Recoverable failures are
//! printed and the session keeps its prior state.

use super::rank::DataSource;
use crate::config::{load_config, load_config_from};
use crate::formatting::{format_percent, FormattingConfig};
use crate::io::writers::terminal::records_table;
use crate::io::writers::TerminalWriter;
use crate::io::{import_csv_file, write_template, OutputWriter, ReportOptions};
use crate::scoring::WeightPercentages;
use crate::wizard::{parse_command, SessionState, WizardCommand, WizardStep, HELP_TEXT};
use anyhow::Result;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const PREVIEW_ROWS: usize = 5;

pub struct WizardConfig {
    pub data: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

pub fn handle_wizard(config: WizardConfig) -> Result<()> {
    let settings = match config.config.as_deref() {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    config.formatting.apply();

    let fmt = config.formatting;
    let mut session = SessionState::new(settings.default_weights());
    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    writeln!(
        output,
        "{}",
        fmt.header(&format!(
            "{}Destination decision wizard (Weighted Sum Model)",
            fmt.emoji("🧭 ", "")
        ))
    )?;
    writeln!(output, "Type 'help' for the list of commands.")?;

    if let Some(path) = config.data {
        import_into(&mut session, &DataSource::File(path), &mut output, &fmt)?;
    }

    let stdin = std::io::stdin();
    run_wizard(&mut session, stdin.lock(), &mut output, &fmt)
}

/// Read commands until `quit` or end of input.
pub fn run_wizard<R: BufRead, W: Write>(
    session: &mut SessionState,
    mut input: R,
    output: &mut W,
    fmt: &FormattingConfig,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write_prompt(output, session.step())?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                report_error(output, fmt, &err)?;
                continue;
            }
        };

        debug!(?command, step = ?session.step(), "Wizard command");
        if !dispatch(session, command, output, fmt)? {
            break;
        }
    }
    Ok(())
}

fn write_prompt<W: Write>(output: &mut W, step: WizardStep) -> std::io::Result<()> {
    write!(output, "[step {}/3 {}] > ", step.number(), step.title())?;
    output.flush()
}

fn report_error<W: Write>(
    output: &mut W,
    fmt: &FormattingConfig,
    err: &impl Display,
) -> std::io::Result<()> {
    writeln!(output, "{}{}", fmt.emoji("❌ ", ""), fmt.error(&format!("Error: {err}")))
}

/// Handle one command. Returns `false` when the session should end.
fn dispatch<W: Write>(
    session: &mut SessionState,
    command: WizardCommand,
    output: &mut W,
    fmt: &FormattingConfig,
) -> Result<bool> {
    match command {
        WizardCommand::Add(record) => {
            let name = record.name().to_string();
            match session.add_record(record) {
                Ok(()) => writeln!(
                    output,
                    "{}",
                    fmt.success(&format!(
                        "Added '{name}' ({} destination(s))",
                        session.records().len()
                    ))
                )?,
                Err(err) => report_error(output, fmt, &err)?,
            }
        }
        WizardCommand::Import(path) => {
            import_into(session, &DataSource::File(path), output, fmt)?;
        }
        WizardCommand::Sample => {
            import_into(session, &DataSource::Sample, output, fmt)?;
        }
        WizardCommand::List => {
            if session.records().is_empty() {
                writeln!(output, "No destinations entered yet.")?;
            } else {
                writeln!(output, "{}", records_table(session.records(), fmt))?;
            }
        }
        WizardCommand::Continue => match session.continue_to_weights() {
            Ok(()) => write_draft_weights(output, session.draft_weights(), fmt)?,
            Err(err) => report_error(output, fmt, &err)?,
        },
        WizardCommand::Weights(percentages) => match session.set_weights(percentages) {
            Ok(total) => write_weight_total(output, total, percentages.sums_to_hundred(), fmt)?,
            Err(err) => report_error(output, fmt, &err)?,
        },
        WizardCommand::Compute => match session.compute() {
            Ok(analysis) => {
                TerminalWriter::new(&mut *output).write_analysis(analysis, &report_options(fmt))?;
            }
            Err(err) => report_error(output, fmt, &err)?,
        },
        WizardCommand::Back => match session.back() {
            Ok(()) => writeln!(output, "Back to the destination list.")?,
            Err(err) => report_error(output, fmt, &err)?,
        },
        WizardCommand::Results => match session.analysis() {
            Some(analysis) if session.step() == WizardStep::ShowingResults => {
                TerminalWriter::new(&mut *output).write_analysis(analysis, &report_options(fmt))?;
            }
            _ => writeln!(
                output,
                "{}",
                fmt.warning("No results yet. Enter weights and run 'compute' first.")
            )?,
        },
        WizardCommand::NewAnalysis => match session.new_analysis() {
            Ok(()) => writeln!(output, "Started a new analysis.")?,
            Err(err) => report_error(output, fmt, &err)?,
        },
        WizardCommand::Template(path) => export_template_to(&path, output, fmt)?,
        WizardCommand::Help => writeln!(output, "{HELP_TEXT}")?,
        WizardCommand::Quit => return Ok(false),
    }
    Ok(true)
}

fn report_options(fmt: &FormattingConfig) -> ReportOptions {
    ReportOptions {
        top: None,
        formatting: *fmt,
    }
}

/// Replace the session's records from a file or the sample set and show a preview.
fn import_into<W: Write>(
    session: &mut SessionState,
    source: &DataSource,
    output: &mut W,
    fmt: &FormattingConfig,
) -> Result<()> {
    let loaded = match source {
        DataSource::File(path) => {
            import_csv_file(path).and_then(|records| session.replace_records(records))
        }
        DataSource::Sample => session.load_sample(),
    };

    match loaded {
        Ok(count) => {
            writeln!(
                output,
                "{}",
                fmt.success(&format!("Loaded {count} destination(s)"))
            )?;
            let preview = &session.records()[..count.min(PREVIEW_ROWS)];
            writeln!(output, "{}", records_table(preview, fmt))?;
            if count > PREVIEW_ROWS {
                writeln!(output, "... and {} more", count - PREVIEW_ROWS)?;
            }
        }
        Err(err) => {
            warn!(category = err.category(), error = %err, "Import rejected");
            report_error(output, fmt, &err)?;
        }
    }
    Ok(())
}

fn write_draft_weights<W: Write>(
    output: &mut W,
    weights: &WeightPercentages,
    fmt: &FormattingConfig,
) -> std::io::Result<()> {
    writeln!(
        output,
        "Current weights: distance {}%, cost {}%, facility {}%, rating {}%",
        format_percent(weights.distance),
        format_percent(weights.cost),
        format_percent(weights.facility),
        format_percent(weights.rating)
    )?;
    write_weight_total(output, weights.total(), weights.sums_to_hundred(), fmt)?;
    writeln!(output, "Enter 'weights D C F R' to change them or 'compute' to rank.")
}

fn write_weight_total<W: Write>(
    output: &mut W,
    total: f64,
    complete: bool,
    fmt: &FormattingConfig,
) -> std::io::Result<()> {
    let line = format!("Total: {}%", format_percent(total));
    if complete {
        writeln!(output, "{}", fmt.success(&format!("{line} (ready to compute)")))
    } else {
        writeln!(output, "{}", fmt.warning(&format!("{line} (must equal 100%)")))
    }
}

fn export_template_to<W: Write>(
    path: &Path,
    output: &mut W,
    fmt: &FormattingConfig,
) -> std::io::Result<()> {
    match write_template(path) {
        Ok(()) => writeln!(
            output,
            "{}",
            fmt.success(&format!("Template written to {}", path.display()))
        ),
        Err(err) => report_error(output, fmt, &format!("{err:#}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn drive(session: &mut SessionState, script: &str) -> String {
        let mut output = Vec::new();
        run_wizard(
            session,
            Cursor::new(script.as_bytes()),
            &mut output,
            &FormattingConfig::plain(),
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_full_walkthrough_with_sample() {
        let mut session = SessionState::default();
        let output = drive(&mut session, "sample\ncontinue\ncompute\n");

        assert_eq!(session.step(), WizardStep::ShowingResults);
        assert!(output.contains("Loaded 10 destination(s)"));
        assert!(output.contains("... and 5 more"));
        assert!(output.contains("Best destination: Pemandian Alam Sembabe"));
        assert!(output.contains("[step 3/3"));
    }

    #[test]
    fn test_invalid_weights_keep_step_two() {
        let mut session = SessionState::default();
        let output = drive(
            &mut session,
            "add Pantai, 10, 5000, 3, 4\ncontinue\nweights 40 40 40 40\ncompute\n",
        );

        assert_eq!(session.step(), WizardStep::CollectingWeights);
        assert!(output.contains("Total: 160% (must equal 100%)"));
        assert!(output.contains("Error: Invalid weights"));
        assert!(session.analysis().is_none());
    }

    #[test]
    fn test_continue_without_records_is_reported() {
        let mut session = SessionState::default();
        let output = drive(&mut session, "continue\n");

        assert_eq!(session.step(), WizardStep::CollectingDestinations);
        assert!(output.contains("Error:"));
    }

    #[test]
    fn test_parse_errors_do_not_end_the_session() {
        let mut session = SessionState::default();
        let output = drive(
            &mut session,
            "fly away\nadd Pantai, far, 1, 1, 1\nadd Pantai, 1, 1, 1, 1\n",
        );

        assert!(output.contains("Unknown command 'fly'"));
        assert!(output.contains("'far' is not a number"));
        assert_eq!(session.records().len(), 1);
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = SessionState::default();
        drive(&mut session, "quit\nsample\n");
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_results_before_compute() {
        let mut session = SessionState::default();
        let output = drive(&mut session, "results\n");
        assert!(output.contains("No results yet"));
    }

    #[test]
    fn test_new_analysis_resets_session() {
        let mut session = SessionState::default();
        drive(&mut session, "sample\nnext\ncompute\nnew\n");
        assert_eq!(session, SessionState::default());
    }

    #[test]
    fn test_failed_import_keeps_existing_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "Destinasi,Jarak (km)\nPantai,10\n").unwrap();

        let mut session = SessionState::default();
        let output = drive(
            &mut session,
            &format!("add Pantai, 10, 5000, 3, 4\nimport {}\n", path.display()),
        );

        assert!(output.contains("Invalid columns"));
        assert_eq!(session.records().len(), 1);
    }

    #[test]
    fn test_template_command_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("template.csv");

        let mut session = SessionState::default();
        let output = drive(&mut session, &format!("template {}\n", path.display()));

        assert!(output.contains("Template written to"));

        let blocked = dir.path().join("missing").join("template.csv");
        let output = drive(&mut session, &format!("template {}\n", blocked.display()));
        assert!(output.contains("Error: Failed to write template to"));
        assert!(!output.contains("Import failed"));
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .starts_with("Destinasi,"));
    }
}
