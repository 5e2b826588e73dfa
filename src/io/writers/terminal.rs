use super::{OutputWriter, ReportOptions};
use crate::core::{Criterion, DestinationRecord, RankedResult};
use crate::formatting::{format_currency, format_distance, format_score, FormattingConfig};
use crate::scoring::{Analysis, SummaryStatistics};
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::io::Write;

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_analysis(&mut self, analysis: &Analysis, options: &ReportOptions) -> anyhow::Result<()> {
        let fmt = &options.formatting;
        let rows = analysis.top(options.top);

        section(&mut self.writer, fmt, &fmt.emoji("🏆 ", ""), "Destination Ranking")?;
        writeln!(self.writer, "{}", ranking_table(rows, fmt))?;

        if let Some(winner) = analysis.recommended() {
            writeln!(self.writer)?;
            write_winner(&mut self.writer, winner, fmt)?;
        }

        section(&mut self.writer, fmt, &fmt.emoji("📈 ", ""), "Normalized Data")?;
        writeln!(
            self.writer,
            "Distance and cost are cost criteria (lower is better); facility and rating are benefit criteria (higher is better)."
        )?;
        writeln!(self.writer, "{}", normalized_table(analysis, fmt))?;

        section(&mut self.writer, fmt, &fmt.emoji("🔍 ", ""), "Criteria Detail")?;
        writeln!(self.writer, "{}", detail_table(rows, fmt))?;

        section(&mut self.writer, fmt, &fmt.emoji("📊 ", ""), "Summary")?;
        writeln!(self.writer, "{}", summary_table(&analysis.summary, fmt))?;
        self.writer.flush()?;
        Ok(())
    }
}

fn section<W: Write>(
    writer: &mut W,
    fmt: &FormattingConfig,
    icon: &str,
    title: &str,
) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", fmt.header(&format!("{icon}{title}")))
}

fn write_winner<W: Write>(
    writer: &mut W,
    winner: &RankedResult,
    fmt: &FormattingConfig,
) -> std::io::Result<()> {
    let record = &winner.record;
    writeln!(
        writer,
        "{}{} {}",
        fmt.emoji("🎉 ", ""),
        fmt.bold("Best destination:"),
        fmt.success(record.name())
    )?;
    writeln!(writer, "  Score:    {}", format_score(winner.score))?;
    writeln!(writer, "  Rating:   {:.1}", record.rating())?;
    writeln!(writer, "  Cost:     {}", format_currency(record.cost()))?;
    writeln!(writer, "  Distance: {}", format_distance(record.distance_km()))
}

fn new_table(fmt: &FormattingConfig) -> Table {
    let mut table = Table::new();
    if fmt.use_emoji() {
        table.load_preset(UTF8_FULL);
    } else {
        table.load_preset(ASCII_FULL);
    }
    if fmt.use_color() {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn number_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Rank, destination and score.
pub fn ranking_table(rows: &[RankedResult], fmt: &FormattingConfig) -> Table {
    let mut table = new_table(fmt);
    table.set_header(vec!["Rank", "Destination", "Score"]);
    for row in rows {
        let mut name = Cell::new(row.record.name());
        let mut score = number_cell(format_score(row.score));
        if row.rank == 1 {
            name = name.add_attribute(Attribute::Bold);
            score = score.fg(Color::Green);
        }
        table.add_row(vec![number_cell(row.rank.to_string()), name, score]);
    }
    table
}

/// Normalized values in input order.
pub fn normalized_table(analysis: &Analysis, fmt: &FormattingConfig) -> Table {
    let mut table = new_table(fmt);
    let mut header = vec!["Destination".to_string()];
    header.extend(
        Criterion::ALL
            .iter()
            .map(|c| format!("{} ({})", c.label(), c.kind())),
    );
    table.set_header(header);

    for row in &analysis.normalized {
        let mut cells = vec![Cell::new(&row.name)];
        cells.extend(
            Criterion::ALL
                .iter()
                .map(|&c| number_cell(format_score(row.value(c)))),
        );
        table.add_row(cells);
    }
    table
}

/// Ranked rows with their raw criterion values.
pub fn detail_table(rows: &[RankedResult], fmt: &FormattingConfig) -> Table {
    let mut table = new_table(fmt);
    table.set_header(vec![
        "Rank",
        "Destination",
        "Distance",
        "Cost",
        "Facility",
        "Rating",
        "Score",
    ]);
    for row in rows {
        let record = &row.record;
        table.add_row(vec![
            number_cell(row.rank.to_string()),
            Cell::new(record.name()),
            number_cell(format_distance(record.distance_km())),
            number_cell(format_currency(record.cost())),
            number_cell(record.facility().to_string()),
            number_cell(format!("{:.1}", record.rating())),
            number_cell(format_score(row.score)),
        ]);
    }
    table
}

pub fn summary_table(summary: &SummaryStatistics, fmt: &FormattingConfig) -> Table {
    let mut table = new_table(fmt);
    table.set_header(vec!["Criterion", "Type", "Min", "Max", "Mean"]);
    for entry in &summary.criteria {
        table.add_row(vec![
            Cell::new(entry.criterion.label()),
            Cell::new(entry.kind.to_string()),
            number_cell(format!("{:.2}", entry.stats.min)),
            number_cell(format!("{:.2}", entry.stats.max)),
            number_cell(format!("{:.2}", entry.stats.mean)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("-"),
        number_cell(format_score(summary.score.min)),
        number_cell(format_score(summary.score.max)),
        number_cell(format_score(summary.score.mean)),
    ]);
    table
}

/// The destinations entered so far, numbered from 1.
pub fn records_table(records: &[DestinationRecord], fmt: &FormattingConfig) -> Table {
    let mut table = new_table(fmt);
    let mut header = vec!["#".to_string(), "Destination".to_string()];
    header.extend(Criterion::ALL.iter().map(|c| c.column_header().to_string()));
    table.set_header(header);

    for (i, record) in records.iter().enumerate() {
        table.add_row(vec![
            number_cell((i + 1).to_string()),
            Cell::new(record.name()),
            number_cell(format_distance(record.distance_km())),
            number_cell(format_currency(record.cost())),
            number_cell(record.facility().to_string()),
            number_cell(format!("{:.1}", record.rating())),
        ]);
    }
    table
}
