use super::{OutputWriter, ReportOptions};
use crate::core::Criterion;
use crate::formatting::{format_currency, format_distance, format_percent, format_score};
use crate::scoring::Analysis;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_analysis(&mut self, analysis: &Analysis, options: &ReportOptions) -> anyhow::Result<()> {
        self.write_header(analysis)?;
        self.write_recommendation(analysis)?;
        self.write_ranking(analysis, options.top)?;
        self.write_normalized(analysis)?;
        self.write_summary(analysis)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, analysis: &Analysis) -> anyhow::Result<()> {
        writeln!(self.writer, "# Destination Recommendation (Weighted Sum Model)")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Criterion | Type | Weight |")?;
        writeln!(self.writer, "|-----------|------|--------|")?;
        for criterion in Criterion::ALL {
            writeln!(
                self.writer,
                "| {} | {} | {}% |",
                criterion.label(),
                criterion.kind(),
                format_percent(analysis.weights.get(criterion) * 100.0)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendation(&mut self, analysis: &Analysis) -> anyhow::Result<()> {
        let Some(winner) = analysis.recommended() else {
            return Ok(());
        };
        let record = &winner.record;
        writeln!(self.writer, "## Recommended Destination")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**{}**", escape_cell(record.name()))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Score: {}", format_score(winner.score))?;
        writeln!(self.writer, "- Rating: {:.1}", record.rating())?;
        writeln!(self.writer, "- Cost: {}", format_currency(record.cost()))?;
        writeln!(
            self.writer,
            "- Distance: {}",
            format_distance(record.distance_km())
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_ranking(&mut self, analysis: &Analysis, top: Option<usize>) -> anyhow::Result<()> {
        writeln!(self.writer, "## Ranking")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Rank | Destination | Distance | Cost | Facility | Rating | Score |"
        )?;
        writeln!(
            self.writer,
            "|------|-------------|----------|------|----------|--------|-------|"
        )?;
        for row in analysis.top(top) {
            let record = &row.record;
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {:.1} | {} |",
                row.rank,
                escape_cell(record.name()),
                format_distance(record.distance_km()),
                format_currency(record.cost()),
                record.facility(),
                record.rating(),
                format_score(row.score)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_normalized(&mut self, analysis: &Analysis) -> anyhow::Result<()> {
        writeln!(self.writer, "## Normalized Data")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Destination | Distance | Cost | Facility | Rating |")?;
        writeln!(self.writer, "|-------------|----------|------|----------|--------|")?;
        for row in &analysis.normalized {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                escape_cell(&row.name),
                format_score(row.distance),
                format_score(row.cost),
                format_score(row.facility),
                format_score(row.rating)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, analysis: &Analysis) -> anyhow::Result<()> {
        let summary = &analysis.summary;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Destinations analyzed: {}", summary.record_count)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Criterion | Min | Max | Mean |")?;
        writeln!(self.writer, "|-----------|-----|-----|------|")?;
        for entry in &summary.criteria {
            writeln!(
                self.writer,
                "| {} | {:.2} | {:.2} | {:.2} |",
                entry.criterion.label(),
                entry.stats.min,
                entry.stats.max,
                entry.stats.mean
            )?;
        }
        writeln!(
            self.writer,
            "| Score | {} | {} | {} |",
            format_score(summary.score.min),
            format_score(summary.score.max),
            format_score(summary.score.mean)
        )?;
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
