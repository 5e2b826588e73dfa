use super::{OutputWriter, ReportOptions};
use crate::core::{NormalizedRecord, RankedResult};
use crate::scoring::{Analysis, CriteriaWeights, SummaryStatistics};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: Metadata,
    weights: &'a CriteriaWeights,
    recommended: Option<&'a RankedResult>,
    ranking: &'a [RankedResult],
    normalized: &'a [NormalizedRecord],
    summary: &'a SummaryStatistics,
}

#[derive(Serialize)]
struct Metadata {
    version: &'static str,
    method: &'static str,
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_analysis(&mut self, analysis: &Analysis, options: &ReportOptions) -> anyhow::Result<()> {
        let report = JsonReport {
            metadata: Metadata {
                version: env!("CARGO_PKG_VERSION"),
                method: "weighted_sum_model",
            },
            weights: &analysis.weights,
            recommended: analysis.recommended(),
            ranking: analysis.top(options.top),
            normalized: &analysis.normalized,
            summary: &analysis.summary,
        };
        let json = serde_json::to_string_pretty(&report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample_destinations;
    use crate::scoring::{analyze, WeightPercentages};
    use serde_json::Value;

    #[test]
    fn test_json_report_structure() {
        let weights = CriteriaWeights::from_percentages(&WeightPercentages::default()).unwrap();
        let analysis = analyze(&sample_destinations().unwrap(), &weights).unwrap();

        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_analysis(
                &analysis,
                &ReportOptions {
                    top: Some(3),
                    ..Default::default()
                },
            )
            .unwrap();

        let json: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(json["metadata"]["method"], "weighted_sum_model");
        assert_eq!(json["ranking"].as_array().unwrap().len(), 3);
        assert_eq!(json["normalized"].as_array().unwrap().len(), 10);
        assert_eq!(
            json["recommended"]["record"]["name"],
            "Pemandian Alam Sembabe"
        );
        assert_eq!(json["recommended"]["rank"], 1);
        assert_eq!(json["summary"]["record_count"], 10);
        assert_eq!(json["summary"]["criteria"][0]["criterion"], "distance");
        assert_eq!(json["summary"]["criteria"][0]["min"], 41.0);
        assert_eq!(json["weights"]["distance"], 0.3);
    }
}
