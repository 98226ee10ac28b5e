//! Compressive-strength protocol: summary statistics and printable document

use crate::config::{LabConfig, LaboratoryInfo, ProtocolSettings};
use crate::core::validation::filters::round_to;
use crate::core::{DocumentSink, LabError, RenderedDocument};
use crate::laboratory::derivation::STRENGTH_DECIMALS;
use crate::laboratory::sample::Sample;
use serde::Serialize;
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "protocol.html";
const TEMPLATE: &str = include_str!("templates/protocol.html.tera");

/// Placeholder printed for empty metadata
const MISSING: &str = "-";

/// Strength statistics over a non-empty journal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProtocolSummary {
    pub count: usize,
    /// Arithmetic mean, unrounded
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl ProtocolSummary {
    /// Returns `None` for an empty slice
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let strengths = samples.iter().map(|sample| sample.compressive_strength);
        let sum: f64 = strengths.clone().sum();
        let min = strengths.clone().fold(f64::INFINITY, f64::min);
        let max = strengths.fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count: samples.len(),
            average: sum / samples.len() as f64,
            min,
            max,
        })
    }

    pub fn average_rounded(&self) -> f64 {
        round_to(self.average, STRENGTH_DECIMALS)
    }

    /// Count phrase shown next to the journal ("1 образца", "3 образцов")
    pub fn count_label(&self) -> String {
        count_label(self.count)
    }
}

pub fn count_label(count: usize) -> String {
    let suffix = if count == 1 { "а" } else { "ов" };
    format!("{} образц{}", count, suffix)
}

/// A journal snapshot that is guaranteed to hold at least one sample
#[derive(Debug, Clone, Copy)]
pub struct ProtocolReport<'a> {
    samples: &'a [Sample],
    summary: ProtocolSummary,
}

impl<'a> ProtocolReport<'a> {
    pub fn new(samples: &'a [Sample]) -> Option<Self> {
        let summary = ProtocolSummary::from_samples(samples)?;
        Some(Self { samples, summary })
    }

    pub fn samples(&self) -> &'a [Sample] {
        self.samples
    }

    pub fn summary(&self) -> &ProtocolSummary {
        &self.summary
    }

    /// The sample whose metadata heads the document
    pub fn first(&self) -> &'a Sample {
        &self.samples[0]
    }
}

// === Template views ===

#[derive(Serialize)]
struct InfoView {
    date_tested: String,
    material_type: String,
    concrete_class: String,
    age: String,
    test_conditions: String,
    performer: String,
}

#[derive(Serialize)]
struct RowView {
    sample_number: String,
    length: String,
    width: String,
    height: String,
    area: String,
    load: String,
    strength: String,
    notes: String,
}

#[derive(Serialize)]
struct SummaryView {
    count: usize,
    average: String,
    min: String,
    max: String,
}

#[derive(Serialize)]
struct ProtocolView<'a> {
    title: String,
    subject: &'a str,
    standard: &'a str,
    standard_title: &'a str,
    laboratory: &'a LaboratoryInfo,
    info: InfoView,
    rows: Vec<RowView>,
    summary: SummaryView,
}

/// Fixed-point text with halves rounded away from zero
fn fixed(value: f64, places: u32) -> String {
    format!("{:.*}", places as usize, round_to(value, places))
}

fn or_missing(value: &str) -> String {
    if value.trim().is_empty() {
        MISSING.to_string()
    } else {
        value.to_string()
    }
}

impl InfoView {
    fn from_sample(sample: &Sample) -> Self {
        Self {
            date_tested: sample.date_tested.format("%Y-%m-%d").to_string(),
            material_type: sample.material_type.label().to_string(),
            concrete_class: sample
                .concrete_class
                .map(|class| class.label().to_string())
                .unwrap_or_else(|| MISSING.to_string()),
            age: if sample.age_days == 0 {
                MISSING.to_string()
            } else {
                sample.age_days.to_string()
            },
            test_conditions: or_missing(&sample.test_conditions),
            performer: or_missing(&sample.performer),
        }
    }
}

impl RowView {
    fn from_sample(sample: &Sample) -> Self {
        Self {
            sample_number: sample.sample_number.clone(),
            length: fixed(sample.dimensions.length, 1),
            width: fixed(sample.dimensions.width, 1),
            height: fixed(sample.dimensions.height, 1),
            area: fixed(sample.actual_area, 0),
            load: fixed(sample.destructive_load, 1),
            strength: fixed(sample.compressive_strength, STRENGTH_DECIMALS),
            notes: or_missing(&sample.notes),
        }
    }
}

/// Renders the printable protocol from an embedded template
///
/// Every operator-entered value is HTML-escaped by the template engine.
pub struct ProtocolRenderer {
    tera: Tera,
    laboratory: LaboratoryInfo,
    settings: ProtocolSettings,
}

impl ProtocolRenderer {
    pub fn new(config: &LabConfig) -> Result<Self, LabError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self {
            tera,
            laboratory: config.laboratory.clone(),
            settings: config.protocol.clone(),
        })
    }

    /// Window title of the document
    pub fn title(&self) -> String {
        format!("Протокол испытаний по {}", self.settings.standard)
    }

    /// Produce the full standalone document text
    pub fn render(&self, report: &ProtocolReport<'_>) -> Result<String, LabError> {
        let summary = report.summary();
        let view = ProtocolView {
            title: self.title(),
            subject: &self.settings.subject,
            standard: &self.settings.standard,
            standard_title: &self.settings.standard_title,
            laboratory: &self.laboratory,
            info: InfoView::from_sample(report.first()),
            rows: report.samples().iter().map(RowView::from_sample).collect(),
            summary: SummaryView {
                count: summary.count,
                average: fixed(summary.average, STRENGTH_DECIMALS),
                min: fixed(summary.min, STRENGTH_DECIMALS),
                max: fixed(summary.max, STRENGTH_DECIMALS),
            },
        };

        let context = Context::from_serialize(&view)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }

    /// Render the protocol and hand it to a sink, once
    pub fn publish(
        &self,
        report: &ProtocolReport<'_>,
        sink: &dyn DocumentSink,
    ) -> Result<RenderedDocument, LabError> {
        let document = RenderedDocument::new(self.title(), self.render(report)?);
        sink.open(document.clone()).map_err(LabError::Sink)?;
        tracing::info!(
            samples = report.summary().count,
            average = report.summary().average_rounded(),
            "Protocol published"
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laboratory::sample::{Dimensions, MaterialType, SampleShape};
    use crate::storage::InMemoryDocumentSink;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn sample(number: &str, strength: f64) -> Sample {
        Sample {
            id: Uuid::now_v7(),
            sample_number: number.to_string(),
            date_received: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            date_tested: NaiveDate::from_ymd_opt(2024, 11, 29).unwrap(),
            material_type: MaterialType::Heavy,
            concrete_class: None,
            age_days: 28,
            shape: SampleShape::Cube,
            dimensions: Dimensions::uniform(100.0),
            actual_area: 10_000.0,
            destructive_load: strength * 10.0,
            compressive_strength: strength,
            test_conditions: String::new(),
            performer: "Сидоров".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_summary_statistics() {
        let samples = vec![sample("1", 20.0), sample("2", 22.5), sample("3", 19.8)];
        let summary = ProtocolSummary::from_samples(&samples).unwrap();

        assert_eq!(summary.count, 3);
        assert_eq!(summary.average_rounded(), 20.77);
        assert_eq!(summary.min, 19.8);
        assert_eq!(summary.max, 22.5);
    }

    #[test]
    fn test_empty_journal_has_no_report() {
        assert!(ProtocolSummary::from_samples(&[]).is_none());
        assert!(ProtocolReport::new(&[]).is_none());
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(1), "1 образца");
        assert_eq!(count_label(3), "3 образцов");
        assert_eq!(count_label(12), "12 образцов");
    }

    #[test]
    fn test_render_uses_fallbacks_and_precision() {
        let samples = vec![sample("К-1", 22.0)];
        let report = ProtocolReport::new(&samples).unwrap();
        let renderer = ProtocolRenderer::new(&LabConfig::default_config()).unwrap();

        let html = renderer.render(&report).unwrap();

        assert!(html.contains("<td>100.0</td>"));
        assert!(html.contains("<td>10000</td>"));
        assert!(html.contains("<td>220.0</td>"));
        assert!(html.contains("<strong>22.00</strong>"));
        assert!(html.contains("<span>28 суток</span>"));
        assert!(html.contains("Количество образцов:</span> 1 шт."));
        assert!(html.contains("<td class=\"notes\">-</td>"));
        assert!(html.contains("Класс бетона:</span><span>-</span>"));
    }

    #[test]
    fn test_fixed_rounds_halves_up() {
        assert_eq!(fixed(20.125, 2), "20.13");
        assert_eq!(fixed(100.25, 1), "100.3");
        assert_eq!(fixed(202.25, 1), "202.3");
        assert_eq!(fixed(10_000.5, 0), "10001");
        assert_eq!(fixed(22.0, 2), "22.00");
    }

    #[test]
    fn test_render_matches_rounded_summary_on_ties() {
        let mut second = sample("К-2", 20.25);
        second.dimensions.length = 100.25;
        second.destructive_load = 202.25;
        second.actual_area = 10_000.5;
        let samples = vec![sample("К-1", 20.0), second];
        let report = ProtocolReport::new(&samples).unwrap();
        let renderer = ProtocolRenderer::new(&LabConfig::default_config()).unwrap();

        let html = renderer.render(&report).unwrap();

        assert_eq!(report.summary().average_rounded(), 20.13);
        assert!(html.contains("<strong>20.13 МПа</strong>"));
        assert!(html.contains("Максимальная прочность:</span> 20.25 МПа"));
        assert!(html.contains("<td>100.3</td>"));
        assert!(html.contains("<td>202.3</td>"));
        assert!(html.contains("<td>10001</td>"));
    }

    #[test]
    fn test_publish_opens_one_document() {
        let samples = vec![sample("К-1", 22.0), sample("К-2", 24.0)];
        let report = ProtocolReport::new(&samples).unwrap();
        let renderer = ProtocolRenderer::new(&LabConfig::default_config()).unwrap();
        let sink = InMemoryDocumentSink::new();

        let document = renderer.publish(&report, &sink).unwrap();

        assert_eq!(sink.documents().unwrap().len(), 1);
        assert_eq!(document.title, "Протокол испытаний по ГОСТ 10180-2012");
        assert!(document.body.contains("23.00 МПа"));
    }
}
