//! Sample entry form
//!
//! The form is owned, mutable state. Area and strength are recomputed
//! explicitly by the caller when the operator leaves the relevant field, not
//! on every edit. `submit` validates, freezes the values into a [`Sample`]
//! and hands it to the journal.

use crate::core::validation::{FormValidationConfig, ValidatableForm, filters, validators};
use crate::core::{LabError, Notice, ValidationError};
use crate::laboratory::derivation::{compressive_strength, working_area};
use crate::laboratory::journal::Journal;
use crate::laboratory::sample::{ConcreteClass, Dimensions, MaterialType, Sample, SampleShape};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_AGE_DAYS: u32 = 28;
pub const DEFAULT_TEST_CONDITIONS: &str = "Нормальные условия (20±2°C, влажность >95%)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleForm {
    pub sample_number: String,
    pub date_received: NaiveDate,
    pub date_tested: NaiveDate,
    pub material_type: MaterialType,
    pub concrete_class: Option<ConcreteClass>,
    pub age_days: u32,
    pub shape: SampleShape,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// mm², derived from length × width unless overridden
    pub actual_area: Option<f64>,
    /// kN
    pub destructive_load: Option<f64>,
    /// MPa, 0 until derived
    pub compressive_strength: f64,
    pub test_conditions: String,
    pub performer: String,
    pub notes: String,
}

impl Default for SampleForm {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl ValidatableForm for SampleForm {
    fn validation_config() -> FormValidationConfig {
        FormValidationConfig::new("sample")
            .filter("sample_number", filters::trim())
            .validate("sample_number", validators::not_blank())
            .validate("destructive_load", validators::required())
            .validate("destructive_load", validators::positive())
            .validate("actual_area", validators::required())
            .validate("actual_area", validators::positive())
            .validate("length", validators::required())
            .validate("length", validators::positive())
            .validate("width", validators::required())
            .validate("width", validators::positive())
            .validate("height", validators::required())
            .validate("height", validators::positive())
            .validate("age_days", validators::positive())
    }
}

impl SampleForm {
    /// Fresh form with both dates set to `today` and a nominal cube
    pub fn new(today: NaiveDate) -> Self {
        let shape = SampleShape::default();
        let dimensions = shape.default_dimensions();
        Self {
            sample_number: String::new(),
            date_received: today,
            date_tested: today,
            material_type: MaterialType::default(),
            concrete_class: None,
            age_days: DEFAULT_AGE_DAYS,
            shape,
            length: Some(dimensions.length),
            width: Some(dimensions.width),
            height: Some(dimensions.height),
            actual_area: working_area(Some(dimensions.length), Some(dimensions.width)),
            destructive_load: None,
            compressive_strength: 0.0,
            test_conditions: DEFAULT_TEST_CONDITIONS.to_string(),
            performer: String::new(),
            notes: String::new(),
        }
    }

    /// Measured dimensions, once all three are filled in
    pub fn dimensions(&self) -> Option<Dimensions> {
        Some(Dimensions::new(self.length?, self.width?, self.height?))
    }

    /// Area recomputation on leaving length or width
    ///
    /// Overwrites a manual area override. Leaves the area untouched while
    /// either side is missing or zero.
    pub fn recompute_area(&mut self) -> Option<f64> {
        let area = working_area(self.length, self.width)?;
        tracing::debug!(length = ?self.length, width = ?self.width, area, "Area recomputed");
        self.actual_area = Some(area);
        Some(area)
    }

    /// Strength recomputation on leaving load or area
    pub fn recompute_strength(&mut self) -> Option<f64> {
        let strength = compressive_strength(self.destructive_load, self.actual_area)?;
        tracing::debug!(
            load = ?self.destructive_load,
            area = ?self.actual_area,
            strength,
            "Strength recomputed"
        );
        self.compressive_strength = strength;
        Some(strength)
    }

    /// Manual override of the working area
    pub fn set_actual_area(&mut self, area: Option<f64>) {
        self.actual_area = area;
    }

    /// Switch shape, resetting the dimensions to its nominal values
    pub fn set_shape(&mut self, shape: SampleShape) {
        let dimensions = shape.default_dimensions();
        self.shape = shape;
        self.length = Some(dimensions.length);
        self.width = Some(dimensions.width);
        self.height = Some(dimensions.height);
        self.recompute_area();
    }

    /// Validate and freeze the current values into a sample record
    ///
    /// Strength is derived from the load and area being committed, so a
    /// stale or missing recomputation never reaches the journal.
    pub fn build(&self) -> Result<Sample, LabError> {
        let form = self.validated()?;

        let (Some(dimensions), Some(area), Some(load)) =
            (form.dimensions(), form.actual_area, form.destructive_load)
        else {
            return Err(incomplete().into());
        };
        let strength =
            compressive_strength(Some(load), Some(area)).ok_or_else(incomplete)?;

        Ok(Sample {
            id: Uuid::now_v7(),
            sample_number: form.sample_number,
            date_received: form.date_received,
            date_tested: form.date_tested,
            material_type: form.material_type,
            concrete_class: form.concrete_class,
            age_days: form.age_days,
            shape: form.shape,
            dimensions,
            actual_area: area,
            destructive_load: load,
            compressive_strength: strength,
            test_conditions: form.test_conditions,
            performer: form.performer,
            notes: form.notes,
        })
    }

    /// Append the sample to the journal and clear the per-sample fields
    ///
    /// Dates, material, class, age, shape, dimensions, area, conditions and
    /// performer stay for the next related sample. On rejection neither the
    /// form nor the journal change.
    pub fn submit(&mut self, journal: &mut Journal) -> Result<Notice, LabError> {
        let sample = self.build()?;
        let notice = Notice::sample_added(&sample.sample_number);
        journal.add(sample);

        self.sample_number.clear();
        self.destructive_load = None;
        self.compressive_strength = 0.0;
        self.notes.clear();
        Ok(notice)
    }
}

fn incomplete() -> ValidationError {
    ValidationError::FieldErrors {
        form: "sample".to_string(),
        errors: vec!["Не заполнены размеры, площадь или нагрузка".to_string()],
    }
}
