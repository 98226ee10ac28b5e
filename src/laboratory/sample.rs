//! Test-sample records and their catalogs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of concrete under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    #[default]
    Heavy,
    Light,
    FineGrained,
    Cellular,
}

impl MaterialType {
    pub const ALL: [MaterialType; 4] = [
        MaterialType::Heavy,
        MaterialType::Light,
        MaterialType::FineGrained,
        MaterialType::Cellular,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MaterialType::Heavy => "Бетон тяжелый",
            MaterialType::Light => "Бетон легкий",
            MaterialType::FineGrained => "Бетон мелкозернистый",
            MaterialType::Cellular => "Бетон ячеистый",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strength grade of the concrete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteClass {
    #[serde(rename = "B7.5")]
    B7_5,
    B10,
    #[serde(rename = "B12.5")]
    B12_5,
    B15,
    B20,
    #[serde(rename = "B22.5")]
    B22_5,
    B25,
    B30,
    B35,
    B40,
}

impl ConcreteClass {
    pub const ALL: [ConcreteClass; 10] = [
        ConcreteClass::B7_5,
        ConcreteClass::B10,
        ConcreteClass::B12_5,
        ConcreteClass::B15,
        ConcreteClass::B20,
        ConcreteClass::B22_5,
        ConcreteClass::B25,
        ConcreteClass::B30,
        ConcreteClass::B35,
        ConcreteClass::B40,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConcreteClass::B7_5 => "B7.5",
            ConcreteClass::B10 => "B10",
            ConcreteClass::B12_5 => "B12.5",
            ConcreteClass::B15 => "B15",
            ConcreteClass::B20 => "B20",
            ConcreteClass::B22_5 => "B22.5",
            ConcreteClass::B25 => "B25",
            ConcreteClass::B30 => "B30",
            ConcreteClass::B35 => "B35",
            ConcreteClass::B40 => "B40",
        }
    }
}

impl fmt::Display for ConcreteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Geometry of the specimen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleShape {
    #[default]
    Cube,
    Cylinder,
}

impl SampleShape {
    pub fn label(&self) -> &'static str {
        match self {
            SampleShape::Cube => "Куб",
            SampleShape::Cylinder => "Цилиндр",
        }
    }

    /// Nominal dimensions in millimeters
    pub fn default_dimensions(&self) -> Dimensions {
        match self {
            SampleShape::Cube => Dimensions::uniform(100.0),
            SampleShape::Cylinder => Dimensions::uniform(150.0),
        }
    }
}

impl fmt::Display for SampleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Measured specimen dimensions, millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    pub fn uniform(side: f64) -> Self {
        Self::new(side, side, side)
    }
}

/// One tested specimen, frozen at submission time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Time-ordered identifier assigned on submission
    pub id: Uuid,
    pub sample_number: String,
    pub date_received: NaiveDate,
    pub date_tested: NaiveDate,
    pub material_type: MaterialType,
    pub concrete_class: Option<ConcreteClass>,
    /// Age of the concrete in days
    pub age_days: u32,
    pub shape: SampleShape,
    pub dimensions: Dimensions,
    /// Working cross-sectional area, mm²
    pub actual_area: f64,
    /// Destructive load, kN
    pub destructive_load: f64,
    /// Compressive strength, MPa
    pub compressive_strength: f64,
    pub test_conditions: String,
    pub performer: String,
    pub notes: String,
}
