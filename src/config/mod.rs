//! Configuration loading and management

use crate::core::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Organization printed in the protocol footer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaboratoryInfo {
    /// Full organization name
    pub name: String,

    /// Postal address
    pub address: String,
}

impl Default for LaboratoryInfo {
    fn default() -> Self {
        Self {
            name: "Строительная лаборатория ООО \"СМТ НЛМК\"".to_string(),
            address: "398017, Липецкая область, г. Липецк, ул. Фестивальная, д. 10"
                .to_string(),
        }
    }
}

/// Title block of the compressive-strength protocol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolSettings {
    /// Standard the tests follow (e.g., "ГОСТ 10180-2012")
    pub standard: String,

    /// Title of the standard
    pub standard_title: String,

    /// What the protocol determines
    pub subject: String,
}

impl Default for ProtocolSettings {
    fn default() -> Self {
        Self {
            standard: "ГОСТ 10180-2012".to_string(),
            standard_title: "Бетоны. Методы определения прочности по контрольным образцам"
                .to_string(),
            subject: "Определение прочности бетона на сжатие".to_string(),
        }
    }
}

/// One entry of the laboratory price list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceItem {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl PriceItem {
    fn new(id: u32, name: &str, price: f64, category: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            category: category.to_string(),
        }
    }
}

/// Complete configuration of a laboratory session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabConfig {
    #[serde(default)]
    pub laboratory: LaboratoryInfo,

    #[serde(default)]
    pub protocol: ProtocolSettings,

    /// Length of the top-N analytics lists
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Catalog of standard test-method citations offered for attachments
    #[serde(default = "default_methodologies")]
    pub methodologies: Vec<String>,

    /// Services that can be put on a report
    #[serde(default = "default_price_list")]
    pub price_list: Vec<PriceItem>,
}

fn default_top_n() -> usize {
    5
}

fn default_methodologies() -> Vec<String> {
    [
        "ГОСТ 10180-2012 Бетоны. Методы определения прочности по контрольным образцам",
        "ГОСТ 18105-2018 Бетоны. Правила контроля и оценки прочности",
        "ГОСТ 22690-2015 Бетоны. Определение прочности механическими методами неразрушающего контроля",
        "ГОСТ 12730.1-2020 Бетоны. Методы определения плотности",
        "ГОСТ 10060-2012 Бетоны. Методы определения морозостойкости",
        "ГОСТ 12730.5-2018 Бетоны. Методы определения водонепроницаемости",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_price_list() -> Vec<PriceItem> {
    vec![
        PriceItem::new(1, "Общий анализ крови", 450.0, "Анализы крови"),
        PriceItem::new(2, "Биохимический анализ крови", 1200.0, "Биохимия"),
        PriceItem::new(3, "Анализ на гормоны щитовидной железы", 1800.0, "Биохимия"),
        PriceItem::new(4, "УЗИ брюшной полости", 2500.0, "УЗИ"),
        PriceItem::new(5, "УЗИ щитовидной железы", 1500.0, "УЗИ"),
        PriceItem::new(6, "Анализ крови на сахар", 350.0, "Анализы крови"),
        PriceItem::new(7, "Коагулограмма", 950.0, "Анализы крови"),
        PriceItem::new(8, "Анализ на холестерин", 550.0, "Биохимия"),
        PriceItem::new(9, "УЗИ малого таза", 2200.0, "УЗИ"),
        PriceItem::new(10, "Общий анализ мочи", 400.0, "Прочее"),
    ]
}

impl Default for LabConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl LabConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;

        Self::parse(&content, Some(path.display().to_string()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, None)
    }

    fn parse(yaml: &str, file: Option<String>) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file,
            message: e.to_string(),
        })?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::InvalidValue {
                field: "top_n".to_string(),
                value: self.top_n.to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(item) = self
            .price_list
            .iter()
            .find(|item| !item.price.is_finite() || item.price < 0.0)
        {
            return Err(ConfigError::InvalidValue {
                field: "price_list".to_string(),
                value: item.name.clone(),
                message: "price must be a finite, non-negative number".to_string(),
            });
        }
        Ok(())
    }

    /// Find a price-list entry by id
    pub fn price_item(&self, id: u32) -> Option<&PriceItem> {
        self.price_list.iter().find(|item| item.id == id)
    }

    /// Citation from the methodology catalog
    pub fn methodology(&self, index: usize) -> Option<&str> {
        self.methodologies.get(index).map(String::as_str)
    }

    /// The built-in configuration of the laboratory
    pub fn default_config() -> Self {
        Self {
            laboratory: LaboratoryInfo::default(),
            protocol: ProtocolSettings::default(),
            top_n: default_top_n(),
            methodologies: default_methodologies(),
            price_list: default_price_list(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LabConfig::default_config();

        assert_eq!(config.top_n, 5);
        assert_eq!(config.price_list.len(), 10);
        assert_eq!(config.protocol.standard, "ГОСТ 10180-2012");
        assert!(config.methodology(0).unwrap().starts_with("ГОСТ 10180-2012"));
        assert!(config.methodology(99).is_none());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = LabConfig::default_config();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = LabConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
laboratory:
  name: Лаборатория №1
  address: г. Москва
top_n: 3
"#;
        let config = LabConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.laboratory.name, "Лаборатория №1");
        assert_eq!(config.top_n, 3);
        assert_eq!(config.protocol, ProtocolSettings::default());
        assert_eq!(config.price_list.len(), 10);
    }

    #[test]
    fn test_zero_top_n_is_rejected() {
        let err = LabConfig::from_yaml_str("top_n: 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_nan_price_is_rejected() {
        let yaml = r#"
price_list:
  - id: 1
    name: Испытание кубов
    price: .nan
    category: Бетон
"#;
        let err = LabConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "price_list"));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let err = LabConfig::from_yaml_str("top_n: [").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { file: None, .. }));
    }

    #[test]
    fn test_price_item_lookup() {
        let config = LabConfig::default_config();
        assert_eq!(config.price_item(4).unwrap().name, "УЗИ брюшной полости");
        assert!(config.price_item(42).is_none());
    }
}
