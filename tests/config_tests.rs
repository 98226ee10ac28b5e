//! Integration tests for loading the laboratory configuration

use labdesk::prelude::*;
use std::io::Write;

#[test]
fn test_load_from_file_overrides_footer() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
laboratory:
  name: Испытательный центр
  address: 398000, г. Липецк
top_n: 3
"#
    )
    .unwrap();

    let config = LabConfig::from_yaml_file(file.path()).unwrap();

    assert_eq!(config.laboratory.name, "Испытательный центр");
    assert_eq!(config.top_n, 3);
    assert_eq!(config.protocol.standard, "ГОСТ 10180-2012");
    assert_eq!(config.price_list.len(), 10);
    assert_eq!(config.methodologies.len(), 6);
}

#[test]
fn test_configured_footer_reaches_the_protocol() {
    let config = LabConfig::from_yaml_str(
        r#"
laboratory:
  name: Испытательный центр
"#,
    )
    .unwrap();
    assert_eq!(
        config.laboratory.address,
        LaboratoryInfo::default().address
    );

    let mut lab = Laboratory::new(&config).unwrap();
    let form = lab.form_mut();
    form.sample_number = "1".to_string();
    form.destructive_load = Some(220.0);
    assert!(!lab.submit_sample().is_error());

    let sink = InMemoryDocumentSink::new();
    let document = lab.generate_protocol(&sink).unwrap().unwrap();
    assert!(document.body.contains("Испытательный центр<br>"));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = LabConfig::from_yaml_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));

    let err: LabError = err.into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_negative_price_is_rejected() {
    let yaml = r#"
price_list:
  - id: 1
    name: Испытание кубов
    price: -10
    category: Бетон
"#;
    let err = LabConfig::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "price_list"));
}

#[test]
fn test_custom_price_list_drives_the_report() {
    let yaml = r#"
price_list:
  - id: 10
    name: Испытание кубов на сжатие
    price: 1500
    category: Бетон
  - id: 11
    name: Определение морозостойкости
    price: 4200.5
    category: Бетон
"#;
    let config = LabConfig::from_yaml_str(yaml).unwrap();
    let mut book = InvoiceBook::new();
    let mut draft = ReportDraft::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    draft.selected_client = "ООО \"Стройбетон\"".to_string();
    draft.toggle_service(10);
    draft.toggle_service(11);
    draft.update_quantity(10, 6);

    draft.submit(&mut book, &config).unwrap();

    let invoice = &book.invoices()[0];
    assert_eq!(invoice.id, "2025-0001");
    assert_eq!(invoice.amount, 13_200.5);
    assert_eq!(
        invoice.services,
        "Испытание кубов на сжатие, Определение морозостойкости"
    );
}
