//! Localized operator notices
//!
//! Submissions either succeed or fail synchronously; in both cases the
//! operator is told what happened through a short notice. How the notice is
//! shown (toast, status bar, log line) is up to the embedding application.

use crate::core::error::{LabError, ValidationError};
use serde::{Deserialize, Serialize};

/// Visual weight of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Destructive,
}

/// A short localized message for the operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn destructive(description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Destructive,
            title: "Ошибка".to_string(),
            description: description.into(),
        }
    }

    /// Notice shown after a sample has been appended to the journal
    pub fn sample_added(sample_number: &str) -> Self {
        Self::success(
            "Образец добавлен",
            format!("Образец №{} внесен в журнал", sample_number),
        )
    }

    /// Notice shown after a protocol has been attached to an invoice service
    pub fn protocol_attached(protocol_number: &str, service: &str) -> Self {
        Self::success(
            "Протокол добавлен",
            format!(
                "Протокол №{} успешно привязан к услуге \"{}\"",
                protocol_number, service
            ),
        )
    }

    /// Notice shown after a report draft became an invoice
    pub fn report_created(invoice_id: &str, client: &str) -> Self {
        Self::success(
            "Отчет создан",
            format!("Счет №{} сформирован для {}", invoice_id, client),
        )
    }

    /// Build the notice for a failed operation
    pub fn from_error(error: &LabError) -> Self {
        match error {
            LabError::Validation(e) => Self::destructive(validation_description(e)),
            LabError::InvoiceNotFound { id } => {
                Self::destructive(format!("Счет №{} не найден", id))
            }
            other => Self::destructive(other.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Destructive
    }
}

fn validation_description(error: &ValidationError) -> String {
    match error.form() {
        "sample" => "Заполните обязательные поля".to_string(),
        "protocol" => "Укажите номер протокола".to_string(),
        "report" => "Выберите заказчика и хотя бы одну услугу".to_string(),
        _ => error.messages().join("; "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(form: &str) -> LabError {
        ValidationError::FieldErrors {
            form: form.to_string(),
            errors: vec!["Поле 'x' обязательно для заполнения".to_string()],
        }
        .into()
    }

    #[test]
    fn test_sample_rejection_notice() {
        let notice = Notice::from_error(&rejected("sample"));
        assert!(notice.is_error());
        assert_eq!(notice.title, "Ошибка");
        assert_eq!(notice.description, "Заполните обязательные поля");
    }

    #[test]
    fn test_protocol_rejection_notice() {
        let notice = Notice::from_error(&rejected("protocol"));
        assert_eq!(notice.description, "Укажите номер протокола");
    }

    #[test]
    fn test_unknown_form_falls_back_to_messages() {
        let notice = Notice::from_error(&rejected("other"));
        assert_eq!(notice.description, "Поле 'x' обязательно для заполнения");
    }

    #[test]
    fn test_success_notices() {
        let notice = Notice::sample_added("001-2024");
        assert!(!notice.is_error());
        assert_eq!(notice.description, "Образец №001-2024 внесен в журнал");

        let notice = Notice::protocol_attached("П-12", "УЗИ");
        assert_eq!(
            notice.description,
            "Протокол №П-12 успешно привязан к услуге \"УЗИ\""
        );
    }
}
