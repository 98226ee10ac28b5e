//! Invoices every session starts with

use crate::invoices::model::{Invoice, InvoiceStatus};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The fixed seed list loaded at session start
pub fn seed_invoices() -> Vec<Invoice> {
    vec![
        Invoice::new(
            "2024-0156",
            "ООО \"Медицинский центр\"",
            125_000.0,
            InvoiceStatus::Paid,
            date(2024, 12, 1),
            "Анализы крови, УЗИ",
        ),
        Invoice::new(
            "2024-0157",
            "Клиника \"Здоровье\"",
            85_000.0,
            InvoiceStatus::Pending,
            date(2024, 12, 3),
            "Биохимия",
        ),
        Invoice::new(
            "2024-0158",
            "ООО \"Лайф Диагностика\"",
            210_000.0,
            InvoiceStatus::Paid,
            date(2024, 12, 2),
            "Комплексное обследование",
        ),
        Invoice::new(
            "2024-0159",
            "Частная клиника \"Медис\"",
            95_000.0,
            InvoiceStatus::Overdue,
            date(2024, 11, 28),
            "Анализы, консультации",
        ),
        Invoice::new(
            "2024-0160",
            "Центр \"Диагност\"",
            165_000.0,
            InvoiceStatus::Pending,
            date(2024, 12, 4),
            "УЗИ, рентген",
        ),
    ]
}

/// Client names offered by the report draft
pub fn known_clients() -> Vec<String> {
    let mut clients: Vec<String> = Vec::new();
    for invoice in seed_invoices() {
        if !clients.contains(&invoice.client) {
            clients.push(invoice.client);
        }
    }
    clients
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let invoices = seed_invoices();
        let ids: HashSet<_> = invoices.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), invoices.len());
    }

    #[test]
    fn test_seed_dates_are_valid() {
        for invoice in seed_invoices() {
            assert_ne!(invoice.date, NaiveDate::default(), "{}", invoice.id);
        }
    }

    #[test]
    fn test_known_clients() {
        assert_eq!(known_clients().len(), 5);
    }
}
