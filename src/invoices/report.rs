//! Report draft: pick a client and services from the price list, get an invoice

use crate::config::{LabConfig, PriceItem};
use crate::core::validation::{FormValidationConfig, ValidatableForm, filters, validators};
use crate::core::{LabError, Notice};
use crate::invoices::book::InvoiceBook;
use crate::invoices::model::{Invoice, InvoiceStatus};
use chrono::{Datelike, Local, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One selected service with its quantity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub item: PriceItem,
    pub quantity: u32,
    pub total: f64,
}

/// Editable state of the "create report" dialog
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDraft {
    pub date: NaiveDate,
    /// Type a new client instead of choosing a known one
    pub is_new_client: bool,
    pub selected_client: String,
    pub new_client: String,
    /// Selected price-list ids with quantities, in selection order
    quantities: IndexMap<u32, u32>,
}

/// What actually gets validated on submission
#[derive(Debug, Serialize, Deserialize)]
struct ReportRequest {
    client: String,
    date: NaiveDate,
    services: IndexMap<u32, u32>,
}

impl ValidatableForm for ReportRequest {
    fn validation_config() -> FormValidationConfig {
        FormValidationConfig::new("report")
            .filter("client", filters::trim())
            .validate("client", validators::not_blank())
            .validate("services", validators::non_empty_list())
    }
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl ReportDraft {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            is_new_client: false,
            selected_client: String::new(),
            new_client: String::new(),
            quantities: IndexMap::new(),
        }
    }

    /// The client the report will be issued to
    pub fn client_name(&self) -> &str {
        if self.is_new_client {
            &self.new_client
        } else {
            &self.selected_client
        }
    }

    pub fn is_selected(&self, service_id: u32) -> bool {
        self.quantities.contains_key(&service_id)
    }

    pub fn quantity(&self, service_id: u32) -> Option<u32> {
        self.quantities.get(&service_id).copied()
    }

    /// Select a service (quantity 1) or deselect it; returns the new state
    pub fn toggle_service(&mut self, service_id: u32) -> bool {
        if self.quantities.shift_remove(&service_id).is_some() {
            false
        } else {
            self.quantities.insert(service_id, 1);
            true
        }
    }

    /// Change the quantity of a selected service; zero is ignored
    pub fn update_quantity(&mut self, service_id: u32, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(current) = self.quantities.get_mut(&service_id) {
            *current = quantity;
        }
    }

    /// Selected services resolved against the price list
    ///
    /// Ids missing from the price list are skipped.
    pub fn lines(&self, price_list: &[PriceItem]) -> Vec<ReportLine> {
        self.quantities
            .iter()
            .filter_map(|(id, quantity)| {
                let item = price_list.iter().find(|item| item.id == *id)?;
                Some(ReportLine {
                    item: item.clone(),
                    quantity: *quantity,
                    total: item.price * f64::from(*quantity),
                })
            })
            .collect()
    }

    /// Sum of price × quantity over the selection
    pub fn total(&self, price_list: &[PriceItem]) -> f64 {
        self.lines(price_list).iter().map(|line| line.total).sum()
    }

    /// Validate the draft and turn it into a pending invoice
    pub fn build(&self, book: &InvoiceBook, config: &LabConfig) -> Result<Invoice, LabError> {
        let request = ReportRequest {
            client: self.client_name().to_string(),
            date: self.date,
            services: self.quantities.clone(),
        }
        .validated()?;

        let lines = self.lines(&config.price_list);
        let services = lines
            .iter()
            .map(|line| line.item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let amount = filters::round_to(lines.iter().map(|line| line.total).sum(), 2);

        Ok(Invoice::new(
            book.next_id(request.date.year()),
            request.client,
            amount,
            InvoiceStatus::Pending,
            request.date,
            services,
        ))
    }

    /// Append the invoice to the book and clear client and services
    pub fn submit(&mut self, book: &mut InvoiceBook, config: &LabConfig) -> Result<Notice, LabError> {
        let invoice = self.build(book, config)?;
        let notice = Notice::report_created(&invoice.id, &invoice.client);
        book.push(invoice);

        *self = Self::new(self.date);
        Ok(notice)
    }
}

/// Price-list categories in first-seen order
pub fn categories(price_list: &[PriceItem]) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for item in price_list {
        if !categories.contains(&item.category.as_str()) {
            categories.push(&item.category);
        }
    }
    categories
}

/// Price-list entries of one category
pub fn services_in<'a>(price_list: &'a [PriceItem], category: &str) -> Vec<&'a PriceItem> {
    price_list
        .iter()
        .filter(|item| item.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
    }

    #[test]
    fn test_toggle_and_quantities() {
        let mut draft = ReportDraft::new(date());

        assert!(draft.toggle_service(4));
        assert_eq!(draft.quantity(4), Some(1));

        draft.update_quantity(4, 3);
        assert_eq!(draft.quantity(4), Some(3));

        draft.update_quantity(4, 0);
        assert_eq!(draft.quantity(4), Some(3));

        draft.update_quantity(5, 2);
        assert!(!draft.is_selected(5));

        assert!(!draft.toggle_service(4));
        assert_eq!(draft.quantity(4), None);
    }

    #[test]
    fn test_total_uses_price_list() {
        let config = LabConfig::default_config();
        let mut draft = ReportDraft::new(date());
        draft.toggle_service(1); // 450
        draft.toggle_service(4); // 2500
        draft.update_quantity(1, 2);
        draft.toggle_service(99);

        assert_eq!(draft.total(&config.price_list), 3400.0);
        assert_eq!(draft.lines(&config.price_list).len(), 2);
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let config = LabConfig::default_config();
        assert_eq!(
            categories(&config.price_list),
            vec!["Анализы крови", "Биохимия", "УЗИ", "Прочее"]
        );
        assert_eq!(services_in(&config.price_list, "УЗИ").len(), 3);
    }

    #[test]
    fn test_submit_creates_pending_invoice() {
        let config = LabConfig::default_config();
        let mut book = InvoiceBook::seeded();
        let mut draft = ReportDraft::new(date());
        draft.is_new_client = true;
        draft.new_client = "  ООО \"Стройбетон\" ".to_string();
        draft.toggle_service(5);
        draft.toggle_service(2);

        let notice = draft.submit(&mut book, &config).unwrap();
        assert!(!notice.is_error());

        let invoice = book.invoices().last().unwrap();
        assert_eq!(invoice.id, "2024-0161");
        assert_eq!(invoice.client, "ООО \"Стройбетон\"");
        assert_eq!(invoice.status, InvoiceStatus::Pending);
        assert_eq!(invoice.amount, 2700.0);
        assert_eq!(invoice.services, "УЗИ щитовидной железы, Биохимический анализ крови");
        assert_eq!(invoice.date, date());

        assert!(draft.new_client.is_empty());
        assert!(!draft.is_selected(5));
        assert_eq!(draft.date, date());
    }

    #[test]
    fn test_submit_without_client_or_services_is_rejected() {
        let config = LabConfig::default_config();
        let mut book = InvoiceBook::seeded();
        let mut draft = ReportDraft::new(date());

        let err = draft.submit(&mut book, &config).unwrap_err();
        match &err {
            LabError::Validation(e) => assert_eq!(e.messages().len(), 2),
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(book.len(), 5);

        draft.selected_client = "Клиника \"Здоровье\"".to_string();
        let err = draft.submit(&mut book, &config).unwrap_err();
        assert_eq!(
            Notice::from_error(&err).description,
            "Выберите заказчика и хотя бы одну услугу"
        );
    }
}
