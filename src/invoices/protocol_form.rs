//! Form for attaching a test protocol to an invoice service

use crate::config::LabConfig;
use crate::core::validation::{FormValidationConfig, ValidatableForm, filters, validators};
use crate::core::{LabError, Notice};
use crate::invoices::book::InvoiceBook;
use crate::invoices::model::Protocol;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Editable state of the "add protocol" dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolForm {
    pub number: String,
    pub date: NaiveDate,
    pub performer: String,
    pub methodology: String,
    pub result: String,
    pub notes: String,
}

impl Default for ProtocolForm {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl ValidatableForm for ProtocolForm {
    fn validation_config() -> FormValidationConfig {
        FormValidationConfig::new("protocol")
            .filter("number", filters::trim())
            .validate("number", validators::not_blank())
    }
}

impl ProtocolForm {
    /// Blank form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            number: String::new(),
            date: today,
            performer: String::new(),
            methodology: String::new(),
            result: String::new(),
            notes: String::new(),
        }
    }

    /// Fill the methodology from the configured catalog
    ///
    /// Returns false (leaving the field untouched) for an unknown index.
    pub fn choose_methodology(&mut self, config: &LabConfig, index: usize) -> bool {
        match config.methodology(index) {
            Some(citation) => {
                self.methodology = citation.to_string();
                true
            }
            None => false,
        }
    }

    /// Validate and build the protocol record without touching the form
    pub fn build(&self) -> Result<Protocol, LabError> {
        let form = self.validated()?;
        Ok(Protocol {
            number: form.number,
            date: form.date,
            performer: form.performer,
            methodology: form.methodology,
            result: form.result,
            notes: form.notes,
        })
    }

    /// Attach the protocol to `service` of `invoice_id`, then reset the form
    ///
    /// On any failure the book and the form are left as they were.
    pub fn submit(
        &mut self,
        book: &mut InvoiceBook,
        invoice_id: &str,
        service: &str,
        today: NaiveDate,
    ) -> Result<Notice, LabError> {
        let protocol = self.build()?;
        let number = protocol.number.clone();
        book.attach_protocol(invoice_id, service, protocol)?;
        *self = Self::new(today);
        Ok(Notice::protocol_attached(&number, service))
    }
}
