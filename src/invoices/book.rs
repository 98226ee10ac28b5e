//! The session's invoice collection

use crate::core::LabError;
use crate::invoices::model::{Invoice, Protocol};
use crate::invoices::seed::seed_invoices;

/// Owned, ordered invoice collection
///
/// Read-only views borrow [`InvoiceBook::invoices`]; every mutation goes
/// through a method here.
#[derive(Debug, Clone, Default)]
pub struct InvoiceBook {
    invoices: Vec<Invoice>,
}

impl InvoiceBook {
    /// An empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// A book holding the session seed list
    pub fn seeded() -> Self {
        Self::from_invoices(seed_invoices())
    }

    pub fn from_invoices(invoices: Vec<Invoice>) -> Self {
        Self { invoices }
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| invoice.id == id)
    }

    /// Append a new invoice
    pub fn push(&mut self, invoice: Invoice) {
        tracing::info!(id = %invoice.id, client = %invoice.client, amount = invoice.amount, "Invoice added");
        self.invoices.push(invoice);
    }

    /// Next free identifier for the given year, formatted `YYYY-NNNN`
    pub fn next_id(&self, year: i32) -> String {
        let prefix = format!("{}-", year);
        // sequences that cannot be incremented are ignored
        let next = self
            .invoices
            .iter()
            .filter_map(|invoice| invoice.id.strip_prefix(&prefix))
            .filter_map(|seq| seq.parse::<u64>().ok()?.checked_add(1))
            .max()
            .unwrap_or(1);
        format!("{}{:04}", prefix, next)
    }

    /// Attach a protocol to one service of an invoice
    pub fn attach_protocol(
        &mut self,
        invoice_id: &str,
        service: &str,
        protocol: Protocol,
    ) -> Result<&Protocol, LabError> {
        let invoice = self
            .invoices
            .iter_mut()
            .find(|invoice| invoice.id == invoice_id)
            .ok_or_else(|| LabError::InvoiceNotFound {
                id: invoice_id.to_string(),
            })?;

        tracing::info!(
            invoice = %invoice_id,
            service = %service,
            number = %protocol.number,
            "Protocol attached"
        );

        let list = invoice.protocols.entry(service.to_string()).or_default();
        list.push(protocol);
        Ok(&list[list.len() - 1])
    }
}
