//! Invoice records and their attached test protocols

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payment status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Paid,
        InvoiceStatus::Pending,
        InvoiceStatus::Overdue,
    ];

    /// Wire name (`paid`, `pending`, `overdue`)
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Overdue => "overdue",
        }
    }

    /// Label shown to the operator
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Оплачен",
            InvoiceStatus::Pending => "Ожидание",
            InvoiceStatus::Overdue => "Просрочен",
        }
    }

    /// Money is still owed on the invoice
    pub fn is_outstanding(&self) -> bool {
        matches!(self, InvoiceStatus::Pending | InvoiceStatus::Overdue)
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(InvoiceStatus::Paid),
            "pending" => Ok(InvoiceStatus::Pending),
            "overdue" => Ok(InvoiceStatus::Overdue),
            other => Err(format!("unknown invoice status '{}'", other)),
        }
    }
}

/// Test protocol attached to one service of an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Protocol {
    /// Protocol number (uniqueness is not enforced)
    pub number: String,
    pub date: NaiveDate,
    pub performer: String,
    /// Test-method citation, free text or from the catalog
    pub methodology: String,
    /// Short summary of the results
    pub result: String,
    pub notes: String,
}

/// An invoice issued to a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Identifier, unique within the book (e.g., "2024-0156")
    pub id: String,
    pub client: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    /// Issue date
    pub date: NaiveDate,
    /// Comma-separated service names
    pub services: String,
    /// Protocols attached per service name
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub protocols: IndexMap<String, Vec<Protocol>>,
}

impl Invoice {
    pub fn new(
        id: impl Into<String>,
        client: impl Into<String>,
        amount: f64,
        status: InvoiceStatus,
        date: NaiveDate,
        services: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            client: client.into(),
            amount,
            status,
            date,
            services: services.into(),
            protocols: IndexMap::new(),
        }
    }

    /// Service names listed on the invoice, trimmed, empty entries skipped
    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.services
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Protocols attached to one service
    pub fn protocols_for(&self, service: &str) -> &[Protocol] {
        self.protocols
            .get(service)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of attached protocols
    pub fn protocol_count(&self) -> usize {
        self.protocols.values().map(Vec::len).sum()
    }
}
