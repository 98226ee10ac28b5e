//! Filtering of the invoice list by status, free-text query and date range

use crate::invoices::model::{Invoice, InvoiceStatus};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status predicate: `all` or an exact status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Paid,
    Pending,
    Overdue,
}

impl StatusFilter {
    pub fn matches(&self, status: InvoiceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Paid => status == InvoiceStatus::Paid,
            StatusFilter::Pending => status == InvoiceStatus::Pending,
            StatusFilter::Overdue => status == InvoiceStatus::Overdue,
        }
    }
}

impl From<InvoiceStatus> for StatusFilter {
    fn from(status: InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Paid => StatusFilter::Paid,
            InvoiceStatus::Pending => StatusFilter::Pending,
            InvoiceStatus::Overdue => StatusFilter::Overdue,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            other => other.parse::<InvoiceStatus>().map(StatusFilter::from),
        }
    }
}

/// Date predicate, evaluated against the current date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
    #[default]
    All,
    CurrentMonth,
    LastMonth,
}

impl DateRange {
    /// Whether `date` falls in the range relative to `today`
    ///
    /// Last month of January is December of the previous year.
    pub fn matches(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateRange::All => true,
            DateRange::CurrentMonth => {
                date.year() == today.year() && date.month() == today.month()
            }
            DateRange::LastMonth => {
                let (year, month) = previous_month(today.year(), today.month());
                date.year() == year && date.month() == month
            }
        }
    }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DateRange::All),
            "current-month" => Ok(DateRange::CurrentMonth),
            "last-month" => Ok(DateRange::LastMonth),
            other => Err(format!("unknown date range '{}'", other)),
        }
    }
}

/// The three list predicates, combined with AND
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceFilter {
    pub status: StatusFilter,
    /// Case-insensitive substring of client, identifier or services
    pub query: String,
    pub date_range: DateRange,
}

impl InvoiceFilter {
    pub fn new(status: StatusFilter, query: impl Into<String>, date_range: DateRange) -> Self {
        Self {
            status,
            query: query.into(),
            date_range,
        }
    }

    /// No predicate is active
    pub fn is_empty(&self) -> bool {
        self.status == StatusFilter::All
            && self.query.is_empty()
            && self.date_range == DateRange::All
    }

    pub fn matches(&self, invoice: &Invoice, today: NaiveDate) -> bool {
        self.status.matches(invoice.status)
            && matches_query(invoice, &self.query)
            && self.date_range.matches(invoice.date, today)
    }

    /// Invoices passing the filter, in input order
    pub fn apply<'a>(&self, invoices: &'a [Invoice], today: NaiveDate) -> Vec<&'a Invoice> {
        invoices
            .iter()
            .filter(|invoice| self.matches(invoice, today))
            .collect()
    }
}

fn matches_query(invoice: &Invoice, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    [&invoice.client, &invoice.id, &invoice.services]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}
