//! Derived invoice statistics
//!
//! Every function here is a pure function of the invoice slice it is given:
//! callers recompute whenever the collection or the filter changes.
//!
//! Ordering rules:
//! - top clients: count desc, then total amount desc, then first appearance
//! - top debtors: amount desc, then input order
//! - top services: occurrences desc, then first appearance

use crate::invoices::filter::InvoiceFilter;
use crate::invoices::model::{Invoice, InvoiceStatus};
use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Ordering;

/// Number of invoices and money billed for one client
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientStat {
    pub name: String,
    pub count: usize,
    pub total: f64,
}

/// How often a service appears across invoices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStat {
    pub name: String,
    pub count: usize,
}

/// Money per status
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusTotals {
    pub paid: f64,
    pub pending: f64,
    pub overdue: f64,
    /// Invoices that are pending or overdue
    pub unpaid_count: usize,
}

/// Paid and outstanding money for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotals {
    pub year: i32,
    pub month: u32,
    pub paid: f64,
    /// Pending plus overdue
    pub outstanding: f64,
}

/// Every client with its invoice count and total, ordered for ranking
pub fn client_stats(invoices: &[Invoice]) -> Vec<ClientStat> {
    let mut grouped: IndexMap<&str, ClientStat> = IndexMap::new();
    for invoice in invoices {
        let stat = grouped
            .entry(invoice.client.as_str())
            .or_insert_with(|| ClientStat {
                name: invoice.client.clone(),
                count: 0,
                total: 0.0,
            });
        stat.count += 1;
        stat.total += invoice.amount;
    }

    let mut stats: Vec<ClientStat> = grouped.into_values().collect();
    // stable: equal keys keep first-appearance order
    stats.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal))
    });
    stats
}

/// Clients with the most invoices
pub fn top_clients(invoices: &[Invoice], n: usize) -> Vec<ClientStat> {
    let mut stats = client_stats(invoices);
    stats.truncate(n);
    stats
}

/// Largest pending or overdue invoices
pub fn top_debtors(invoices: &[Invoice], n: usize) -> Vec<&Invoice> {
    let mut debtors: Vec<&Invoice> = invoices
        .iter()
        .filter(|invoice| invoice.status.is_outstanding())
        .collect();
    debtors.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    debtors.truncate(n);
    debtors
}

/// Every service with its number of occurrences, ordered for ranking
pub fn service_stats(invoices: &[Invoice]) -> Vec<ServiceStat> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for name in invoices.iter().flat_map(Invoice::service_names) {
        *counts.entry(name).or_insert(0) += 1;
    }

    let mut stats: Vec<ServiceStat> = counts
        .into_iter()
        .map(|(name, count)| ServiceStat {
            name: name.to_string(),
            count,
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// Most frequently ordered services
pub fn top_services(invoices: &[Invoice], n: usize) -> Vec<ServiceStat> {
    let mut stats = service_stats(invoices);
    stats.truncate(n);
    stats
}

/// Sum of amounts per status
pub fn status_totals(invoices: &[Invoice]) -> StatusTotals {
    invoices
        .iter()
        .fold(StatusTotals::default(), |mut totals, invoice| {
            match invoice.status {
                InvoiceStatus::Paid => totals.paid += invoice.amount,
                InvoiceStatus::Pending => totals.pending += invoice.amount,
                InvoiceStatus::Overdue => totals.overdue += invoice.amount,
            }
            if invoice.status.is_outstanding() {
                totals.unpaid_count += 1;
            }
            totals
        })
}

/// Paid and outstanding money per month, oldest month first
pub fn monthly_totals(invoices: &[Invoice]) -> Vec<MonthlyTotals> {
    let mut months: Vec<MonthlyTotals> = Vec::new();
    for invoice in invoices {
        let (year, month) = (invoice.date.year(), invoice.date.month());
        let index = match months
            .iter()
            .position(|m| m.year == year && m.month == month)
        {
            Some(index) => index,
            None => {
                months.push(MonthlyTotals {
                    year,
                    month,
                    paid: 0.0,
                    outstanding: 0.0,
                });
                months.len() - 1
            }
        };
        match invoice.status {
            InvoiceStatus::Paid => months[index].paid += invoice.amount,
            InvoiceStatus::Pending | InvoiceStatus::Overdue => {
                months[index].outstanding += invoice.amount
            }
        }
    }
    months.sort_by_key(|m| (m.year, m.month));
    months
}

/// Everything the dashboard shows for one filter state
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub filtered: Vec<&'a Invoice>,
    pub top_clients: Vec<ClientStat>,
    pub top_debtors: Vec<&'a Invoice>,
    pub top_services: Vec<ServiceStat>,
    pub totals: StatusTotals,
    pub monthly: Vec<MonthlyTotals>,
}

impl<'a> DashboardSnapshot<'a> {
    /// Recompute every derived view from the full collection
    ///
    /// Only the list honours the filter; the rankings and totals always cover
    /// the whole collection.
    pub fn compute(
        invoices: &'a [Invoice],
        filter: &InvoiceFilter,
        today: NaiveDate,
        top_n: usize,
    ) -> Self {
        Self {
            filtered: filter.apply(invoices, today),
            top_clients: top_clients(invoices, top_n),
            top_debtors: top_debtors(invoices, top_n),
            top_services: top_services(invoices, top_n),
            totals: status_totals(invoices),
            monthly: monthly_totals(invoices),
        }
    }
}
