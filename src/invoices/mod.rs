//! Invoice analytics: the invoice list, its filters and derived statistics,
//! protocol attachments and report drafts

pub mod analytics;
pub mod book;
pub mod filter;
pub mod model;
pub mod protocol_form;
pub mod report;
pub mod seed;

pub use analytics::{
    ClientStat, DashboardSnapshot, MonthlyTotals, ServiceStat, StatusTotals, client_stats,
    monthly_totals, service_stats, status_totals, top_clients, top_debtors, top_services,
};
pub use book::InvoiceBook;
pub use filter::{DateRange, InvoiceFilter, StatusFilter};
pub use model::{Invoice, InvoiceStatus, Protocol};
pub use protocol_form::ProtocolForm;
pub use report::{ReportDraft, ReportLine};
pub use seed::{known_clients, seed_invoices};
