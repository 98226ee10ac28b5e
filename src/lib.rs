//! # labdesk
//!
//! Back-office core for a construction materials-testing laboratory.
//!
//! ## Features
//!
//! - **Invoice analytics**: filtered invoice list, top clients, top debtors,
//!   top services, status totals and monthly payment dynamics
//! - **Protocol attachments**: per-service test protocols on invoices
//! - **Report drafts**: build a pending invoice from the price list
//! - **Compressive-strength journal**: sample entry with area and strength
//!   derivation (ГОСТ 10180-2012), append-only journal with confirmed clear
//! - **Printable protocol**: standalone HTML rendered with `tera` and handed
//!   to a swappable [`DocumentSink`](core::DocumentSink)
//! - **Configuration-Based**: laboratory details, catalogs and price list
//!   from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use labdesk::prelude::*;
//!
//! let config = LabConfig::default_config();
//! let mut lab = Laboratory::new(&config)?;
//!
//! let form = lab.form_mut();
//! form.sample_number = "1".to_string();
//! form.destructive_load = Some(220.0);
//! form.recompute_strength(); // 22.00 MPa on a 100 × 100 cube
//! let notice = lab.submit_sample();
//!
//! let sink = InMemoryDocumentSink::new();
//! let document = lab.generate_protocol(&sink)?;
//! ```

pub mod config;
pub mod core;
pub mod invoices;
pub mod laboratory;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ConfigError, DocumentSink, FormValidationConfig, LabError, Notice, NoticeKind,
        RenderedDocument, ValidatableForm, ValidationError,
    };

    // === Invoices ===
    pub use crate::invoices::{
        ClientStat, DashboardSnapshot, DateRange, Invoice, InvoiceBook, InvoiceFilter,
        InvoiceStatus, MonthlyTotals, Protocol, ProtocolForm, ReportDraft, ReportLine,
        ServiceStat, StatusFilter, StatusTotals, client_stats, monthly_totals, seed_invoices,
        service_stats, status_totals, top_clients, top_debtors, top_services,
    };

    // === Laboratory ===
    pub use crate::laboratory::{
        CLEAR_PROMPT, ConcreteClass, Confirmation, Dimensions, Journal, JournalState,
        Laboratory, MaterialType, ProtocolRenderer, ProtocolReport, ProtocolSummary, Sample,
        SampleForm, SampleShape, compressive_strength, working_area,
    };

    // === Storage ===
    pub use crate::storage::{FileDocumentSink, InMemoryDocumentSink};

    // === Config ===
    pub use crate::config::{LabConfig, LaboratoryInfo, PriceItem, ProtocolSettings};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{Datelike, NaiveDate};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
