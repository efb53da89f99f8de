//! Core record stores for the jobboard admin panel.
//! This crate is the single source of truth for company/job invariants.

pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod panel;
pub mod seed;
pub mod store;
pub mod table;

pub use config::{ConfigError, PanelConfig, ReferencePolicy};
pub use form::{CompanyForm, FieldError, FormErrors, JobForm};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::company::{Company, CompanyId, CompanyInput};
pub use model::job::{Job, JobId, JobInput};
pub use model::record::Record;
pub use panel::{AdminPanel, PanelError, PanelResult, Section, SharedPanel};
pub use store::{
    CompanyStore, IdGenerator, IdPolicy, JobStore, RecordStore, SequentialIds, UuidIds,
};
pub use table::{company_table, job_table, Column, RecordTable};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
