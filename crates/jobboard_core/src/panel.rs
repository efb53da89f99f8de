//! Admin panel facade over the company and job stores.
//!
//! # Responsibility
//! - Own one company store and one job store per panel instance.
//! - Expose the list/add/edit/delete call surface used by admin screens.
//! - Apply the configured company reference policy to job writes.
//!
//! # Invariants
//! - Stores are owned by the panel, never process-wide.
//! - Company writes never fail. Job writes fail only under
//!   `ReferencePolicy::Enforce`, and a failed write leaves the store intact.
//! - Deleting a company does not touch jobs that reference it.

use crate::config::{PanelConfig, ReferencePolicy};
use crate::model::company::{Company, CompanyId, CompanyInput};
use crate::model::job::{Job, JobId, JobInput};
use crate::seed::{sample_companies, sample_jobs};
use crate::store::{CompanyStore, JobStore};
use crate::table::{company_table, job_table};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

pub type PanelResult<T> = Result<T, PanelError>;

/// Panel-level failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// A job referenced a company id the company store does not hold.
    UnknownCompany(CompanyId),
    /// A previous holder of the shared panel panicked mid-operation.
    LockPoisoned,
}

impl Display for PanelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCompany(id) => write!(f, "company not found: {id}"),
            Self::LockPoisoned => write!(f, "admin panel lock poisoned"),
        }
    }
}

impl Error for PanelError {}

/// Admin screen selected from the side menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Companies,
    Jobs,
}

impl Section {
    /// Menu item key (`"1"` companies, `"2"` jobs).
    pub fn menu_key(self) -> &'static str {
        match self {
            Self::Companies => "1",
            Self::Jobs => "2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Companies => "Company",
            Self::Jobs => "Job",
        }
    }

    pub fn from_menu_key(key: &str) -> Option<Self> {
        match key.trim() {
            "1" => Some(Self::Companies),
            "2" => Some(Self::Jobs),
            _ => None,
        }
    }
}

/// Owner of both record stores.
#[derive(Debug)]
pub struct AdminPanel {
    companies: CompanyStore,
    jobs: JobStore,
    reference_policy: ReferencePolicy,
}

impl AdminPanel {
    /// Builds a panel from config, seeding sample data when enabled.
    pub fn from_config(config: &PanelConfig) -> Self {
        info!(
            "event=panel_config module=panel status=ok id_policy={} seed_sample_data={}",
            config.id_policy.as_str(),
            config.seed_sample_data
        );
        if config.seed_sample_data {
            Self::seeded(config)
        } else {
            Self::new(config)
        }
    }

    /// Builds a panel with empty stores.
    pub fn new(config: &PanelConfig) -> Self {
        Self::from_stores(
            CompanyStore::with_generator(config.id_policy.generator()),
            JobStore::with_generator(config.id_policy.generator()),
            config.reference_policy,
        )
    }

    /// Builds a panel holding the sample companies and jobs.
    pub fn seeded(config: &PanelConfig) -> Self {
        Self::from_stores(
            CompanyStore::with_records(sample_companies(), config.id_policy.generator()),
            JobStore::with_records(sample_jobs(), config.id_policy.generator()),
            config.reference_policy,
        )
    }

    /// Wraps caller-built stores.
    pub fn from_stores(
        companies: CompanyStore,
        jobs: JobStore,
        reference_policy: ReferencePolicy,
    ) -> Self {
        info!(
            "event=panel_init module=panel status=ok companies={} jobs={} reference_policy={:?}",
            companies.len(),
            jobs.len(),
            reference_policy
        );
        Self {
            companies,
            jobs,
            reference_policy,
        }
    }

    pub fn reference_policy(&self) -> ReferencePolicy {
        self.reference_policy
    }

    pub fn companies(&self) -> &CompanyStore {
        &self.companies
    }

    pub fn jobs(&self) -> &JobStore {
        &self.jobs
    }

    pub fn list_companies(&self) -> &[Company] {
        self.companies.list()
    }

    pub fn add_company(&mut self, input: CompanyInput) -> Company {
        self.companies.add(input)
    }

    /// Replaces a company by id. Unknown ids are ignored (`false`).
    pub fn edit_company(&mut self, company: Company) -> bool {
        self.companies.edit(company)
    }

    /// Removes a company by id. Jobs referencing it are kept.
    pub fn delete_company(&mut self, id: &str) -> bool {
        self.companies.delete(id)
    }

    pub fn list_jobs(&self) -> &[Job] {
        self.jobs.list()
    }

    /// Adds a job after the reference check required by the panel policy.
    pub fn add_job(&mut self, input: JobInput) -> PanelResult<Job> {
        self.check_company(&input.company_id)?;
        Ok(self.jobs.add(input))
    }

    /// Replaces a job by id. Unknown job ids are ignored (`Ok(false)`).
    pub fn edit_job(&mut self, job: Job) -> PanelResult<bool> {
        self.check_company(&job.company_id)?;
        Ok(self.jobs.edit(job))
    }

    pub fn delete_job(&mut self, id: &str) -> bool {
        self.jobs.delete(id)
    }

    /// Jobs whose `company_id` has no stored company.
    pub fn orphaned_jobs(&self) -> Vec<JobId> {
        self.jobs
            .list()
            .iter()
            .filter(|job| !self.companies.contains(&job.company_id))
            .map(|job| job.id.clone())
            .collect()
    }

    /// Renders the table of one admin screen.
    pub fn render_section(&self, section: Section) -> String {
        match section {
            Section::Companies => company_table().render(self.companies.list()),
            Section::Jobs => job_table().render(self.jobs.list()),
        }
    }

    fn check_company(&self, company_id: &str) -> PanelResult<()> {
        if self.reference_policy == ReferencePolicy::Enforce
            && !self.companies.contains(company_id)
        {
            warn!(
                "event=job_write module=panel status=rejected reason=unknown_company company_id={}",
                company_id
            );
            return Err(PanelError::UnknownCompany(company_id.to_string()));
        }
        Ok(())
    }
}

/// Single-writer handle for callers on several threads.
///
/// Every operation runs under one mutex, so mutations are serialized in
/// lock acquisition order.
#[derive(Debug, Clone)]
pub struct SharedPanel {
    inner: Arc<Mutex<AdminPanel>>,
}

impl SharedPanel {
    pub fn new(panel: AdminPanel) -> Self {
        Self {
            inner: Arc::new(Mutex::new(panel)),
        }
    }

    /// Runs `f` with exclusive access to the panel.
    pub fn with<T>(&self, f: impl FnOnce(&mut AdminPanel) -> T) -> PanelResult<T> {
        let mut guard = self.inner.lock().map_err(|_| PanelError::LockPoisoned)?;
        Ok(f(&mut guard))
    }
}

#[cfg(test)]
mod tests {
    use super::{AdminPanel, PanelError, Section, SharedPanel};
    use crate::config::{PanelConfig, ReferencePolicy};
    use crate::model::job::JobInput;

    fn enforcing() -> PanelConfig {
        PanelConfig {
            reference_policy: ReferencePolicy::Enforce,
            ..PanelConfig::default()
        }
    }

    #[test]
    fn section_round_trips_menu_keys() {
        for section in [Section::Companies, Section::Jobs] {
            assert_eq!(Section::from_menu_key(section.menu_key()), Some(section));
        }
        assert_eq!(Section::from_menu_key("3"), None);
    }

    #[test]
    fn enforce_rejects_unknown_company_without_mutation() {
        let mut panel = AdminPanel::seeded(&enforcing());
        let before = panel.list_jobs().to_vec();

        let err = panel
            .add_job(JobInput::new("QA Engineer", "Tests", "2000 USD", "99"))
            .unwrap_err();
        assert_eq!(err, PanelError::UnknownCompany("99".to_string()));
        assert_eq!(panel.list_jobs(), before.as_slice());

        let mut moved = before[0].clone();
        moved.company_id = "42".to_string();
        assert!(panel.edit_job(moved).is_err());
        assert_eq!(panel.list_jobs(), before.as_slice());
    }

    #[test]
    fn delete_company_leaves_referencing_jobs_orphaned() {
        let mut panel = AdminPanel::seeded(&PanelConfig::default());
        assert!(panel.orphaned_jobs().is_empty());

        assert!(panel.delete_company("1"));
        assert_eq!(panel.list_jobs().len(), 2);
        assert_eq!(panel.orphaned_jobs(), vec!["1".to_string()]);
    }

    #[test]
    fn shared_panel_serializes_writers_across_threads() {
        let config = PanelConfig {
            seed_sample_data: false,
            ..PanelConfig::default()
        };
        let shared = SharedPanel::new(AdminPanel::from_config(&config));

        let handles: Vec<_> = (0..4)
            .map(|n| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    for i in 0..10 {
                        shared
                            .with(|panel| {
                                panel.add_job(JobInput::new(
                                    format!("job {n}-{i}"),
                                    "desc",
                                    "1 USD",
                                    "1",
                                ))
                            })
                            .unwrap()
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let ids: std::collections::HashSet<String> = shared
            .with(|panel| panel.list_jobs().iter().map(|job| job.id.clone()).collect())
            .unwrap();
        assert_eq!(ids.len(), 40);
    }
}
