//! Job record model.
//!
//! # Invariants
//! - `id` is assigned at creation and immutable thereafter.
//! - `title`, `salary` and `description` are required (form layer checks).
//! - `technologies` keeps display order.
//! - `company_id` is stored verbatim. Nothing in the job model or job store
//!   checks that the company exists, and deleting a company leaves its jobs
//!   in place.

use crate::model::company::CompanyId;
use crate::model::record::Record;
use serde::{Deserialize, Serialize};

/// Stable identifier of a job posting.
pub type JobId = String;

/// Job posting row shown on the jobs screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub description: String,
    /// Technology tags in display order.
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free text such as `3000 USD`.
    pub salary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    /// Serialized as `companyId`.
    pub company_id: CompanyId,
}

/// Job fields minus `id`, as supplied to `add_job`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub salary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    pub company_id: CompanyId,
}

impl JobInput {
    /// Creates an input with the required fields set and no contacts.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        salary: impl Into<String>,
        company_id: impl Into<CompanyId>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            salary: salary.into(),
            company_id: company_id.into(),
            ..Self::default()
        }
    }

    /// Attaches the assigned id and produces the stored record.
    pub fn into_record(self, id: JobId) -> Job {
        Job {
            id,
            title: self.title,
            description: self.description,
            technologies: self.technologies,
            location: self.location,
            salary: self.salary,
            phone: self.phone,
            email: self.email,
            telegram: self.telegram,
            instagram: self.instagram,
            company_id: self.company_id,
        }
    }
}

impl Job {
    /// Drops the id, e.g. to prefill an edit form.
    pub fn to_input(&self) -> JobInput {
        JobInput {
            title: self.title.clone(),
            description: self.description.clone(),
            technologies: self.technologies.clone(),
            location: self.location.clone(),
            salary: self.salary.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            telegram: self.telegram.clone(),
            instagram: self.instagram.clone(),
            company_id: self.company_id.clone(),
        }
    }
}

impl Record for Job {
    type Input = JobInput;

    const KIND: &'static str = "job";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, input: JobInput) -> Self {
        input.into_record(id)
    }
}
