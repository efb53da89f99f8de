//! Add/edit form validation.
//!
//! # Responsibility
//! - Turn raw form field text into store inputs.
//! - Reject submissions with missing required fields before any mutation.
//!
//! # Invariants
//! - Stores never see an input that failed validation here.
//! - Errors are reported for every missing field, in form order.
//! - Blank optional fields become `None`.

use crate::model::company::{Company, CompanyInput};
use crate::model::job::{Job, JobInput};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One failed field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field key, matching the serialized record field name.
    pub field: &'static str,
    /// Message shown under the field.
    pub message: &'static str,
}

/// Every failed rule of one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub fields: Vec<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the message for `field`, if that field failed.
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    fn require(&mut self, field: &'static str, value: &str, message: &'static str) {
        if value.trim().is_empty() {
            self.fields.push(FieldError { field, message });
        }
    }

    fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl Display for FormErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.fields.iter().map(|error| error.field).collect();
        write!(f, "missing required fields: {}", fields.join(", "))
    }
}

impl Error for FormErrors {}

/// Raw values of the company add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyForm {
    pub title: String,
    pub description: String,
    pub image: String,
    pub website: String,
}

impl CompanyForm {
    /// Prefills the form from a stored company.
    pub fn from_record(company: &Company) -> Self {
        Self {
            title: company.title.clone(),
            description: company.description.clone().unwrap_or_default(),
            image: company.image.clone().unwrap_or_default(),
            website: company.website.clone().unwrap_or_default(),
        }
    }

    /// Checks required fields and builds a company input.
    pub fn validate(&self) -> Result<CompanyInput, FormErrors> {
        let mut errors = FormErrors::default();
        errors.require("title", &self.title, "Please enter the company title");

        errors.into_result(CompanyInput {
            title: self.title.trim().to_string(),
            description: optional(&self.description),
            image: optional(&self.image),
            website: optional(&self.website),
        })
    }
}

/// Raw values of the job add/edit form.
///
/// `technologies` is the comma-separated tag field as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobForm {
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub location: String,
    pub salary: String,
    pub phone: String,
    pub email: String,
    pub telegram: String,
    pub instagram: String,
    pub company_id: String,
}

impl JobForm {
    /// Prefills the form from a stored job.
    pub fn from_record(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            description: job.description.clone(),
            technologies: job.technologies.join(", "),
            location: job.location.clone().unwrap_or_default(),
            salary: job.salary.clone(),
            phone: job.phone.clone().unwrap_or_default(),
            email: job.email.clone().unwrap_or_default(),
            telegram: job.telegram.clone().unwrap_or_default(),
            instagram: job.instagram.clone().unwrap_or_default(),
            company_id: job.company_id.clone(),
        }
    }

    /// Checks required fields and builds a job input.
    pub fn validate(&self) -> Result<JobInput, FormErrors> {
        let mut errors = FormErrors::default();
        errors.require("title", &self.title, "Please enter the job title");
        errors.require(
            "description",
            &self.description,
            "Please enter the job description",
        );
        errors.require("salary", &self.salary, "Please enter the job salary");
        errors.require(
            "companyId",
            &self.company_id,
            "Please enter the job CompanyId",
        );

        errors.into_result(JobInput {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            technologies: split_technologies(&self.technologies),
            location: optional(&self.location),
            salary: self.salary.trim().to_string(),
            phone: optional(&self.phone),
            email: optional(&self.email),
            telegram: optional(&self.telegram),
            instagram: optional(&self.instagram),
            company_id: self.company_id.trim().to_string(),
        })
    }
}

/// Splits a comma-separated tag field, keeping order and dropping blanks.
pub fn split_technologies(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{split_technologies, CompanyForm, JobForm};

    #[test]
    fn split_technologies_trims_and_drops_blanks() {
        assert_eq!(
            split_technologies(" React, Redux ,, CSS ,"),
            vec!["React", "Redux", "CSS"]
        );
        assert!(split_technologies("  ").is_empty());
    }

    #[test]
    fn company_form_requires_title() {
        let form = CompanyForm {
            title: "   ".to_string(),
            website: "https://example.com".to_string(),
            ..CompanyForm::default()
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.message_for("title"),
            Some("Please enter the company title")
        );
        assert_eq!(errors.fields.len(), 1);
    }

    #[test]
    fn company_form_maps_blank_optionals_to_none() {
        let form = CompanyForm {
            title: " Tesla ".to_string(),
            description: "".to_string(),
            image: " ".to_string(),
            website: "https://www.tesla.com".to_string(),
        };

        let input = form.validate().unwrap();
        assert_eq!(input.title, "Tesla");
        assert_eq!(input.description, None);
        assert_eq!(input.image, None);
        assert_eq!(input.website.as_deref(), Some("https://www.tesla.com"));
    }

    #[test]
    fn job_form_reports_every_missing_field_in_order() {
        let errors = JobForm::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.fields.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "description", "salary", "companyId"]);
        assert!(errors.to_string().contains("companyId"));
    }

    #[test]
    fn job_form_messages_name_the_missing_field() {
        let errors = JobForm::default().validate().unwrap_err();
        assert_eq!(errors.message_for("title"), Some("Please enter the job title"));
        assert_eq!(
            errors.message_for("description"),
            Some("Please enter the job description")
        );
        assert_eq!(errors.message_for("salary"), Some("Please enter the job salary"));
        assert_eq!(
            errors.message_for("companyId"),
            Some("Please enter the job CompanyId")
        );
    }
}
