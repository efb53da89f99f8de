//! Company record model.
//!
//! # Invariants
//! - `id` is assigned at creation and immutable thereafter.
//! - `title` is required; emptiness is rejected by the form layer, not here.

use crate::model::record::Record;
use serde::{Deserialize, Serialize};

/// Stable identifier of a company.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CompanyId = String;

/// Company row shown on the companies screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    /// Display name.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Company fields minus `id`, as supplied to `add_company`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInput {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl CompanyInput {
    /// Creates an input with only the required title set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Attaches the assigned id and produces the stored record.
    pub fn into_record(self, id: CompanyId) -> Company {
        Company {
            id,
            title: self.title,
            description: self.description,
            image: self.image,
            website: self.website,
        }
    }
}

impl Company {
    /// Creates a company with a caller-provided id and title only.
    ///
    /// Used by seed data and tests where identity already exists.
    pub fn with_id(id: impl Into<CompanyId>, title: impl Into<String>) -> Self {
        CompanyInput::new(title).into_record(id.into())
    }

    /// Drops the id, e.g. to prefill an edit form.
    pub fn to_input(&self) -> CompanyInput {
        CompanyInput {
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            website: self.website.clone(),
        }
    }
}

impl Record for Company {
    type Input = CompanyInput;

    const KIND: &'static str = "company";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_input(id: String, input: CompanyInput) -> Self {
        input.into_record(id)
    }
}
