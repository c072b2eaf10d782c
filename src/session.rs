//! Form state and submission assembly.
//!
//! The [`Draft`] holds the fields the user has set so far at the REPL. Each
//! review line typed at the prompt is combined with it into a
//! [`ReviewSubmission`]. One-shot commands build theirs with [`assemble`]
//! from a JSON form, flag overrides and the saved profile.

use std::path::Path;

use anyhow::{Context, Result};

use crate::commands::StateChange;
use crate::config::{Config, ConfigKey};
use crate::submission::ReviewSubmission;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub business_name: String,
    pub business_type: String,
    pub rating: Option<i64>,
    /// Last review text submitted, for `/regenerate`.
    pub last_review: Option<String>,
}

impl Draft {
    /// Start from a saved profile.
    pub fn new(business_name: Option<String>, business_type: Option<String>) -> Self {
        Self {
            business_name: business_name.unwrap_or_default(),
            business_type: business_type.unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Combine the draft with a review text.
    pub fn submission(&self, review_text: &str) -> ReviewSubmission {
        ReviewSubmission::new(
            self.business_name.clone(),
            self.business_type.clone(),
            review_text,
            self.rating,
        )
    }

    /// Submission for the previous review, if any.
    pub fn resubmission(&self) -> Option<ReviewSubmission> {
        self.last_review.as_deref().map(|r| self.submission(r))
    }

    pub fn apply(&mut self, change: &StateChange) {
        match change {
            StateChange::BusinessName(name) => self.business_name = name.clone(),
            StateChange::BusinessType(kind) => self.business_type = kind.clone(),
            StateChange::Rating(rating) => self.rating = Some(*rating),
            StateChange::LoadDemo(demo) => {
                self.business_name = demo.business_name.clone();
                self.business_type = demo.business_type.clone();
                self.rating = demo.rating;
                self.last_review = Some(demo.review_text.clone());
            }
        }
    }

    fn field_or_dash(value: &str) -> &str {
        if value.trim().is_empty() { "—" } else { value }
    }

    /// Lines for `/draft`.
    pub fn summary(&self) -> Vec<String> {
        vec![
            format!("name     {}", Self::field_or_dash(&self.business_name)),
            format!("type     {}", Self::field_or_dash(&self.business_type)),
            format!(
                "rating   {}",
                self.rating
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "—".to_string())
            ),
            format!(
                "review   {}",
                Self::field_or_dash(self.last_review.as_deref().unwrap_or_default())
            ),
        ]
    }
}

/// Field values given as flags. Each one that is set replaces the form's.
#[derive(Debug, Clone, Default)]
pub struct FieldOverrides {
    pub business_name: Option<String>,
    pub business_type: Option<String>,
    pub review_text: Option<String>,
    pub rating: Option<i64>,
}

/// Read a JSON form (`businessName`, `businessType`, `reviewText`, `rating`).
/// Missing fields are left empty.
pub fn read_form(path: &Path) -> Result<ReviewSubmission> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read form {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("invalid form {}", path.display()))
}

/// Start from the form, apply the overrides, then fill a name or type that
/// is still blank from the saved profile.
pub fn assemble(
    form: Option<ReviewSubmission>,
    overrides: FieldOverrides,
    profile: &Config,
) -> Result<ReviewSubmission> {
    let mut submission = form.unwrap_or_default();

    if let Some(name) = overrides.business_name {
        submission.business_name = name;
    }
    if let Some(kind) = overrides.business_type {
        submission.business_type = kind;
    }
    if let Some(review) = overrides.review_text {
        submission.review_text = review;
    }
    if overrides.rating.is_some() {
        submission.rating = overrides.rating;
    }

    if submission.business_name.trim().is_empty()
        && let Some(name) = profile.get(ConfigKey::BusinessName)?
    {
        submission.business_name = name;
    }
    if submission.business_type.trim().is_empty()
        && let Some(kind) = profile.get(ConfigKey::BusinessType)?
    {
        submission.business_type = kind;
    }

    Ok(submission)
}
