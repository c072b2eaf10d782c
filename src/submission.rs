//! Review submissions and the rules they must satisfy.
//!
//! A [`ReviewSubmission`] is built at the input boundary (CLI flags, a JSON
//! form file, or the REPL draft) and checked with
//! [`ReviewSubmission::validate`] before it reaches the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    DEFAULT_BUSINESS_LABEL, MAX_RATING, MAX_REVIEW_CHARS, MIN_BUSINESS_NAME_CHARS, MIN_RATING,
    MIN_REVIEW_CHARS,
};

/// Known business categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessType {
    Restaurant,
    AutoRepair,
    BeautySalon,
    Dental,
    RealEstate,
    Retail,
    Healthcare,
    Other,
}

impl BusinessType {
    pub const ALL: [BusinessType; 8] = [
        BusinessType::Restaurant,
        BusinessType::AutoRepair,
        BusinessType::BeautySalon,
        BusinessType::Dental,
        BusinessType::RealEstate,
        BusinessType::Retail,
        BusinessType::Healthcare,
        BusinessType::Other,
    ];

    /// Form key, e.g. `"auto-repair"`.
    pub fn key(self) -> &'static str {
        match self {
            BusinessType::Restaurant => "restaurant",
            BusinessType::AutoRepair => "auto-repair",
            BusinessType::BeautySalon => "beauty-salon",
            BusinessType::Dental => "dental",
            BusinessType::RealEstate => "real-estate",
            BusinessType::Retail => "retail",
            BusinessType::Healthcare => "healthcare",
            BusinessType::Other => "other",
        }
    }

    /// Human-readable label substituted for `{businessType}`.
    pub fn label(self) -> &'static str {
        match self {
            BusinessType::Restaurant => "restaurant",
            BusinessType::AutoRepair => "auto repair shop",
            BusinessType::BeautySalon => "beauty salon",
            BusinessType::Dental => "dental practice",
            BusinessType::RealEstate => "real estate agency",
            BusinessType::Retail => "retail store",
            BusinessType::Healthcare => "healthcare practice",
            BusinessType::Other => DEFAULT_BUSINESS_LABEL,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// Display label for a raw business-type key. Unknown keys read as "business".
pub fn display_label(key: &str) -> &'static str {
    BusinessType::from_key(key.trim())
        .map(BusinessType::label)
        .unwrap_or(DEFAULT_BUSINESS_LABEL)
}

/// A single violated submission rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Business name must be at least {} characters", MIN_BUSINESS_NAME_CHARS)]
    BusinessNameTooShort,
    #[error("Business type is required")]
    BusinessTypeMissing,
    #[error("Review text must be at least {} characters", MIN_REVIEW_CHARS)]
    ReviewTooShort,
    #[error("Review text must be at most {} characters", MAX_REVIEW_CHARS)]
    ReviewTooLong,
    #[error("Rating must be between {} and {}", MIN_RATING, MAX_RATING)]
    RatingOutOfRange,
}

impl ValidationError {
    /// The submission field this rule belongs to (camelCase form name).
    pub fn field(self) -> &'static str {
        match self {
            ValidationError::BusinessNameTooShort => "businessName",
            ValidationError::BusinessTypeMissing => "businessType",
            ValidationError::ReviewTooShort | ValidationError::ReviewTooLong => "reviewText",
            ValidationError::RatingOutOfRange => "rating",
        }
    }
}

/// Every rule a rejected submission violated. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The four form fields describing a business and the review to answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewSubmission {
    pub business_name: String,
    pub business_type: String,
    pub review_text: String,
    pub rating: Option<i64>,
}

impl ReviewSubmission {
    pub fn new(
        business_name: impl Into<String>,
        business_type: impl Into<String>,
        review_text: impl Into<String>,
        rating: Option<i64>,
    ) -> Self {
        Self {
            business_name: business_name.into(),
            business_type: business_type.into(),
            review_text: review_text.into(),
            rating,
        }
    }

    /// Check every rule and report all violations, in field order.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name().chars().count() < MIN_BUSINESS_NAME_CHARS {
            errors.push(ValidationError::BusinessNameTooShort);
        }
        if self.business_type.trim().is_empty() {
            errors.push(ValidationError::BusinessTypeMissing);
        }

        let review_chars = self.review().chars().count();
        if review_chars < MIN_REVIEW_CHARS {
            errors.push(ValidationError::ReviewTooShort);
        }
        if review_chars > MAX_REVIEW_CHARS {
            errors.push(ValidationError::ReviewTooLong);
        }

        match self.rating {
            Some(r) if (MIN_RATING..=MAX_RATING).contains(&r) => {}
            _ => errors.push(ValidationError::RatingOutOfRange),
        }

        errors
    }

    /// [`validate`](Self::validate) as a `Result`, for callers using `?`.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Business name with surrounding whitespace removed.
    pub fn name(&self) -> &str {
        self.business_name.trim()
    }

    /// Review text with surrounding whitespace removed.
    pub fn review(&self) -> &str {
        self.review_text.trim()
    }

    /// Display label for this submission's business type.
    pub fn business_label(&self) -> &'static str {
        display_label(&self.business_type)
    }
}
