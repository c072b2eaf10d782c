//! Reply templates keyed by star rating.
//!
//! Templates use `{businessName}` and `{businessType}` as placeholders.
//! Every set holds at least one template for each rating 1 through 5, and
//! every template names the business.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use thiserror::Error;

use crate::consts::{FALLBACK_RATING, MAX_RATING, MIN_RATING};

pub const NAME_PLACEHOLDER: &str = "{businessName}";
pub const TYPE_PLACEHOLDER: &str = "{businessType}";

const FIVE_STAR: &[&str] = &[
    "Thank you so much for the amazing 5-star review! We're thrilled you had such a wonderful experience at {businessName}. Your feedback means the world to us, and we can't wait to serve you again soon!",
    "Wow, thank you for the fantastic review! We're so happy you chose {businessName} and that we exceeded your expectations. We look forward to welcoming you back!",
    "Thank you for taking the time to leave such a wonderful review! We're delighted you had a great experience at {businessName}. See you again soon!",
];

const FOUR_STAR: &[&str] = &[
    "Thank you for the great 4-star review! We're so pleased you enjoyed your experience at {businessName}. We appreciate your feedback and look forward to serving you again.",
    "Thanks for the wonderful review! We're happy you had a positive experience at {businessName}. We're always working to improve and appreciate your support.",
    "Thank you for choosing {businessName} and for the lovely review! We're glad you enjoyed your visit and hope to see you again soon.",
];

const THREE_STAR: &[&str] = &[
    "Thank you for your honest feedback about {businessName}. We appreciate you taking the time to share your experience. We're always looking for ways to improve and would love to welcome you back.",
    "Thanks for the review! We're glad you visited {businessName} and appreciate your feedback. We're constantly working to enhance our service and hope to exceed your expectations next time.",
    "Thank you for your review of {businessName}. We value all feedback as it helps us grow and improve. We'd love the chance to provide you with an even better experience in the future.",
];

const TWO_STAR: &[&str] = &[
    "Thank you for bringing this to our attention. We're sorry your experience at {businessName} didn't meet your expectations. We take all feedback seriously and would appreciate the opportunity to discuss this further. Please contact us directly so we can make this right.",
    "We sincerely apologize that your visit to {businessName} wasn't up to our usual standards. Your feedback is important to us, and we'd like to make things right. Please reach out to us directly.",
    "Thank you for your honest feedback. We're disappointed to hear about your experience at {businessName} and would like to address your concerns personally. Please contact us so we can improve.",
];

const ONE_STAR: &[&str] = &[
    "We're truly sorry to hear about your disappointing experience at {businessName}. This is not the level of service we strive for, and we take your feedback very seriously. Please contact us directly so we can address your concerns and make this right.",
    "We sincerely apologize for falling short of your expectations at {businessName}. Your experience is not reflective of our values, and we'd like to make it right. Please reach out to us directly to discuss this further.",
    "Thank you for bringing this to our attention. We're genuinely sorry about your experience at {businessName} and want to make things right. Please contact us directly so we can address your concerns properly.",
];

/// Why a custom template set was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("no templates for rating {0}")]
    MissingRating(u8),
    #[error("rating {0} is outside 1..=5")]
    UnexpectedRating(u8),
    #[error("template {index} for rating {rating} does not contain {{businessName}}")]
    MissingNamePlaceholder { rating: u8, index: usize },
}

/// Rating → ordered template list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    sets: BTreeMap<u8, Vec<String>>,
}

impl TemplateSet {
    /// The stock templates, three per rating.
    pub fn builtin() -> Self {
        let sets = [
            (1, ONE_STAR),
            (2, TWO_STAR),
            (3, THREE_STAR),
            (4, FOUR_STAR),
            (5, FIVE_STAR),
        ]
        .into_iter()
        .map(|(rating, templates)| {
            (
                rating,
                templates.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
            )
        })
        .collect();
        Self { sets }
    }

    /// Build a set, enforcing that ratings 1–5 are all present and non-empty
    /// and that every template names the business.
    pub fn new(sets: BTreeMap<u8, Vec<String>>) -> Result<Self, TemplateError> {
        if let Some(&rating) = sets.keys().find(|r| !is_rating(**r)) {
            return Err(TemplateError::UnexpectedRating(rating));
        }
        for rating in MIN_RATING..=MAX_RATING {
            let rating = rating as u8;
            let templates = match sets.get(&rating) {
                Some(t) if !t.is_empty() => t,
                _ => return Err(TemplateError::MissingRating(rating)),
            };
            if let Some(index) = templates.iter().position(|t| !t.contains(NAME_PLACEHOLDER)) {
                return Err(TemplateError::MissingNamePlaceholder { rating, index });
            }
        }
        Ok(Self { sets })
    }

    /// Parse a JSON object such as `{"1": ["..."], ..., "5": ["..."]}`.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let sets: BTreeMap<u8, Vec<String>> =
            serde_json::from_str(json).context("template file is not a rating → list map")?;
        Ok(Self::new(sets)?)
    }

    /// Read and parse a JSON template file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read templates from {}", path.display()))?;
        let set = Self::from_json(&json)
            .with_context(|| format!("invalid template file {}", path.display()))?;
        tracing::debug!(path = %path.display(), total = set.len(), "loaded custom templates");
        Ok(set)
    }

    /// Templates for `rating`, falling back to the rating-3 list when the
    /// rating is missing or has none. Returns the rating actually used.
    pub fn for_rating(&self, rating: Option<i64>) -> (u8, &[String]) {
        let found = rating
            .and_then(|r| u8::try_from(r).ok())
            .and_then(|r| self.sets.get_key_value(&r));
        match found {
            Some((&r, templates)) => (r, templates),
            None => (FALLBACK_RATING, self.fallback()),
        }
    }

    /// Total number of templates across all ratings.
    pub fn len(&self) -> usize {
        self.sets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn fallback(&self) -> &[String] {
        self.sets
            .get(&FALLBACK_RATING)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_rating(r: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&i64::from(r))
}
