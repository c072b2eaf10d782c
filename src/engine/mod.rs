//! The review-reply engine.
//!
//! [`ResponseEngine`] checks a [`ReviewSubmission`] and fills a canned
//! template for it. It owns its templates and its [`TemplatePicker`]; there
//! is no shared state between engines.

pub mod closing;

use std::fmt;

use serde::Serialize;

pub use closing::Closing;

use crate::picker::{RandomPicker, TemplatePicker};
use crate::submission::{ReviewSubmission, ValidationError};
use crate::templates::{NAME_PLACEHOLDER, TYPE_PLACEHOLDER, TemplateSet};

/// A filled-in reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedResponse {
    pub text: String,
    /// Rating whose template list was used (3 when the rating had none).
    pub rating_set: u8,
    pub template_index: usize,
    pub closing: Option<Closing>,
}

impl fmt::Display for GeneratedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub struct ResponseEngine {
    templates: TemplateSet,
    picker: Box<dyn TemplatePicker>,
}

impl ResponseEngine {
    pub fn new(templates: TemplateSet, picker: Box<dyn TemplatePicker>) -> Self {
        Self { templates, picker }
    }

    /// Built-in templates with a thread-RNG picker.
    pub fn with_random() -> Self {
        Self::new(TemplateSet::builtin(), Box::new(RandomPicker))
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Every rule the submission violates; empty when it is acceptable.
    pub fn validate(&self, submission: &ReviewSubmission) -> Vec<ValidationError> {
        submission.validate()
    }

    /// Fill a template for `submission`.
    ///
    /// The caller is expected to have validated the submission first; this
    /// does not re-check it. Missing or out-of-range ratings use the
    /// rating-3 templates; a missing rating also gets no closing sentence.
    pub fn generate(&self, submission: &ReviewSubmission) -> GeneratedResponse {
        let (rating_set, templates) = self.templates.for_rating(submission.rating);
        let template_index = self.picker.pick(templates.len()) % templates.len();

        let mut text = render(
            &templates[template_index],
            submission.name(),
            submission.business_label(),
        );

        let closing = Closing::for_review(&submission.review_text, submission.rating);
        if let Some(closing) = closing {
            text.push(' ');
            text.push_str(closing.sentence());
        }

        tracing::debug!(
            rating_set,
            template_index,
            closing = ?closing,
            "generated reply"
        );

        GeneratedResponse {
            text,
            rating_set,
            template_index,
            closing,
        }
    }
}

impl Default for ResponseEngine {
    fn default() -> Self {
        Self::with_random()
    }
}

/// Replace every placeholder in one pass. Substituted values are copied
/// verbatim and never scanned for placeholders themselves.
fn render(template: &str, business_name: &str, business_label: &str) -> String {
    let mut out = String::with_capacity(template.len() + business_name.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix(NAME_PLACEHOLDER) {
            out.push_str(business_name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(TYPE_PLACEHOLDER) {
            out.push_str(business_label);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::mock::ScriptedPicker;
    use std::collections::BTreeMap;

    fn engine_with(index: usize) -> ResponseEngine {
        ResponseEngine::new(TemplateSet::builtin(), Box::new(ScriptedPicker::fixed(index)))
    }

    fn typed_templates() -> TemplateSet {
        let sets: BTreeMap<u8, Vec<String>> = (1..=5)
            .map(|r| {
                (
                    r,
                    vec!["{businessName} is a fine {businessType}.".to_string()],
                )
            })
            .collect();
        TemplateSet::new(sets).unwrap()
    }

    #[test]
    fn render_replaces_both_placeholders() {
        assert_eq!(
            render("{businessName}, the {businessType}", "Joe's", "restaurant"),
            "Joe's, the restaurant"
        );
    }

    #[test]
    fn render_replaces_every_occurrence() {
        assert_eq!(
            render("{businessName} & {businessName}", "A1", "x"),
            "A1 & A1"
        );
    }

    #[test]
    fn render_keeps_unrelated_braces() {
        assert_eq!(render("{x} {businessName} {", "Bo", "y"), "{x} Bo {");
    }

    #[test]
    fn render_does_not_rescan_substitutions() {
        assert_eq!(
            render("{businessName}", "{businessType} Inc", "shop"),
            "{businessType} Inc"
        );
    }

    #[test]
    fn generate_uses_picked_template() {
        let sub = ReviewSubmission::new(
            "Joe's Restaurant",
            "restaurant",
            "Lovely evening out",
            Some(5),
        );
        let reply = engine_with(1).generate(&sub);
        assert_eq!(reply.template_index, 1);
        assert_eq!(reply.rating_set, 5);
        assert!(reply.text.starts_with("Wow, thank you for the fantastic review!"));
        assert!(reply.text.contains("Joe's Restaurant"));
        assert_eq!(reply.closing, None);
    }

    #[test]
    fn generate_appends_closing_with_space() {
        let sub = ReviewSubmission::new("Joe's", "restaurant", "terrible experience", Some(1));
        let reply = engine_with(0).generate(&sub);
        assert!(reply.text.ends_with(
            ". We'd love the opportunity to make this right. Please contact us directly."
        ));
    }

    #[test]
    fn generate_trims_business_name() {
        let sub = ReviewSubmission::new("  Joe's  ", "restaurant", "Lovely evening out", Some(4));
        let reply = engine_with(2).generate(&sub);
        assert!(reply.text.contains("Thank you for choosing Joe's and"));
    }

    #[test]
    fn generate_substitutes_business_label() {
        let engine = ResponseEngine::new(typed_templates(), Box::new(ScriptedPicker::fixed(0)));
        let sub =
            ReviewSubmission::new("Bright Smiles", "dental", "Painless cleaning today", Some(3));
        assert_eq!(
            engine.generate(&sub).text,
            "Bright Smiles is a fine dental practice."
        );
    }

    #[test]
    fn generate_unknown_type_reads_business() {
        let engine = ResponseEngine::new(typed_templates(), Box::new(ScriptedPicker::fixed(0)));
        let sub = ReviewSubmission::new("Acme", "unknown-type", "Quick and friendly", Some(3));
        assert_eq!(engine.generate(&sub).text, "Acme is a fine business.");
    }

    #[test]
    fn generate_out_of_range_rating_uses_three() {
        let sub = ReviewSubmission::new("Joe's", "restaurant", "food food food", Some(9));
        let reply = engine_with(0).generate(&sub);
        assert_eq!(reply.rating_set, 3);
        assert!(reply.text.starts_with("Thank you for your honest feedback about Joe's."));
    }

    #[test]
    fn validate_delegates_to_submission() {
        let engine = ResponseEngine::default();
        let sub = ReviewSubmission::default();
        assert_eq!(engine.validate(&sub), sub.validate());
    }

    #[test]
    fn display_is_text() {
        let sub = ReviewSubmission::new("Joe's", "restaurant", "Lovely evening out", Some(4));
        let reply = engine_with(0).generate(&sub);
        assert_eq!(reply.to_string(), reply.text);
    }
}
