//! JSON records printed by `--json` output.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::engine::GeneratedResponse;
use crate::submission::{BusinessType, ReviewSubmission, ValidationErrors};

#[derive(Debug, Serialize)]
pub struct ResponseReport {
    pub success: bool,
    pub response: String,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Serialize)]
pub struct ReportMetadata {
    pub business_name: String,
    pub business_type: String,
    pub rating: Option<i64>,
    pub template_index: usize,
    /// RFC 3339, UTC.
    pub generated_at: String,
}

impl ResponseReport {
    pub fn new(submission: &ReviewSubmission, reply: &GeneratedResponse) -> Self {
        Self {
            success: true,
            response: reply.text.clone(),
            metadata: ReportMetadata {
                business_name: submission.name().to_string(),
                business_type: submission.business_type.trim().to_string(),
                rating: submission.rating,
                template_index: reply.template_index,
                generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RejectionReport {
    pub success: bool,
    pub errors: Vec<RejectedField>,
}

#[derive(Debug, Serialize)]
pub struct RejectedField {
    pub field: &'static str,
    pub message: String,
}

impl From<&ValidationErrors> for RejectionReport {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            success: false,
            errors: errors
                .errors()
                .iter()
                .map(|e| RejectedField {
                    field: e.field(),
                    message: e.to_string(),
                })
                .collect(),
        }
    }
}

/// The business-type catalogue: keys in form order plus key → label.
#[derive(Debug, Serialize)]
pub struct BusinessTypesReport {
    pub business_types: Vec<&'static str>,
    pub display_names: serde_json::Map<String, serde_json::Value>,
}

impl BusinessTypesReport {
    pub fn new() -> Self {
        Self {
            business_types: BusinessType::ALL.iter().map(|t| t.key()).collect(),
            display_names: BusinessType::ALL
                .iter()
                .map(|t| (t.key().to_string(), t.label().into()))
                .collect(),
        }
    }
}

impl Default for BusinessTypesReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ResponseEngine;
    use crate::picker::mock::ScriptedPicker;
    use crate::templates::TemplateSet;
    use serde_json::Value;

    #[test]
    fn response_report_shape() {
        let sub = ReviewSubmission::new(" Joe's ", "restaurant", "Great food here", Some(5));
        let engine =
            ResponseEngine::new(TemplateSet::builtin(), Box::new(ScriptedPicker::fixed(2)));
        let reply = engine.generate(&sub);

        let json: Value = serde_json::to_value(ResponseReport::new(&sub, &reply)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["response"], reply.text.as_str());
        assert_eq!(json["metadata"]["business_name"], "Joe's");
        assert_eq!(json["metadata"]["rating"], 5);
        assert_eq!(json["metadata"]["template_index"], 2);
        assert!(json["metadata"]["generated_at"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn rejection_report_lists_fields() {
        let errors = ReviewSubmission::default().check().unwrap_err();
        let json: Value = serde_json::to_value(RejectionReport::from(&errors)).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"].as_array().unwrap().len(), 4);
        assert_eq!(json["errors"][0]["field"], "businessName");
        assert_eq!(json["errors"][3]["message"], "Rating must be between 1 and 5");
    }

    #[test]
    fn business_types_report() {
        let json: Value = serde_json::to_value(BusinessTypesReport::new()).unwrap();
        assert_eq!(json["business_types"].as_array().unwrap().len(), 8);
        assert_eq!(json["display_names"]["real-estate"], "real estate agency");
        assert_eq!(json["display_names"]["other"], "business");
    }
}
