//! Sample submissions for trying the generator without typing a review.

use crate::submission::ReviewSubmission;

pub fn demo_submissions() -> Vec<ReviewSubmission> {
    vec![
        ReviewSubmission::new(
            "Joe's Restaurant",
            "restaurant",
            "Great food and excellent service! The staff was very friendly and the atmosphere was perfect for our date night. Will definitely be back!",
            Some(5),
        ),
        ReviewSubmission::new(
            "Tipton Auto Repair",
            "auto-repair",
            "Fixed my car quickly and at a fair price. The mechanic explained everything clearly.",
            Some(4),
        ),
        ReviewSubmission::new(
            "Covington Dental Care",
            "dental",
            "Clean office and professional staff. The dentist was gentle and thorough.",
            Some(5),
        ),
    ]
}

/// The submission loaded by the REPL `/demo` command.
pub fn default_demo() -> ReviewSubmission {
    demo_submissions().swap_remove(0)
}
