use serde::{Deserialize, Serialize};

/// Sentiment sentence appended after the template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Closing {
    Cuisine,
    Service,
    Apology,
}

impl Closing {
    pub fn sentence(self) -> &'static str {
        match self {
            Closing::Cuisine => "We're so glad you enjoyed our cuisine!",
            Closing::Service => "Our team works hard to provide excellent service.",
            Closing::Apology => {
                "We'd love the opportunity to make this right. Please contact us directly."
            }
        }
    }

    /// Pick the closing for a review. First match wins: "food" with 4+ stars,
    /// then "service" with 4+ stars, then any rating of 2 or less.
    pub fn for_review(review_text: &str, rating: Option<i64>) -> Option<Self> {
        let review = review_text.to_lowercase();
        let rating = rating?;
        if review.contains("food") && rating >= 4 {
            Some(Closing::Cuisine)
        } else if review.contains("service") && rating >= 4 {
            Some(Closing::Service)
        } else if rating <= 2 {
            Some(Closing::Apology)
        } else {
            None
        }
    }
}
