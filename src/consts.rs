//! Project-wide constants.

use std::path::PathBuf;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Shortest accepted business name, in characters, after trimming.
pub const MIN_BUSINESS_NAME_CHARS: usize = 2;

/// Accepted review length range, in characters, after trimming.
pub const MIN_REVIEW_CHARS: usize = 10;
pub const MAX_REVIEW_CHARS: usize = 1000;

/// Accepted star ratings.
pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Rating whose templates are used when a rating has no template list.
pub const FALLBACK_RATING: u8 = 3;

/// Display label for business types outside the known catalogue.
pub const DEFAULT_BUSINESS_LABEL: &str = "business";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "REPLYSMITH_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "replysmith=warn";

/// Default database path: `~/.replysmith/replysmith.db`.
/// Holds the saved business profile.
pub fn default_db_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".replysmith").join("replysmith.db"))
}

/// Format a count with a regular `s` plural (e.g. "1 error", "3 errors").
pub fn plural(n: u64, word: &str) -> String {
    plural_with(n, word, &format!("{word}s"))
}

pub fn plural_with(n: u64, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!AUTHOR.is_empty());
        assert!(!HOMEPAGE.is_empty());
        assert!(!REPO.is_empty());
        assert!(!DEFAULT_BUSINESS_LABEL.is_empty());
    }

    #[test]
    fn consts_from_cargo_toml() {
        assert!(AUTHOR.contains("Assaf Sapir"));
        assert!(REPO.contains("replysmith"));
    }

    #[test]
    fn limits_are_consistent() {
        assert!(MIN_REVIEW_CHARS < MAX_REVIEW_CHARS);
        assert!(MIN_RATING < MAX_RATING);
        assert!((MIN_RATING..=MAX_RATING).contains(&i64::from(FALLBACK_RATING)));
    }

    #[test]
    fn default_db_path_lives_in_dot_dir() {
        if let Some(path) = default_db_path() {
            assert!(path.ends_with(".replysmith/replysmith.db"));
        }
    }

    #[test]
    fn plural_singular() {
        assert_eq!(plural(1, "error"), "1 error");
    }

    #[test]
    fn plural_many_and_zero() {
        assert_eq!(plural(0, "error"), "0 errors");
        assert_eq!(plural(3, "error"), "3 errors");
    }

    #[test]
    fn plural_with_irregular() {
        assert_eq!(plural_with(2, "reply", "replies"), "2 replies");
        assert_eq!(plural_with(1, "reply", "replies"), "1 reply");
    }
}
