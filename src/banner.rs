//! Startup banner and session summary display.

use crate::analytics::UsageStats;
use crate::consts::{AUTHOR, HOMEPAGE, REPO, plural, plural_with};

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub business: &'a str,
    pub business_type: &'a str,
    pub templates: &'a str,
    pub picker: &'a str,
    pub profile: &'a str,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║          R E P L Y S M I T H          ║
   ║   a kind word for every review        ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   home      {}
   repo      {}
   business  {} ({})
   templates {}
   picker    {}
   profile   {}

   type a review to reply to it, /help for commands
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        HOMEPAGE,
        REPO,
        info.business,
        info.business_type,
        info.templates,
        info.picker,
        info.profile,
    );
}

/// One-line usage summary, or `None` when nothing happened.
pub fn summary_line(stats: &UsageStats) -> Option<String> {
    if stats.is_empty() {
        return None;
    }
    let mut parts = vec![plural_with(stats.generated, "reply", "replies")];
    if stats.rejected > 0 {
        parts.push(format!("{} rejected", plural(stats.rejected, "submission")));
    }
    if stats.demos > 0 {
        parts.push(format!("{} loaded", plural(stats.demos, "demo")));
    }
    Some(format!("session: {}", parts.join(", ")))
}

/// Print the session summary (usage + farewell).
pub fn print_session_summary(stats: &UsageStats) {
    if let Some(line) = summary_line(stats) {
        println!("{line}");
    }
    println!("goodbye.");
}
