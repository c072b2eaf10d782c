//! Built-in REPL commands prefixed with `/`.
//!
//! Commands implement the [`Command`] trait and are registered in a
//! [`CommandRegistry`]. The registry handles dispatch, alias resolution,
//! argument splitting and dynamic help generation. Anything typed at the
//! prompt that is not a command is treated as review text.

mod demo;
mod draft;
mod help;
mod kind;
mod name;
mod quit;
mod rating;
mod regenerate;
mod types;

use async_trait::async_trait;
use std::sync::Arc;

use crate::session::Draft;
use crate::submission::ReviewSubmission;

/// Session info available to commands during execution.
pub struct SessionInfo<'a> {
    pub draft: &'a Draft,
    /// Where the business profile is saved.
    pub db_path: &'a str,
}

/// A draft change the REPL needs to apply after a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    BusinessName(String),
    BusinessType(String),
    Rating(i64),
    /// Replace the whole draft with a demo submission.
    LoadDemo(ReviewSubmission),
}

/// What the REPL should do after a command runs.
#[derive(Debug)]
pub enum CommandResult {
    /// Not a command; treat the input as review text.
    NotACommand,
    /// Command handled, continue the REPL loop.
    Handled,
    /// Command produced a draft change the REPL must apply.
    StateChanged(StateChange),
    /// Generate again for the previous review.
    Regenerate,
    /// Exit the REPL.
    Quit,
}

/// A REPL command. Implement this trait to add new commands.
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/rating"`.
    fn name(&self) -> &str;

    /// Alternative names, e.g. `&["/h", "/?"]`.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Argument placeholder shown in `/help`, e.g. `"<1-5>"`.
    fn usage(&self) -> &str {
        ""
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    /// Run the command. `args` is the trimmed text after the command name.
    async fn execute(&self, args: &str, info: &SessionInfo<'_>) -> CommandResult;
}

/// Holds registered commands. Supports runtime registration.
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with all built-in commands.
    pub fn new() -> Self {
        let commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(help::HelpCommand),
            Arc::new(name::NameCommand),
            Arc::new(kind::TypeCommand),
            Arc::new(rating::RatingCommand),
            Arc::new(draft::DraftCommand),
            Arc::new(types::TypesCommand),
            Arc::new(demo::DemoCommand),
            Arc::new(regenerate::RegenerateCommand),
            Arc::new(quit::QuitCommand),
        ];
        Self { commands }
    }

    /// Register an additional command.
    pub fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.push(command);
    }

    /// Dispatch input to a matching command, or return `NotACommand`.
    pub async fn dispatch(&self, input: &str, info: &SessionInfo<'_>) -> CommandResult {
        let input = input.trim();
        let (cmd, args) = match input.split_once(char::is_whitespace) {
            Some((cmd, args)) => (cmd, args.trim()),
            None => (input, ""),
        };

        // Bare-word aliases like `quit` only count on their own, so a review
        // that happens to start with one is still a review.
        if !cmd.starts_with('/') && !args.is_empty() {
            return CommandResult::NotACommand;
        }

        for command in &self.commands {
            if cmd == command.name() || command.aliases().contains(&cmd) {
                // /help needs the registry to list all commands
                if command.name() == "/help" {
                    print!("{}", self.help_text());
                    return CommandResult::Handled;
                }
                return command.execute(args, info).await;
            }
        }

        if cmd.starts_with('/') {
            println!("unknown command: {cmd}");
            println!("type /help for available commands");
            return CommandResult::Handled;
        }

        CommandResult::NotACommand
    }

    /// Generate help text from all registered commands.
    pub fn help_text(&self) -> String {
        let entries: Vec<(String, &str)> = self
            .commands
            .iter()
            .map(|c| (format_label(c.name(), c.usage(), c.aliases()), c.description()))
            .collect();

        let max_width = entries
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (label, desc) in &entries {
            out.push_str(&format!("  {label:<max_width$}  {desc}\n"));
        }
        out.push_str("\n  anything else is taken as the review text to reply to\n");
        out
    }

    /// All registered command names (for testing).
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// All registered names and aliases (for duplicate detection).
    pub fn all_triggers(&self) -> Vec<&str> {
        let mut triggers = Vec::new();
        for cmd in &self.commands {
            triggers.push(cmd.name());
            triggers.extend_from_slice(cmd.aliases());
        }
        triggers
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn format_label(name: &str, usage: &str, aliases: &[&str]) -> String {
    let head = if usage.is_empty() {
        name.to_string()
    } else {
        format!("{name} {usage}")
    };
    if aliases.is_empty() {
        head
    } else {
        format!("{} ({})", head, aliases.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    static EMPTY_DRAFT: LazyLock<Draft> = LazyLock::new(Draft::default);

    pub(crate) fn test_info() -> SessionInfo<'static> {
        SessionInfo {
            draft: &EMPTY_DRAFT,
            db_path: ":memory:",
        }
    }

    #[test]
    fn all_builtins_registered() {
        let reg = CommandRegistry::new();
        let names = reg.names();
        for expected in [
            "/help",
            "/name",
            "/type",
            "/rating",
            "/draft",
            "/types",
            "/demo",
            "/regenerate",
            "/quit",
        ] {
            assert!(names.contains(&expected), "missing: {expected}");
        }
    }

    #[test]
    fn no_duplicate_triggers() {
        let reg = CommandRegistry::new();
        let triggers = reg.all_triggers();
        let mut seen = Vec::new();
        for t in &triggers {
            assert!(!seen.contains(t), "duplicate trigger: {t}");
            seen.push(t);
        }
    }

    #[test]
    fn help_text_includes_all_commands() {
        let reg = CommandRegistry::new();
        let text = reg.help_text();
        for name in reg.names() {
            assert!(text.contains(name), "help missing: {name}");
        }
    }

    #[test]
    fn help_text_includes_aliases_and_usage() {
        let reg = CommandRegistry::new();
        let text = reg.help_text();
        assert!(text.contains("/h"));
        assert!(text.contains("/?"));
        assert!(text.contains("/rating <1-5>"));
    }

    #[tokio::test]
    async fn unknown_slash_command_is_handled() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.dispatch("/foobar", &test_info()).await,
            CommandResult::Handled
        ));
    }

    #[tokio::test]
    async fn review_text_passes_through() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.dispatch("Great food and service", &test_info()).await,
            CommandResult::NotACommand
        ));
    }

    #[tokio::test]
    async fn review_starting_with_alias_is_review() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.dispatch("exit was blocked but the food was great", &test_info()).await,
            CommandResult::NotACommand
        ));
    }

    #[tokio::test]
    async fn dispatch_splits_arguments() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.dispatch("/name   Joe's Restaurant  ", &test_info()).await,
            CommandResult::StateChanged(StateChange::BusinessName(ref n))
                if n == "Joe's Restaurant"
        ));
    }

    #[tokio::test]
    async fn dispatch_resolves_aliases() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.dispatch("exit", &test_info()).await,
            CommandResult::Quit
        ));
        let draft = Draft {
            last_review: Some("Lovely evening out".to_string()),
            ..Draft::default()
        };
        let info = SessionInfo {
            draft: &draft,
            ..test_info()
        };
        assert!(matches!(
            reg.dispatch("/again", &info).await,
            CommandResult::Regenerate
        ));
        assert!(matches!(
            reg.dispatch("/r", &test_info()).await,
            CommandResult::Handled
        ));
    }

    #[tokio::test]
    async fn plugin_command_works() {
        struct PingCommand;

        #[async_trait]
        impl Command for PingCommand {
            fn name(&self) -> &str {
                "/ping"
            }
            fn description(&self) -> &str {
                "pong"
            }
            async fn execute(&self, _args: &str, _info: &SessionInfo<'_>) -> CommandResult {
                CommandResult::Handled
            }
        }

        let mut reg = CommandRegistry::new();
        reg.register(Arc::new(PingCommand));
        assert!(reg.names().contains(&"/ping"));
        assert!(matches!(
            reg.dispatch("/ping", &test_info()).await,
            CommandResult::Handled
        ));
        assert!(reg.help_text().contains("/ping"));
    }

    #[test]
    fn format_label_plain() {
        assert_eq!(format_label("/draft", "", &[]), "/draft");
    }

    #[test]
    fn format_label_with_usage_and_aliases() {
        assert_eq!(
            format_label("/regenerate", "", &["/again"]),
            "/regenerate (/again)"
        );
        assert_eq!(format_label("/name", "<name>", &[]), "/name <name>");
    }
}
