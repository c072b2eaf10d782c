use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["quit", "exit", "/exit", "/done"]
    }

    fn description(&self) -> &str {
        "stop replying and show the session tally"
    }

    async fn execute(&self, _args: &str, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_info;

    #[tokio::test]
    async fn returns_quit() {
        assert!(matches!(
            QuitCommand.execute("", &test_info()).await,
            CommandResult::Quit
        ));
    }

    #[tokio::test]
    async fn done_ends_session_from_registry() {
        let reg = crate::commands::CommandRegistry::new();
        assert!(matches!(
            reg.dispatch("/done", &test_info()).await,
            CommandResult::Quit
        ));
        assert!(reg.help_text().contains("session tally"));
    }

    #[test]
    fn has_aliases() {
        let aliases = QuitCommand.aliases();
        assert!(aliases.contains(&"quit"));
        assert!(aliases.contains(&"exit"));
        assert!(aliases.contains(&"/exit"));
        assert!(aliases.contains(&"/done"));
    }
}
