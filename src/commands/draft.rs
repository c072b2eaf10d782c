use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct DraftCommand;

#[async_trait]
impl Command for DraftCommand {
    fn name(&self) -> &str {
        "/draft"
    }

    fn description(&self) -> &str {
        "show the fields set so far"
    }

    async fn execute(&self, _args: &str, info: &SessionInfo<'_>) -> CommandResult {
        for line in info.draft.summary() {
            println!("  {line}");
        }
        println!("  profile  {}", info.db_path);
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_info;

    #[tokio::test]
    async fn returns_handled() {
        assert!(matches!(
            DraftCommand.execute("", &test_info()).await,
            CommandResult::Handled
        ));
    }
}
