use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct RegenerateCommand;

#[async_trait]
impl Command for RegenerateCommand {
    fn name(&self) -> &str {
        "/regenerate"
    }

    fn aliases(&self) -> &[&str] {
        &["/again", "/r"]
    }

    fn description(&self) -> &str {
        "reply to the previous review again"
    }

    async fn execute(&self, _args: &str, info: &SessionInfo<'_>) -> CommandResult {
        if info.draft.last_review.is_none() {
            println!("  nothing to regenerate yet, type a review first");
            return CommandResult::Handled;
        }
        CommandResult::Regenerate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_info;
    use crate::session::Draft;

    #[tokio::test]
    async fn without_previous_review_is_handled() {
        assert!(matches!(
            RegenerateCommand.execute("", &test_info()).await,
            CommandResult::Handled
        ));
    }

    #[tokio::test]
    async fn with_previous_review_regenerates() {
        let draft = Draft {
            last_review: Some("Lovely evening out".to_string()),
            ..Draft::default()
        };
        let info = SessionInfo {
            draft: &draft,
            ..test_info()
        };
        assert!(matches!(
            RegenerateCommand.execute("", &info).await,
            CommandResult::Regenerate
        ));
    }
}
