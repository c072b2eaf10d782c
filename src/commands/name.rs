use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, StateChange};

pub struct NameCommand;

#[async_trait]
impl Command for NameCommand {
    fn name(&self) -> &str {
        "/name"
    }

    fn usage(&self) -> &str {
        "<business name>"
    }

    fn description(&self) -> &str {
        "set the business name (saved to your profile)"
    }

    async fn execute(&self, args: &str, info: &SessionInfo<'_>) -> CommandResult {
        if args.is_empty() {
            match info.draft.business_name.trim() {
                "" => println!("  no business name set"),
                name => println!("  business name: {name}"),
            }
            return CommandResult::Handled;
        }
        CommandResult::StateChanged(StateChange::BusinessName(args.to_string()))
    }
}
