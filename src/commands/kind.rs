use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, StateChange};
use crate::submission::{BusinessType, display_label};

pub struct TypeCommand;

#[async_trait]
impl Command for TypeCommand {
    fn name(&self) -> &str {
        "/type"
    }

    fn usage(&self) -> &str {
        "<business type>"
    }

    fn description(&self) -> &str {
        "set the business type (saved to your profile, see /types)"
    }

    async fn execute(&self, args: &str, info: &SessionInfo<'_>) -> CommandResult {
        if args.is_empty() {
            match info.draft.business_type.trim() {
                "" => println!("  no business type set"),
                kind => println!("  business type: {kind} ({})", display_label(kind)),
            }
            return CommandResult::Handled;
        }
        if BusinessType::from_key(args).is_none() {
            println!("  note: {args} is not a known type, replies will say \"business\"");
        }
        CommandResult::StateChanged(StateChange::BusinessType(args.to_string()))
    }
}
