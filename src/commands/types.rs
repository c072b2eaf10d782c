use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::submission::BusinessType;

pub struct TypesCommand;

#[async_trait]
impl Command for TypesCommand {
    fn name(&self) -> &str {
        "/types"
    }

    fn description(&self) -> &str {
        "list known business types"
    }

    async fn execute(&self, _args: &str, info: &SessionInfo<'_>) -> CommandResult {
        let current = info.draft.business_type.trim();
        for kind in BusinessType::ALL {
            let marker = if kind.key() == current { " ← current" } else { "" };
            println!("  {:<13} {}{marker}", kind.key(), kind.label());
        }
        CommandResult::Handled
    }
}
