use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, StateChange};
use crate::demo::default_demo;

pub struct DemoCommand;

#[async_trait]
impl Command for DemoCommand {
    fn name(&self) -> &str {
        "/demo"
    }

    fn description(&self) -> &str {
        "load demo data (then /regenerate to reply)"
    }

    async fn execute(&self, _args: &str, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::StateChanged(StateChange::LoadDemo(default_demo()))
    }
}
