use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, StateChange};
use crate::consts::{MAX_RATING, MIN_RATING};

pub struct RatingCommand;

#[async_trait]
impl Command for RatingCommand {
    fn name(&self) -> &str {
        "/rating"
    }

    fn aliases(&self) -> &[&str] {
        &["/stars"]
    }

    fn usage(&self) -> &str {
        "<1-5>"
    }

    fn description(&self) -> &str {
        "set the star rating of the review"
    }

    async fn execute(&self, args: &str, info: &SessionInfo<'_>) -> CommandResult {
        if args.is_empty() {
            match info.draft.rating {
                Some(r) => println!("  rating: {r}"),
                None => println!("  no rating set"),
            }
            return CommandResult::Handled;
        }
        match args.parse::<i64>() {
            Ok(r) if (MIN_RATING..=MAX_RATING).contains(&r) => {
                CommandResult::StateChanged(StateChange::Rating(r))
            }
            _ => {
                eprintln!("  ✗ rating must be a whole number from {MIN_RATING} to {MAX_RATING}");
                CommandResult::Handled
            }
        }
    }
}
