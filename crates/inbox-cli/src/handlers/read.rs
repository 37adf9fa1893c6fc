//! Read / read-all command handlers.

use inbox_core::{NotificationSync, SyncError};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::NO_UNREAD;

/// Result of acknowledging a batch of IDs.
#[derive(Debug, Default)]
pub struct ReadOutcome {
    /// IDs the server confirmed.
    pub acknowledged: Vec<i64>,
    /// First failure encountered, if any.
    pub first_error: Option<SyncError>,
}

/// Acknowledge `ids` in order.
///
/// Keeps going after ordinary failures so one bad ID does not block the
/// rest, but stops on an auth failure since every later call would fail too.
pub async fn acknowledge_each(sync: &NotificationSync, ids: &[i64]) -> ReadOutcome {
    let mut outcome = ReadOutcome::default();

    for &id in ids {
        match sync.acknowledge(id).await {
            Ok(()) => outcome.acknowledged.push(id),
            Err(err) => {
                let stop = err.is_auth_failure();
                outcome.first_error.get_or_insert(err);
                if stop {
                    break;
                }
            }
        }
    }

    outcome
}

/// Execute the read command.
pub async fn execute(ctx: &CliContext, ids: &[i64]) -> Result<(), CliError> {
    ctx.sync().refresh().await?;

    let cached = ctx.sync().records();
    for id in ids {
        if !cached.iter().any(|r| r.id == *id) {
            eprintln!("Notification {id} is not in your list; asking the server anyway.");
        }
    }

    let outcome = acknowledge_each(ctx.sync(), ids).await;
    println!(
        "Marked {} of {} notification(s) as read.",
        outcome.acknowledged.len(),
        ids.len()
    );

    match outcome.first_error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Execute the read-all command.
pub async fn execute_all(ctx: &CliContext) -> Result<(), CliError> {
    ctx.sync().refresh().await?;

    if ctx.sync().unread_count() == 0 {
        println!("{NO_UNREAD}");
        return Ok(());
    }

    let count = ctx.sync().acknowledge_all().await?;
    println!("Marked {count} notification(s) as read.");
    Ok(())
}
