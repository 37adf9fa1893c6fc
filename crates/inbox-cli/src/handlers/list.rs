//! List command handler.

use inbox_core::NotificationSync;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_notifications;

/// Execute the list command.
///
/// Refreshes the cache from the server and prints it. The cache is left
/// untouched and an error returned when the refresh fails.
pub async fn execute(ctx: &CliContext, unread_only: bool) -> Result<(), CliError> {
    ctx.sync().refresh().await?;
    println!("{}", listing(ctx.sync(), unread_only));
    Ok(())
}

/// Text printed by the list command for the current cache.
///
/// The summary line only follows an actual table.
pub fn listing(sync: &NotificationSync, unread_only: bool) -> String {
    let records = sync.records();
    let unread = sync.unread_count();
    let table = render_notifications(&records, unread_only);
    if records.is_empty() || (unread_only && unread == 0) {
        return table;
    }
    format!("{table}\n{unread} unread of {} notification(s)", records.len())
}
