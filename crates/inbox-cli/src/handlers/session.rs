//! Session command handlers (login, logout, whoami).

use inbox_core::Credential;

use crate::bootstrap::{CliContext, SessionSource};
use crate::error::CliError;

/// Store `token` as the current session.
pub async fn login(ctx: &CliContext, token: &str) -> Result<(), CliError> {
    let credential = Credential::new(token)
        .ok_or_else(|| CliError::Arguments("token must not be empty".to_string()))?;
    ctx.sessions().store(&credential).await?;
    println!("Session saved to {}", ctx.sessions().path().display());
    Ok(())
}

/// Forget the stored session.
pub async fn logout(ctx: &CliContext) -> Result<(), CliError> {
    if ctx.sessions().clear().await? {
        println!("Signed out.");
    } else {
        println!("No stored session.");
    }
    Ok(())
}

/// Describe the session the next command would use.
pub async fn whoami(ctx: &CliContext) -> Result<String, CliError> {
    let status = match ctx.session_source {
        SessionSource::Override => "Using token from --token / INBOX_TOKEN".to_string(),
        SessionSource::Stored => match ctx.sessions().load().await? {
            Some(_) => format!(
                "Signed in (session stored at {})",
                ctx.sessions().path().display()
            ),
            None => "Not signed in. Run `inbox login <TOKEN>`.".to_string(),
        },
    };
    Ok(format!("{status}\nAPI: {}", ctx.base_url))
}
