//! One-shot user roster fetch
//!
//! A missing roster is itself a signal (not available / not authenticated),
//! so every failure collapses to the empty roster instead of an error. The
//! fetch is never retried; a full reload is required to try again.

use crate::api::{HttpClient, UserRecord};
use crate::error::{ConsoleError, Result};

/// Path of the user-listing endpoint
pub const ROSTER_URL: &str = "/api/users/users";

/// Fetch the user roster once. Any failure yields the empty roster.
pub async fn fetch_roster<C>(client: &C) -> Vec<UserRecord>
where
    C: HttpClient + ?Sized,
{
    match fetch_roster_inner(client).await {
        Ok(users) => users,
        Err(e) => {
            tracing::debug!("Users service not available or not authenticated: {}", e);
            Vec::new()
        }
    }
}

async fn fetch_roster_inner<C>(client: &C) -> Result<Vec<UserRecord>>
where
    C: HttpClient + ?Sized,
{
    let response = client.get(ROSTER_URL).await?;
    if !response.is_success() {
        return Err(ConsoleError::Http(format!(
            "GET {} returned status {}",
            ROSTER_URL, response.status
        )));
    }
    Ok(serde_json::from_str(&response.body)?)
}
