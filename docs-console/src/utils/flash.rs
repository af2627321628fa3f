//! One-shot notices kept in the browser session until the next page render.

use tower_sessions::Session;

const NOTICES_KEY: &str = "notices";
const LISTING_CURRENT_KEY: &str = "listing_current";

pub async fn push_notice(session: &Session, message: &str) {
    let mut notices: Vec<String> = session
        .get(NOTICES_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or_default();
    notices.push(message.to_string());

    if let Err(e) = session.insert(NOTICES_KEY, notices).await {
        tracing::warn!(error = %e, notice = %message, "Failed to store notice in session");
    }
}

/// Pending notices, oldest first. Taking them clears the session entry.
pub async fn take_notices(session: &Session) -> Vec<String> {
    session
        .remove::<Vec<String>>(NOTICES_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Record that the last action left the listing as it should be shown, so the
/// next render uses the store without fetching it again.
pub async fn mark_listing_current(session: &Session) {
    if let Err(e) = session.insert(LISTING_CURRENT_KEY, true).await {
        tracing::warn!(error = %e, "Failed to mark listing as current in session");
    }
}

/// Whether the next render may skip the refresh. Consumes the mark.
pub async fn take_listing_current(session: &Session) -> bool {
    session
        .remove::<bool>(LISTING_CURRENT_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or(false)
}
