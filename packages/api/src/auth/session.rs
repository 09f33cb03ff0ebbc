//! Session key and the helper every authenticated server function goes
//! through to resolve the calling user.

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Resolve the authenticated user's id from the session, or fail the
/// server function with "Not authenticated".
#[cfg(feature = "server")]
pub async fn session_user_id(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, dioxus::prelude::ServerFnError> {
    use dioxus::prelude::ServerFnError;

    let user_id: Option<String> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))
}
