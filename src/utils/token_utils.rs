use uuid::Uuid;

/// Mint an opaque session token. The token carries no claims; it is only
/// a lookup key into the sessions table.
pub fn generate_session_token() -> String {
    format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    )
}
