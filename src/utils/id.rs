use uuid::Uuid;

/// Opaque installation id (UUID v4, hyphenated).
pub fn new_installation_id() -> String {
    Uuid::new_v4().to_string()
}
