//! ID generation utilities

use rand::Rng;

/// Characters used for ID generation (base36, matching stored documents)
const ID_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a unique string ID of specified length
pub fn generate_id(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ID_CHARS.len());
            ID_CHARS[idx] as char
        })
        .collect()
}

/// Generate a form ID (9 characters)
pub fn generate_form_id() -> String {
    generate_id(crate::ENTITY_ID_LENGTH)
}

/// Generate a field ID (9 characters)
pub fn generate_field_id() -> String {
    generate_id(crate::ENTITY_ID_LENGTH)
}

/// Generate a step ID (9 characters)
pub fn generate_step_id() -> String {
    generate_id(crate::ENTITY_ID_LENGTH)
}

/// Generate a template ID (9 characters)
pub fn generate_template_id() -> String {
    generate_id(crate::ENTITY_ID_LENGTH)
}

/// Generate a submission ID (9 characters)
pub fn generate_submission_id() -> String {
    generate_id(crate::ENTITY_ID_LENGTH)
}

/// Generate a database ID (32 characters, UUID-like)
pub fn generate_database_id() -> String {
    uuid::Uuid::new_v4().to_string().replace("-", "")
}
