use crate::types::DbId;

/// Domain-level failures surfaced to callers of the repository layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Product",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Product with id 7");
    }

    #[test]
    fn conflict_message_keeps_detail() {
        let err = CoreError::Conflict("email already in use".into());
        assert_eq!(err.to_string(), "Conflict: email already in use");
    }
}
