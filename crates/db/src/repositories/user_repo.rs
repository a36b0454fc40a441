//! Repository for the `users` table.

use crate::models::user::{CreateUser, UpdateUser, User};

use super::entity_repo::{EntityRepo, EntitySchema, Field};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, name, created_at";

/// Schema binding for `users`. Mutable fields: `email`, `name`.
pub struct UserSchema;

impl EntitySchema for UserSchema {
    type Row = User;
    type Create = CreateUser;
    type Update = UpdateUser;

    const ENTITY: &'static str = "User";
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = COLUMNS;

    fn insert_fields(input: &CreateUser) -> Vec<Field<'_>> {
        vec![
            Field::text("email", &input.email),
            Field::text("name", &input.name),
        ]
    }

    fn changed_fields(input: &UpdateUser) -> Vec<Field<'_>> {
        [
            input.email.as_deref().map(|v| Field::text("email", v)),
            input.name.as_deref().map(|v| Field::text("name", v)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Provides CRUD operations for users.
pub type UserRepo = EntityRepo<UserSchema>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::FieldValue;

    #[test]
    fn no_present_fields_yields_no_changes() {
        assert!(UserSchema::changed_fields(&UpdateUser::default()).is_empty());
    }

    #[test]
    fn single_field_change() {
        let input = UpdateUser {
            email: Some("a@b.c".into()),
            name: None,
        };
        assert_eq!(
            UserSchema::changed_fields(&input),
            vec![Field::text("email", "a@b.c")]
        );
    }

    #[test]
    fn empty_string_is_still_a_change() {
        let input = UpdateUser {
            email: None,
            name: Some(String::new()),
        };
        let changes = UserSchema::changed_fields(&input);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].column, "name");
        assert_eq!(changes[0].value, FieldValue::Text(""));
    }

    #[test]
    fn update_dto_treats_missing_keys_as_absent() {
        let input: UpdateUser = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(input.email.is_none());
        assert_eq!(input.name.as_deref(), Some(""));
    }
}
