use bookvibe_db::{Collection, DocumentStore, StoreError};
use bookvibe_models::{User, UserDocument, UserRole};
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoteOutcome {
    /// No user had this email; one was created with the admin role.
    Created(Uuid),
    Promoted(Uuid),
    AlreadyAdmin(Uuid),
}

/// Grants the admin role to the user registered under `email`.
pub async fn promote_admin(
    store: &DocumentStore,
    email: &str,
) -> Result<PromoteOutcome, StoreError> {
    let existing: Option<User> = store
        .find_one_by_field(Collection::Users, "email", email)
        .await?;

    match existing {
        Some(user) if user.is_admin() => Ok(PromoteOutcome::AlreadyAdmin(user.id)),
        Some(user) => {
            let mut fields = Map::new();
            fields.insert(
                "role".to_string(),
                Value::String(UserRole::Admin.as_str().to_string()),
            );
            store.update_one_set(Collection::Users, user.id, fields).await?;
            Ok(PromoteOutcome::Promoted(user.id))
        }
        None => {
            let result = store
                .insert_one(Collection::Users, &UserDocument::new(email, UserRole::Admin))
                .await?;
            Ok(PromoteOutcome::Created(result.inserted_id))
        }
    }
}
