use anyhow::{Context, anyhow};
use bookvibe_core::AppError;
use bookvibe_db::{Collection, DocumentStore};
use bookvibe_models::{
    DeleteResult, ExistingUserResponse, NewUser, RegisterUserResponse, UpdateResult, User,
    UserDocument, UserRole,
};
use serde_json::{Map, Value};
use uuid::Uuid;

pub struct UserService;

impl UserService {
    /// Parses a path identifier, rejecting anything that is not a UUID.
    pub fn parse_id(raw: &str) -> Result<Uuid, AppError> {
        Uuid::parse_str(raw).map_err(|_| AppError::bad_request(anyhow!("Invalid id: {}", raw)))
    }

    pub async fn get_users(store: &DocumentStore) -> Result<Vec<User>, AppError> {
        store
            .find_all(Collection::Users)
            .await
            .context("Failed to fetch users")
            .map_err(AppError::database)
    }

    pub async fn find_by_email(
        store: &DocumentStore,
        email: &str,
    ) -> Result<Option<User>, AppError> {
        store
            .find_one_by_field(Collection::Users, "email", email)
            .await
            .context("Failed to fetch user by email")
            .map_err(AppError::database)
    }

    pub async fn is_admin(store: &DocumentStore, email: &str) -> Result<bool, AppError> {
        let user = Self::find_by_email(store, email).await?;
        Ok(user.is_some_and(|u| u.is_admin()))
    }

    /// Stores a new user unless the email is taken. The role is always
    /// `default` whatever the body says.
    pub async fn register_user(
        store: &DocumentStore,
        dto: NewUser,
    ) -> Result<RegisterUserResponse, AppError> {
        if Self::find_by_email(store, &dto.email).await?.is_some() {
            return Ok(RegisterUserResponse::AlreadyExists(
                ExistingUserResponse::default(),
            ));
        }

        // The unique email index settles a race between two registrations.
        let inserted = store
            .insert_one_if_absent(Collection::Users, &UserDocument::from(dto))
            .await
            .context("Failed to insert user")
            .map_err(AppError::database)?;

        Ok(match inserted {
            Some(result) => RegisterUserResponse::Created(result),
            None => RegisterUserResponse::AlreadyExists(ExistingUserResponse::default()),
        })
    }

    pub async fn promote_to_admin(
        store: &DocumentStore,
        id: Uuid,
    ) -> Result<UpdateResult, AppError> {
        let mut fields = Map::new();
        fields.insert(
            "role".to_string(),
            Value::String(UserRole::Admin.as_str().to_string()),
        );

        store
            .update_one_set(Collection::Users, id, fields)
            .await
            .context("Failed to promote user")
            .map_err(AppError::database)
    }

    pub async fn delete_user(store: &DocumentStore, id: Uuid) -> Result<DeleteResult, AppError> {
        store
            .delete_one(Collection::Users, id)
            .await
            .context("Failed to delete user")
            .map_err(AppError::database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_parse_id_accepts_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(UserService::parse_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        let err = UserService::parse_id("not-an-id").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
