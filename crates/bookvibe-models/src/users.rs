//! User records, roles and registration DTOs.
//!
//! A user is identified by email. Registration always stores the
//! [`UserRole::Standard`] role; only an existing admin can promote.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::ExtraFields;
use crate::lenient::take;
use crate::store::InsertOneResult;

/// Coarse permission tag attached to a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    #[serde(rename = "default")]
    Standard,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Standard => "default",
            UserRole::Admin => "admin",
        }
    }
}

/// A stored user document.
///
/// Decoding never fails on field types: an `email` or `role` of another
/// shape (an unknown role name, say) is kept in `profile` as stored and the
/// typed field is left empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "ExtraFields")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Missing means `default`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    /// Profile fields supplied at registration (name, photo, ...).
    #[serde(flatten)]
    #[schema(ignore)]
    pub profile: ExtraFields,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Some(UserRole::Admin)
    }
}

impl TryFrom<ExtraFields> for User {
    type Error = &'static str;

    fn try_from(mut fields: ExtraFields) -> Result<Self, Self::Error> {
        let id = take(&mut fields, "_id").ok_or("user document has no valid _id")?;

        Ok(Self {
            id,
            email: take(&mut fields, "email"),
            role: take(&mut fields, "role"),
            profile: fields,
        })
    }
}

/// Self-registration body.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewUser {
    #[validate(email)]
    pub email: String,
    #[serde(flatten)]
    #[schema(ignore)]
    pub profile: ExtraFields,
}

/// Shape written to the users collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDocument {
    pub email: String,
    pub role: UserRole,
    #[serde(flatten)]
    pub profile: ExtraFields,
}

impl UserDocument {
    pub fn new(email: impl Into<String>, role: UserRole) -> Self {
        Self {
            email: email.into(),
            role,
            profile: ExtraFields::new(),
        }
    }
}

impl From<NewUser> for UserDocument {
    fn from(dto: NewUser) -> Self {
        let mut profile = dto.profile;
        // A caller must not pick its own identifier or role.
        for reserved in ["_id", "email", "role"] {
            profile.remove(reserved);
        }

        Self {
            email: dto.email,
            role: UserRole::Standard,
            profile,
        }
    }
}

/// Reply when the email is already registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExistingUserResponse {
    pub message: String,
    pub inserted_id: Option<Uuid>,
}

impl Default for ExistingUserResponse {
    fn default() -> Self {
        Self {
            message: "User already exists".to_string(),
            inserted_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RegisterUserResponse {
    Created(InsertOneResult),
    AlreadyExists(ExistingUserResponse),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminStatusResponse {
    pub admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_value(UserRole::Standard).unwrap(), json!("default"));
        assert_eq!(serde_json::to_value(UserRole::Admin).unwrap(), json!("admin"));
        assert_eq!(UserRole::Admin.as_str(), "admin");
    }

    #[test]
    fn test_user_without_role_is_not_admin() {
        let user: User = serde_json::from_value(json!({
            "_id": Uuid::nil(),
            "email": "reader@bookvibe.app",
            "name": "Reader"
        }))
        .unwrap();

        assert!(user.role.is_none());
        assert!(!user.is_admin());
        assert_eq!(user.email.as_deref(), Some("reader@bookvibe.app"));
        assert_eq!(user.profile["name"], "Reader");
        assert!(!user.profile.contains_key("_id"));
    }

    #[test]
    fn test_unknown_role_is_kept_as_stored() {
        let stored = json!({
            "_id": Uuid::nil(),
            "email": "m@x.com",
            "role": "moderator"
        });
        let user: User = serde_json::from_value(stored.clone()).unwrap();

        assert!(user.role.is_none());
        assert!(!user.is_admin());
        assert_eq!(serde_json::to_value(&user).unwrap(), stored);
    }

    #[test]
    fn test_user_without_email_decodes() {
        let user: User =
            serde_json::from_value(json!({ "_id": Uuid::nil(), "email": 42 })).unwrap();

        assert!(user.email.is_none());
        assert_eq!(user.profile["email"], 42);
    }

    #[test]
    fn test_user_requires_id() {
        assert!(serde_json::from_value::<User>(json!({ "email": "a@x.com" })).is_err());
    }

    #[test]
    fn test_registration_drops_reserved_fields() {
        let dto: NewUser = serde_json::from_value(json!({
            "email": "sneaky@bookvibe.app",
            "role": "admin",
            "_id": "00000000-0000-0000-0000-000000000001",
            "photo": "https://img.example/p.png"
        }))
        .unwrap();

        let doc = UserDocument::from(dto);
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["role"], "default");
        assert_eq!(value["email"], "sneaky@bookvibe.app");
        assert_eq!(value["photo"], "https://img.example/p.png");
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn test_registration_email_validation() {
        let valid: NewUser = serde_json::from_value(json!({ "email": "a@x.com" })).unwrap();
        assert!(valid.validate().is_ok());

        let invalid: NewUser = serde_json::from_value(json!({ "email": "not-an-email" })).unwrap();
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_existing_user_response_shape() {
        let value =
            serde_json::to_value(RegisterUserResponse::AlreadyExists(Default::default())).unwrap();
        assert_eq!(
            value,
            json!({ "message": "User already exists", "insertedId": null })
        );
    }
}
