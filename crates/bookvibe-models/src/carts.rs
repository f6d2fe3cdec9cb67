//! Shopping cart items.
//!
//! Items are stored as given and looked up by the owning email. No check is
//! made that the email belongs to a registered user.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::ExtraFields;
use crate::lenient::take;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", from = "ExtraFields")]
pub struct CartItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Catalog reference; clients send either a number or a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_id: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: ExtraFields,
}

impl From<ExtraFields> for CartItem {
    fn from(mut fields: ExtraFields) -> Self {
        Self {
            id: take(&mut fields, "_id"),
            email: take(&mut fields, "email"),
            book_id: take(&mut fields, "bookId"),
            title: take(&mut fields, "title"),
            price: take(&mut fields, "price"),
            quantity: take(&mut fields, "quantity"),
            extra: fields,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CartQuery {
    /// Owner of the items. When omitted, only items without an owner match.
    pub email: Option<String>,
}
