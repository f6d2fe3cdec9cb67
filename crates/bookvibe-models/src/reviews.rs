use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::ExtraFields;
use crate::lenient::take;

/// A reader review shown on the storefront.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "ExtraFields")]
pub struct Review {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: ExtraFields,
}

impl From<ExtraFields> for Review {
    fn from(mut fields: ExtraFields) -> Self {
        Self {
            id: take(&mut fields, "_id"),
            name: take(&mut fields, "name"),
            review: take(&mut fields, "review"),
            rating: take(&mut fields, "rating"),
            image: take(&mut fields, "image"),
            extra: fields,
        }
    }
}
