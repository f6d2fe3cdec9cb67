//! Catalog records: books on sale and upcoming releases.
//!
//! Both collections are read-only over HTTP and loaded by the CLI seeder.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::ExtraFields;
use crate::lenient::take;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", from = "ExtraFields")]
pub struct Book {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", from = "ExtraFields")]
pub struct UpcomingRelease {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Announced release date, kept as the free-form string the catalog uses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: ExtraFields,
}

impl From<ExtraFields> for Book {
    fn from(mut fields: ExtraFields) -> Self {
        Self {
            id: take(&mut fields, "_id"),
            title: take(&mut fields, "title"),
            author: take(&mut fields, "author"),
            image: take(&mut fields, "image"),
            category: take(&mut fields, "category"),
            price: take(&mut fields, "price"),
            rating: take(&mut fields, "rating"),
            description: take(&mut fields, "description"),
            extra: fields,
        }
    }
}

impl From<ExtraFields> for UpcomingRelease {
    fn from(mut fields: ExtraFields) -> Self {
        Self {
            id: take(&mut fields, "_id"),
            title: take(&mut fields, "title"),
            author: take(&mut fields, "author"),
            image: take(&mut fields, "image"),
            release_date: take(&mut fields, "releaseDate"),
            description: take(&mut fields, "description"),
            extra: fields,
        }
    }
}
