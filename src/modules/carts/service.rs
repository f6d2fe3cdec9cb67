use anyhow::Context;
use bookvibe_core::AppError;
use bookvibe_db::{Collection, DocumentStore};
use bookvibe_models::{CartItem, InsertOneResult};

pub struct CartService;

impl CartService {
    /// Stores the item as given. A client-supplied `_id` is dropped.
    pub async fn add_item(
        store: &DocumentStore,
        mut item: CartItem,
    ) -> Result<InsertOneResult, AppError> {
        item.id = None;
        item.extra.remove("_id");

        store
            .insert_one(Collection::Carts, &item)
            .await
            .context("Failed to insert cart item")
            .map_err(AppError::database)
    }

    /// Items owned by `email`; with no email, items that have no owner.
    pub async fn items_for(
        store: &DocumentStore,
        email: Option<&str>,
    ) -> Result<Vec<CartItem>, AppError> {
        store
            .find_by_field(Collection::Carts, "email", email)
            .await
            .context("Failed to fetch cart items")
            .map_err(AppError::database)
    }
}
