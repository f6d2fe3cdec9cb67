use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use bookvibe_models::{
    AdminStatusResponse, Book, CartItem, DeleteResult, ExistingUserResponse, InsertOneResult,
    MessageResponse, NewUser, RegisterUserResponse, Review, TokenResponse, UpcomingRelease,
    UpdateResult, User, UserRole,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::issue_jwt,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::get_admin_status,
        crate::modules::users::controller::promote_user,
        crate::modules::users::controller::delete_user,
        crate::modules::catalog::controller::get_books,
        crate::modules::catalog::controller::get_upcoming,
        crate::modules::reviews::controller::get_reviews,
        crate::modules::carts::controller::add_cart_item,
        crate::modules::carts::controller::get_cart_items,
    ),
    components(
        schemas(
            TokenResponse,
            MessageResponse,
            User,
            UserRole,
            NewUser,
            RegisterUserResponse,
            ExistingUserResponse,
            AdminStatusResponse,
            InsertOneResult,
            UpdateResult,
            DeleteResult,
            Book,
            UpcomingRelease,
            Review,
            CartItem,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Access token issuance"),
        (name = "Users", description = "Registration and admin management"),
        (name = "Catalog", description = "Books and upcoming releases"),
        (name = "Reviews", description = "Reader reviews"),
        (name = "Carts", description = "Shopping cart items")
    ),
    info(
        title = "Book Vibe API",
        version = "0.1.0",
        description = "Bookstore backend: catalog, reviews, carts and user roles behind JWT bearer auth.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
