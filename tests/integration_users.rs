mod common;

use axum::http::StatusCode;
use bookvibe_db::{Collection, DocumentStore};
use bookvibe_models::{UserDocument, UserRole};
use common::{
    body_json, create_test_user, generate_unique_email, get, send_empty, send_json,
    setup_test_app, token_for,
};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

#[sqlx::test(migrations = "./migrations")]
async fn test_register_twice_reports_existing_user(pool: PgPool) {
    let first = setup_test_app(pool.clone())
        .oneshot(send_json("POST", "/users", json!({ "email": "a@x.com" }), None))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    let body = body_json(first).await;
    assert_eq!(body["acknowledged"], true);
    assert!(Uuid::parse_str(body["insertedId"].as_str().unwrap()).is_ok());

    let second = setup_test_app(pool.clone())
        .oneshot(send_json("POST", "/users", json!({ "email": "a@x.com" }), None))
        .await
        .unwrap();

    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(
        body_json(second).await,
        json!({ "message": "User already exists", "insertedId": null })
    );

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE doc ->> 'email' = $1")
        .bind("a@x.com")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_ignores_requested_role(pool: PgPool) {
    let email = generate_unique_email();

    let response = setup_test_app(pool.clone())
        .oneshot(send_json(
            "POST",
            "/users",
            json!({ "email": email, "role": "admin", "name": "Sneaky" }),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let token = token_for(&email);
    let response = setup_test_app(pool)
        .oneshot(get(&format!("/users/admin/{}", email), Some(&token)))
        .await
        .unwrap();

    assert_eq!(body_json(response).await, json!({ "admin": false }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_rejects_invalid_email(pool: PgPool) {
    let response = setup_test_app(pool)
        .oneshot(send_json("POST", "/users", json!({ "email": "nope" }), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_users_requires_admin(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, UserRole::Standard).await;

    let response = setup_test_app(pool)
        .oneshot(get("/users", Some(&token_for(&email))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Forbidden access" })
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_email_is_forbidden(pool: PgPool) {
    let response = setup_test_app(pool)
        .oneshot(get("/users", Some(&token_for("ghost@bookvibe.app"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_token_without_email_is_forbidden(pool: PgPool) {
    let token = bookvibe_auth::issue_token(
        json!({ "name": "No Email" }).as_object().cloned().unwrap(),
        &common::test_jwt_config(),
    )
    .unwrap();

    let response = setup_test_app(pool)
        .oneshot(get("/users", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_lists_users(pool: PgPool) {
    let admin_email = generate_unique_email();
    create_test_user(&pool, &admin_email, UserRole::Admin).await;
    create_test_user(&pool, &generate_unique_email(), UserRole::Standard).await;

    let response = setup_test_app(pool)
        .oneshot(get("/users", Some(&token_for(&admin_email))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let users = body_json(response).await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u["_id"].is_string()));
    assert!(users.iter().any(|u| u["role"] == "admin"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_status_for_other_email_is_forbidden(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, UserRole::Admin).await;

    let response = setup_test_app(pool)
        .oneshot(get(
            "/users/admin/someone-else@bookvibe.app",
            Some(&token_for(&email)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_promote_then_admin_status(pool: PgPool) {
    let admin_email = generate_unique_email();
    create_test_user(&pool, &admin_email, UserRole::Admin).await;
    let email = generate_unique_email();
    let id = create_test_user(&pool, &email, UserRole::Standard).await;

    let response = setup_test_app(pool.clone())
        .oneshot(send_empty(
            "PATCH",
            &format!("/users/admin/{}", id),
            Some(&token_for(&admin_email)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "acknowledged": true,
            "matchedCount": 1,
            "modifiedCount": 1,
            "upsertedId": null,
            "upsertedCount": 0
        })
    );

    let response = setup_test_app(pool)
        .oneshot(get(&format!("/users/admin/{}", email), Some(&token_for(&email))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "admin": true }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_promote_unknown_id_matches_nothing(pool: PgPool) {
    let admin_email = generate_unique_email();
    create_test_user(&pool, &admin_email, UserRole::Admin).await;

    let response = setup_test_app(pool)
        .oneshot(send_empty(
            "PATCH",
            &format!("/users/admin/{}", Uuid::new_v4()),
            Some(&token_for(&admin_email)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["matchedCount"], 0);
    assert_eq!(body["modifiedCount"], 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_promote_malformed_id_is_bad_request(pool: PgPool) {
    let admin_email = generate_unique_email();
    create_test_user(&pool, &admin_email, UserRole::Admin).await;

    let response = setup_test_app(pool)
        .oneshot(send_empty(
            "PATCH",
            "/users/admin/not-an-id",
            Some(&token_for(&admin_email)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_user(pool: PgPool) {
    let admin_email = generate_unique_email();
    create_test_user(&pool, &admin_email, UserRole::Admin).await;
    let id = create_test_user(&pool, &generate_unique_email(), UserRole::Standard).await;

    let response = setup_test_app(pool.clone())
        .oneshot(send_empty(
            "DELETE",
            &format!("/users/{}", id),
            Some(&token_for(&admin_email)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "acknowledged": true, "deletedCount": 1 })
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_nonexistent_user_reports_zero(pool: PgPool) {
    let admin_email = generate_unique_email();
    create_test_user(&pool, &admin_email, UserRole::Admin).await;

    let response = setup_test_app(pool)
        .oneshot(send_empty(
            "DELETE",
            &format!("/users/{}", Uuid::new_v4()),
            Some(&token_for(&admin_email)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["deletedCount"], 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_requires_admin(pool: PgPool) {
    let email = generate_unique_email();
    let id = create_test_user(&pool, &email, UserRole::Standard).await;

    let response = setup_test_app(pool)
        .oneshot(send_empty(
            "DELETE",
            &format!("/users/{}", id),
            Some(&token_for(&email)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_lists_users_with_irregular_documents(pool: PgPool) {
    let admin_email = generate_unique_email();
    create_test_user(&pool, &admin_email, UserRole::Admin).await;
    sqlx::query("INSERT INTO users (doc) VALUES ($1::jsonb), ($2::jsonb)")
        .bind(r#"{"email":"m@x.com","role":"moderator"}"#)
        .bind(r#"{"name":"No Email"}"#)
        .execute(&pool)
        .await
        .unwrap();

    let response = setup_test_app(pool)
        .oneshot(get("/users", Some(&token_for(&admin_email))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let users = body_json(response).await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 3);

    let moderator = users.iter().find(|u| u["email"] == "m@x.com").unwrap();
    assert_eq!(moderator["role"], "moderator");

    let nameless = users.iter().find(|u| u["name"] == "No Email").unwrap();
    assert!(nameless.get("email").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unrecognised_role_is_not_admin(pool: PgPool) {
    sqlx::query("INSERT INTO users (doc) VALUES ($1::jsonb)")
        .bind(r#"{"email":"m@x.com","role":"moderator"}"#)
        .execute(&pool)
        .await
        .unwrap();
    let token = token_for("m@x.com");

    let response = setup_test_app(pool.clone())
        .oneshot(get("/users", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = setup_test_app(pool)
        .oneshot(get("/users/admin/m@x.com", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "admin": false }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_if_absent_keeps_one_user_per_email(pool: PgPool) {
    let store = DocumentStore::new(pool.clone());
    let user = UserDocument::new("dup@x.com", UserRole::Standard);

    let first = store
        .insert_one_if_absent(Collection::Users, &user)
        .await
        .unwrap();
    let second = store
        .insert_one_if_absent(Collection::Users, &user)
        .await
        .unwrap();

    assert!(first.is_some());
    assert!(second.is_none());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE doc ->> 'email' = $1")
        .bind("dup@x.com")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concurrent_registrations_create_one_user(pool: PgPool) {
    let body = json!({ "email": "race@x.com" });
    let (left, right) = tokio::join!(
        setup_test_app(pool.clone()).oneshot(send_json("POST", "/users", body.clone(), None)),
        setup_test_app(pool.clone()).oneshot(send_json("POST", "/users", body.clone(), None)),
    );
    let left = left.unwrap();
    let right = right.unwrap();

    assert_eq!(left.status(), StatusCode::OK);
    assert_eq!(right.status(), StatusCode::OK);
    let replies = [body_json(left).await, body_json(right).await];
    let created = replies.iter().filter(|r| r["acknowledged"] == true).count();
    let existing = replies
        .iter()
        .filter(|r| r["message"] == "User already exists")
        .count();
    assert_eq!((created, existing), (1, 1));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE doc ->> 'email' = $1")
        .bind("race@x.com")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
