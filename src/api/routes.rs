//! API routes configuration module

use crate::api::context::AppContext;
use crate::api::handlers::{
    create_user, delete_user, get_user, health_check, list_users, passports, update_user,
};
use axum::{
    routing::{any, get},
    Extension, Router,
};
use tower_http::trace::TraceLayer;

/// Creates and configures the API router with all routes
///
/// # Arguments
/// * `ctx` - Application context shared across handlers
///
/// # Returns
/// * `Router` - Configured router with all API endpoints and middleware
pub fn app(ctx: AppContext) -> Router {
    Router::new()
        .route("/healthcheck", get(health_check))
        .route(
            "/users",
            get(list_users).post(create_user).put(update_user),
        )
        .route("/users/:id", get(get_user).delete(delete_user))
        .route("/passports", any(passports))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use crate::db::{MockDatabase, User, UserList, UserRepository};
    use crate::errors::Error;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn context(db: Arc<dyn UserRepository>) -> AppContext {
        AppContext {
            env: Environment::Local,
            port: 3001,
            version: "0.0.0".to_string(),
            db,
        }
    }

    fn test_app() -> Router {
        app(context(Arc::new(MockDatabase::with_defaults().unwrap())))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    async fn raw_body(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    async fn json_body(response: Response) -> Value {
        serde_json::from_slice(&raw_body(response).await).unwrap()
    }

    fn sam() -> Value {
        json!({
            "firstName": "Sam",
            "lastName": "Lee",
            "dateOfBirth": "1990-06-15T00:00:00Z",
            "locationOfBirth": "Leeds"
        })
    }

    #[tokio::test]
    async fn health_check_reports_name_and_version() {
        let response = send(&test_app(), Method::GET, "/healthcheck", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(
            json_body(response).await,
            json!({"svcName": "users-api", "version": "0.0.0"})
        );
    }

    #[tokio::test]
    async fn user_lifecycle() {
        let app = test_app();

        let response = send(&app, Method::GET, "/users", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let list: UserList = serde_json::from_value(json_body(response).await).unwrap();
        assert_eq!(list.count, 2);
        assert_eq!(list.users.len(), 2);
        assert_eq!(list.users[0].first_name, "John");
        assert_eq!(list.users[1].first_name, "Jane");

        let response = send(&app, Method::POST, "/users", Some(sam())).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: User = serde_json::from_value(json_body(response).await).unwrap();
        assert_eq!(created.id, 2);
        assert_eq!(created.first_name, "Sam");

        let response = send(&app, Method::GET, "/users/2", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: User = serde_json::from_value(json_body(response).await).unwrap();
        assert_eq!(fetched, created);

        let response = send(&app, Method::DELETE, "/users/2", None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(raw_body(response).await.is_empty());

        let response = send(&app, Method::GET, "/users/2", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({"status": "404", "message": "can't find user"})
        );
    }

    #[tokio::test]
    async fn create_ignores_client_id() {
        let mut payload = sam();
        payload["id"] = json!(0);
        let response = send(&test_app(), Method::POST, "/users", Some(payload)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(json_body(response).await["id"], 2);
    }

    #[tokio::test]
    async fn malformed_bodies_are_rejected() {
        let app = test_app();
        let bad = json!({"firstName": "Sam", "dateOfBirth": "yesterday"});

        for method in [Method::POST, Method::PUT] {
            let response = send(&app, method, "/users", Some(bad.clone())).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                json_body(response).await,
                json!({"status": "400", "message": "malformed user object"})
            );
        }

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/users")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let partial = json!({"firstName": "Sam", "lastName": "Lee"});
        let response = send(&app, Method::POST, "/users", Some(partial)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, Method::GET, "/users", None).await;
        assert_eq!(json_body(response).await["count"], 2);
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let app = test_app();
        let payload = json!({
            "id": 1,
            "firstName": "Janet",
            "lastName": "Roe",
            "dateOfBirth": "1992-01-02T00:00:00Z",
            "locationOfBirth": "Oxford"
        });

        let response = send(&app, Method::PUT, "/users", Some(payload.clone())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, payload);

        let response = send(&app, Method::GET, "/users/1", None).await;
        assert_eq!(json_body(response).await, payload);
    }

    #[tokio::test]
    async fn update_unknown_user() {
        let mut payload = sam();
        payload["id"] = json!(77);
        let app = test_app();
        let response = send(&app, Method::PUT, "/users", Some(payload)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"status": "500", "message": "something went wrong"})
        );

        let response = send(&app, Method::GET, "/users/77", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_unknown_user() {
        let app = test_app();
        let response = send(&app, Method::DELETE, "/users/77", None).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"status": "500", "message": "something went wrong"})
        );

        let response = send(&app, Method::GET, "/users", None).await;
        assert_eq!(json_body(response).await["count"], 2);
    }

    #[tokio::test]
    async fn non_numeric_id() {
        let app = test_app();
        for method in [Method::GET, Method::DELETE] {
            let response = send(&app, method, "/users/abc", None).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                json_body(response).await,
                json!({"status": "400", "message": "malformed user id"})
            );
        }
    }

    #[tokio::test]
    async fn passports_not_implemented() {
        let app = test_app();
        for method in [Method::GET, Method::POST, Method::DELETE] {
            let response = send(&app, method, "/passports", None).await;
            assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
            assert!(raw_body(response).await.is_empty());
        }
    }

    /// Store whose every operation fails with an unexpected error
    struct BrokenStore;

    #[async_trait::async_trait]
    impl UserRepository for BrokenStore {
        async fn list_users(&self) -> Result<Vec<User>, Error> {
            Err(Error::Server(std::io::Error::other("offline")))
        }
        async fn get_user(&self, _id: i64) -> Result<User, Error> {
            Err(Error::Server(std::io::Error::other("offline")))
        }
        async fn add_user(&self, _user: crate::db::NewUser) -> Result<User, Error> {
            Err(Error::Server(std::io::Error::other("offline")))
        }
        async fn update_user(&self, _user: User) -> Result<User, Error> {
            Err(Error::Server(std::io::Error::other("offline")))
        }
        async fn delete_user(&self, _id: i64) -> Result<(), Error> {
            Err(Error::Server(std::io::Error::other("offline")))
        }
    }

    #[tokio::test]
    async fn store_failures() {
        let app = app(context(Arc::new(BrokenStore)));

        let response = send(&app, Method::GET, "/users", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({"status": "404", "message": "can't find any users"})
        );

        let mut payload = sam();
        payload["id"] = json!(0);
        let response = send(&app, Method::PUT, "/users", Some(payload)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"status": "500", "message": "something went wrong"})
        );

        let response = send(&app, Method::DELETE, "/users/0", None).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
