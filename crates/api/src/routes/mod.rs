//! Route definitions, one module per resource.
//!
//! Route hierarchy:
//!
//! ```text
//! /health                                     service + db health
//!
//! /decks                                      list (paged), create
//! /decks/{id}                                 get, update, delete
//! /decks/info/{id}                            get info, set info
//!
//! /combos/{comboId}                           get, update, delete
//! /combos/deck/{deckId}                       list by deck, create
//! /combos/{comboId}/assign-tag/{tagId}        assign tag
//! /combos/create-full-combo                   composite create
//! /combos/update-full-combo/{comboId}         composite replace
//!
//! /steps/combo/{comboId}                      list with targets, create
//! /steps/{stepId}                             update, delete
//!
//! /stepTargets/step/{stepId}                  list, create
//! /stepTargets/{targetId}                     update, delete
//!
//! /tags                                       list, create
//! /tags/combo/{comboId}                       list by combo
//! /tags/{tagId}                               update, delete
//!
//! /comboTags                                  create association
//! /comboStartingHand                          bulk append
//! /comboFinalBoard                            bulk append
//! ```

pub mod combo_cards;
pub mod combo_tags;
pub mod combos;
pub mod decks;
pub mod health;
pub mod step_targets;
pub mod steps;
pub mod tags;

use axum::Router;

use crate::state::AppState;

/// Build the complete route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/decks", decks::router())
        .nest("/combos", combos::router())
        .nest("/steps", steps::router())
        .nest("/stepTargets", step_targets::router())
        .nest("/tags", tags::router())
        .nest("/comboTags", combo_tags::router())
        .nest("/comboStartingHand", combo_cards::starting_hand_router())
        .nest("/comboFinalBoard", combo_cards::final_board_router())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::state::AppState;

    /// An app over a lazy pool: no connection is made until a handler
    /// actually touches the database, so routing and upfront validation
    /// can be exercised without a live server.
    fn test_app() -> Router {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/combovault_test")
            .expect("lazy pool");

        let state = AppState {
            pool,
            config: Arc::new(ServerConfig {
                host: "127.0.0.1".into(),
                port: 0,
                cors_origins: vec!["*".into()],
                request_timeout_secs: 30,
            }),
        };

        super::api_routes().with_state(state)
    }

    fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // -- upfront validation -------------------------------------------------

    #[tokio::test]
    async fn create_tag_without_name_is_400() {
        let response = test_app()
            .oneshot(json_request(Method::POST, "/tags", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_full_combo_without_required_fields_is_400() {
        let response = test_app()
            .oneshot(json_request(
                Method::POST,
                "/combos/create-full-combo",
                r#"{"author": "alice"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_full_combo_with_blank_title_is_400() {
        let response = test_app()
            .oneshot(json_request(
                Method::POST,
                "/combos/create-full-combo",
                r#"{"deckId": 1, "author": "alice", "title": "", "difficulty": "hard"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn starting_hand_without_cards_array_is_400() {
        let response = test_app()
            .oneshot(json_request(
                Method::POST,
                "/comboStartingHand",
                r#"{"combo_id": 1}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn validation_failure_uses_message_envelope() {
        let response = test_app()
            .oneshot(json_request(Method::POST, "/tags", "{}"))
            .await
            .unwrap();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Missing required fields");
    }

    // -- routing ------------------------------------------------------------

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/nonsense")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_method_is_405() {
        let response = test_app()
            .oneshot(json_request(Method::PUT, "/comboTags", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
