//! Route definitions for the `/stepTargets` resource.
//!
//! ```text
//! GET    /step/{stepId}   -> get_step_targets
//! POST   /step/{stepId}   -> create_step_target
//! DELETE /{targetId}      -> remove_target
//! PUT    /{targetId}      -> update_target
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::step_targets;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/step/{stepId}",
            get(step_targets::get_step_targets).post(step_targets::create_step_target),
        )
        .route(
            "/{targetId}",
            put(step_targets::update_target).delete(step_targets::remove_target),
        )
}
