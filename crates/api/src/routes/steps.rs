//! Route definitions for the `/steps` resource.
//!
//! ```text
//! GET    /combo/{comboId}   -> get_combo_steps
//! POST   /combo/{comboId}   -> create_step
//! DELETE /{stepId}          -> remove_step
//! PUT    /{stepId}          -> update_step
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::steps;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/combo/{comboId}",
            get(steps::get_combo_steps).post(steps::create_step),
        )
        .route(
            "/{stepId}",
            put(steps::update_step).delete(steps::remove_step),
        )
}
