//! Route definitions for the `/tags` resource.
//!
//! ```text
//! GET    /                  -> get_all_tags
//! POST   /                  -> create_tag
//! GET    /combo/{comboId}   -> get_tags_by_combo
//! PUT    /{tagId}           -> update_tag
//! DELETE /{tagId}           -> delete_tag
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::tags;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tags::get_all_tags).post(tags::create_tag))
        .route("/combo/{comboId}", get(tags::get_tags_by_combo))
        .route("/{tagId}", put(tags::update_tag).delete(tags::delete_tag))
}
