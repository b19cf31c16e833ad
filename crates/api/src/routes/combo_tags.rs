//! Route definition for the `/comboTags` association resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::combo_tags;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(combo_tags::create_combo_tag))
}
