//! Route definitions for the `/combos` resource.
//!
//! ```text
//! GET    /{comboId}                        -> get_combo
//! DELETE /{comboId}                        -> remove_combo
//! PUT    /{comboId}                        -> update_combo
//! GET    /deck/{deckId}                    -> get_combos_by_deck
//! POST   /deck/{deckId}                    -> create_combo
//! PUT    /{comboId}/assign-tag/{tagId}     -> assign_tag
//! POST   /create-full-combo                -> create_full_combo
//! PUT    /update-full-combo/{comboId}      -> update_full_combo
//! ```

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::combos;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{comboId}",
            get(combos::get_combo)
                .put(combos::update_combo)
                .delete(combos::remove_combo),
        )
        .route(
            "/deck/{deckId}",
            get(combos::get_combos_by_deck).post(combos::create_combo),
        )
        .route("/{comboId}/assign-tag/{tagId}", put(combos::assign_tag))
        .route("/create-full-combo", post(combos::create_full_combo))
        .route(
            "/update-full-combo/{comboId}",
            put(combos::update_full_combo),
        )
}
