//! Route definitions for the `/decks` resource.
//!
//! ```text
//! GET    /              -> list_decks
//! POST   /              -> create_deck
//! GET    /{id}          -> get_deck
//! PUT    /{id}          -> update_deck
//! DELETE /{id}          -> remove_deck
//! GET    /info/{id}     -> get_deck_info
//! POST   /info/{id}     -> set_deck_info
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::decks;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(decks::list_decks).post(decks::create_deck))
        .route(
            "/{id}",
            get(decks::get_deck)
                .put(decks::update_deck)
                .delete(decks::remove_deck),
        )
        .route(
            "/info/{id}",
            get(decks::get_deck_info).post(decks::set_deck_info),
        )
}
