//! Route definitions for the standalone hand/board append endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::combo_cards;
use crate::state::AppState;

/// `POST /comboStartingHand`
pub fn starting_hand_router() -> Router<AppState> {
    Router::new().route("/", post(combo_cards::create_starting_hand))
}

/// `POST /comboFinalBoard`
pub fn final_board_router() -> Router<AppState> {
    Router::new().route("/", post(combo_cards::create_final_board))
}
