//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-table writes run inside a
//! single transaction held by the repository method; simple multi-row
//! writes issue one statement per element concurrently.

pub mod card_repo;
pub mod combo_card_repo;
pub mod combo_repo;
pub mod deck_info_repo;
pub mod deck_repo;
pub mod step_repo;
pub mod step_target_repo;
pub mod tag_repo;

pub use card_repo::CardRepo;
pub use combo_card_repo::ComboCardRepo;
pub use combo_repo::ComboRepo;
pub use deck_info_repo::DeckInfoRepo;
pub use deck_repo::DeckRepo;
pub use step_repo::StepRepo;
pub use step_target_repo::StepTargetRepo;
pub use tag_repo::TagRepo;
