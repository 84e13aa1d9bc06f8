//! Curiosity rover photo gallery
//!
//! Fetches the raw photo list for a fixed sol and reduces it to the
//! hand-picked gallery via [`select_photos`].

pub mod api_client;
pub mod selector;
pub mod types;

pub use api_client::MarsPhotoClient;
pub use selector::{is_allowed_position, select_photos, ALLOWED_POSITION_COUNT};
