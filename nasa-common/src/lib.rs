pub mod types;

pub use types::{ActivePanel, Photo, SearchResult};
