pub mod client;

pub use client::{BackendClient, GalleryBackend};
