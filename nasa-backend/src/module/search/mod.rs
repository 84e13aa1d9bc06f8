//! NASA Image and Video Library search

pub mod client;
pub mod types;

pub use client::{ImageQueryClient, MAX_RESULTS};
