pub mod mars;
pub mod search;
pub mod upstream;
pub mod weather;
