pub mod api;
pub mod config;
pub mod data_models;
pub mod error;
pub mod fetcher;
pub mod formatter;
pub mod searcher;

pub use error::{Error, Result};
