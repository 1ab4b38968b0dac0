// Library modules for integration tests
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod script;
pub mod server;
pub mod text_processing;
pub mod utils;

pub use text_processing::normalize;
