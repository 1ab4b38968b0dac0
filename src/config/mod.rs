pub mod constants;
pub mod server_config;

pub use server_config::ServerConfig;
