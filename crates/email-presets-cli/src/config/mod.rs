//! `config.toml` handling: schema, loading, the `config init` template and
//! the on-disk location.

pub mod default;
pub mod error;
pub mod loader;
pub mod schema;
pub mod xdg;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::Config;
