//! `.plotly-light.toml` configuration files.

mod filesystem;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::Config;
