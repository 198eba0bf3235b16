mod loader;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{
    CONFIG_VERSION, Config, DEFAULT_RANDOM_RANGE, DefaultsConfig, OutputConfig, PaletteConfig,
};
