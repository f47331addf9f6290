mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{
    Config, DEFAULT_EXCLUDE_PATH_PATTERN, DEFAULT_EXTENSIONS, DEFAULT_HEADER_EXTENSIONS,
    DEFAULT_ROOTS, ErrorCodesConfig, ScanConfig, StyleConfig,
};
pub use validation::validate_config_semantics;
