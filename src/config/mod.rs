mod filesystem;
mod loader;
mod model;
mod settings;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{
    Config, CorpusConfig, CustomLanguageConfig, DEFAULT_MAX_COMMITS, DEFAULT_MAX_DETAILS,
    OutputConfig,
};
pub use settings::{SETTING_FIELDS, Settings, SettingsStore};
pub use validation::validate_config_semantics;
