pub mod analyze;
pub mod config;
pub mod context;
pub mod init;

pub use analyze::{build_corpus, run_analyze, run_analyze_impl};
pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use context::{color_choice_to_mode, load_config, log_filter, write_output};
pub use init::{generate_config_template, run_init, run_init_impl};
