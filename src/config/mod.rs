#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use storage::LocalStorage;
pub use toml_config::TomlConfig;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_MENTEE_FILE: &str = "Student Sign Up Form (Responses)";
pub const DEFAULT_MENTOR_FILE: &str = "Mentor matching survey (Responses)";
pub const DEFAULT_OUTPUT_NAME: &str = "mentor_similarities";
pub const DEFAULT_MENTEE_COLUMNS: [usize; 3] = [6, 7, 8];
pub const DEFAULT_MENTOR_COLUMNS: [usize; 3] = [3, 4, 5];
