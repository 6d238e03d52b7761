pub mod settings;

pub use crate::domain::config::CheckConfig;
pub use settings::{FileSettings, load_file_settings};
