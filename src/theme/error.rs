use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Invalid color '{0}': expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error("Unknown theme '{name}' (available: {available})")]
    UnknownTheme { name: String, available: String },

    #[error("Invalid theme override: {0}")]
    InvalidOverride(String),
}
