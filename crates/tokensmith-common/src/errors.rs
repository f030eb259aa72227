use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Errors raised by a single resolution call.
///
/// Every variant names the offending token, scale, animation or variable so
/// the configuration author can find it. None of them affect other tokens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("unknown token: {0}")]
    UnknownToken(String),

    #[error("{}", describe_sub_key(.token, .key, .available))]
    UnknownSubKey {
        token: String,
        key: Option<String>,
        available: Vec<String>,
    },

    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error("unknown animation: {0}")]
    UnknownAnimation(String),

    #[error("animation '{animation}' references missing keyframes '{keyframes}'")]
    DanglingAnimationReference {
        animation: String,
        keyframes: String,
    },

    #[error("invalid color expression for '{token}': {reason}")]
    InvalidColorExpression { token: String, reason: String },

    #[error("variable --{0} is not defined in the active variable set")]
    UndefinedVariable(String),

    #[error("alpha {0} is outside (0, 1]")]
    InvalidAlpha(String),

    #[error("invalid dimension for '{scale}': {reason}")]
    InvalidDimension { scale: String, reason: String },
}

fn describe_sub_key(token: &str, key: &Option<String>, available: &[String]) -> String {
    let choices = available.join(", ");
    match key {
        Some(key) => format!("unknown sub-key '{key}' for token '{token}' (declared: {choices})"),
        None => format!("token '{token}' requires a sub-key (declared: {choices})"),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokensmithError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
