use miette::Diagnostic;
use thiserror::Error;

/// Errors raised at the edges of the parsing framework.
///
/// Individual parsers never produce these: a rejected value is `None`.
/// These cover malformed kind tags and callers that want a reportable
/// failure instead of an absent value.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Invalid kind tag: {message}")]
    #[diagnostic(code(cfgval::kind))]
    Kind {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid {kind} value: {raw}")]
    #[diagnostic(code(cfgval::value))]
    Value {
        kind: String,
        raw: String,
        #[help]
        help: Option<String>,
    },

    #[error("YAML error: {0}")]
    #[diagnostic(code(cfgval::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(code(cfgval::json))]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
