use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum SevdError {
    #[error("{property}: expected {expected}, found {found}")]
    #[diagnostic(code(sevd::type_mismatch))]
    TypeMismatch {
        property: String,
        expected: String,
        found: String,
    },

    #[error("{property}: value \"{value}\" does not meet requirements for an int")]
    #[diagnostic(code(sevd::format))]
    FormatError { property: String, value: String },

    #[error("{property}: \"{value}\" {reason}")]
    #[diagnostic(code(sevd::invalid_value))]
    InvalidValue {
        property: String,
        value: String,
        reason: String,
    },

    #[error("Missing value: {tag}")]
    #[diagnostic(
        code(sevd::missing_required),
        help("set the property before serializing the document")
    )]
    MissingRequiredField { tag: String },

    #[error("<{tag}> appears {count} times but is declared single-valued")]
    #[diagnostic(code(sevd::schema_violation))]
    SchemaViolation { tag: String, count: usize },

    #[error("{node} has no property named '{property}'")]
    #[diagnostic(code(sevd::unknown_property))]
    UnknownProperty { node: String, property: String },

    #[error("Pattern error: {0}")]
    #[diagnostic(code(sevd::pattern))]
    Pattern(#[from] regex::Error),

    #[error("XML error: {0}")]
    #[diagnostic(code(sevd::xml))]
    Xml(String),

    #[error("Config error: {0}")]
    #[diagnostic(code(sevd::config))]
    Config(String),

    #[error("IO error: {0}")]
    #[diagnostic(code(sevd::io))]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    #[diagnostic(code(sevd::transport))]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, SevdError>;
