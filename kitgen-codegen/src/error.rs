use miette::Diagnostic;
use thiserror::Error;

/// A structurally invalid declaration.
///
/// Raised while building the typed representation, before anything is
/// rendered, so an invalid signature never reaches the output.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SignatureError {
    #[error("{kind} name must not be empty")]
    #[diagnostic(code(kitgen::empty_name))]
    EmptyName { kind: &'static str },

    #[error("'{name}' is not a valid identifier in {context}")]
    #[diagnostic(
        code(kitgen::invalid_identifier),
        help("use only letters, digits and underscores, starting with a letter or underscore")
    )]
    InvalidIdentifier { name: String, context: String },

    #[error("'{name}' is a reserved word and cannot be used in {context}")]
    #[diagnostic(code(kitgen::reserved_word))]
    ReservedWord { name: String, context: String },

    #[error("duplicate name '{name}' in {context}")]
    #[diagnostic(
        code(kitgen::duplicate_name),
        help("parameter and result names must be unique within one signature")
    )]
    DuplicateName { name: String, context: String },
}
