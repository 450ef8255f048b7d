pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("descriptor field `{field}` contains a character not allowed in XML: {ch:?}")]
    InvalidCharacter { field: &'static str, ch: char },

    #[error("unknown body kind: {kind}")]
    UnknownBodyKind { kind: String },
}
