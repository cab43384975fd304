use thiserror::Error;

/// Well-formed JSON that does not carry the fields a reading needs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResponseError {
    #[error("response contained no current_condition entries")]
    NoCurrentCondition,

    #[error("current condition contained no weatherDesc entries")]
    NoDescription,
}
