use crate::system_error::SystemErrorKind;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("empty system error record: no variant populated")]
    EmptyRecord,

    #[error("ambiguous system error record: {populated:?} populated")]
    AmbiguousRecord { populated: Vec<SystemErrorKind> },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
