use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    #[error("JSON Serialization Error")]
    JsonError(#[from] serde_json::Error),
}
