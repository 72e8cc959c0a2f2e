use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid day id: {0}")]
    InvalidDayId(String),

    #[error("Invalid epoch timestamp: {0}")]
    InvalidEpoch(String),
}
