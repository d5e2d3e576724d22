#[derive(Debug)]
pub enum Error {
    /// The epoch part before the first `:` is not a plain run of
    /// decimal digits, or does not fit an epoch number
    InvalidEpoch(String),
}

pub type Result<T> = std::result::Result<T, Error>;
