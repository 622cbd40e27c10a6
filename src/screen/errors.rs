use crate::repo::StoreError;
use derive_more::{Display, Error};

/// Missing or malformed form input, caught before any store call is
/// attempted. The UI layer surfaces this as a blocking alert.
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[display("required field is missing or empty: {_0}")]
    MissingField(#[error(not(source))] &'static str),
    #[display("weight is not numeric")]
    WeightNotNumeric,
}

/// What a modal form submission can fail with. A `Store` failure leaves the
/// pending form state untouched so the user may retry.
#[derive(Debug, Display, Error)]
pub enum SubmitError {
    #[display("{_0}")]
    Validation(ValidationError),
    #[display("{_0}")]
    Store(StoreError),
}

impl From<ValidationError> for SubmitError {
    fn from(err: ValidationError) -> Self {
        SubmitError::Validation(err)
    }
}
