use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From};

/// A required input field was left blank.
#[derive(Debug)]
pub struct EmptyField {
    pub field: &'static str,
}

impl Display for EmptyField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The {} field is empty!", self.field)
    }
}

impl Error for EmptyField {}

/// An input field held text that doesn't read as a number in range.
#[derive(Debug)]
pub struct MalformedNumber {
    pub field: &'static str,
    pub text: String,
}

impl Display for MalformedNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expected a number in the {} field, found {:?}!",
            self.field, self.text
        )
    }
}

impl Error for MalformedNumber {}

#[derive(Debug, Display, Error, From)]
pub enum ControlError {
    EmptyField(EmptyField),
    MalformedNumber(MalformedNumber),
}
