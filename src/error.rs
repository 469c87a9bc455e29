use std::str::Utf8Error;

#[derive(Debug, Fail, PartialEq)]
pub enum StemError {
    #[fail(display = "Stemming algorithm '{}' not found", name)]
    UnknownAlgorithm { name: String },

    #[fail(display = "Word is not valid UTF-8: {}", _0)]
    InvalidUtf8(#[fail(cause)] Utf8Error),
}
