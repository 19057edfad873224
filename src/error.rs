use displaydoc::Display;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DisjointSetError {
    #[error("Invalid element count: {0}")]
    InvalidArgument(#[from] InvalidLength),

    #[error("Element {element} is out of range for a disjoint set of {len} elements")]
    OutOfRange { element: u32, len: u32 },
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum InvalidLength {
    /// {0} is negative
    Negative(i64),
    /// {0} exceeds the limit of 2^31 elements
    TooLarge(u64),
}

impl core::error::Error for InvalidLength {}
