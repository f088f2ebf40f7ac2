use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("sphere layout needs at least 2 cards, got {0}")]
    TooFewCards(usize),
    #[error("no {0} to assign to sphere cards")]
    EmptyCatalog(&'static str),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaskError {
    #[error("mask {width}x{height} expects {expected} bytes, got {actual}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
