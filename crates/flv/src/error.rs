use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlvError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Tag data size too large for a 24-bit length field: {0}")]
    TagTooLarge(usize),
}
