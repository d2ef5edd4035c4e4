use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ADTS demux error: {0}")]
    Adts(#[from] adts::AdtsError),

    #[error("FLV mux error: {0}")]
    Flv(#[from] flv::FlvError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Initialization failed: {0}")]
    Initialization(String),
}
