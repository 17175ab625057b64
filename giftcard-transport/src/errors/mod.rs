use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Utils error: {0}")]
    Utils(#[from] giftcard_utils::error::Error),
}

impl TransportError {
    pub fn is_network_error(&self) -> bool {
        match self {
            TransportError::Utils(e) => e.is_network_error(),
        }
    }
}
