use giftcard_transport::errors::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Transport error: `{0}`")]
    Transport(#[from] TransportError),
    #[error("Backend error: code `{code:?}`, msg `{msg:?}`")]
    Backend {
        code: Option<String>,
        msg: Option<String>,
    },
    #[error("Utils error: `{0}`")]
    Utils(#[from] giftcard_utils::error::Error),
}

impl Error {
    pub fn is_network_error(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_network_error(),
            Error::Utils(e) => e.is_network_error(),
            _ => false,
        }
    }
}
