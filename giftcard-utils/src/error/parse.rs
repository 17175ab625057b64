#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Method parse error: {0}")]
    HttpMethod(#[from] http::method::InvalidMethod),
}
