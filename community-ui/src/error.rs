/// Failures talking to the instance API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[source] gloo_net::Error),

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("Failed to parse JSON: {0}")]
    Decode(#[source] gloo_net::Error),

    #[error("Server refused to {0}")]
    Refused(String),

    #[error("Not logged in")]
    NotLoggedIn,
}

pub type Result<T> = std::result::Result<T, ClientError>;
