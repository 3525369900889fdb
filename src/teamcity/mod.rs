pub mod basic_auth_async_client;
pub mod build;
pub mod endpoint;
pub mod query;
pub mod teamcity_endpoint;
pub mod teamcity_model;
pub mod watch;

#[cfg(test)]
pub(crate) mod scripted_client;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamCityError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("cannot build xml request body: {0}")]
    Xml(String),

    #[error("invalid http method: {0}")]
    InvalidMethod(String),
}
