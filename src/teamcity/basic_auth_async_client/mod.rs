use crate::credentials::Credentials;
use crate::default_config;
use crate::teamcity::endpoint::{AsyncClient, RequestBody};
use crate::teamcity::TeamCityError;
use base64::Engine;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};

/// Asynchronous TeamCity API client authentic by HTTP Basic auth.
pub struct BasicAuthAsyncClient {
    base_url: String,
    authorization: String,
    client: Client,
}

impl BasicAuthAsyncClient {
    /// Creates a new client for the server named in `credentials`.
    ///
    /// # Arguments
    ///
    /// * `credentials` - host, username and password. Empty values are sent as they are.
    pub fn new(credentials: &Credentials) -> Result<Self, TeamCityError> {
        let authorization = format!(
            "Basic {}",
            base64::prelude::BASE64_STANDARD
                .encode(format!("{}:{}", credentials.username, credentials.password).as_bytes())
        );

        Ok(Self {
            base_url: credentials.base_url(),
            authorization,
            client: Client::builder()
                .user_agent(default_config::USER_AGENT)
                .build()?,
        })
    }
}

#[async_trait::async_trait]
impl AsyncClient for BasicAuthAsyncClient {
    /// Sends an asynchronous HTTP request to the TeamCity server.
    async fn request(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<&RequestBody>,
    ) -> Result<String, TeamCityError> {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        let method: Method = method
            .parse()
            .map_err(|_| TeamCityError::InvalidMethod(method.to_string()))?;

        tracing::debug!(%method, %url, "sending request");

        let mut req = self
            .client
            .request(method, &url)
            .header(AUTHORIZATION, &self.authorization)
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            req = req
                .header(CONTENT_TYPE, body.content_type)
                .body(body.content.clone());
        }

        let resp = req.send().await?;
        let status = resp.status();
        let content = resp.text().await?;

        tracing::debug!(%url, status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(TeamCityError::Status {
                status: status.as_u16(),
                body: content,
            });
        }

        Ok(content)
    }
}
