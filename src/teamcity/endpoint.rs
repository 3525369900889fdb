use crate::teamcity::TeamCityError;
use serde::de::DeserializeOwned;

/// Payload sent along with a request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBody {
    pub content_type: &'static str,
    pub content: String,
}

/// A single TeamCity REST resource.
pub trait Endpoint {
    /// HTTP method, like "GET".
    fn method(&self) -> &str;

    /// Path relative to the server root, without a leading slash.
    fn endpoint(&self) -> String;

    fn body(&self) -> Option<RequestBody> {
        None
    }
}

/// Transport for endpoints. Returns the raw response body of a successful request.
#[async_trait::async_trait]
pub trait AsyncClient: Send + Sync {
    async fn request(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<&RequestBody>,
    ) -> Result<String, TeamCityError>;
}

pub async fn raw_query<E, C>(endpoint: &E, client: &C) -> Result<String, TeamCityError>
where
    E: Endpoint + ?Sized,
    C: AsyncClient + ?Sized,
{
    let body = endpoint.body();
    client
        .request(endpoint.method(), &endpoint.endpoint(), body.as_ref())
        .await
}

/// Issue `endpoint` and decode the JSON answer.
///
/// The body is fully read before decoding, a decode failure yields nothing partial.
pub async fn query<T, E, C>(endpoint: &E, client: &C) -> Result<T, TeamCityError>
where
    T: DeserializeOwned,
    E: Endpoint + ?Sized,
    C: AsyncClient + ?Sized,
{
    let content = raw_query(endpoint, client).await?;
    Ok(serde_json::from_str(&content)?)
}
