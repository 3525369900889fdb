use crate::default_config::REST_API_PREFIX;
use crate::teamcity::endpoint::Endpoint;

/// Endpoint for listing every project visible to the user.
pub struct ProjectList;

impl Endpoint for ProjectList {
    /// HTTP method used (GET).
    fn method(&self) -> &str {
        "GET"
    }

    fn endpoint(&self) -> String {
        format!("{}/projects", REST_API_PREFIX)
    }
}
