use crate::default_config::REST_API_PREFIX;
use crate::teamcity::endpoint::Endpoint;

/// Endpoint for retrieving the state of a single build.
pub struct BuildInfoRequest {
    pub build_id: String,
}

impl Endpoint for BuildInfoRequest {
    /// HTTP method used (GET).
    fn method(&self) -> &str {
        "GET"
    }

    fn endpoint(&self) -> String {
        format!("{}/builds/id:{}", REST_API_PREFIX, self.build_id)
    }
}
