use crate::default_config::REST_API_PREFIX;
use crate::teamcity::endpoint::Endpoint;

/// Endpoint for listing build configurations of a project.
pub struct BuildTypeList {
    /// Project id, sent unvalidated.
    pub project_id: String,
}

impl Endpoint for BuildTypeList {
    /// HTTP method used (GET).
    fn method(&self) -> &str {
        "GET"
    }

    fn endpoint(&self) -> String {
        format!("{}/projects/id:{}/buildTypes", REST_API_PREFIX, self.project_id)
    }
}
