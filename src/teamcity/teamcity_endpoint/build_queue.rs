use crate::default_config::REST_API_PREFIX;
use crate::teamcity::endpoint::{Endpoint, RequestBody};

/// Endpoint for putting a build into the queue.
pub struct BuildQueue {
    /// `<build>` xml document.
    pub xml: String,
}

impl Endpoint for BuildQueue {
    /// HTTP method used (POST).
    fn method(&self) -> &str {
        "POST"
    }

    fn endpoint(&self) -> String {
        format!("{}/buildQueue", REST_API_PREFIX)
    }

    fn body(&self) -> Option<RequestBody> {
        Some(RequestBody {
            content_type: "application/xml",
            content: self.xml.clone(),
        })
    }
}
