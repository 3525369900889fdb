use crate::teamcity::endpoint::{AsyncClient, RequestBody};
use crate::teamcity::TeamCityError;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub endpoint: String,
    pub body: Option<RequestBody>,
}

/// In-memory client replaying canned responses in order and recording every request.
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<String, TeamCityError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedClient {
    pub fn new(responses: impl IntoIterator<Item = Result<String, TeamCityError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn ok(bodies: &[&str]) -> Self {
        Self::new(bodies.iter().map(|body| Ok(body.to_string())))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn endpoints(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.endpoint).collect()
    }
}

#[async_trait::async_trait]
impl AsyncClient for ScriptedClient {
    async fn request(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<&RequestBody>,
    ) -> Result<String, TeamCityError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            endpoint: endpoint.to_string(),
            body: body.cloned(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TeamCityError::Status {
                    status: 404,
                    body: format!("no scripted response for {}", endpoint),
                })
            })
    }
}
