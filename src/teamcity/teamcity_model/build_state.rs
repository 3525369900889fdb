use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// State reported by the server. Only `queued` and `running` keep a watch going,
/// any other value, known or not, ends it.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "Option<String>")]
pub enum BuildState {
    Queued,
    Running,
    Finished,
    Other(String),
}

impl BuildState {
    pub fn is_transient(&self) -> bool {
        matches!(self, BuildState::Queued | BuildState::Running)
    }

    pub fn as_str(&self) -> &str {
        match self {
            BuildState::Queued => "queued",
            BuildState::Running => "running",
            BuildState::Finished => "finished",
            BuildState::Other(raw) => raw,
        }
    }
}

impl Default for BuildState {
    fn default() -> Self {
        BuildState::Other(String::new())
    }
}

impl From<String> for BuildState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "queued" => BuildState::Queued,
            "running" => BuildState::Running,
            "finished" => BuildState::Finished,
            _ => BuildState::Other(value),
        }
    }
}

/// `null` reads as an empty state.
impl From<Option<String>> for BuildState {
    fn from(value: Option<String>) -> Self {
        value.unwrap_or_default().into()
    }
}

impl Display for BuildState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
