use crate::teamcity::teamcity_model::build_state::BuildState;
use crate::teamcity::teamcity_model::build_status::BuildStatus;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct BuildInfo {
    #[serde(default)]
    pub state: BuildState,

    #[serde(default)]
    pub status: Option<BuildStatus>,

    #[serde(rename = "statusText", default)]
    pub status_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_finished_build() {
        let content = r#"{"id":42,"buildTypeId":"Backend_Test","number":"118","status":"FAILURE","state":"finished","statusText":"Tests failed: 3","webUrl":"https://ci/viewLog.html?buildId=42"}"#;

        let info: BuildInfo = serde_json::from_str(content).unwrap();

        assert_eq!(info.state, BuildState::Finished);
        assert_eq!(info.status, Some(BuildStatus::Failure));
        assert_eq!(info.status_text.as_deref(), Some("Tests failed: 3"));
    }

    #[test]
    fn parse_queued_build_without_status() {
        let info: BuildInfo = serde_json::from_str(r#"{"id":42,"state":"queued"}"#).unwrap();
        assert_eq!(info.state, BuildState::Queued);
        assert_eq!(info.status, None);
    }

    #[test]
    fn missing_state_is_terminal() {
        let info: BuildInfo = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert!(!info.state.is_transient());
        assert_eq!(info.state.to_string(), "");
    }

    #[test]
    fn unknown_status_does_not_fail() {
        let info: BuildInfo =
            serde_json::from_str(r#"{"state":"finished","status":"WARNING"}"#).unwrap();
        assert_eq!(info.status, Some(BuildStatus::Unknown));
    }
}
