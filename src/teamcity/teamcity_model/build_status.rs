use serde::Deserialize;
use std::fmt::{Display, Formatter};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildStatus {
    Success,
    Failure,
    Error,
    #[serde(other)]
    Unknown,
}

impl Display for BuildStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            BuildStatus::Success => "SUCCESS",
            BuildStatus::Failure => "FAILURE",
            BuildStatus::Error => "ERROR",
            BuildStatus::Unknown => "UNKNOWN",
        };
        write!(f, "{}", str)
    }
}
