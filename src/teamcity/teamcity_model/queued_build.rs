use serde::Deserialize;

/// Answer of the build queue. `id` is the one polled afterwards.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct QueuedBuild {
    pub id: u64,

    #[serde(rename = "webUrl", default)]
    pub web_url: Option<String>,
}
