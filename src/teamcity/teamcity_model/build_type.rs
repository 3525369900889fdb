use serde::Deserialize;
use std::slice::Iter;

/// A build configuration.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildType {
    pub id: String,
    pub name: String,
    pub project_name: String,
    pub project_id: String,
    pub href: String,
    pub web_url: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct BuildTypes {
    #[serde(default)]
    pub count: u32,

    #[serde(default, rename = "buildType")]
    pub build_types: Vec<BuildType>,
}

impl<'a> IntoIterator for &'a BuildTypes {
    type Item = &'a BuildType;
    type IntoIter = Iter<'a, BuildType>;

    fn into_iter(self) -> Self::IntoIter {
        self.build_types.iter()
    }
}
