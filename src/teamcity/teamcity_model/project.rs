use serde::Deserialize;
use std::slice::Iter;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,
}

/// Project list envelope. TeamCity omits `project` when there are none.
#[derive(Deserialize, Debug, Default)]
pub struct Projects {
    #[serde(default)]
    pub count: u32,

    #[serde(default, rename = "project")]
    pub projects: Vec<Project>,
}

impl<'a> IntoIterator for &'a Projects {
    type Item = &'a Project;
    type IntoIter = Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}
