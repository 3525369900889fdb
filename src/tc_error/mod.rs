use crate::constant::log::*;
use crate::pretty_log::{colored_println, ThemeColor};
use crate::teamcity::TeamCityError;
use formatx::formatx;
use std::fmt::Display;
use std::io::Write;

#[derive(Debug)]
pub enum TcError {
    UnknownCommand(String),
    CreateClient(TeamCityError),
    ListProjects(TeamCityError),
    ListBuildTypes {
        project_id: String,
        e: TeamCityError,
    },
    RequestBuild {
        build_type_id: String,
        e: TeamCityError,
    },
    WatchBuild {
        build_id: String,
        e: TeamCityError,
    },
}

impl Display for TcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            TcError::UnknownCommand(_) => ERR_UNKNOWN_COMMAND.to_string(),
            TcError::CreateClient(e) => formatx!(ERR_CREATE_CLIENT, e).unwrap_or_default(),
            TcError::ListProjects(e) => formatx!(ERR_LIST_PROJECTS, e).unwrap_or_default(),
            TcError::ListBuildTypes { project_id, e } => {
                formatx!(ERR_LIST_BUILD_TYPES, project_id, e).unwrap_or_default()
            }
            TcError::RequestBuild { build_type_id, e } => {
                formatx!(ERR_REQUEST_BUILD_FAILED, build_type_id, e).unwrap_or_default()
            }
            TcError::WatchBuild { build_id, e } => {
                formatx!(ERR_WATCH_BUILD_FAILED, build_id, e).unwrap_or_default()
            }
        };
        write!(f, "{}", str)
    }
}

impl TcError {
    pub fn colored_println<W: Write>(&self, out: &mut W) {
        colored_println(out, ThemeColor::Error, self.to_string().as_str());
    }
}
