pub const ERR_UNKNOWN_COMMAND: &str = "Unknown command";
pub const ERR_CREATE_CLIENT: &str = "Cannot create the TeamCity client. {}";
pub const ERR_LIST_PROJECTS: &str = "Failed to list projects. {}";
pub const ERR_LIST_BUILD_TYPES: &str = "Failed to list build configurations of project {}. {}";
pub const ERR_REQUEST_BUILD_FAILED: &str = "Failed to request a build of {}. {}";
pub const ERR_WATCH_BUILD_FAILED: &str = "Failed to watch build {}. {}";

pub const ENTITY_LINE: &str = "ID: {}  Name: {}";

pub const BUILD_STARTED: &str = "Build started {}...";
pub const BUILD_URL: &str = "Build URL: {}";
pub const BUILD_STATE: &str = "Build state: {}";
pub const BUILD_FINISHED: &str = "Build finished";
pub const BUILD_STATUS: &str = "Build status: {}";
