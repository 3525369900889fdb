/// seconds between two build state checks.
pub const WATCH_INTERVAL: u64 = 5;

pub const DEFAULT_COMMAND: &str = "list";

pub const ENV_HOST: &str = "TEAMCITY_HOST";
pub const ENV_LOGIN: &str = "TEAMCITY_LOGIN";
pub const ENV_PASSWORD: &str = "TEAMCITY_PASSWORD";

/// scheme used when `TEAMCITY_HOST` carries none.
pub const DEFAULT_SCHEME: &str = "https://";

pub const REST_API_PREFIX: &str = "httpAuth/app/rest";

pub const USER_AGENT: &str = concat!("tc-cli/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_LOG_FILTER: &str = "warn";
