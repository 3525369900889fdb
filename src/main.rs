mod cli;
mod constant;
mod credentials;
mod default_config;
mod pretty_log;
mod tc_error;
mod teamcity;

use crate::credentials::Credentials;
use crate::tc_error::TcError;
use crate::teamcity::basic_auth_async_client::BasicAuthAsyncClient;
use crate::teamcity::endpoint::AsyncClient;
use clap::Parser;
use std::ffi::OsString;
use std::io::{stdout, IsTerminal, Write};
use std::str::FromStr;
use std::time::Duration;
use strum_macros::Display;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// flags also accepted with a single leading dash, like `-command build`.
const LONG_FLAGS: [&str; 5] = ["command", "id", "branch", "help", "version"];

#[derive(Parser, Debug)]
#[command(name = "tc",
  version,
  about(env!("CARGO_PKG_DESCRIPTION")),
  long_about = None
)]
struct Cli {
    /// Command to execute: list, list-builds, build, wait.
    #[arg(long, default_value = default_config::DEFAULT_COMMAND)]
    command: String,

    /// ID of the project (list-builds), build configuration (build) or build (wait).
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    id: String,

    /// Branch to use. only used by build.
    #[arg(long, allow_hyphen_values = true)]
    branch: Option<String>,
}

#[derive(Display, Debug, Clone, Copy, PartialEq)]
#[strum(serialize_all = "kebab-case")]
enum Command {
    /// List all projects.
    List,
    /// List build configurations of a project.
    ListBuilds,
    /// Queue a build and watch it.
    Build,
    /// Watch an existing build.
    Wait,
}

impl FromStr for Command {
    type Err = TcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Command::List),
            "list-builds" => Ok(Command::ListBuilds),
            "build" => Ok(Command::Build),
            "wait" => Ok(Command::Wait),
            _ => Err(TcError::UnknownCommand(s.to_string())),
        }
    }
}

/// Initialize the tracing subscriber. Logs go to stderr, stdout belongs to results.
///
/// Level comes from `RUST_LOG`, default is warn.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_config::DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Rewrite `-command` and `-command=x` to their double dash form.
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 {
                return arg;
            }
            match arg.to_str().and_then(normalize_flag) {
                Some(normalized) => OsString::from(normalized),
                None => arg,
            }
        })
        .collect()
}

fn normalize_flag(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }

    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name).then(|| format!("-{}", arg))
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    let credentials = Credentials::from_env();
    tracing::debug!(?cli, ?credentials, "starting");

    let mut stdout = stdout();
    pretty_log::set_colored(stdout.is_terminal());
    if let Err(err) = main_cli(&mut stdout, cli, &credentials).await {
        if let TcError::UnknownCommand(ref command) = err {
            tracing::debug!(command = %command, "unknown command");
        }
        err.colored_println(&mut stdout);
    }
}

async fn main_cli<W: Write>(
    out: &mut W,
    cli: Cli,
    credentials: &Credentials,
) -> Result<(), TcError> {
    let command = Command::from_str(&cli.command)?;
    let client = BasicAuthAsyncClient::new(credentials).map_err(TcError::CreateClient)?;

    dispatch(
        out,
        &client,
        command,
        &cli.id,
        cli.branch.as_deref(),
        Duration::from_secs(default_config::WATCH_INTERVAL),
    )
    .await
}

async fn dispatch<W: Write, C: AsyncClient + ?Sized>(
    out: &mut W,
    client: &C,
    command: Command,
    id: &str,
    branch: Option<&str>,
    interval: Duration,
) -> Result<(), TcError> {
    tracing::debug!(%command, id, ?branch, "dispatching");

    match command {
        Command::List => {
            // tc -command list
            cli::cli_do_list_projects(out, client).await
        }
        Command::ListBuilds => {
            // tc -command list-builds -id <project>
            cli::cli_do_list_build_types(out, client, id).await
        }
        Command::Build => {
            // tc -command build -id <build type> [-branch <branch>]
            cli::cli_do_build(out, client, id, branch, interval).await
        }
        Command::Wait => {
            // tc -command wait -id <build>
            cli::cli_do_wait(out, client, id, interval).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teamcity::scripted_client::ScriptedClient;

    fn args(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    fn parse(items: &[&str]) -> Cli {
        Cli::parse_from(normalize_args(args(items)))
    }

    #[test]
    fn single_dash_flags_are_normalized() {
        assert_eq!(
            normalize_args(args(&["tc", "-command", "build", "-id=X", "-branch", "main"])),
            args(&["tc", "--command", "build", "--id=X", "--branch", "main"])
        );
    }

    #[test]
    fn other_arguments_are_left_alone() {
        assert_eq!(
            normalize_args(args(&["-command", "--id", "X", "-x", "-idle", "value"])),
            args(&["-command", "--id", "X", "-x", "-idle", "value"])
        );
    }

    #[test]
    fn defaults_to_list() {
        let cli = parse(&["tc"]);
        assert_eq!(cli.command, "list");
        assert_eq!(cli.id, "");
        assert_eq!(cli.branch, None);
    }

    #[test]
    fn go_style_invocation_parses() {
        let cli = parse(&["tc", "-command", "build", "-id", "Backend_Test", "-branch=feature/x"]);
        assert_eq!(cli.command, "build");
        assert_eq!(cli.id, "Backend_Test");
        assert_eq!(cli.branch.as_deref(), Some("feature/x"));
    }

    #[test]
    fn command_names_round_trip() {
        for name in ["list", "list-builds", "build", "wait"] {
            let command = Command::from_str(name).unwrap();
            assert_eq!(command.to_string(), name);
        }
    }

    #[tokio::test]
    async fn unknown_command_prints_nothing_and_sends_nothing() {
        let cli = parse(&["tc", "-command", "deploy"]);
        let mut out = Vec::new();

        let err = main_cli(&mut out, cli, &Credentials::default())
            .await
            .unwrap_err();

        assert!(matches!(err, TcError::UnknownCommand(ref name) if name == "deploy"));
        assert!(out.is_empty());

        err.colored_println(&mut out);
        assert!(String::from_utf8(out).unwrap().contains("Unknown command"));
    }

    #[tokio::test]
    async fn dispatch_list_builds_uses_id_as_project() {
        let client = ScriptedClient::ok(&[r#"{"count":1,"buildType":[{"id":"P_B","name":"B"}]}"#]);
        let mut out = Vec::new();

        dispatch(
            &mut out,
            &client,
            Command::ListBuilds,
            "P",
            None,
            Duration::from_secs(5),
        )
        .await
        .unwrap();

        assert_eq!(
            client.endpoints(),
            vec!["httpAuth/app/rest/projects/id:P/buildTypes"]
        );
        assert_eq!(String::from_utf8(out).unwrap(), "ID: P_B  Name: B\n");
    }

    #[tokio::test(start_paused = true)]
    async fn dispatch_wait_polls_given_build() {
        let client = ScriptedClient::ok(&[r#"{"state":"running"}"#, r#"{"state":"finished"}"#]);
        let mut out = Vec::new();

        dispatch(
            &mut out,
            &client,
            Command::Wait,
            "1234",
            Some("ignored"),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

        assert_eq!(
            client.endpoints(),
            vec![
                "httpAuth/app/rest/builds/id:1234",
                "httpAuth/app/rest/builds/id:1234"
            ]
        );
    }
}
