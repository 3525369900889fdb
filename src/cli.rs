use crate::constant::log::*;
use crate::pretty_log::{colored_println, ThemeColor};
use crate::tc_error::TcError;
use crate::teamcity::build::{request_build, BuildRequest};
use crate::teamcity::endpoint::AsyncClient;
use crate::teamcity::query::{query_build_types, query_projects};
use crate::teamcity::watch::watch_build;
use formatx::formatx;
use std::io::Write;
use std::time::Duration;

fn print_entity<W: Write>(out: &mut W, id: &str, name: &str) {
    colored_println(
        out,
        ThemeColor::Main,
        &formatx!(ENTITY_LINE, id, name).unwrap_or_default(),
    );
}

/// # cli do list projects
///
/// One line per project, in server order. Nothing is printed unless the whole list decoded.
pub async fn cli_do_list_projects<W: Write, C: AsyncClient + ?Sized>(
    out: &mut W,
    client: &C,
) -> Result<(), TcError> {
    let projects = query_projects(client).await.map_err(TcError::ListProjects)?;
    tracing::debug!(count = projects.count, "projects listed");

    for project in &projects {
        print_entity(out, &project.id, &project.name);
    }

    Ok(())
}

pub async fn cli_do_list_build_types<W: Write, C: AsyncClient + ?Sized>(
    out: &mut W,
    client: &C,
    project_id: &str,
) -> Result<(), TcError> {
    let build_types = query_build_types(client, project_id)
        .await
        .map_err(|e| TcError::ListBuildTypes {
            project_id: project_id.to_string(),
            e,
        })?;

    tracing::debug!(count = build_types.count, project_id, "build configurations listed");

    for build_type in &build_types {
        tracing::debug!(
            id = %build_type.id,
            project = %build_type.project_name,
            project_id = %build_type.project_id,
            href = %build_type.href,
            web_url = %build_type.web_url,
            "build configuration"
        );
        print_entity(out, &build_type.id, &build_type.name);
    }

    Ok(())
}

/// # cli do build
///
/// Queue a build of `build_type_id` and watch it until it finishes.
/// Nothing is polled when queueing fails.
pub async fn cli_do_build<W: Write, C: AsyncClient + ?Sized>(
    out: &mut W,
    client: &C,
    build_type_id: &str,
    branch: Option<&str>,
    interval: Duration,
) -> Result<(), TcError> {
    let queued = request_build(out, client, &BuildRequest::new(build_type_id, branch))
        .await
        .map_err(|e| TcError::RequestBuild {
            build_type_id: build_type_id.to_string(),
            e,
        })?;

    colored_println(
        out,
        ThemeColor::Success,
        &formatx!(BUILD_STARTED, queued.id).unwrap_or_default(),
    );
    if let Some(ref web_url) = queued.web_url {
        colored_println(
            out,
            ThemeColor::Second,
            &formatx!(BUILD_URL, web_url).unwrap_or_default(),
        );
    }

    cli_do_wait(out, client, &queued.id.to_string(), interval).await
}

pub async fn cli_do_wait<W: Write, C: AsyncClient + ?Sized>(
    out: &mut W,
    client: &C,
    build_id: &str,
    interval: Duration,
) -> Result<(), TcError> {
    watch_build(out, client, build_id, interval)
        .await
        .map(|_| ())
        .map_err(|e| TcError::WatchBuild {
            build_id: build_id.to_string(),
            e,
        })
}
