use crate::constant::log::*;
use crate::pretty_log::{colored_println, ThemeColor};
use crate::teamcity::endpoint::AsyncClient;
use crate::teamcity::query::query_build_info;
use crate::teamcity::teamcity_model::build_info::BuildInfo;
use crate::teamcity::teamcity_model::build_status::BuildStatus;
use crate::teamcity::TeamCityError;
use formatx::formatx;
use std::io::Write;
use std::time::Duration;

/// # watch build
///
/// Poll the build state by interval until it is neither `queued` nor `running`.
///
/// ### Arguments
///
/// * `out`: every observed state is printed here.
/// * `client`:
/// * `build_id`: sent unvalidated.
/// * `interval`: sleep between two checks.
///
/// ### Returns
///
/// The first non-transient answer. A failed check ends the watch, it is never retried.
pub async fn watch_build<W: Write, C: AsyncClient + ?Sized>(
    out: &mut W,
    client: &C,
    build_id: &str,
    interval: Duration,
) -> Result<BuildInfo, TeamCityError> {
    let info = loop {
        let info = query_build_info(client, build_id).await?;
        tracing::debug!(build_id, state = %info.state, "build state checked");

        let transient = info.state.is_transient();
        colored_println(
            out,
            if transient {
                ThemeColor::Warn
            } else {
                ThemeColor::Main
            },
            &formatx!(BUILD_STATE, &info.state).unwrap_or_default(),
        );

        if !transient {
            break info;
        }

        tokio::time::sleep(interval).await;
    };

    colored_println(out, ThemeColor::Success, BUILD_FINISHED);

    if let Some(status) = info.status {
        let theme = match status {
            BuildStatus::Success => ThemeColor::Success,
            _ => ThemeColor::Error,
        };
        colored_println(
            out,
            theme,
            &formatx!(BUILD_STATUS, status).unwrap_or_default(),
        );
        if let Some(ref text) = info.status_text {
            colored_println(out, ThemeColor::Second, text);
        }
    }

    Ok(info)
}
