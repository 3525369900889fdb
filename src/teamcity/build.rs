use crate::pretty_log::{colored_println, ThemeColor};
use crate::teamcity::endpoint::raw_query;
use crate::teamcity::endpoint::AsyncClient;
use crate::teamcity::teamcity_endpoint::build_queue::BuildQueue;
use crate::teamcity::teamcity_model::queued_build::QueuedBuild;
use crate::teamcity::TeamCityError;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// A build of `build_type_id`, optionally on `branch`.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildRequest<'a> {
    pub build_type_id: &'a str,
    pub branch: Option<&'a str>,
}

impl<'a> BuildRequest<'a> {
    /// An empty branch means the default branch.
    pub fn new(build_type_id: &'a str, branch: Option<&'a str>) -> Self {
        Self {
            build_type_id,
            branch: branch.filter(|b| !b.is_empty()),
        }
    }

    /// # to xml
    ///
    /// `<build branchName="..."><buildType id="..."/></build>`, attribute values escaped.
    pub fn to_xml(&self) -> Result<String, TeamCityError> {
        let mut writer = Writer::new(Vec::new());

        let mut build = BytesStart::new("build");
        if let Some(branch) = self.branch {
            build.push_attribute(("branchName", branch));
        }

        let mut build_type = BytesStart::new("buildType");
        build_type.push_attribute(("id", self.build_type_id));

        writer.write_event(Event::Start(build)).map_err(xml_error)?;
        writer
            .write_event(Event::Empty(build_type))
            .map_err(xml_error)?;
        writer
            .write_event(Event::End(BytesEnd::new("build")))
            .map_err(xml_error)?;

        String::from_utf8(writer.into_inner()).map_err(xml_error)
    }
}

fn xml_error(e: impl std::fmt::Display) -> TeamCityError {
    TeamCityError::Xml(e.to_string())
}

/// # request build
///
/// Queue a build and return the id the server assigned to it.
/// The raw answer is echoed to `out` before it is decoded.
pub async fn request_build<W: Write, C: AsyncClient + ?Sized>(
    out: &mut W,
    client: &C,
    request: &BuildRequest<'_>,
) -> Result<QueuedBuild, TeamCityError> {
    let xml = request.to_xml()?;
    tracing::debug!(body = %xml, "queueing build");

    let content = raw_query(&BuildQueue { xml }, client).await?;
    colored_println(out, ThemeColor::Second, &content);

    Ok(serde_json::from_str(&content)?)
}
