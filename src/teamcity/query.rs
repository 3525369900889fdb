use crate::teamcity::endpoint::{query, AsyncClient};
use crate::teamcity::teamcity_endpoint::build_info::BuildInfoRequest;
use crate::teamcity::teamcity_endpoint::build_types::BuildTypeList;
use crate::teamcity::teamcity_endpoint::projects::ProjectList;
use crate::teamcity::teamcity_model::build_info::BuildInfo;
use crate::teamcity::teamcity_model::build_type::BuildTypes;
use crate::teamcity::teamcity_model::project::Projects;
use crate::teamcity::TeamCityError;

pub async fn query_projects<C: AsyncClient + ?Sized>(client: &C) -> Result<Projects, TeamCityError> {
    query(&ProjectList, client).await
}

pub async fn query_build_types<C: AsyncClient + ?Sized>(
    client: &C,
    project_id: &str,
) -> Result<BuildTypes, TeamCityError> {
    query(
        &BuildTypeList {
            project_id: project_id.into(),
        },
        client,
    )
    .await
}

pub async fn query_build_info<C: AsyncClient + ?Sized>(
    client: &C,
    build_id: &str,
) -> Result<BuildInfo, TeamCityError> {
    query(
        &BuildInfoRequest {
            build_id: build_id.into(),
        },
        client,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teamcity::scripted_client::ScriptedClient;
    use crate::teamcity::teamcity_model::build_state::BuildState;

    #[tokio::test]
    async fn projects_are_read_from_projects_endpoint() {
        let client = ScriptedClient::ok(&[r#"{"count":1,"project":[{"id":"A","name":"Alpha"}]}"#]);

        let projects = query_projects(&client).await.unwrap();

        assert_eq!(projects.projects[0].name, "Alpha");
        let requests = client.requests();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].endpoint, "httpAuth/app/rest/projects");
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn build_types_endpoint_embeds_project_id() {
        let client = ScriptedClient::ok(&[r#"{"count":0}"#]);

        let build_types = query_build_types(&client, "Backend").await.unwrap();

        assert!(build_types.build_types.is_empty());
        assert_eq!(
            client.endpoints(),
            vec!["httpAuth/app/rest/projects/id:Backend/buildTypes"]
        );
    }

    #[tokio::test]
    async fn empty_project_id_is_sent_as_is() {
        let client = ScriptedClient::ok(&[r#"{"count":0}"#]);

        query_build_types(&client, "").await.unwrap();

        assert_eq!(
            client.endpoints(),
            vec!["httpAuth/app/rest/projects/id:/buildTypes"]
        );
    }

    #[tokio::test]
    async fn build_info_endpoint_embeds_build_id() {
        let client = ScriptedClient::ok(&[r#"{"state":"running"}"#]);

        let info = query_build_info(&client, "42").await.unwrap();

        assert_eq!(info.state, BuildState::Running);
        assert_eq!(client.endpoints(), vec!["httpAuth/app/rest/builds/id:42"]);
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_error() {
        let client = ScriptedClient::ok(&[r#"{"count":1,"project":[{"id":"A""#]);

        let result = query_projects(&client).await;

        assert!(matches!(result, Err(TeamCityError::Decode(_))));
    }
}
