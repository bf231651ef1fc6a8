use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{deleted, empty_response, from_state, read_or_removed, require_id, to_state, Resource};
use crate::clients::ClientSet;
use crate::error::ProviderError;
use crate::generated::teams::{
    CreateTeamInOrgRequest, DeleteTeamRequest, GetTeamRequest, GetTeamResponse, TeamId,
    UpdateTeamRequest,
};
use crate::schema::{Attribute, AttributeFlags, AttributeType, Schema};

const TYPE_NAME: &str = "observability_team";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct TeamModel {
    id: Option<String>,
    name: String,
    team_admins_emails: Option<Vec<String>>,
    daily_quota: Option<f64>,
}

impl TeamModel {
    fn team_id(&self) -> Result<TeamId, ProviderError> {
        let id = require_id(self.id.as_deref(), TYPE_NAME)?;
        let id = id.parse::<u32>().map_err(|_| {
            ProviderError::Validation(format!("team id must be numeric, got {:?}", id))
        })?;
        Ok(TeamId { id })
    }

    fn flatten(&mut self, team: GetTeamResponse) {
        if let Some(team_id) = team.team_id {
            self.id = Some(team_id.id.to_string());
        }
        self.name = team.team_name;
        self.daily_quota = team.daily_quota;
    }
}

/// A team in the organisation. Admin emails are only used at creation.
pub struct TeamResource;

impl TeamResource {
    async fn fetch(
        &self,
        clients: &ClientSet,
        team_id: TeamId,
        summary: &str,
    ) -> Result<Option<GetTeamResponse>, ProviderError> {
        let id = team_id.id.to_string();
        let result = clients
            .teams()
            .get(GetTeamRequest {
                team_id: Some(team_id),
            })
            .await;
        read_or_removed(result, TYPE_NAME, &id, summary)
    }
}

#[async_trait]
impl Resource for TeamResource {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Schema::v0()
            .with_description("A team within the organisation")
            .with_attribute("id", Attribute::computed_string())
            .with_attribute("name", Attribute::required_string())
            .with_attribute(
                "team_admins_emails",
                Attribute::string_set(AttributeFlags::optional())
                    .with_force_new()
                    .with_description("Admins invited when the team is created"),
            )
            .with_attribute(
                "daily_quota",
                Attribute::new(AttributeType::Float64, AttributeFlags::optional_computed())
                    .with_description("Daily ingestion quota in GB"),
            )
    }

    async fn create(&self, clients: &ClientSet, planned: Value) -> Result<Value, ProviderError> {
        let mut model: TeamModel = from_state(planned)?;

        let created = clients
            .teams()
            .create(CreateTeamInOrgRequest {
                team_name: model.name.clone(),
                team_admins_emails: model.team_admins_emails.clone().unwrap_or_default(),
                daily_quota: model.daily_quota,
            })
            .await
            .map_err(|e| ProviderError::from_client("Error creating team", e))?;
        let team_id = created
            .team_id
            .ok_or_else(|| empty_response("Error creating team"))?;
        model.id = Some(team_id.id.to_string());

        let team = self
            .fetch(clients, team_id, "Error reading team")
            .await?
            .ok_or_else(|| ProviderError::NotFound("team disappeared after create".to_string()))?;
        model.flatten(team);
        to_state(&model)
    }

    async fn read(&self, clients: &ClientSet, current: Value) -> Result<Value, ProviderError> {
        let mut model: TeamModel = from_state(current)?;
        let team_id = model.team_id()?;

        match self.fetch(clients, team_id, "Error reading team").await? {
            Some(team) => {
                model.flatten(team);
                to_state(&model)
            },
            None => Ok(Value::Null),
        }
    }

    async fn update(
        &self,
        clients: &ClientSet,
        prior: Value,
        planned: Value,
    ) -> Result<Value, ProviderError> {
        let prior: TeamModel = from_state(prior)?;
        let mut model: TeamModel = from_state(planned)?;
        model.id = prior.id.clone();
        let team_id = prior.team_id()?;

        clients
            .teams()
            .update(UpdateTeamRequest {
                team_id: Some(team_id),
                team_name: Some(model.name.clone()),
                daily_quota: model.daily_quota,
            })
            .await
            .map_err(|e| ProviderError::from_client("Error updating team", e))?;

        let team = self
            .fetch(clients, team_id, "Error reading team")
            .await?
            .ok_or_else(|| ProviderError::NotFound("team disappeared after update".to_string()))?;
        model.flatten(team);
        to_state(&model)
    }

    async fn delete(&self, clients: &ClientSet, current: Value) -> Result<(), ProviderError> {
        let model: TeamModel = from_state(current)?;
        let team_id = model.team_id()?;
        let result = clients
            .teams()
            .delete(DeleteTeamRequest {
                team_id: Some(team_id),
            })
            .await;
        deleted(result, TYPE_NAME, &team_id.id.to_string(), "Error deleting team")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tonic::{Request, Status};

    use super::*;
    use crate::generated::teams::{CreateTeamInOrgResponse, DeleteTeamResponse, UpdateTeamResponse};
    use crate::testing::{configured_provider, MockPlatform};

    const CREATE: &str = "/com.observability.teams.v1.TeamService/CreateTeamInOrg";
    const GET: &str = "/com.observability.teams.v1.TeamService/GetTeam";
    const UPDATE: &str = "/com.observability.teams.v1.TeamService/UpdateTeam";
    const DELETE: &str = "/com.observability.teams.v1.TeamService/DeleteTeam";

    fn platform_with_team(quota: f64) -> MockPlatform {
        let platform = MockPlatform::start();
        platform
            .on(CREATE, |_req: Request<CreateTeamInOrgRequest>| {
                Ok(CreateTeamInOrgResponse {
                    team_id: Some(TeamId { id: 7 }),
                })
            })
            .on(GET, move |req: Request<GetTeamRequest>| {
                let team_id = req.into_inner().team_id;
                if team_id != Some(TeamId { id: 7 }) {
                    return Err(Status::not_found("no such team"));
                }
                Ok(GetTeamResponse {
                    team_id,
                    team_name: "sre".to_string(),
                    daily_quota: Some(quota),
                })
            });
        platform
    }

    #[tokio::test]
    async fn test_create_reads_back_computed_quota() {
        let platform = platform_with_team(0.5);
        let tester = configured_provider(&platform, "https://rest.invalid").await;

        let state = tester
            .lifecycle_create(
                "observability_team",
                json!({"name": "sre", "team_admins_emails": ["ops@example.com"]}),
            )
            .await
            .unwrap();

        assert_eq!(state["id"], "7");
        assert_eq!(state["daily_quota"], 0.5);
        assert_eq!(state["team_admins_emails"], json!(["ops@example.com"]));
        assert_eq!(platform.calls_to(CREATE)[0].authorization.as_deref(), Some("Bearer k"));
    }

    #[tokio::test]
    async fn test_read_removes_missing_team() {
        let platform = platform_with_team(0.5);
        let tester = configured_provider(&platform, "https://rest.invalid").await;

        let state = tester
            .read("observability_team", json!({"id": "8", "name": "old"}))
            .await
            .unwrap();
        assert!(state.is_null());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let platform = platform_with_team(1.0);
        platform
            .on(UPDATE, |req: Request<UpdateTeamRequest>| {
                let req = req.into_inner();
                assert_eq!(req.team_name.as_deref(), Some("sre"));
                assert_eq!(req.daily_quota, Some(1.0));
                Ok(UpdateTeamResponse {})
            })
            .on(DELETE, |_req: Request<DeleteTeamRequest>| {
                Err::<DeleteTeamResponse, _>(Status::not_found("already gone"))
            });
        let tester = configured_provider(&platform, "https://rest.invalid").await;

        let prior = json!({"id": "7", "name": "sre", "team_admins_emails": null, "daily_quota": 0.5});
        let state = tester
            .lifecycle_update(
                "observability_team",
                prior.clone(),
                json!({"name": "sre", "daily_quota": 1.0}),
            )
            .await
            .unwrap();
        assert_eq!(state["daily_quota"], 1.0);

        tester.lifecycle_delete("observability_team", state).await.unwrap();
        assert_eq!(platform.calls_to(DELETE).len(), 1);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let platform = platform_with_team(0.5);
        let tester = configured_provider(&platform, "https://rest.invalid").await;

        let err = tester
            .read("observability_team", json!({"id": "abc"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Validation(_)));
        assert_eq!(platform.dials(), 0);
    }
}
