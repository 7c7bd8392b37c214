//! Project CRUD endpoints. All calls carry the session token when present.

use super::{ApiClient, ApiError};
use crate::{
    forms::ProjectDraft,
    projects::{Project, ProjectService},
};
use reqwest::Method;
use tracing::instrument;

const PROJECTS_PATH: &str = "/projects";

fn project_path(id: &str) -> Result<String, ApiError> {
    let id = id.trim();
    if id.is_empty() || id.contains('/') {
        return Err(ApiError::Config(format!("Invalid project id: {id:?}")));
    }
    Ok(format!("{PROJECTS_PATH}/{id}"))
}

impl ProjectService for ApiClient {
    #[instrument(skip_all)]
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json(PROJECTS_PATH).await
    }

    #[instrument(skip_all)]
    async fn create_project(&self, draft: &ProjectDraft) -> Result<(), ApiError> {
        self.send_json(Method::POST, PROJECTS_PATH, draft).await
    }

    #[instrument(skip(self, draft))]
    async fn update_project(&self, id: &str, draft: &ProjectDraft) -> Result<(), ApiError> {
        let path = project_path(id)?;
        self.send_json(Method::PUT, &path, draft).await
    }

    #[instrument(skip(self))]
    async fn delete_project(&self, id: &str) -> Result<(), ApiError> {
        let path = project_path(id)?;
        self.delete(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::ClientConfig,
        forms::split_tags,
        session::{MemorySessionStore, SessionContext},
    };
    use anyhow::Result;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client(server: &MockServer, session: SessionContext) -> Result<ApiClient> {
        let config = ClientConfig::new(&format!("{}/api", server.uri()), None, 5)?;
        Ok(ApiClient::new(&config, session)?)
    }

    fn draft() -> Result<ProjectDraft> {
        Ok(ProjectDraft::new(
            "Spec",
            "Write it",
            split_tags("a, b"),
            "Pending",
            NaiveDate::from_ymd_opt(2025, 1, 1),
        )?)
    }

    #[test]
    fn project_path_rejects_bad_ids() {
        assert_eq!(project_path(" p1 ").ok(), Some("/projects/p1".to_string()));
        assert!(project_path("").is_err());
        assert!(project_path("../auth").is_err());
    }

    #[tokio::test]
    async fn list_sends_bearer_token() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .and(header("authorization", "Bearer jwt-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"_id": "p1", "title": "Spec", "description": "Write it", "tags": ["a"], "status": "Pending"},
                {"_id": "p2", "title": "Other", "description": "More", "tags": [], "deadline": "2025-01-01T00:00:00.000Z"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let api = client(
            &server,
            SessionContext::new(MemorySessionStore::with_token("jwt-1")),
        )?;
        let projects = api.list_projects().await?;

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id, "p1");
        assert_eq!(projects[1].deadline_date(), NaiveDate::from_ymd_opt(2025, 1, 1));
        Ok(())
    }

    #[tokio::test]
    async fn anonymous_requests_carry_no_token() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"msg": "No token, authorization denied"})),
            )
            .mount(&server)
            .await;

        let api = client(&server, SessionContext::in_memory())?;
        let result = api.list_projects().await;

        assert_eq!(
            result.err(),
            Some(ApiError::Rejected {
                status: 401,
                message: "No token, authorization denied".to_string()
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_posts_split_tags() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/projects"))
            .and(body_json(json!({
                "title": "Spec",
                "description": "Write it",
                "tags": ["a", "b"],
                "status": "Pending",
                "deadline": "2025-01-01"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"_id": "p9"})))
            .expect(1)
            .mount(&server)
            .await;

        let api = client(&server, SessionContext::new(MemorySessionStore::with_token("t")))?;
        api.create_project(&draft()?).await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_target_the_id() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/projects/p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "p1"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/projects/p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"msg": "Deleted"})))
            .expect(1)
            .mount(&server)
            .await;

        let api = client(&server, SessionContext::new(MemorySessionStore::with_token("t")))?;
        api.update_project("p1", &draft()?).await?;
        api.delete_project("p1").await?;

        let requests: Vec<Request> = server.received_requests().await.unwrap_or_default();
        let methods: Vec<String> = requests.iter().map(|r| r.method.to_string()).collect();
        assert_eq!(methods, vec!["PUT", "DELETE"]);
        Ok(())
    }

    #[tokio::test]
    async fn server_error_without_message_is_http() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/projects/p1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = client(&server, SessionContext::new(MemorySessionStore::with_token("t")))?;
        let result = api.delete_project("p1").await;
        assert_eq!(
            result,
            Err(ApiError::Http {
                status: 500,
                message: "Request failed.".to_string()
            })
        );
        Ok(())
    }
}
