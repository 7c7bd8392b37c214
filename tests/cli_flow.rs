//! End-to-end CLI flows against a mock DevConnect API.
//!
//! Each test parses a real command line, dispatches it and runs the action
//! with a throwaway session directory, so the session file, the route guard
//! and the reconciliation fetches are exercised together.

use anyhow::{anyhow, Result};
use devconnect::cli::{commands, dispatch::handler};
use serde_json::json;
use std::{net::TcpListener, path::PathBuf};
use uuid::Uuid;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

struct Context {
    server: MockServer,
    session_dir: PathBuf,
}

impl Drop for Context {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.session_dir);
    }
}

impl Context {
    async fn new() -> Self {
        Self {
            server: MockServer::start().await,
            session_dir: std::env::temp_dir().join(format!("devconnect-it-{}", Uuid::new_v4())),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<String> {
        let api_url = format!("{}/api", self.server.uri());
        let session_dir = self.session_dir.display().to_string();

        let mut argv = vec![
            "devconnect",
            "--api-url",
            api_url.as_str(),
            "--session-dir",
            session_dir.as_str(),
        ];
        argv.extend_from_slice(args);

        let matches = commands::new().try_get_matches_from(argv)?;
        handler(&matches)?.output().await
    }
}

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn stored_project(status: &str) -> serde_json::Value {
    json!({
        "_id": "p1",
        "title": "Spec",
        "description": "Write it",
        "tags": ["a", "b"],
        "status": status,
        "deadline": "2025-01-01T00:00:00.000Z"
    })
}

async fn mount_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "ann@devconnect.dev", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": token})))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_create_list_logout() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let ctx = Context::new().await;
    mount_login(&ctx.server, "tok-1").await;

    Mock::given(method("POST"))
        .and(path("/api/projects"))
        .and(header("Authorization", "Bearer tok-1"))
        .and(body_json(json!({
            "title": "Spec",
            "description": "Write it",
            "tags": ["a", "b"],
            "status": "Pending",
            "deadline": "2025-01-01"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(stored_project("Pending")))
        .expect(1)
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([stored_project("Pending")])))
        .mount(&ctx.server)
        .await;

    // Anonymous: the guard redirects before any request is made.
    let denied = ctx.run(&["projects", "list"]).await;
    let message = denied.err().map(|err| err.to_string()).unwrap_or_default();
    assert!(message.contains("redirected to /login"), "{message}");
    assert_eq!(
        ctx.run(&["open", "/dashboard"]).await?,
        "/dashboard redirects to /login"
    );

    let login = ctx
        .run(&["login", "--email", "ann@devconnect.dev", "--password", "pw"])
        .await?;
    assert!(login.starts_with("Login successful!"));
    assert!(ctx.session_dir.join("session.json").exists());
    assert_eq!(ctx.run(&["open", "/dashboard"]).await?, "Rendering /dashboard");

    let created = ctx
        .run(&[
            "projects",
            "create",
            "--title",
            "Spec",
            "--description",
            "Write it",
            "--tags",
            "a, b",
            "--status",
            "Pending",
            "--deadline",
            "2025-01-01",
        ])
        .await?;
    assert!(created.starts_with("Project created."));
    assert!(created.contains("Spec (p1)"));
    assert!(created.contains("Deadline: 2025-01-01"));

    let filtered = ctx
        .run(&["projects", "list", "--status", "Completed"])
        .await?;
    assert!(filtered.contains("0 of 1 project(s)"));
    assert!(filtered.contains("No projects found."));

    let by_deadline = ctx
        .run(&["projects", "list", "--deadline", "2025-01-01"])
        .await?;
    assert!(by_deadline.contains("Tags:     [a] [b]"));

    assert!(ctx.run(&["logout"]).await?.starts_with("Logged out."));
    assert!(ctx.run(&["projects", "list"]).await.is_err());
    assert!(ctx.run(&["status"]).await?.contains("Session: anonymous"));
    Ok(())
}

#[tokio::test]
async fn edit_and_delete_reconcile() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let ctx = Context::new().await;
    mount_login(&ctx.server, "tok-2").await;

    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([stored_project("Pending")])))
        .mount(&ctx.server)
        .await;

    // Fields not given on the command line keep their stored values.
    Mock::given(method("PUT"))
        .and(path("/api/projects/p1"))
        .and(body_json(json!({
            "title": "Spec",
            "description": "Write it",
            "tags": ["a", "b"],
            "status": "Completed",
            "deadline": "2025-01-01"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_project("Completed")))
        .expect(1)
        .mount(&ctx.server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/projects/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"msg": "Project deleted"})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.run(&["login", "--email", "ann@devconnect.dev", "--password", "pw"])
        .await?;

    let edited = ctx
        .run(&["projects", "edit", "p1", "--status", "Completed"])
        .await?;
    assert!(edited.starts_with("Project p1 updated."));

    let deleted = ctx.run(&["projects", "delete", "p1"]).await?;
    assert!(deleted.starts_with("Project p1 deleted."));

    let missing = ctx.run(&["projects", "edit", "nope", "--status", "Done"]).await;
    assert_eq!(
        missing.err().map(|err| err.to_string()),
        Some("Project nope not found".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn auth_failures_show_server_message() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let ctx = Context::new().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"msg": "Invalid credentials"})),
        )
        .mount(&ctx.server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ctx.server)
        .await;

    let login = ctx
        .run(&["login", "--email", "ann@devconnect.dev", "--password", "bad"])
        .await
        .err()
        .ok_or_else(|| anyhow!("login should fail"))?;
    assert_eq!(login.to_string(), "Invalid credentials");
    assert!(!ctx.session_dir.join("session.json").exists());

    let register = ctx
        .run(&[
            "register",
            "--name",
            "Ann",
            "--email",
            "ann@devconnect.dev",
            "--password",
            "pw",
        ])
        .await
        .err()
        .ok_or_else(|| anyhow!("register should fail"))?;
    assert_eq!(register.to_string(), "Error");
    Ok(())
}

#[tokio::test]
async fn register_then_login_hint() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let ctx = Context::new().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "name": "Ann",
            "email": "ann@devconnect.dev",
            "password": "pw"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"msg": "User registered"})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let output = ctx
        .run(&[
            "register",
            "--name",
            "Ann",
            "--email",
            "ann@devconnect.dev",
            "--password",
            "pw",
        ])
        .await?;
    assert!(output.starts_with("Registered successfully!"));
    assert!(output.contains("/login"));
    Ok(())
}
