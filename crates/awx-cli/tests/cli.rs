//! CLI tests against a mock AWX server.
//!
//! Each test runs the real binary with its own temporary config directory
//! and points it at a wiremock server.

mod common;

use std::fs;

use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{cli, run_cli, run_cli_failure, run_cli_success};

// ============================================================================
// Profile Tests
// ============================================================================

#[test]
fn test_configure_and_show_profile() {
    let dir = tempfile::tempdir().unwrap();

    let output = cli(
        &[
            "configure",
            "--host",
            "https://awx.example.com",
            "--token",
            "s3cret",
        ],
        dir.path(),
    )
    .output()
    .unwrap();
    assert!(
        output.status.success(),
        "configure failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let saved: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("profile.json")).unwrap())
            .unwrap();
    assert_eq!(saved["host"], "https://awx.example.com");
    assert_eq!(saved["token"], "s3cret");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(dir.path().join("profile.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    let output = cli(&["profile"], dir.path()).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("https://awx.example.com"));
    assert!(stdout.contains("token"));
    assert!(!stdout.contains("s3cret"));
}

#[test]
fn test_profile_clear() {
    let dir = tempfile::tempdir().unwrap();

    cli(&["configure", "--host", "https://awx.example.com"], dir.path())
        .output()
        .unwrap();
    assert!(dir.path().join("profile.json").exists());

    let output = cli(&["profile", "--clear"], dir.path()).output().unwrap();
    assert!(output.status.success());
    assert!(!dir.path().join("profile.json").exists());

    let output = cli(&["profile"], dir.path()).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_missing_host() {
    let dir = tempfile::tempdir().unwrap();

    let output = cli(&["job-template", "get", "1"], dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No AWX host"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_saved_token_is_sent() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v2/job_templates/5/"))
        .and(header("authorization", "Bearer saved-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "name": "Deploy"
        })))
        .expect(1)
        .mount(&server)
        .await;

    run_cli_success(&["configure", "--token", "saved-token"], dir.path(), &server.uri()).await;
    let stdout = run_cli_success(&["job-template", "get", "5"], dir.path(), &server.uri()).await;

    let template: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(template["id"], 5);
    assert_eq!(template["name"], "Deploy");
}

// ============================================================================
// Job Template Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_list_all_follows_next() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v2/job_templates/"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "next": "/api/v2/job_templates/?page=2&page_size=2",
            "previous": null,
            "results": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/job_templates/"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "next": null,
            "previous": "/api/v2/job_templates/?page=1&page_size=2",
            "results": [{"id": 3, "name": "c"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &["job-template", "list", "--all", "--query", "page_size=2"],
        dir.path(),
        &server.uri(),
    )
    .await;

    let ids: Vec<u64> = stdout
        .lines()
        .map(|line| serde_json::from_str::<Value>(line).unwrap()["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_without_all_fetches_one_page() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v2/credentials/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 30,
            "next": "/api/v2/credentials/?page=2",
            "previous": null,
            "results": [{"id": 1, "name": "ssh"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(&["credential", "list"], dir.path(), &server.uri()).await;

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("page=2"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_missing_fields_sends_nothing() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let stderr = run_cli_failure(
        &["job-template", "create", "--set", "name=Deploy", "--set", "project=2"],
        dir.path(),
        &server.uri(),
    )
    .await;

    assert!(stderr.contains("job_type, inventory"), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_from_json_file() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let payload = dir.path().join("template.json");
    fs::write(
        &payload,
        r#"{"name": "Deploy", "job_type": "run", "inventory": 1, "project": 2}"#,
    )
    .unwrap();

    Mock::given(method("POST"))
        .and(path("/api/v2/job_templates/"))
        .and(body_json(json!({
            "name": "Deploy",
            "job_type": "run",
            "inventory": 1,
            "project": 2,
            "playbook": "site.yml"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 11, "name": "Deploy"})))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &[
            "job-template",
            "create",
            "--json",
            payload.to_str().unwrap(),
            "--set",
            "playbook=site.yml",
        ],
        dir.path(),
        &server.uri(),
    )
    .await;

    let template: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(template["id"], 11);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_launch_with_extra_vars() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/v2/job_templates/7/launch/"))
        .and(body_json(json!({"extra_vars": {"version": "1.2"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"job": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &[
            "job-template",
            "launch",
            "7",
            "--set",
            r#"extra_vars={"version": "1.2"}"#,
        ],
        dir.path(),
        &server.uri(),
    )
    .await;

    assert!(output.status.success());
    let launch: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(launch["job"], 42);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Launched job 42"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_launch_zero_job_fails() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/v2/job_templates/7/launch/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"job": 0})))
        .mount(&server)
        .await;

    run_cli_failure(&["job-template", "launch", "7"], dir.path(), &server.uri()).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_associate_credential() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/v2/job_templates/7/credentials/"))
        .and(body_json(json!({"id": 12, "associate": true})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &["job-template", "associate-credential", "7", "--credential", "12"],
        dir.path(),
        &server.uri(),
    )
    .await;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Attached credential 12"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_survey_set_from_file() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let survey = json!({
        "name": "Deploy",
        "description": "",
        "spec": [{
            "question_name": "Version?",
            "variable": "version",
            "type": "text",
            "required": true
        }]
    });
    let file = dir.path().join("survey.json");
    fs::write(&file, survey.to_string()).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/v2/job_templates/7/survey_spec/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &[
            "job-template",
            "survey",
            "set",
            "7",
            "--json",
            file.to_str().unwrap(),
        ],
        dir.path(),
        &server.uri(),
    )
    .await;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 questions"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_exits_with_failure() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v2/job_templates/99/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .mount(&server)
        .await;

    let stderr = run_cli_failure(&["job-template", "get", "99"], dir.path(), &server.uri()).await;

    assert!(stderr.contains("404"), "stderr: {stderr}");
    assert!(stderr.contains("Not found."));
}

// ============================================================================
// Workflow Node Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_node_link_posts_associate() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/v2/workflow_job_template_nodes/1/success_nodes/"))
        .and(body_json(json!({"id": 2, "associate": true})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &["node", "link", "1", "success_nodes", "2"],
        dir.path(),
        &server.uri(),
    )
    .await;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_node_unlink_invalid_type_sends_nothing() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let stderr = run_cli_failure(
        &["node", "unlink", "1", "maybe_nodes", "2"],
        dir.path(),
        &server.uri(),
    )
    .await;

    assert!(stderr.contains("maybe_nodes"), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_node_links() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v2/workflow_job_template_nodes/1/failure_nodes/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{"id": 4, "identifier": "cleanup"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &["node", "links", "1", "failure_nodes"],
        dir.path(),
        &server.uri(),
    )
    .await;

    let node: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(node["identifier"], "cleanup");
}

// ============================================================================
// Credential Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_credential_delete_no_content() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("DELETE"))
        .and(path("/api/v2/credentials/4/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(&["credential", "delete", "4"], dir.path(), &server.uri()).await;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Deleted 4"));
}
