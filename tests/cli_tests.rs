use assert_cmd::Command;
use predicates::prelude::*;

fn quill_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("quill"))
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    quill_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL API"));
}

#[test]
fn test_version() {
    quill_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quill"));
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn test_schema_prints_wire_contract() {
    quill_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("createDraft(title: String!, content: String): Post!")
                .and(predicate::str::contains("feed: [Post!]!"))
                .and(predicate::str::contains("post(id: ID!): Post"))
                .and(predicate::str::contains("publish(id: ID!): Post")),
        );
}

// =============================================================================
// Query
// =============================================================================

#[test]
fn test_query_feed_returns_seed_posts() {
    quill_cmd()
        .args(["query", "{ feed { id title published } }"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("GraphQL Weekly")
                .and(predicate::str::contains("DigitalOcean"))
                .and(predicate::str::contains("What is GraphQL?").not()),
        );
}

#[test]
fn test_query_mutation_creates_draft() {
    quill_cmd()
        .args([
            "query",
            r#"mutation { createDraft(title: "Hello") { id published } }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"4\"").and(predicate::str::contains(
            "\"published\": false",
        )));
}

#[test]
fn test_query_unknown_post_is_null() {
    quill_cmd()
        .args(["query", r#"{ post(id: "999") { id } }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"post\": null"));
}

#[test]
fn test_query_invalid_document_reports_errors_envelope() {
    quill_cmd()
        .args(["query", "{ nosuchfield }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("errors"));
}

// =============================================================================
// Serve configuration
// =============================================================================

#[test]
fn test_serve_failed_bind_does_not_announce_ready() {
    // Occupy a port so the server's bind fails immediately.
    let busy = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = busy.local_addr().unwrap().port();

    quill_cmd()
        .args(["serve", "--port", &port.to_string()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ready").not());
}

#[test]
fn test_serve_rejects_garbage_port_env() {
    quill_cmd()
        .arg("serve")
        .env("PORT", "not-a-port")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PORT"));
}
