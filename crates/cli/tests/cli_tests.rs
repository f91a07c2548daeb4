use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pokedex() -> Command {
    let mut cmd = Command::cargo_bin("pokedex").unwrap();
    cmd.env_remove("POKEDEX_API_URL").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    pokedex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse and search the Pokémon catalog"));
}

#[test]
fn test_cli_list_help() {
    pokedex().args(["list", "--help"]).assert().success().stdout(predicate::str::contains("offset"));
}

#[test]
fn test_cli_search_requires_term() {
    pokedex().arg("search").assert().failure().stderr(predicate::str::contains("<TERM>"));
}

#[test]
fn test_cli_history_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    pokedex()
        .arg("history")
        .env("POKEDEX_STORE_PATH", dir.path().join("store.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No recent searches."));
}

#[test]
fn test_cli_history_json_reads_store_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");
    std::fs::write(&store, r#"{"pokemonSearchHistory": "[\"pika\", \"<b>mew</b>\"]"}"#).unwrap();
    pokedex()
        .args(["history", "--json"])
        .env("POKEDEX_STORE_PATH", &store)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pika\"").and(predicate::str::contains("\"bmewb\"")));
}

async fn run_blocking(mut cmd: Command) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || cmd.assert()).await.unwrap()
}

#[tokio::test]
async fn test_cli_list_clamps_raw_arguments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{ "name": "bulbasaur", "url": format!("{}/pokemon/1", server.uri()) }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = pokedex();
    cmd.args(["list", "--limit", "abc", "--offset=-5"]).env("POKEDEX_API_URL", server.uri());
    run_blocking(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("bulbasaur").and(predicate::str::contains("1 shown, 1 total")));
}

#[tokio::test]
async fn test_cli_show_not_found_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut cmd = pokedex();
    cmd.args(["show", "missingno"]).env("POKEDEX_API_URL", server.uri());
    run_blocking(cmd).await.failure().stderr(predicate::str::contains("not found: missingno"));
}

#[tokio::test]
async fn test_cli_open_detail_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 25,
            "name": "pikachu",
            "species": { "name": "pikachu" },
            "types": [{ "slot": 1, "type": { "name": "electric" } }],
            "stats": [{ "base_stat": 90, "effort": 2, "stat": { "name": "speed" } }]
        })))
        .mount(&server)
        .await;

    let mut cmd = pokedex();
    cmd.args(["open", "/pokemon/pikachu?tab=stats"]).env("POKEDEX_API_URL", server.uri());
    run_blocking(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("#25 Pikachu").and(predicate::str::contains("Speed")));
}
