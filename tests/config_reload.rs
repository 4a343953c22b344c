//! Loading redirects from disk and reloading them into a running server.

use std::fs;

use reqwest::header::LOCATION;
use reqwest::StatusCode;
use urlshort::config::{load_config, load_route_table, RedirectWatcher};

mod common;

#[tokio::test]
async fn test_config_file_to_served_redirects() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("paths.yaml"),
        "- path: /urlshort\n  url: https://github.com/gophercises/urlshort\n- path: /docs\n  url: https://docs.rs/file\n",
    )
    .unwrap();
    let config_path = dir.path().join("urlshort.toml");
    fs::write(
        &config_path,
        r#"
[listener]
bind_address = "127.0.0.1:0"

[redirects]
file = "paths.yaml"

[[redirects.rules]]
path = "/docs"
url = "https://docs.rs/inline"

[[redirects.rules]]
path = "/inline"
url = "https://inline.test"

[fallback]
status = 410
body = "gone"
"#,
    )
    .unwrap();

    let config = load_config(&config_path).unwrap();
    let table = load_route_table(&config.redirects).unwrap();
    assert_eq!(table.len(), 3);

    let server = common::start_server(config, table).await;
    let client = common::client();

    let res = client.get(server.url("/urlshort")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()[LOCATION], "https://github.com/gophercises/urlshort");

    let res = client.get(server.url("/docs")).send().await.unwrap();
    assert_eq!(res.headers()[LOCATION], "https://docs.rs/file");

    let res = client.get(server.url("/inline")).send().await.unwrap();
    assert_eq!(res.headers()[LOCATION], "https://inline.test");

    let res = client.get(server.url("/nope")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::GONE);
    assert_eq!(res.text().await.unwrap(), "gone");

    server.stop().await;
}

#[tokio::test]
async fn test_reload_replaces_table_and_survives_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    let redirect_path = dir.path().join("paths.json");
    fs::write(&redirect_path, r#"[{"path":"/v","url":"https://v1.test"}]"#).unwrap();
    let config_path = dir.path().join("urlshort.toml");
    fs::write(&config_path, "[redirects]\nfile = \"paths.json\"\n").unwrap();

    let config = load_config(&config_path).unwrap();
    let table = load_route_table(&config.redirects).unwrap();
    let redirects = config.redirects.clone();
    let server = common::start_server(config, table).await;
    let watcher = RedirectWatcher::new(redirects, server.table.clone());
    let client = common::client();

    let res = client.get(server.url("/v")).send().await.unwrap();
    assert_eq!(res.headers()[LOCATION], "https://v1.test");

    fs::write(&redirect_path, r#"[{"path":"/v","url":"https://v2.test"}]"#).unwrap();
    assert_eq!(watcher.reload().unwrap(), 1);

    let res = client.get(server.url("/v")).send().await.unwrap();
    assert_eq!(res.headers()[LOCATION], "https://v2.test");

    fs::write(&redirect_path, r#"[{"url":"https://v3.test"}]"#).unwrap();
    assert!(watcher.reload().is_err());

    let res = client.get(server.url("/v")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()[LOCATION], "https://v2.test");

    server.stop().await;
}
