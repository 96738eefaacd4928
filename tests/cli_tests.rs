//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

/// Serve one canned HTTP response; the handle yields the raw request.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("read");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write");
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}/v2/combined/find"), handle)
}

/// An endpoint on a port nothing listens on.
fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}/v2/combined/find")
}

/// A sandbox with an empty home directory and working directory.
struct Sandbox {
    home: TempDir,
    cwd: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self { home: TempDir::new().expect("temp home"), cwd: TempDir::new().expect("temp cwd") }
    }

    fn write_config(&self, dir: &Path, key: &str, endpoint: &str) {
        fs::create_dir_all(dir).expect("config dir");
        fs::write(
            dir.join("config.yaml"),
            format!("clearbit_key: {key}\nclearbit_endpoint: \"{endpoint}\"\n"),
        )
        .expect("write config");
    }

    fn cwd_config(&self, key: &str, endpoint: &str) {
        self.write_config(self.cwd.path(), key, endpoint);
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stalk"));
        cmd.current_dir(self.cwd.path())
            .env("HOME", self.home.path())
            .env_remove("CLEARBIT_KEY")
            .env_remove("CLEARBIT_ENDPOINT")
            .env_remove("RUST_LOG");
        for proxy in ["HTTP_PROXY", "HTTPS_PROXY", "ALL_PROXY", "http_proxy", "https_proxy", "all_proxy"]
        {
            cmd.env_remove(proxy);
        }
        cmd
    }
}

#[test]
fn test_cli_version() {
    let sandbox = Sandbox::new();
    sandbox.cmd().arg("--version").assert().success().stdout(predicate::str::contains("stalk"));
}

#[test]
fn test_cli_help() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clearbit"))
        .stdout(predicate::str::contains("--email"))
        .stdout(predicate::str::contains("--key"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_unknown_flag_fails() {
    let sandbox = Sandbox::new();
    sandbox.cmd().arg("--bogus").assert().failure().code(2);
}

#[test]
fn test_missing_config_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_explicit_missing_config_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--config", "does-not-exist.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_network_failure_exits_zero() {
    let sandbox = Sandbox::new();
    sandbox.cwd_config("sk_test", &closed_endpoint());

    sandbox
        .cmd()
        .args(["-e", "alex@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Getting an enrichment failed"));
}

#[test]
fn test_rust_log_enables_debug_output() {
    let sandbox = Sandbox::new();
    sandbox.cwd_config("sk_test", &closed_endpoint());

    sandbox
        .cmd()
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("Using config file"))
        .stderr(predicate::str::contains("Getting an enrichment failed"));
}

#[test]
fn test_default_log_level_hides_debug_output() {
    let sandbox = Sandbox::new();
    sandbox.cwd_config("sk_test", &closed_endpoint());

    sandbox
        .cmd()
        .assert()
        .success()
        .stderr(predicate::str::contains("Using config file").not());
}

#[test]
fn test_api_error_exits_zero() {
    let sandbox = Sandbox::new();
    let (endpoint, server) = serve_once(
        "401 Unauthorized",
        r#"{"error": {"type": "auth_required", "message": "API key is invalid"}}"#,
    );
    sandbox.cwd_config("sk_bad", &endpoint);

    sandbox
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("API key is invalid"));
    server.join().expect("server");
}

#[test]
fn test_person_not_found() {
    let sandbox = Sandbox::new();
    let (endpoint, server) = serve_once("200 OK", r#"{"person": null, "company": null}"#);
    sandbox.cwd_config("sk_test", &endpoint);

    sandbox
        .cmd()
        .args(["--email", "nobody@example.com"])
        .assert()
        .success()
        .stdout("Didn't find a person associated with: nobody@example.com\n");

    let request = server.join().expect("server");
    assert!(request.contains("email=nobody%40example.com"));
}

#[test]
fn test_unknown_email_404_is_not_found() {
    let sandbox = Sandbox::new();
    let (endpoint, server) =
        serve_once("404 Not Found", r#"{"error": {"type": "unknown_record", "message": "x"}}"#);
    sandbox.cwd_config("sk_test", &endpoint);

    sandbox
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Didn't find a person associated with: alex@clearbit.com"));
    server.join().expect("server");
}

#[test]
fn test_person_found_prints_details() {
    let sandbox = Sandbox::new();
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{
            "person": {
                "name": {"fullName": "Alex Smith"},
                "employment": {"name": "Acme", "title": null},
                "twitter": {"handle": "alexsmith"},
                "github": {"handle": "asmith"},
                "facebook": {"handle": null}
            },
            "company": {"name": "Acme", "domain": "acme.test"}
        }"#,
    );
    sandbox.cwd_config("sk_test", &endpoint);

    sandbox.cmd().args(["-e", "alex@acme.test"]).assert().success().stdout(
        "This email seems to belong to: Alex Smith\n\
         This person works at Acme\n\
         You can follow them at:\n\
         Twitter:  https://twitter.com/alexsmith\n\
         GitHub:   https://github.com/asmith\n",
    );
    server.join().expect("server");
}

#[test]
fn test_key_flag_overrides_config() {
    let sandbox = Sandbox::new();
    let (endpoint, server) = serve_once("200 OK", r#"{"person": null}"#);
    sandbox.cwd_config("sk_from_file", &endpoint);

    sandbox.cmd().args(["--key", "sk_from_cli"]).assert().success();

    let request = server.join().expect("server").to_ascii_lowercase();
    assert!(request.contains("authorization: bearer sk_from_cli"));
}

#[test]
fn test_env_key_overrides_config() {
    let sandbox = Sandbox::new();
    let (endpoint, server) = serve_once("200 OK", r#"{"person": null}"#);
    sandbox.cwd_config("sk_from_file", &endpoint);

    sandbox.cmd().env("CLEARBIT_KEY", "sk_from_env").assert().success();

    let request = server.join().expect("server").to_ascii_lowercase();
    assert!(request.contains("authorization: bearer sk_from_env"));
}

#[test]
fn test_home_config_preferred_over_cwd() {
    let sandbox = Sandbox::new();
    let (endpoint, server) = serve_once("200 OK", r#"{"person": null}"#);
    sandbox.write_config(&sandbox.home.path().join(".stalk"), "sk_home", &endpoint);
    sandbox.cwd_config("sk_cwd", &closed_endpoint());

    sandbox.cmd().assert().success().stdout(predicate::str::contains("Didn't find a person"));

    let request = server.join().expect("server").to_ascii_lowercase();
    assert!(request.contains("authorization: bearer sk_home"));
}

#[test]
fn test_environment_alone_is_enough() {
    let sandbox = Sandbox::new();
    let (endpoint, server) = serve_once("200 OK", r#"{"person": null}"#);

    sandbox
        .cmd()
        .env("CLEARBIT_KEY", "sk_env_only")
        .env("CLEARBIT_ENDPOINT", &endpoint)
        .assert()
        .success()
        .stdout(predicate::str::contains("Didn't find a person"));
    server.join().expect("server");
}
