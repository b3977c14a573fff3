#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Helper struct to run postview commands in an isolated temp directory
pub struct PostviewTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl PostviewTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        PostviewTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_postview").to_string(),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("POSTVIEW_BASE_URL")
            .env_remove("POSTVIEW_FIXTURES")
            .env_remove("RUST_LOG")
            .env_remove("FORCE_COLOR")
            .env_remove("CLICOLOR_FORCE")
            .output()
            .expect("Failed to execute postview command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Write a fixture file into the temp directory and return its path
    pub fn write_fixtures(&self, routes: &Value) -> PathBuf {
        let path = self.temp_dir.path().join("fixtures.json");
        let content = serde_json::to_string_pretty(routes).expect("Failed to encode fixtures");
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    pub fn read_config(&self) -> String {
        let path = self.temp_dir.path().join(".postview").join("config.yaml");
        fs::read_to_string(path).expect("Failed to read config file")
    }

    pub fn config_exists(&self) -> bool {
        self.temp_dir
            .path()
            .join(".postview")
            .join("config.yaml")
            .exists()
    }
}

/// Routes for two employees, one post by employee 3 with a single comment
pub fn sample_routes() -> Value {
    json!({
        "/users": [
            {
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered"}
            },
            {
                "id": 3,
                "name": "Ann",
                "username": "ann",
                "company": {"name": "Co", "catchPhrase": "CP"}
            }
        ],
        "/users/1": {
            "id": 1,
            "name": "Leanne Graham",
            "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered"}
        },
        "/users/3": {"id": 3, "name": "Ann", "company": {"name": "Co", "catchPhrase": "CP"}},
        "/posts?userId=1": [
            {"id": 1, "userId": 1, "title": "first", "body": "hello"}
        ],
        "/posts?userId=3": [
            {"id": 10, "userId": 3, "title": "T", "body": "B"}
        ],
        "/comments?postId=1": [],
        "/comments?postId=10": [
            {"name": "X", "body": "Y", "email": "z@e.com"}
        ]
    })
}
