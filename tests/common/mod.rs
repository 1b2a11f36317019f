#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FRUIT: &str = "banana\n\
a long yellow fruit, unlike Apple\n\
\n\
Apple\n\
a red fruit; see banana and cherry\n\
\n\
cherry\n\
a small fruit often paired with Apple\n";

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub out: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let out = root.join("site");
        Self {
            _tmp: tmp,
            root,
            out,
        }
    }

    pub fn write_input(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, content).expect("write glossary input");
        path
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("glossgen");
        cmd.current_dir(&self.root).env_remove("RUST_LOG");
        cmd
    }

    pub fn build(&self, input: &Path) -> Value {
        self.run_json(&[
            "build",
            "--input",
            input.to_str().expect("input path utf8"),
            "--output",
            self.out.to_str().expect("output path utf8"),
        ])
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .code(1)
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }

    pub fn page(&self, file_name: &str) -> String {
        fs::read_to_string(self.out.join(file_name)).expect("read generated page")
    }

    pub fn html_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.out)
            .expect("read output dir")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}
