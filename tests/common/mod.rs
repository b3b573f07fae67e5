//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Solution project type GUID used in fixtures
pub const PROJECT_TYPE_GUID: &str = "{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}";

/// Test workspace context
///
/// Creates a temporary workspace with a solution under `Source/` and a
/// shell-script build helper that records every invocation.
pub struct TestWorkspace {
    /// Temporary directory for the workspace
    pub dir: TempDir,
    projects: Vec<String>,
}

impl TestWorkspace {
    /// Create an empty workspace in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            projects: Vec::new(),
        }
    }

    /// Get the path to the workspace directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the workspace
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file or directory exists in the workspace
    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the workspace
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Add a project with an optional declared `OutputPath`
    pub fn add_project(&mut self, name: &str, output_path: Option<&str>) {
        let element = output_path
            .map(|p| format!("    <OutputPath>{p}</OutputPath>\n"))
            .unwrap_or_default();
        let project = format!(
            concat!(
                "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
                "<Project xmlns=\"http://schemas.microsoft.com/developer/msbuild/2003\">\n",
                "  <PropertyGroup>\n",
                "{}",
                "  </PropertyGroup>\n",
                "</Project>\n",
            ),
            element
        );
        self.create_file(&format!("Source/{name}/{name}.csproj"), &project);
        self.projects.push(name.to_string());
        self.write_solution();
    }

    fn write_solution(&self) {
        let mut solution = String::from(
            "Microsoft Visual Studio Solution File, Format Version 12.00\n# Visual Studio Version 17\n",
        );
        for (i, name) in self.projects.iter().enumerate() {
            solution.push_str(&format!(
                "Project(\"{PROJECT_TYPE_GUID}\") = \"{name}\", \"{name}\\{name}.csproj\", \"{{00000000-0000-0000-0000-{i:012}}}\"\nEndProject\n"
            ));
        }
        solution.push_str("Global\nEndGlobal\n");
        self.create_file("Source/CombatExtended.sln", &solution);
    }

    /// Write the fake helper script
    ///
    /// The helper appends the project name to `build.log`, stores its
    /// arguments in `args/<name>`, and exits with the code configured for
    /// that project (0 otherwise).
    pub fn write_helper(&self, exit_codes: &[(&str, i32)]) {
        let cases: String = exit_codes
            .iter()
            .map(|(name, code)| format!("  {name}) exit {code} ;;\n"))
            .collect();
        let script = format!(
            concat!(
                "name=$(basename \"$2\" .csproj)\n",
                "echo \"$name\" >> build.log\n",
                "mkdir -p args\n",
                "printf '%s\\n' \"$@\" > \"args/$name\"\n",
                "case \"$name\" in\n",
                "{}",
                "esac\n",
                "exit 0\n",
            ),
            cases
        );
        self.create_file("helper.sh", &script);
    }

    /// Projects the helper was run for, in the order they started
    pub fn build_log(&self) -> Vec<String> {
        if !self.exists("build.log") {
            return Vec::new();
        }
        self.read_file("build.log")
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    /// Arguments the helper received for `name`, one per element
    pub fn helper_args(&self, name: &str) -> Vec<String> {
        self.read_file(&format!("args/{name}"))
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    /// Run compatbuild in the workspace with the fake helper
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    /// Run compatbuild with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_compatbuild"));
        cmd.current_dir(self.path());
        cmd.env_remove("PUBLICIZER");
        cmd.env_remove("DOWNLOAD_LIBS");
        cmd.env_remove("RUST_LOG");
        cmd.envs(env.iter().copied());
        cmd.args(args);
        cmd.args(["--helper-program", "sh", "--helper-script", "helper.sh"]);
        cmd.output().expect("Failed to execute compatbuild")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
