use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta::Settings;
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod get;

const BIN_NAME: &str = "langfall";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop the config search at the project root
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// Project with `languages/en.json` and `languages/hu.json`.
    pub fn with_languages() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(
            "languages/en.json",
            r#"{"lang": {"welcome": "Welcome to this site", "only-in-english": "This text available only in english"}}"#,
        )?;
        test.write_file(
            "languages/hu.json",
            r#"{"lang": {"welcome": "Üdvözöllek ezen az oldalon"}}"#,
        )?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn get_command(&self, language: &str, key: &str) -> Command {
        let mut cmd = self.command();
        cmd.args(["get", language, key]);
        cmd
    }

    pub fn show_command(&self, language: &str) -> Command {
        let mut cmd = self.command();
        cmd.args(["show", language]);
        cmd
    }

    pub fn exists_command(&self, language: &str) -> Command {
        let mut cmd = self.command();
        cmd.args(["exists", language]);
        cmd
    }

    /// Snapshot settings that hide the temporary project directory.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::clone_current();
        let project = self.project_dir.display().to_string().replace('.', r"\.");
        settings.add_filter(&project, "[PROJECT]");
        settings
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}
