//! gk-rename CLI library
//!
//! This library contains the CLI logic for gk-rename, making it reusable
//! for testing and integration with other tools.

pub mod error;
pub mod stats;

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use gk_config::Config;
use gk_core::RenameRules;
use gk_engine::{ClonePlan, RealSystem, RunReport, System, clone_project};
use std::path::PathBuf;
use tracing::debug;

use error::CommandError;

/// gk-rename - clone a template project under a new name
#[derive(Parser, Debug)]
#[command(name = "gk-rename")]
#[command(about = "gk-rename is a CLI tool for cloning and renaming a template project")]
#[command(version)]
#[command(long_about = "gk-rename is a CLI tool for cloning and renaming a template project

The template is copied into a new directory named Cloned_<VALUE>, build output
(node_modules, bin, obj) is left behind, and every occurrence of the old project
name in file contents, file names and directory names is replaced.

Examples:
  • gk-rename -k CommerceMono -v HRMS
      → Creates ./Cloned_HRMS from the template in the current directory

  • gk-rename -k CommerceMono -v HRMS --source ~/templates/commerce --dest ~/work
      → Creates ~/work/Cloned_HRMS from another checkout")]
pub struct Cli {
    /// The key to be renamed (old project name)
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub key: String,

    /// The new name or value for the key
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub value: String,

    /// New company name replacing the `Cloned` placeholder (removed when omitted)
    #[arg(long, value_name = "NAME")]
    pub company: Option<String>,

    /// Path to the template directory
    #[arg(long, env = "GK_RENAME_SOURCE_DIR", value_name = "DIR", default_value = ".")]
    pub source: PathBuf,

    /// Directory in which the new project root is created
    #[arg(long, env = "GK_RENAME_DEST_DIR", value_name = "DIR", default_value = ".")]
    pub dest: PathBuf,

    /// Path to the config file (default: <SOURCE>/.gk-rename.toml if present)
    #[arg(long, env = "GK_RENAME_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "GK_RENAME_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Build the clone plan for this invocation
    pub fn plan(&self, config: Config) -> error::Result<ClonePlan> {
        let rules = RenameRules::new(&self.key, &self.value, self.company.as_deref())?;
        Ok(ClonePlan {
            source_dir: self.source.clone(),
            dest_dir: self.dest.clone(),
            rules,
            skip: config.copy.skip_dirs,
        })
    }
}

/// Main entry point for the CLI logic
///
/// # Errors
///
/// Returns an error if:
/// - Logging initialization fails
/// - Configuration loading fails
/// - The project root exists or cannot be created
/// - Copying the template or walking the new tree fails
pub fn run(cli: Cli) -> Result<()> {
    gk_config::logging::init(cli.verbose, cli.log_file.as_deref())
        .context("Failed to initialize logging")?;

    let report = execute(&cli).with_context(|| {
        format!(
            "Failed to clone {} from {}",
            cli.value,
            cli.source.display()
        )
    })?;

    stats::print_summary(&report);
    Ok(())
}

/// Run the clone for parsed arguments without touching global state
///
/// # Errors
///
/// Returns a [`CommandError`] describing the first fatal failure.
pub fn execute(cli: &Cli) -> error::Result<RunReport> {
    let system = RealSystem;

    if !system.exists(&cli.source)? {
        return Err(CommandError::SourceNotFound(cli.source.clone()));
    }

    let config = Config::resolve(cli.config.as_deref(), &cli.source)?;
    debug!(skip_dirs = ?config.skip_dirs(), "Loaded configuration");

    let plan = cli.plan(config)?;
    let root = plan.root();
    if system.exists(&root)? {
        return Err(CommandError::RootExists(root));
    }

    Ok(clone_project(&system, &plan)?)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn cli_for(source: &std::path::Path, dest: &std::path::Path) -> Cli {
        Cli::try_parse_from([
            "gk-rename",
            "-k",
            "CommerceMono",
            "-v",
            "HRMS",
            "--source",
            source.to_str().unwrap(),
            "--dest",
            dest.to_str().unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from(["gk-rename", "-k", "CommerceMono", "-v", "HRMS"]).unwrap();

        assert_eq!(cli.key, "CommerceMono");
        assert_eq!(cli.value, "HRMS");
        assert!(cli.company.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_missing_value_is_usage_error() {
        let err = Cli::try_parse_from(["gk-rename", "--key", "CommerceMono"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_empty_key_is_usage_error() {
        let result = Cli::try_parse_from(["gk-rename", "--key", "", "--value", "HRMS"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_plan_uses_config_skip_dirs() {
        let cli = Cli::try_parse_from(["gk-rename", "-k", "A", "-v", "B", "--dest", "out"]).unwrap();
        let config = Config::from_toml_str(
            "[copy]\nskipDirs = [\"dist\"]\n",
            std::path::Path::new("inline"),
        )
        .unwrap();

        let plan = cli.plan(config).unwrap();

        assert!(plan.skip.contains("dist"));
        assert!(!plan.skip.contains("bin"));
        assert_eq!(plan.root(), PathBuf::from("out/Cloned_B"));
    }

    #[test]
    fn test_execute_clones_template() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("template");
        fs::create_dir_all(source.join("src/CommerceMono.Api")).unwrap();
        fs::write(
            source.join("src/CommerceMono.Api/Program.cs"),
            "namespace CommerceMono.Api;",
        )
        .unwrap();
        fs::write(source.join("CommerceMono.sln"), "CommerceMono").unwrap();

        let report = execute(&cli_for(&source, temp.path())).unwrap();

        let backend = temp.path().join("Cloned_HRMS/aspnet-core");
        assert_eq!(report.root, temp.path().join("Cloned_HRMS"));
        assert_eq!(
            fs::read_to_string(backend.join("src/HRMS.Api/Program.cs")).unwrap(),
            "namespace HRMS.Api;"
        );
        assert_eq!(fs::read_to_string(backend.join("HRMS.sln")).unwrap(), "HRMS");
    }

    #[test]
    fn test_execute_refuses_existing_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("Cloned_HRMS")).unwrap();

        let err = execute(&cli_for(temp.path(), temp.path())).unwrap_err();

        assert!(matches!(err, CommandError::RootExists(_)));
    }

    #[test]
    fn test_execute_missing_source() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let err = execute(&cli_for(&missing, temp.path())).unwrap_err();

        assert!(matches!(err, CommandError::SourceNotFound(_)));
    }
}
