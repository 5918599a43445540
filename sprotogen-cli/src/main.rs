//! `sprotogen` command-line entry point.
//!
//! Reads one JSON dump per parsed schema module and writes the Java sources
//! of all of them under the output root. Any failure is reported once here
//! and turns into a non-zero exit status.

use anyhow::Context;
use clap::Parser;
use sprotogen_codegen::{GenerationReport, GeneratorConfig, generate_from_files};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sprotogen")]
#[command(about = "Generate Java sources from sproto schema models")]
#[command(version)]
struct Cli {
    /// Module dumps to generate (JSON, one module per file)
    #[arg(required = true)]
    models: Vec<PathBuf>,

    /// Output root directory
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Suffix of generated files
    #[arg(long)]
    extension: Option<String>,

    /// JSON file with generator settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `info` or `sprotogen_codegen=debug`
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Builds the generator configuration from the config file and flags.
    fn generator_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config: GeneratorConfig = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => GeneratorConfig::default(),
        };

        if let Some(out) = &self.out {
            config.out_dir = out.clone();
        }
        if let Some(extension) = &self.extension {
            config.extension = extension.clone();
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> anyhow::Result<GenerationReport> {
    let config = cli.generator_config()?;
    tracing::debug!("generator config: {:?}", config);

    let report = generate_from_files(cli.models.as_slice(), &config)
        .with_context(|| format!("generating into {}", config.out_dir.display()))?;
    Ok(report)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&cli.log_level))
        .init();

    let report = run(&cli)?;
    tracing::info!("sprotogen wrote {} file(s)", report.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "sprotogen",
            "--out",
            "gen",
            "--extension",
            ".jav",
            "a.json",
            "b.json",
        ]);

        assert_eq!(cli.models, [PathBuf::from("a.json"), PathBuf::from("b.json")]);
        assert_eq!(cli.log_level, "info");
        let config = cli.generator_config().expect("config");
        assert_eq!(config.out_dir, PathBuf::from("gen"));
        assert_eq!(config.extension, ".jav");
    }

    #[test]
    fn test_cli_requires_models() {
        assert!(Cli::try_parse_from(["sprotogen", "--out", "gen"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config_path = dir.path().join("sprotogen.json");
        std::fs::write(
            &config_path,
            r#"{ "out_dir": "from-file", "extension": ".java", "namespace_tag": "pkg" }"#,
        )
        .expect("write");

        let cli = Cli::parse_from([
            "sprotogen",
            "--config",
            config_path.to_str().expect("utf-8 path"),
            "--extension",
            ".j",
            "m.json",
        ]);
        let config = cli.generator_config().expect("config");

        assert_eq!(config.out_dir, PathBuf::from("from-file"));
        assert_eq!(config.extension, ".j");
        assert_eq!(config.namespace_tag, "pkg");
        assert!(config.banner.contains("DO NOT EDIT"));
    }

    #[test]
    fn test_run_generates_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let model = dir.path().join("game.json");
        std::fs::write(
            &model,
            r#"{ "name": "game.sp", "namespace": "game",
                 "enums": [ { "name": "Grade", "members": ["A", "B"] } ] }"#,
        )
        .expect("write");
        let out = dir.path().join("out");

        let cli = Cli::parse_from([
            OsStr::new("sprotogen"),
            OsStr::new("--out"),
            out.as_os_str(),
            model.as_os_str(),
        ]);
        let report = run(&cli).expect("run");

        assert_eq!(report.files, [out.join("game").join("Grade.java")]);
    }

    #[test]
    fn test_run_reports_bad_model() {
        let dir = tempfile::tempdir().expect("tempdir");
        let model = dir.path().join("broken.json");
        std::fs::write(&model, "{ not json").expect("write");

        let cli = Cli::parse_from([
            OsStr::new("sprotogen"),
            OsStr::new("--out"),
            dir.path().as_os_str(),
            model.as_os_str(),
        ]);
        let err = run(&cli).unwrap_err();

        assert!(format!("{err:#}").contains("invalid schema model"));
    }
}
