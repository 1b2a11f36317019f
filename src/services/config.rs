use crate::cli::BlankLinePolicy;
use crate::domain::error::GlossaryError;
use crate::domain::models::{BuildConfig, DEFAULT_TITLE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional defaults read from `--config <file>`.
///
/// ```toml
/// title = "Networking Terms"
/// blank_lines = "skip"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub blank_lines: Option<BlankLinePolicy>,
}

pub fn load_config_file(path: &Path) -> Result<ConfigFile, GlossaryError> {
    let raw = std::fs::read_to_string(path).map_err(|e| GlossaryError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    toml::from_str(&raw).map_err(|e| GlossaryError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Flags win over the config file, which wins over built-in defaults.
/// A blank title falls back to [`DEFAULT_TITLE`].
pub fn resolve_build_config(
    input: PathBuf,
    output: PathBuf,
    title: Option<String>,
    blank_lines: Option<BlankLinePolicy>,
    config_path: Option<&Path>,
) -> Result<BuildConfig, GlossaryError> {
    let file = match config_path {
        Some(p) => load_config_file(p)?,
        None => ConfigFile::default(),
    };
    let title = title
        .or(file.title)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    Ok(BuildConfig {
        input_path: input,
        output_dir: output,
        title,
        blank_lines: blank_lines.or(file.blank_lines).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::{load_config_file, resolve_build_config};
    use crate::cli::BlankLinePolicy;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let cfg = resolve_build_config(
            PathBuf::from("in.txt"),
            PathBuf::from("out"),
            None,
            None,
            None,
        )
        .expect("config");
        assert_eq!(cfg.title, "Glossary");
        assert_eq!(cfg.blank_lines, BlankLinePolicy::Strict);
    }

    #[test]
    fn flags_override_file_values() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("glossgen.toml");
        fs::write(&path, "title = \"From File\"\nblank_lines = \"skip\"\n").expect("write config");

        let from_file = resolve_build_config(
            PathBuf::from("in.txt"),
            PathBuf::from("out"),
            None,
            None,
            Some(&path),
        )
        .expect("config");
        assert_eq!(from_file.title, "From File");
        assert_eq!(from_file.blank_lines, BlankLinePolicy::Skip);

        let flagged = resolve_build_config(
            PathBuf::from("in.txt"),
            PathBuf::from("out"),
            Some("From Flag".to_string()),
            Some(BlankLinePolicy::Strict),
            Some(&path),
        )
        .expect("config");
        assert_eq!(flagged.title, "From Flag");
        assert_eq!(flagged.blank_lines, BlankLinePolicy::Strict);
    }

    #[test]
    fn blank_title_uses_default() {
        let cfg = resolve_build_config(
            PathBuf::from("in.txt"),
            PathBuf::from("out"),
            Some("   ".to_string()),
            None,
            None,
        )
        .expect("config");
        assert_eq!(cfg.title, "Glossary");
    }

    #[test]
    fn unknown_keys_are_config_errors() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "colour = \"red\"\n").expect("write config");
        let err = load_config_file(&path).unwrap_err();
        assert_eq!(err.code(), "CONFIG");
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let err = load_config_file(&PathBuf::from("/nonexistent/glossgen.toml")).unwrap_err();
        assert_eq!(err.stage(), "config");
    }
}
