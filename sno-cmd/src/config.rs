//! Toggle config loading for the CLI.

use anyhow::Context;
use log::info;
use sno_activity::ToggleConfig;
use std::path::Path;

/// Load a JSON config from `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ToggleConfig> {
    let Some(path) = path else {
        return Ok(ToggleConfig::default());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = ToggleConfig::from_json(&json)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("sno-cmd-{}-{}", std::process::id(), name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_no_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, ToggleConfig::default());
    }

    #[test]
    fn test_loads_file() {
        let path = write_temp("busy.json", r#"{"marker_class":"busy"}"#);
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.marker_class, "busy");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("sno-cmd-does-not-exist.json");
        let error = load_config(Some(&path)).unwrap_err();
        assert!(error.to_string().starts_with("Failed to read config"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let path = write_temp("bad.json", r#"{"marker_class":"two words"}"#);
        let error = load_config(Some(&path)).unwrap_err();
        assert!(error.to_string().starts_with("Invalid config"));
        std::fs::remove_file(path).unwrap();
    }
}
