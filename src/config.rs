use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub app: AppSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppSettings {
    /// Shown in the sidebar and on the home page
    pub title: String,
    /// URL prefix the app is served under: empty, or `/something`
    /// without a trailing slash
    pub base_path: String,
    /// Render the live JSON preview of the form data under each form
    pub show_preview: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogSettings {
    /// One of trace, debug, info, warn, error
    pub level: String,
}

impl Settings {
    /// Settings with nothing overridden
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_toml("")
    }

    /// Defaults overridden by a TOML document
    pub fn from_toml(source: &str) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .set_default("app.title", "formdeck")?
            .set_default("app.base_path", "")?
            .set_default("app.show_preview", true)?
            .set_default("log.level", "info")?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;

        let settings: Settings = s.try_deserialize()?;

        settings
            .log
            .level
            .parse::<tracing::Level>()
            .map_err(|e| anyhow::anyhow!("Invalid log.level '{}': {}", settings.log.level, e))?;

        let base = &settings.app.base_path;
        if !base.is_empty() && (!base.starts_with('/') || base.ends_with('/')) {
            anyhow::bail!(
                "Invalid app.base_path '{}': must be empty or start with '/' and not end with '/'",
                base
            );
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() -> anyhow::Result<()> {
        let settings = Settings::new()?;
        assert_eq!(settings.app.title, "formdeck");
        assert_eq!(settings.app.base_path, "");
        assert!(settings.app.show_preview);
        assert_eq!(settings.log.level, "info");
        Ok(())
    }

    #[test]
    fn test_toml_overrides_defaults() -> anyhow::Result<()> {
        let settings = Settings::from_toml(
            r#"
[app]
title = "Form demos"
base_path = "/forms"
show_preview = false

[log]
level = "debug"
"#,
        )?;
        assert_eq!(settings.app.title, "Form demos");
        assert_eq!(settings.app.base_path, "/forms");
        assert!(!settings.app.show_preview);
        assert_eq!(settings.log.level, "debug");
        Ok(())
    }

    #[test]
    fn test_rejects_malformed_base_path() {
        for base in ["forms", "/forms/", "/"] {
            let source = format!("[app]\nbase_path = \"{}\"\n", base);
            assert!(Settings::from_toml(&source).is_err(), "{base}");
        }
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let result = Settings::from_toml("[log]\nlevel = \"loud\"\n");
        assert!(result.is_err());
    }
}
