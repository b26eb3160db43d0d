//! Configuration loading, merging, and validation.

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults::{BuildSection, DataSection, OutputSection, RenderSection, SiteSection};

/// File name looked up from the working directory upwards.
pub const CONFIG_FILE_NAME: &str = "vitrine.toml";

/// The full merged configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub data: DataSection,
    pub output: OutputSection,
    pub render: RenderSection,
    pub build: BuildSection,
}

impl SiteConfig {
    /// Load configuration: typed defaults, then the config file, then
    /// `VITRINE_*` environment variables.
    ///
    /// With an explicit path the file must exist; otherwise the nearest
    /// `vitrine.toml` up the directory tree is used when present.
    pub fn load(custom_config: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(SiteConfig::default()));

        if let Some(path) = custom_config {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            figment = figment.merge(Toml::file(path));
        } else if let Some(found) = Self::find_config_file() {
            tracing::debug!("using config file {}", found.display());
            figment = figment.merge(Toml::file(found));
        }

        // Double underscore separates section from key, so keys with
        // underscores of their own survive: VITRINE_SITE__TITLE.
        figment = figment.merge(Env::prefixed("VITRINE_").split("__"));

        figment
            .extract()
            .context("failed to assemble configuration")
    }

    /// Find `vitrine.toml` in the working directory or any parent.
    pub fn find_config_file() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                break;
            }
        }
        None
    }

    /// Reject configurations no build could honor.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            bail!("site.title cannot be empty");
        }
        if self.site.language.trim().is_empty() {
            bail!("site.language cannot be empty");
        }
        if self.data.csv.as_os_str().is_empty() {
            bail!("data.csv cannot be empty");
        }
        if self.output.directory.as_os_str().is_empty() {
            bail!("output.directory cannot be empty");
        }
        if self.output.assets_dir.is_empty() || self.output.listings_dir.is_empty() {
            bail!("output subdirectory names cannot be empty");
        }
        if self.output.assets_dir == self.output.listings_dir {
            bail!("output.assets_dir and output.listings_dir must differ");
        }
        if self.render.max_feature_chips == 0 {
            bail!("render.max_feature_chips must be at least 1");
        }
        Ok(())
    }

    /// Serialize the merged configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize configuration to TOML")
    }

    /// Serialize the merged configuration as JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration to JSON")
    }

    /// Write the default configuration to `path`.
    pub fn write_default(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }
        let body = Self::default().to_toml()?;
        let content = format!(
            "# vitrine configuration\n# Values omitted here keep their defaults.\n\n{body}"
        );
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_validates() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validation_rejects_empty_title() {
        let mut config = SiteConfig::default();
        config.site.title = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_colliding_subdirectories() {
        let mut config = SiteConfig::default();
        config.output.listings_dir = config.output.assets_dir.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_zero_chip_limit() {
        let mut config = SiteConfig::default();
        config.render.max_feature_chips = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let result = SiteConfig::load(Some(Path::new("does-not-exist.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vitrine.toml");
        std::fs::write(&path, "[site]\ntitle = \"Night Market\"\n").unwrap();

        let config = SiteConfig::load(Some(&path)).unwrap();
        assert_eq!(config.site.title, "Night Market");
        // Untouched sections keep their defaults
        assert_eq!(config.render.max_feature_chips, 4);
    }

    #[test]
    fn written_default_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vitrine.toml");
        SiteConfig::write_default(&path, false).unwrap();
        assert!(SiteConfig::write_default(&path, false).is_err());

        let config = SiteConfig::load(Some(&path)).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn toml_export_lists_every_section() {
        let rendered = SiteConfig::default().to_toml().unwrap();
        for section in ["[site]", "[data]", "[output]", "[render]", "[build]"] {
            assert!(rendered.contains(section), "missing {section}");
        }
    }
}
