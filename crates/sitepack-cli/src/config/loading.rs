use crate::config::{CONFIG_FILE, SiteConfig};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Format as _, Json, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

impl SiteConfig {
    /// Load configuration for the site at `root`.
    ///
    /// `config_path` overrides the default `<root>/sitepack.toml`. Files
    /// ending in `.json` are read as JSON, anything else as TOML.
    pub fn load(config_path: Option<&Path>, root: &Path) -> Result<Self> {
        let path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.join(CONFIG_FILE));

        // figment treats a missing file as an empty provider
        if !path.is_file() {
            return Err(ConfigError::NotFound(path).into());
        }
        debug!("loading config from {}", path.display());

        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));
        figment = if is_json(&path) {
            figment.merge(Json::file(&path))
        } else {
            figment.merge(Toml::file(&path))
        };

        figment.extract().map_err(|e| parse_error(path, e))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn parse_error(path: PathBuf, err: figment::Error) -> crate::error::CliError {
    ConfigError::Parse {
        path,
        message: err.to_string(),
    }
    .into()
}
