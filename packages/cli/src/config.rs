use gazette_compiler_html::CompileOptions;
use gazette_model::{FooterConfig, HeaderConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "gazette.config.json";

/// Gazette configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory searched for `*.newsletter.json` files
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Directory rendered HTML is written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Drop media placeholders (final email export)
    #[serde(default)]
    pub export: bool,

    /// Indent the generated document
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Header used by newsletters that do not carry their own
    #[serde(default)]
    pub header: HeaderConfig,

    /// Footer used by newsletters that do not carry their own
    #[serde(default)]
    pub footer: FooterConfig,
}

fn default_src_dir() -> String {
    "newsletters".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to source directory
    pub fn get_src_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.src_dir)
    }

    /// Output directory, with an optional command-line override
    pub fn get_out_dir(&self, cwd: &str, flag: Option<&str>) -> PathBuf {
        PathBuf::from(cwd).join(flag.unwrap_or(&self.out_dir))
    }

    /// Compile options for this project. `export` on the command line wins
    /// over the config value when set.
    pub fn compile_options(&self, export: bool) -> CompileOptions {
        let base = if export || self.export {
            CompileOptions::export()
        } else {
            CompileOptions::default()
        };
        CompileOptions {
            pretty: self.pretty,
            ..base
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            export: false,
            pretty: default_pretty(),
            header: HeaderConfig::default(),
            footer: FooterConfig::default(),
        }
    }
}
