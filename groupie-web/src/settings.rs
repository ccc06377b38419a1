//! Startup settings
//!
//! Priority, highest first:
//! 1. Command-line arguments
//! 2. Environment variables (GROUPIE_*)
//! 3. TOML config file (`--config` / GROUPIE_CONFIG)
//! 4. Built-in defaults

use clap::Parser;
use groupie_common::config::TomlConfig;
use groupie_common::Result;
use std::path::PathBuf;

/// Command-line arguments for groupie-web
#[derive(Parser, Debug, Default)]
#[command(name = "groupie-web")]
#[command(about = "Web front-end for the Groupie Tracker artist API")]
#[command(version)]
pub struct Args {
    /// TOML bootstrap config file
    #[arg(short, long, env = "GROUPIE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind to
    #[arg(short, long, env = "GROUPIE_BIND")]
    pub bind: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "GROUPIE_PORT")]
    pub port: Option<u16>,

    /// Artist list endpoint of the remote API
    #[arg(long, env = "GROUPIE_API_URL")]
    pub api_url: Option<String>,

    /// Directory served under /static/
    #[arg(long, env = "GROUPIE_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind: String,
    pub port: u16,
    pub api_url: String,
    pub static_dir: PathBuf,
    pub log_level: String,
}

impl Settings {
    /// Merge arguments over the TOML file (if any) over defaults
    pub fn resolve(args: Args) -> Result<Self> {
        let toml = match &args.config {
            Some(path) => TomlConfig::load(path)?,
            None => TomlConfig::default(),
        };
        Ok(Self::merge(args, toml))
    }

    fn merge(args: Args, toml: TomlConfig) -> Self {
        Self {
            bind: args.bind.unwrap_or(toml.bind),
            port: args.port.unwrap_or(toml.port),
            api_url: args.api_url.unwrap_or(toml.api_url),
            static_dir: args
                .static_dir
                .or(toml.static_dir)
                .unwrap_or_else(default_static_dir),
            log_level: toml.logging.level,
        }
    }

    /// "host:port" for the listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Assets shipped with the crate
pub fn default_static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use groupie_common::client::DEFAULT_ARTISTS_URL;

    #[test]
    fn test_defaults() {
        let settings = Settings::merge(Args::default(), TomlConfig::default());
        assert_eq!(settings.listen_addr(), "127.0.0.1:3000");
        assert_eq!(settings.api_url, DEFAULT_ARTISTS_URL);
        assert_eq!(settings.static_dir, default_static_dir());
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_args_override_toml() {
        let toml = TomlConfig::parse(
            r#"
            bind = "0.0.0.0"
            port = 8080
            api_url = "http://toml/api/artists"
            static_dir = "/toml/static"
            "#,
        )
        .unwrap();
        let args = Args {
            port: Some(9090),
            api_url: Some("http://cli/api/artists".to_string()),
            ..Args::default()
        };

        let settings = Settings::merge(args, toml);
        assert_eq!(settings.bind, "0.0.0.0");
        assert_eq!(settings.port, 9090);
        assert_eq!(settings.api_url, "http://cli/api/artists");
        assert_eq!(settings.static_dir, PathBuf::from("/toml/static"));
    }

    #[test]
    fn test_parse_cli_flags() {
        let args = Args::try_parse_from([
            "groupie-web",
            "--port",
            "4000",
            "--static-dir",
            "/tmp/static",
        ])
        .unwrap();
        assert_eq!(args.port, Some(4000));
        assert_eq!(args.static_dir, Some(PathBuf::from("/tmp/static")));
    }

    #[test]
    fn test_missing_config_file_fails() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/groupie.toml")),
            ..Args::default()
        };
        assert!(Settings::resolve(args).is_err());
    }
}
