//! Application configuration from command-line flags and environment.

use clap::Parser;

/// Command-line arguments. Every flag also has an environment
/// variable fallback, populated from an optional `.env` file.
#[derive(Parser, Debug, Clone)]
#[command(name = "snipbin")]
#[command(about = "Minimal snippet pastebin web service", long_about = None)]
#[command(version)]
pub struct Args {
    /// HTTP listen address
    #[arg(long, env = "SNIPBIN_ADDR", default_value = "0.0.0.0:8080")]
    pub addr: String,

    /// Database connection string (sqlx SQLite DSN)
    #[arg(long, env = "SNIPBIN_DSN", default_value = "sqlite:snipbin.db?mode=rwc")]
    pub dsn: String,

    /// Directory of static assets served under /static/
    #[arg(long, env = "SNIPBIN_STATIC_DIR", default_value = "ui/static")]
    pub static_dir: String,

    /// Site name shown in page titles and the nav bar
    #[arg(long, env = "SNIPBIN_SITE_NAME", default_value = "Snipbin")]
    pub site_name: String,
}

/// Validated application configuration, shared through
/// [`crate::AppState`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g. "0.0.0.0:8080").
    pub addr: String,

    /// Database connection string.
    pub dsn: String,

    /// Static asset directory served under `/static/`.
    pub static_dir: String,

    /// Site name for page titles and the nav bar.
    pub site_name: String,
}

impl Config {
    /// Build and validate a configuration from parsed arguments.
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let addr = args.addr.trim().to_string();
        if addr.is_empty() {
            anyhow::bail!("listen address must not be empty");
        }

        let dsn = args.dsn.trim().to_string();
        if dsn.is_empty() {
            anyhow::bail!("database DSN must not be empty");
        }

        let config = Self {
            addr,
            dsn,
            static_dir: args.static_dir.clone(),
            site_name: args.site_name.clone(),
        };

        tracing::info!(
            addr = %config.addr,
            dsn = %config.dsn,
            static_dir = %config.static_dir,
            site_name = %config.site_name,
            "configuration loaded"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = Config::from_args(&parse(&["snipbin"])).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080");
        assert_eq!(config.dsn, "sqlite:snipbin.db?mode=rwc");
        assert_eq!(config.static_dir, "ui/static");
        assert_eq!(config.site_name, "Snipbin");
    }

    #[test]
    fn config_custom_flags() {
        let config = Config::from_args(&parse(&[
            "snipbin",
            "--addr",
            "127.0.0.1:4000",
            "--dsn",
            "sqlite::memory:",
            "--site-name",
            "Pastes",
        ]))
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:4000");
        assert_eq!(config.dsn, "sqlite::memory:");
        assert_eq!(config.site_name, "Pastes");
    }

    #[test]
    fn config_trims_addr_whitespace() {
        let config = Config::from_args(&parse(&["snipbin", "--addr", " 0.0.0.0:9000 "])).unwrap();
        assert_eq!(config.addr, "0.0.0.0:9000");
    }

    #[test]
    fn config_rejects_blank_addr() {
        let args = parse(&["snipbin", "--addr", "   "]);
        assert!(Config::from_args(&args).is_err());
    }

    #[test]
    fn config_rejects_blank_dsn() {
        let args = parse(&["snipbin", "--dsn", ""]);
        assert!(Config::from_args(&args).is_err());
    }
}
