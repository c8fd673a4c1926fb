use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{CrmError, Result};

/// Default spreadsheet read on every request, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "ThongTinKhachHang.xlsx";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Customer dashboard served from a spreadsheet
#[derive(Parser, Debug, Clone)]
#[command(
    name = "crm-dashboard",
    about = "Customer dashboard served from a spreadsheet",
    version
)]
pub struct Settings {
    /// Spreadsheet holding one customer per row
    #[arg(long, env = "CRM_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Directory served under /static
    #[arg(long, env = "CRM_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Interface to bind
    #[arg(long, env = "CRM_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "CRM_PORT", default_value = "5000")]
    pub port: u16,

    /// Logging level
    #[arg(
        long,
        env = "CRM_LOG_LEVEL",
        default_value = "INFO",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]
    )]
    pub log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`Settings::load`] for an explicit argument list.
    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// `host:port` as given on the command line.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolve the bind address into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address().parse().map_err(|e| {
            CrmError::Config(format!("invalid bind address {}: {}", self.bind_address(), e))
        })
    }

    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
