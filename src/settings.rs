//! Process settings from environment variables. Call `dotenvy::dotenv()` first to pick up a `.env` file.

use crate::error::ConfigError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Settings {
    pub port: u16,
    pub bind_host: IpAddr,
    /// SQLite database file. Created on first start.
    pub database_path: PathBuf,
    pub site: SiteSettings,
    pub body_limit: usize,
}

/// Where static pages and images live on disk.
#[derive(Clone, Debug)]
pub struct SiteSettings {
    /// Root-level pages, scripts and styles.
    pub site_root: PathBuf,
    /// Holds the `images` subdirectory.
    pub static_root: PathBuf,
}

impl SiteSettings {
    pub fn images_dir(&self) -> PathBuf {
        self.static_root.join("images")
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            site_root: PathBuf::from("."),
            static_root: PathBuf::from("static"),
        }
    }
}

impl Settings {
    /// PORT, BIND_HOST, DATABASE_PATH, SITE_ROOT, STATIC_ROOT, BODY_LIMIT_BYTES.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env` with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SiteSettings::default();
        Ok(Settings {
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            bind_host: parse_var(&lookup, "BIND_HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            database_path: lookup("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("pets.db")),
            site: SiteSettings {
                site_root: lookup("SITE_ROOT").map(PathBuf::from).unwrap_or(defaults.site_root),
                static_root: lookup("STATIC_ROOT").map(PathBuf::from).unwrap_or(defaults.static_root),
            },
            body_limit: parse_var(&lookup, "BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT)?,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidVar { name, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_bind_all_interfaces_on_5000() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.bind_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(s.database_path, PathBuf::from("pets.db"));
        assert_eq!(s.site.images_dir(), PathBuf::from("static").join("images"));
    }

    #[test]
    fn port_is_read_from_env() {
        let s = settings(&[("PORT", "8080")]).unwrap();
        assert_eq!(s.port, 8080);
    }

    #[test]
    fn bad_port_names_the_variable() {
        let err = settings(&[("PORT", "http")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for PORT: http");
    }
}
