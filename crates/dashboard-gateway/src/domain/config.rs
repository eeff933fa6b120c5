//! Gateway configuration with validation.
//!
//! Every section has defaults, so an empty TOML file is a valid
//! configuration:
//!
//! ```toml
//! [http]
//! host = "0.0.0.0"
//! port = 8501
//!
//! [artifacts]
//! root = "/srv/tesis"
//! interactive_dir = "html"
//! images_dir = "png"
//! spreadsheets_dir = "excel"
//!
//! [timeouts]
//! request = "10s"
//! ```

use dashboard_catalog::domain::{
    ArtifactDirectory, DEFAULT_IMAGES_DIR, DEFAULT_INTERACTIVE_DIR, DEFAULT_SPREADSHEETS_DIR,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main gateway configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Where the pre-generated artifacts live
    pub artifacts: ArtifactsConfig,
    /// Timeout configuration
    pub timeouts: TimeoutConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Page chrome
    pub page: PageConfig,
}

impl GatewayConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        for (name, dir) in [
            ("interactive_dir", &self.artifacts.interactive_dir),
            ("images_dir", &self.artifacts.images_dir),
            ("spreadsheets_dir", &self.artifacts.spreadsheets_dir),
        ] {
            if dir.trim().is_empty() {
                return Err(ConfigError::InvalidDirectory(format!("{} cannot be empty", name)));
            }
        }

        if self.timeouts.request.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "request timeout cannot be 0".into(),
            ));
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }

    /// Artifact roots derived from the artifacts section
    pub fn artifact_directory(&self) -> ArtifactDirectory {
        ArtifactDirectory::with_layout(
            &self.artifacts.root,
            &self.artifacts.interactive_dir,
            &self.artifacts.images_dir,
            &self.artifacts.spreadsheets_dir,
        )
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 8501)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 8501,
        }
    }
}

/// Artifact location configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactsConfig {
    /// Application root holding the three artifact directories
    pub root: PathBuf,
    /// Interactive documents, relative to `root`
    pub interactive_dir: String,
    /// Static images, relative to `root`
    pub images_dir: String,
    /// Spreadsheets, relative to `root`
    pub spreadsheets_dir: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            interactive_dir: DEFAULT_INTERACTIVE_DIR.to_string(),
            images_dir: DEFAULT_IMAGES_DIR.to_string(),
            spreadsheets_dir: DEFAULT_SPREADSHEETS_DIR.to_string(),
        }
    }
}

/// Timeout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request timeout
    #[serde(with = "humantime_serde")]
    pub request: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(10),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Enable CORS
    pub enabled: bool,
    /// Allowed origins ("*" for all)
    pub allowed_origins: Vec<String>,
    /// Allowed methods
    pub allowed_methods: Vec<String>,
    /// Max age for preflight cache in seconds
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["GET".to_string(), "HEAD".to_string(), "OPTIONS".to_string()],
            max_age: 86400, // 24 hours
        }
    }
}

/// Page chrome: title, icon and footer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Browser tab title
    pub title: String,
    /// Emoji shown in the tab
    pub icon: String,
    /// Caption at the bottom of every page
    pub footer: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Tesis PCA - Dashboard Interactivo".to_string(),
            icon: "📊".to_string(),
            footer: "© Tesis Doctoral — PCA y Sesgos Cognitivos".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Port 0 is not a usable listen port
    #[error("invalid port: 0")]
    InvalidPort,
    /// Empty or unusable artifact directory
    #[error("invalid directory: {0}")]
    InvalidDirectory(String),
    /// Invalid timeout value
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
    /// Config file could not be read
    #[error("failed to read {path}: {error}")]
    Io { path: String, error: String },
    /// Config file is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Duration as a short string: "10s", "500ms", "2m" or plain seconds.
mod humantime_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if duration.subsec_millis() == 0 {
            serializer.serialize_str(&format!("{}s", duration.as_secs()))
        } else {
            serializer.serialize_str(&format!("{}ms", duration.as_millis()))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_duration(&s).map_err(serde::de::Error::custom)
    }

    pub(super) fn parse_duration(s: &str) -> Result<Duration, &'static str> {
        let s = s.trim();
        if let Some(ms) = s.strip_suffix("ms") {
            ms.trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| "invalid milliseconds")
        } else if let Some(secs) = s.strip_suffix('s') {
            secs.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| "invalid seconds")
        } else if let Some(mins) = s.strip_suffix('m') {
            mins.trim()
                .parse::<u64>()
                .map(|m| Duration::from_secs(m * 60))
                .map_err(|_| "invalid minutes")
        } else {
            s.parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| "invalid duration format")
        }
    }
}
