use std::env;
use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub backend: BackendConfig,
    pub geocoding: GeocodingConfig,
    pub report: ReportConfig,
    pub map: MapConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Disaster backend that owns symptoms, alerts and aid requests
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    pub alerts_path: String,
    pub symptoms_path: String,
    /// Approved aid requests endpoint. The combined map variant is unavailable when unset.
    pub aid_requests_path: Option<String>,
    pub timeout: Duration,
}

/// Nominatim reverse geocoding
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying User-Agent
    pub user_agent: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Offset used to read `datetime-local` values entered on the form
    pub utc_offset: FixedOffset,
}

#[derive(Debug, Clone)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    /// Full width of the jitter window in degrees
    pub jitter_degrees: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            backend: BackendConfig::from_env()?,
            geocoding: GeocodingConfig::from_env()?,
            report: ReportConfig::from_env()?,
            map: MapConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Disaster Report Gateway".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Citizen disaster reporting form and alert map API".to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl BackendConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("BACKEND_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5158".to_string())
            .trim_end_matches('/')
            .to_string();

        let alerts_path =
            env::var("BACKEND_ALERTS_PATH").unwrap_or_else(|_| "/Alerts/all".to_string());

        let symptoms_path =
            env::var("BACKEND_SYMPTOMS_PATH").unwrap_or_else(|_| "/Symptoms/create".to_string());

        let aid_requests_path = env::var("BACKEND_AID_REQUESTS_PATH")
            .ok()
            .filter(|s| !s.is_empty());

        let timeout_secs = env::var("BACKEND_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "BACKEND_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            base_url,
            alerts_path,
            symptoms_path,
            aid_requests_path,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl GeocodingConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("NOMINATIM_BASE_URL")
            .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string())
            .trim_end_matches('/')
            .to_string();

        let user_agent = env::var("NOMINATIM_USER_AGENT")
            .unwrap_or_else(|_| "DisasterReportGateway/0.1 (citizen-disaster-report)".to_string());

        let timeout_secs = env::var("NOMINATIM_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "NOMINATIM_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            base_url,
            user_agent,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl ReportConfig {
    // Sri Lanka Standard Time, UTC+05:30
    const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;

    pub fn from_env() -> Result<Self, String> {
        let minutes = env::var("REPORT_UTC_OFFSET_MINUTES")
            .unwrap_or_else(|_| Self::DEFAULT_UTC_OFFSET_MINUTES.to_string())
            .parse::<i32>()
            .map_err(|_| "REPORT_UTC_OFFSET_MINUTES must be a valid number".to_string())?;

        let utc_offset = FixedOffset::east_opt(minutes * 60)
            .ok_or_else(|| "REPORT_UTC_OFFSET_MINUTES is out of range".to_string())?;

        Ok(Self { utc_offset })
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            utc_offset: FixedOffset::east_opt(Self::DEFAULT_UTC_OFFSET_MINUTES * 60)
                .unwrap_or_else(|| Utc.fix()),
        }
    }
}

impl MapConfig {
    const DEFAULT_CENTER_LAT: f64 = 7.8731;
    const DEFAULT_CENTER_LON: f64 = 80.7718;
    const DEFAULT_ZOOM: u8 = 8;
    const DEFAULT_JITTER_DEGREES: f64 = 0.001;

    pub fn from_env() -> Result<Self, String> {
        let center_lat = env::var("MAP_CENTER_LAT")
            .unwrap_or_else(|_| Self::DEFAULT_CENTER_LAT.to_string())
            .parse::<f64>()
            .map_err(|_| "MAP_CENTER_LAT must be a valid number".to_string())?;

        let center_lon = env::var("MAP_CENTER_LON")
            .unwrap_or_else(|_| Self::DEFAULT_CENTER_LON.to_string())
            .parse::<f64>()
            .map_err(|_| "MAP_CENTER_LON must be a valid number".to_string())?;

        let zoom = env::var("MAP_ZOOM")
            .unwrap_or_else(|_| Self::DEFAULT_ZOOM.to_string())
            .parse::<u8>()
            .map_err(|_| "MAP_ZOOM must be a valid number".to_string())?;

        let jitter_degrees = env::var("MAP_JITTER_DEGREES")
            .unwrap_or_else(|_| Self::DEFAULT_JITTER_DEGREES.to_string())
            .parse::<f64>()
            .map_err(|_| "MAP_JITTER_DEGREES must be a valid number".to_string())?;

        if !(0.0..=0.01).contains(&jitter_degrees) {
            return Err("MAP_JITTER_DEGREES must be between 0 and 0.01".to_string());
        }

        Ok(Self {
            center_lat,
            center_lon,
            zoom,
            jitter_degrees,
        })
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: Self::DEFAULT_CENTER_LAT,
            center_lon: Self::DEFAULT_CENTER_LON,
            zoom: Self::DEFAULT_ZOOM,
            jitter_degrees: Self::DEFAULT_JITTER_DEGREES,
        }
    }
}
