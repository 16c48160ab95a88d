use crate::application::example_data::ExampleVariant;
use serde::Deserialize;

pub const DEFAULT_BACKEND_API: &str = "http://127.0.0.1:8000";
pub const BACKEND_API_VAR: &str = "BACKEND_API";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub source: SourceConfig,
    pub chart: ChartConfig,
    pub poll: PollConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_API.to_string(),
            timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Live,
    RandomWalk,
    Sinusoidal,
    Preset,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    pub count: usize,
    pub interval_ms: i64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Live,
            count: 100,
            interval_ms: 1000,
        }
    }
}

impl SourceConfig {
    /// Example generator to use instead of the live backend, if any.
    pub fn example_variant(&self) -> Option<ExampleVariant> {
        match self.kind {
            SourceKind::Live => None,
            SourceKind::RandomWalk => Some(ExampleVariant::RandomWalk),
            SourceKind::Sinusoidal => Some(ExampleVariant::Sinusoidal),
            SourceKind::Preset => Some(ExampleVariant::Preset),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChartConfig {
    pub dashboard_title: String,
    pub title: String,
    pub label: String,
    pub x_max_ticks: u32,
    /// Interpolated points inserted between samples; 0 disables densifying.
    pub densify: usize,
    pub min_points: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            dashboard_title: "Student Focus Level".to_string(),
            title: "Focus Rate / Time".to_string(),
            label: "Look Forward % (Focus Rate)".to_string(),
            x_max_ticks: 20,
            densify: 0,
            min_points: crate::domain::series::DEFAULT_MIN_POINTS,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PollConfig {
    pub interval_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LayoutConfig {
    pub path: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            path: "layout-store-v1.json".to_string(),
        }
    }
}

pub fn load_config() -> anyhow::Result<AppConfig> {
    load_config_from("config/dashboard", std::env::var(BACKEND_API_VAR).ok())
}

/// Layer an optional config file, `DASHBOARD__*` environment variables and
/// the `BACKEND_API` override over the built-in defaults.
pub fn load_config_from(file: &str, backend_api: Option<String>) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(file).required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("backend.base_url", backend_api.filter(|s| !s.trim().is_empty()))?
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

impl AppConfig {
    fn validate(&self) -> anyhow::Result<()> {
        if self.poll.interval_ms == 0 {
            anyhow::bail!("poll.interval_ms must be greater than zero");
        }
        if self.source.interval_ms <= 0 {
            anyhow::bail!(
                "source.interval_ms must be positive, got {}",
                self.source.interval_ms
            );
        }
        Ok(())
    }
}
