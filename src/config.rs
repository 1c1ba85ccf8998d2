use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "grocery-reviews")]
#[command(about = "Collect nearby grocery stores, summarize their reviews, and write them to CSV", long_about = None)]
pub struct AppConfig {
    #[arg(long, env = "SERPAPI_KEY", hide_env_values = true)]
    pub serpapi_key: Option<String>,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "SEARCH_LAT", default_value_t = 28.4595, allow_negative_numbers = true)]
    pub lat: f64,

    #[arg(long, env = "SEARCH_LON", default_value_t = 77.0266, allow_negative_numbers = true)]
    pub lon: f64,

    #[arg(long, env = "SEARCH_RADIUS", default_value_t = 1500)]
    pub radius: u32,

    #[arg(long, env = "SEARCH_ZOOM", default_value_t = 15)]
    pub zoom: u8,

    #[arg(long, short = 'o', env = "OUTPUT_PATH", default_value = "groceries.csv")]
    pub output: String,

    #[arg(long, env = "SUMMARY_BACKEND", default_value = "openai")]
    pub summary_backend: String,

    #[arg(long, env = "SUMMARY_MODEL", default_value = "gpt-4")]
    pub summary_model: String,

    #[arg(long, env = "SERPAPI_BASE_URL", default_value = "https://serpapi.com")]
    pub serpapi_base_url: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,
}

impl AppConfig {
    pub fn from_env_and_args() -> Result<Self, dotenvy::Error> {
        ignore_missing(dotenvy::dotenv())?;
        Ok(Self::parse())
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(format!("latitude {} out of range [-90, 90]", self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(format!("longitude {} out of range [-180, 180]", self.lon));
        }
        if self.radius == 0 {
            return Err("radius must be > 0".into());
        }
        url::Url::parse(&self.serpapi_base_url)
            .map_err(|_| "Invalid SERPAPI_BASE_URL format".to_string())?;
        if self.summary_backend == "openai" {
            url::Url::parse(&self.openai_base_url)
                .map_err(|_| "Invalid OPENAI_BASE_URL format".to_string())?;
        }
        Ok(())
    }
}

/// A missing .env is normal outside development; a malformed one is not.
fn ignore_missing<T>(res: Result<T, dotenvy::Error>) -> Result<(), dotenvy::Error> {
    match res {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e),
    }
}
