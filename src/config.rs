use std::env;
use std::str::FromStr;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const MONGODB_DATABASE: &str = "TravelPlanner";
const ITINERARY_COLLECTION: &str = "Itineraries";
const ALLOWED_ORIGIN_HOSTS: &str = "localhost,127.0.0.1";
// 100 requests per 15 minutes per client IP
const RATE_LIMIT_BURST: u32 = 100;
const RATE_LIMIT_REPLENISH_SECS: u64 = 9;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// When unset, itineraries live in process memory
    pub mongo_uri: Option<String>,
    pub mongo_database: String,
    pub itinerary_collection: String,
    /// Artificial wait before answering a generate call
    pub generation_delay_ms: u64,
    /// Hosts allowed by CORS, any port
    pub allowed_origin_hosts: Vec<String>,
    /// Requests a client IP may make before being throttled
    pub rate_limit_burst: u32,
    /// Seconds for one spent request to be restored
    pub rate_limit_replenish_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            mongo_uri: None,
            mongo_database: MONGODB_DATABASE.to_string(),
            itinerary_collection: ITINERARY_COLLECTION.to_string(),
            generation_delay_ms: 0,
            allowed_origin_hosts: split_hosts(ALLOWED_ORIGIN_HOSTS),
            rate_limit_burst: RATE_LIMIT_BURST,
            rate_limit_replenish_secs: RATE_LIMIT_REPLENISH_SECS,
        }
    }
}

fn split_hosts(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .filter(|h| !h.is_empty())
        .collect()
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Read settings from the environment, keeping defaults for anything
    /// missing or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parsed_or("PORT", defaults.port),
            mongo_uri: env::var("MONGODB_URI").ok().filter(|uri| !uri.trim().is_empty()),
            mongo_database: env::var("MONGODB_DATABASE").unwrap_or(defaults.mongo_database),
            itinerary_collection: env::var("ITINERARY_COLLECTION")
                .unwrap_or(defaults.itinerary_collection),
            generation_delay_ms: parsed_or("GENERATION_DELAY_MS", defaults.generation_delay_ms),
            allowed_origin_hosts: env::var("ALLOWED_ORIGIN_HOSTS")
                .map(|v| split_hosts(&v))
                .unwrap_or(defaults.allowed_origin_hosts),
            rate_limit_burst: parsed_or("RATE_LIMIT_BURST", defaults.rate_limit_burst),
            rate_limit_replenish_secs: parsed_or(
                "RATE_LIMIT_REPLENISH_SECS",
                defaults.rate_limit_replenish_secs,
            ),
        }
    }

    pub fn is_allowed_origin_host(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        self.allowed_origin_hosts.iter().any(|h| *h == host)
    }
}
