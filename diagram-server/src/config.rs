//! Server configuration.

use std::net::SocketAddr;

/// Environment variable for the listen address.
pub const ADDR_VAR: &str = "DIAGRAM_ADDR";

/// Environment variable for the maximum number of trips per request.
pub const MAX_TRIPS_VAR: &str = "DIAGRAM_MAX_TRIPS";

/// Environment variable for the maximum number of stops per trip.
pub const MAX_STOPS_VAR: &str = "DIAGRAM_MAX_STOPS_PER_TRIP";

/// Error reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

/// Configuration for the layout server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Maximum number of trips in one layout request.
    pub max_trips: usize,

    /// Maximum number of stops in one trip.
    pub max_stops_per_trip: usize,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(addr: SocketAddr, max_trips: usize, max_stops_per_trip: usize) -> Self {
        Self {
            addr,
            max_trips,
            max_stops_per_trip,
        }
    }

    /// Read configuration from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            addr: parse_var(&lookup, ADDR_VAR)?.unwrap_or(defaults.addr),
            max_trips: parse_var(&lookup, MAX_TRIPS_VAR)?.unwrap_or(defaults.max_trips),
            max_stops_per_trip: parse_var(&lookup, MAX_STOPS_VAR)?
                .unwrap_or(defaults.max_stops_per_trip),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_trips: 500,
            max_stops_per_trip: 1000,
        }
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError { var, value }),
    }
}
