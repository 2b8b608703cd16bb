//! Commute and server configuration.

use std::net::SocketAddr;

use chrono::FixedOffset;

use crate::domain::{
    DEPATO_MAE, Direction, InvalidRevision, KARINO_MAE, MIYAZAKI_EKI, RevisionStatus,
    StopRegistry,
};
use crate::links::{DEFAULT_BUS_HOST, TrainRoute};

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default static assets directory.
const DEFAULT_STATIC_DIR: &str = "static";

/// Errors from building configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A bus pair names a stop missing from the registry
    #[error("unknown stop {name:?} for {direction} bus")]
    UnknownStop { name: String, direction: Direction },

    /// Revision status could not be parsed
    #[error(transparent)]
    Revision(#[from] InvalidRevision),

    /// Bind address could not be parsed
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    /// UTC offset was not a whole number of minutes in range
    #[error("invalid UTC offset {value:?}: expected minutes between -1439 and 1439")]
    UtcOffset { value: String },
}

/// Origin and destination stop names for one direction's bus link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusPair {
    pub from: String,
    pub to: String,
}

impl BusPair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Static description of the commute.
#[derive(Debug, Clone)]
pub struct CommuteConfig {
    /// Train line looked up in both directions.
    pub train: TrainRoute,

    /// Bus timetable provider host.
    pub bus_host: String,

    /// Known bus stops.
    pub stops: StopRegistry,

    /// Stop names for the outbound bus.
    pub outbound_bus: BusPair,

    /// Stop names for the return bus.
    ///
    /// Need not mirror the outbound pair.
    pub return_bus: BusPair,

    /// Which bus timetable revision to query.
    pub revision: RevisionStatus,
}

impl CommuteConfig {
    /// Set the revision status.
    pub fn with_revision(mut self, revision: RevisionStatus) -> Self {
        self.revision = revision;
        self
    }

    /// Set the train route.
    pub fn with_train(mut self, train: TrainRoute) -> Self {
        self.train = train;
        self
    }

    /// Set the bus provider host.
    pub fn with_bus_host(mut self, host: impl Into<String>) -> Self {
        self.bus_host = host.into();
        self
    }

    /// Replace the stop registry and both bus pairs.
    pub fn with_bus_stops(
        mut self,
        stops: StopRegistry,
        outbound: BusPair,
        return_: BusPair,
    ) -> Self {
        self.stops = stops;
        self.outbound_bus = outbound;
        self.return_bus = return_;
        self
    }

    /// The bus pair for a direction.
    pub fn bus_pair(&self, direction: Direction) -> &BusPair {
        match direction {
            Direction::Outbound => &self.outbound_bus,
            Direction::Return => &self.return_bus,
        }
    }
}

impl Default for CommuteConfig {
    fn default() -> Self {
        Self {
            train: TrainRoute::miyazaki(),
            bus_host: DEFAULT_BUS_HOST.to_string(),
            stops: StopRegistry::miyazaki(),
            outbound_bus: BusPair::new(MIYAZAKI_EKI, DEPATO_MAE),
            return_bus: BusPair::new(KARINO_MAE, MIYAZAKI_EKI),
            revision: RevisionStatus::Before,
        }
    }
}

/// Process-level settings read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (`COMMUTE_BIND_ADDR`).
    pub bind_addr: SocketAddr,

    /// Static assets directory (`COMMUTE_STATIC_DIR`).
    pub static_dir: String,

    /// Revision override (`COMMUTE_REVISION`).
    pub revision: Option<RevisionStatus>,

    /// Fixed clock offset (`COMMUTE_UTC_OFFSET_MINS`). `None` uses the
    /// host's local time zone.
    pub utc_offset: Option<FixedOffset>,
}

impl ServerConfig {
    /// Read settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup function.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_value = get("COMMUTE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_value
            .trim()
            .parse()
            .map_err(|source| ConfigError::BindAddr {
                value: bind_value.clone(),
                source,
            })?;

        let static_dir = get("COMMUTE_STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let revision = get("COMMUTE_REVISION")
            .map(|v| v.parse::<RevisionStatus>())
            .transpose()?;

        let utc_offset = get("COMMUTE_UTC_OFFSET_MINS")
            .map(|v| parse_utc_offset(&v))
            .transpose()?;

        Ok(Self {
            bind_addr,
            static_dir,
            revision,
            utc_offset,
        })
    }
}

fn parse_utc_offset(value: &str) -> Result<FixedOffset, ConfigError> {
    let err = || ConfigError::UtcOffset {
        value: value.to_string(),
    };
    let mins: i32 = value.trim().parse().map_err(|_| err())?;
    if mins.abs() >= 24 * 60 {
        return Err(err());
    }
    FixedOffset::east_opt(mins * 60).ok_or_else(err)
}
