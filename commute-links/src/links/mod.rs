//! Outbound timetable link generation.
//!
//! Everything here is a pure function of the configured commute and a
//! clock reading passed in by the caller.

mod bus;
mod train;

pub use bus::{DEFAULT_BUS_HOST, bus_link, bus_link_at};
pub use train::{DEFAULT_TRAIN_HOST, TrainRoute, train_link};

use chrono::NaiveDateTime;

use crate::config::{BusPair, CommuteConfig, ConfigError};
use crate::domain::{
    Direction, LinkBoard, LinkEntry, RevisionStatus, StopId, StopRegistry, TransitMode,
};

/// Resolved bus stops for one direction.
#[derive(Debug, Clone)]
struct BusStops {
    from: StopId,
    to: StopId,
}

/// Generates the train and bus links for both directions.
///
/// Stop names are resolved against the registry once, at construction, so
/// generating links cannot fail.
#[derive(Debug, Clone)]
pub struct LinkGenerator {
    outbound_train_base: String,
    return_train_base: String,
    bus_host: String,
    outbound_bus: BusStops,
    return_bus: BusStops,
    revision: RevisionStatus,
}

impl LinkGenerator {
    /// Build a generator, resolving bus stop names.
    pub fn from_config(config: &CommuteConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            outbound_train_base: config.train.base_url(Direction::Outbound),
            return_train_base: config.train.base_url(Direction::Return),
            bus_host: config.bus_host.clone(),
            outbound_bus: resolve(&config.stops, &config.outbound_bus, Direction::Outbound)?,
            return_bus: resolve(&config.stops, &config.return_bus, Direction::Return)?,
            revision: config.revision,
        })
    }

    /// Train timetable URL for a direction on the date of `now`.
    pub fn train_link(&self, direction: Direction, now: NaiveDateTime) -> String {
        let base = match direction {
            Direction::Outbound => &self.outbound_train_base,
            Direction::Return => &self.return_train_base,
        };
        train_link(base, now.date())
    }

    /// Bus timetable URL for a direction at the time of `now`.
    pub fn bus_link(&self, direction: Direction, now: NaiveDateTime) -> String {
        let stops = match direction {
            Direction::Outbound => &self.outbound_bus,
            Direction::Return => &self.return_bus,
        };
        bus_link_at(
            &self.bus_host,
            &stops.from,
            &stops.to,
            self.revision,
            now.time(),
        )
    }

    /// The links for one direction: train first, then bus.
    pub fn entries(&self, direction: Direction, now: NaiveDateTime) -> Vec<LinkEntry> {
        vec![
            LinkEntry::new(
                TransitMode::Train,
                direction,
                self.train_link(direction, now),
            ),
            LinkEntry::new(TransitMode::Bus, direction, self.bus_link(direction, now)),
        ]
    }

    /// Links for both directions from a single clock reading.
    pub fn board(&self, now: NaiveDateTime) -> LinkBoard {
        LinkBoard {
            outbound: self.entries(Direction::Outbound, now),
            return_: self.entries(Direction::Return, now),
        }
    }
}

fn resolve(
    stops: &StopRegistry,
    pair: &BusPair,
    direction: Direction,
) -> Result<BusStops, ConfigError> {
    let lookup = |name: &str| {
        stops
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownStop {
                name: name.to_string(),
                direction,
            })
    };

    Ok(BusStops {
        from: lookup(&pair.from)?,
        to: lookup(&pair.to)?,
    })
}
