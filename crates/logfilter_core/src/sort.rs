// sort.rs: order records by a named key
use std::cmp::Ordering;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::record::Record;

pub type Comparator = fn(&Record, &Record) -> Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Time,
    SourceAddress,
    SourcePort,
    DestinationAddress,
    DestinationPort,
}

pub const DEFAULT_SORT_KEY: &str = "time";

// Addresses compare by their textual form, so "10.0.0.2" sorts before "9.0.0.1".
fn by_time(a: &Record, b: &Record) -> Ordering {
    a.timestamp().cmp(b.timestamp())
}
fn by_source_address(a: &Record, b: &Record) -> Ordering {
    a.source_address().to_string().cmp(&b.source_address().to_string())
}
fn by_source_port(a: &Record, b: &Record) -> Ordering {
    a.source_port().cmp(&b.source_port())
}
fn by_destination_address(a: &Record, b: &Record) -> Ordering {
    a.destination_address().to_string().cmp(&b.destination_address().to_string())
}
fn by_destination_port(a: &Record, b: &Record) -> Ordering {
    a.destination_port().cmp(&b.destination_port())
}

static KEYS: Lazy<HashMap<&'static str, SortKey>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("time", SortKey::Time);
    m.insert("srcip", SortKey::SourceAddress);
    m.insert("srcport", SortKey::SourcePort);
    m.insert("dstip", SortKey::DestinationAddress);
    m.insert("dstport", SortKey::DestinationPort);
    m
});

impl SortKey {
    pub fn from_name(name: &str) -> Option<SortKey> {
        KEYS.get(name).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            SortKey::Time => "time",
            SortKey::SourceAddress => "srcip",
            SortKey::SourcePort => "srcport",
            SortKey::DestinationAddress => "dstip",
            SortKey::DestinationPort => "dstport",
        }
    }

    pub fn comparator(self) -> Comparator {
        match self {
            SortKey::Time => by_time,
            SortKey::SourceAddress => by_source_address,
            SortKey::SourcePort => by_source_port,
            SortKey::DestinationAddress => by_destination_address,
            SortKey::DestinationPort => by_destination_port,
        }
    }
}

/// Stable in-place sort by the key called `key_name`.
///
/// Returns `false` and leaves `records` untouched when the name is not one of
/// `time`, `srcip`, `srcport`, `dstip` or `dstport`.
pub fn sort_records(records: &mut [Record], key_name: &str) -> bool {
    match SortKey::from_name(key_name) {
        Some(key) => {
            debug!(key = key.name(), count = records.len(), "sorting records");
            records.sort_by(key.comparator());
            true
        }
        None => false,
    }
}
