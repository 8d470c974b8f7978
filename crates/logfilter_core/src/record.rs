// record.rs: accepted log line
use std::fmt;
use std::net::IpAddr;

use serde::Serialize;

use crate::error::LineError;
use crate::filter::PrivateRanges;

/// The five fields kept from an accepted log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    timestamp: String,
    source_address: IpAddr,
    source_port: i64,
    destination_address: IpAddr,
    destination_port: i64,
}

impl Record {
    /// Build a record, refusing a destination that falls inside `private`.
    pub fn new(
        timestamp: impl Into<String>,
        source_address: IpAddr,
        source_port: i64,
        destination_address: IpAddr,
        destination_port: i64,
        private: &PrivateRanges,
    ) -> Result<Self, LineError> {
        if private.contains(&destination_address) {
            return Err(LineError::PrivateDestination(destination_address));
        }
        Ok(Self {
            timestamp: timestamp.into(),
            source_address,
            source_port,
            destination_address,
            destination_port,
        })
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn source_address(&self) -> IpAddr {
        self.source_address
    }

    pub fn source_port(&self) -> i64 {
        self.source_port
    }

    pub fn destination_address(&self) -> IpAddr {
        self.destination_address
    }

    pub fn destination_port(&self) -> i64 {
        self.destination_port
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time: {}", self.timestamp)?;
        writeln!(f, "Source IP: {}", self.source_address)?;
        writeln!(f, "Source Port: {}", self.source_port)?;
        writeln!(f, "Destination IP: {}", self.destination_address)?;
        writeln!(f, "Destination Port: {}", self.destination_port)
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::error::LineError;
    use crate::filter::PrivateRanges;

    fn sample() -> Record {
        Record::new(
            "12:00:01",
            "8.8.8.8".parse().unwrap(),
            5000,
            "1.1.1.1".parse().unwrap(),
            443,
            &PrivateRanges::rfc1918(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_refuses_private_destination() {
        let ranges = PrivateRanges::rfc1918();
        for dst in ["192.168.1.1", "10.0.0.1", "172.20.0.1"] {
            let got = Record::new("t", "8.8.8.8".parse().unwrap(), 1, dst.parse().unwrap(), 2, &ranges);
            assert_eq!(got, Err(LineError::PrivateDestination(dst.parse().unwrap())));
        }
        // A private source is fine
        let rec = Record::new("t", "10.0.0.1".parse().unwrap(), 1, "1.1.1.1".parse().unwrap(), 2, &ranges)
            .unwrap();
        assert!(!ranges.contains(&rec.destination_address()));
    }

    #[test]
    fn test_display_block() {
        assert_eq!(
            sample().to_string(),
            "Time: 12:00:01\nSource IP: 8.8.8.8\nSource Port: 5000\nDestination IP: 1.1.1.1\nDestination Port: 443\n"
        );
    }

    #[test]
    fn test_serialize_shape() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["timestamp"], "12:00:01");
        assert_eq!(v["source_address"], "8.8.8.8");
        assert_eq!(v["source_port"], 5000);
        assert_eq!(v["destination_address"], "1.1.1.1");
        assert_eq!(v["destination_port"], 443);
    }
}
