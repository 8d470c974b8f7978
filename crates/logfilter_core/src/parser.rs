// parser.rs: map a delimited firewall log line to a Record using the field layout
use std::net::IpAddr;

use crate::error::LineError;
use crate::filter::PrivateRanges;
use crate::record::Record;
use crate::schema::{consumed_fields, FieldRole, REQUIRED_FIELDS};
use crate::tokenizer::split_fields;

pub const DEFAULT_DELIMITER: char = ';';

#[derive(Debug, Clone)]
pub struct LineParser {
    delimiter: char,
    private: PrivateRanges,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER, PrivateRanges::rfc1918())
    }
}

impl LineParser {
    pub fn new(delimiter: char, private: PrivateRanges) -> Self {
        Self { delimiter, private }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Parse one line. Either every consumed field is valid and a Record is
    /// returned, or the first failing field decides the error.
    pub fn parse(&self, line: &str) -> Result<Record, LineError> {
        let fields = split_fields(line, self.delimiter);
        if fields.len() < REQUIRED_FIELDS {
            return Err(LineError::MissingFields { found: fields.len(), required: REQUIRED_FIELDS });
        }

        let mut timestamp = "";
        let mut source = None;
        let mut source_port = 0;
        let mut destination = None;
        let mut destination_port = 0;

        for (idx, role) in consumed_fields() {
            let value = fields[idx];
            match role {
                FieldRole::Timestamp => timestamp = value,
                FieldRole::SourceAddress => {
                    let ip = parse_address(value)
                        .ok_or_else(|| LineError::InvalidSourceAddress(value.to_string()))?;
                    source = Some(ip);
                }
                FieldRole::SourcePort => source_port = parse_port(value),
                FieldRole::DestinationAddress => {
                    let ip = parse_address(value)
                        .ok_or_else(|| LineError::InvalidDestinationAddress(value.to_string()))?;
                    destination = Some(ip);
                }
                FieldRole::DestinationPort => destination_port = parse_port(value),
                FieldRole::Ignored => {}
            }
        }

        let (Some(source), Some(destination)) = (source, destination) else {
            return Err(LineError::MissingFields { found: fields.len(), required: REQUIRED_FIELDS });
        };
        // Record::new rejects private destinations
        Record::new(timestamp, source, source_port, destination, destination_port, &self.private)
    }
}

/// IPv4-mapped IPv6 addresses are folded to plain IPv4 so that range checks
/// and textual ordering see the dotted form.
fn parse_address(value: &str) -> Option<IpAddr> {
    let ip: IpAddr = value.parse().ok()?;
    Some(match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map(IpAddr::V4).unwrap_or(ip),
        v4 => v4,
    })
}

// Malformed ports are not an error; they read as zero.
fn parse_port(value: &str) -> i64 {
    value.parse().unwrap_or(0)
}
