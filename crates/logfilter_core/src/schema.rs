// schema.rs: fixed field layout of the Check Point Firewall Blade export
use std::fmt::Write;

/// What the parser does with the value found at a given field index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Timestamp,
    SourceAddress,
    SourcePort,
    DestinationAddress,
    DestinationPort,
    Ignored,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub role: FieldRole,
}

const fn field(name: &'static str, role: FieldRole) -> FieldDef {
    FieldDef { name, role }
}

/// Layout of a fw1-loggrabber line, one entry per index.
pub static FIELD_LAYOUT: [FieldDef; 16] = [
    field("time", FieldRole::Timestamp),
    field("action", FieldRole::Ignored),
    field("fw gateway", FieldRole::Ignored),
    field("inzone", FieldRole::Ignored),
    field("outzone", FieldRole::Ignored),
    field("rule number", FieldRole::Ignored),
    field("rule name", FieldRole::Ignored),
    field("service_id", FieldRole::Ignored),
    field("src ip", FieldRole::SourceAddress),
    field("src port", FieldRole::SourcePort),
    field("dst ip", FieldRole::DestinationAddress),
    field("dst port", FieldRole::DestinationPort),
    field("protocol", FieldRole::Ignored),
    field("src machine name", FieldRole::Ignored),
    field("snid", FieldRole::Ignored),
    field("dst machine name", FieldRole::Ignored),
];

/// Minimum number of fields a line needs so that every consumed index exists.
pub const REQUIRED_FIELDS: usize = 12;

/// Indices whose role is not `Ignored`, paired with the role.
pub fn consumed_fields() -> impl Iterator<Item = (usize, FieldRole)> {
    FIELD_LAYOUT
        .iter()
        .enumerate()
        .filter(|(_, f)| f.role != FieldRole::Ignored)
        .map(|(i, f)| (i, f.role))
}

/// Render the layout as the "expected format" block of the usage text.
pub fn layout_help() -> String {
    let mut out = String::from("File Format: Firewall Blade\n");
    for (i, f) in FIELD_LAYOUT.iter().enumerate() {
        let _ = writeln!(out, "{}: {}", i, f.name);
    }
    out
}
