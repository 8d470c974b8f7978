// logfilter_core: parse Check Point firewall log lines, drop private destinations, sort by key.
pub mod error;
pub mod filter;
pub mod parser;
pub mod record;
pub mod schema;
pub mod sort;
pub mod tokenizer;

pub use error::LineError;
pub use filter::PrivateRanges;
pub use parser::{LineParser, DEFAULT_DELIMITER};
pub use record::Record;
pub use schema::{layout_help, FieldRole, FIELD_LAYOUT, REQUIRED_FIELDS};
pub use sort::{sort_records, Comparator, SortKey, DEFAULT_SORT_KEY};
pub use tokenizer::split_fields;
