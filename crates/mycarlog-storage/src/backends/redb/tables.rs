//! Key encoding for logical tables inside one physical redb table.
//!
//! Redb table definitions are static, while the store works with a
//! handful of logical collections. All pairs live in one physical table
//! and carry their logical table name as a key prefix, separated by a
//! zero byte. Table names are fixed snake_case identifiers, so the
//! separator can never appear inside a name.

use redb::TableDefinition;

/// The physical table holding every logical table's pairs.
pub const DATA_TABLE: TableDefinition<'static, &'static [u8], &'static [u8]> =
    TableDefinition::new("mycarlog_data");

/// Separator byte between table name and key.
pub const KEY_SEPARATOR: u8 = 0x00;

/// Encode a logical table name and key into a physical key:
/// `<table><separator><key>`.
#[must_use]
pub fn encode_key(table: &str, key: &[u8]) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(table.len() + 1 + key.len());
    encoded.extend_from_slice(table.as_bytes());
    encoded.push(KEY_SEPARATOR);
    encoded.extend_from_slice(key);
    encoded
}

/// Split a physical key back into its logical table name and key.
///
/// Returns `None` if the separator is missing or the name is not UTF-8.
#[must_use]
pub fn decode_key(encoded: &[u8]) -> Option<(&str, &[u8])> {
    let sep = encoded.iter().position(|&b| b == KEY_SEPARATOR)?;
    let table = std::str::from_utf8(&encoded[..sep]).ok()?;
    Some((table, &encoded[sep + 1..]))
}

/// The half-open physical key range `[start, end)` covering every key of
/// one logical table.
#[must_use]
pub fn table_range(table: &str) -> (Vec<u8>, Vec<u8>) {
    let mut start = Vec::with_capacity(table.len() + 1);
    start.extend_from_slice(table.as_bytes());
    start.push(KEY_SEPARATOR);

    let mut end = Vec::with_capacity(table.len() + 1);
    end.extend_from_slice(table.as_bytes());
    end.push(KEY_SEPARATOR + 1);

    (start, end)
}
