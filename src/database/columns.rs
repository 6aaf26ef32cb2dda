use rusqlite::types::Type;
use serde::de::DeserializeOwned;

/// Reads a text column into a domain enum through its storage parser.
pub fn text_enum<T>(
    row: &rusqlite::Row,
    idx: usize,
    parse: fn(&str) -> Option<T>,
) -> rusqlite::Result<T> {
    let value: String = row.get(idx)?;
    parse(&value).ok_or_else(|| conversion_error(idx, format!("unknown value '{}'", value)))
}

pub fn optional_text_enum<T>(
    row: &rusqlite::Row,
    idx: usize,
    parse: fn(&str) -> Option<T>,
) -> rusqlite::Result<Option<T>> {
    let value: Option<String> = row.get(idx)?;
    match value {
        Some(v) => parse(&v)
            .map(Some)
            .ok_or_else(|| conversion_error(idx, format!("unknown value '{}'", v))),
        None => Ok(None),
    }
}

/// Reads a JSON-encoded text column.
pub fn json_column<T: DeserializeOwned>(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<T> {
    let value: String = row.get(idx)?;
    serde_json::from_str(&value).map_err(|e| conversion_error(idx, e.to_string()))
}

fn conversion_error(idx: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, message.into())
}
