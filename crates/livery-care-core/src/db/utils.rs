//! Column conversion helpers shared by the query modules.

use std::{fmt::Display, str::FromStr};

use rusqlite::{Row, types::Type};

/// Reads a TEXT column and parses it, reporting parse failures as
/// conversion errors on that column.
pub(crate) fn parse_text<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let text: String = row.get(idx)?;
    text.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            format!("Invalid value '{text}': {e}").into(),
        )
    })
}

/// Like [`parse_text`] for nullable columns.
pub(crate) fn parse_optional_text<T>(row: &Row, idx: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let text: Option<String> = row.get(idx)?;
    text.map(|text| {
        text.parse::<T>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                Type::Text,
                format!("Invalid value '{text}': {e}").into(),
            )
        })
    })
    .transpose()
}
