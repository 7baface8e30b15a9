//! Serde helpers for the looser corners of ion's JSON.

use serde::{Deserialize, Deserializer, Serializer};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

/// Ids arrive as JSON numbers for assets and as strings for tokens.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScopeList {
    List(Vec<String>),
    Joined(String),
}

/// Scopes arrive either as an array or as one comma separated string.
pub(crate) fn scopes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ScopeList::deserialize(deserializer)? {
        ScopeList::List(v) => v,
        ScopeList::Joined(s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

/// Optional ISO-8601 timestamps. A value that does not parse is treated as
/// absent rather than failing the whole record.
pub(crate) mod iso_datetime {
    use super::*;

    pub(crate) fn serialize<S>(value: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => {
                let s = dt.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
                serializer.serialize_some(&s)
            }
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|s| parse_lenient(&s)))
    }

    pub(crate) fn parse_lenient(s: &str) -> Option<OffsetDateTime> {
        match OffsetDateTime::parse(s, &Rfc3339) {
            Ok(dt) => Some(dt),
            Err(err) => {
                tracing::debug!(value = s, error = %err, "ignoring unparseable timestamp");
                None
            }
        }
    }
}
