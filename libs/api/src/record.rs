use std::borrow::Cow;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Формат `created_at` (`EEE MMM dd HH:mm:ss zzz yyyy`).
///
/// Время всегда в UTC, названия дней и месяцев английские — downstream
/// парсер ожидает строку буквально в таком виде.
pub const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S UTC %Y";

pub fn format_created_at(ts: &DateTime<Utc>) -> String {
    ts.format(CREATED_AT_FORMAT).to_string()
}

pub fn parse_created_at(s: &str) -> Result<DateTime<Utc>, RecordError> {
    NaiveDateTime::parse_from_str(s, CREATED_AT_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| RecordError::CreatedAt { value: s.to_string(), source })
}

// ════════════════════════════════════════════════════════════════
//  Wire shape
// ════════════════════════════════════════════════════════════════

/// Статус в wire-формате: все значения строками, порядок полей фиксирован.
///
/// ```text
/// {"created_at":"...","id":"...","text":"...","user":{"id":"..."}}
/// ```
///
/// Сериализация идёт через serde, поэтому значения экранируются
/// и не влияют друг на друга.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireStatus<'a> {
    pub created_at: Cow<'a, str>,
    pub id: Cow<'a, str>,
    pub text: Cow<'a, str>,
    pub user: WireUser<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireUser<'a> {
    pub id: Cow<'a, str>,
}

impl<'a> WireStatus<'a> {
    pub fn new(created_at: &'a str, id: &'a str, text: &'a str, user_id: &'a str) -> Self {
        Self {
            created_at: Cow::Borrowed(created_at),
            id: Cow::Borrowed(id),
            text: Cow::Borrowed(text),
            user: WireUser { id: Cow::Borrowed(user_id) },
        }
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }
}

// ════════════════════════════════════════════════════════════════
//  StatusRecord
// ════════════════════════════════════════════════════════════════

/// Распарсенный статус — то, что получает `StatusListener`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireStatus<'static>", into = "WireStatus<'static>")]
pub struct StatusRecord {
    pub created_at: DateTime<Utc>,
    pub id: u64,
    pub text: String,
    pub user_id: u64,
}

impl StatusRecord {
    /// Распарсить и провалидировать статус из wire JSON.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let wire: WireStatus<'_> = serde_json::from_str(json)?;
        Self::try_from(wire)
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// `created_at` в wire-формате.
    pub fn created_at_text(&self) -> String {
        format_created_at(&self.created_at)
    }
}

fn parse_id(field: &'static str, value: &str) -> Result<u64, RecordError> {
    let bad = || RecordError::Id { field, value: value.to_string() };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    value.parse().map_err(|_| bad())
}

impl<'a> TryFrom<WireStatus<'a>> for StatusRecord {
    type Error = RecordError;

    fn try_from(wire: WireStatus<'a>) -> Result<Self, Self::Error> {
        Ok(Self {
            created_at: parse_created_at(&wire.created_at)?,
            id: parse_id("id", &wire.id)?,
            text: wire.text.into_owned(),
            user_id: parse_id("user.id", &wire.user.id)?,
        })
    }
}

impl From<StatusRecord> for WireStatus<'static> {
    fn from(record: StatusRecord) -> Self {
        Self {
            created_at: Cow::Owned(format_created_at(&record.created_at)),
            id: Cow::Owned(record.id.to_string()),
            text: Cow::Owned(record.text),
            user: WireUser { id: Cow::Owned(record.user_id.to_string()) },
        }
    }
}
