//! Общие типы потока статусов: wire-формат записи, трейт получателя
//! и ошибки. Без зависимости от tokio.

pub mod error;
mod listener;
mod record;

pub use error::{ErrorKind, ListenerError, RecordError};
pub use listener::StatusListener;
pub use record::{
    CREATED_AT_FORMAT, StatusRecord, WireStatus, WireUser,
    format_created_at, parse_created_at,
};
