//! Reminder repository: one date-independent list per identity.
//!
//! # Responsibility
//! - Provide load/add/remove over the per-identity reminder list.
//! - Keep the stored JSON layout stable (`reminders:{identityId}`).
//!
//! # Invariants
//! - Reminders keep insertion order.
//! - Text is trimmed before persistence; blank text never reaches storage.

use crate::model::entry::ReminderEntry;
use crate::model::identity::Identity;
use crate::store::keys::reminders_key;
use crate::store::{KeyedStore, StoreError};
use crate::time::{next_entry_id, Clock};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ReminderResult<T> = Result<T, ReminderError>;

/// Errors from reminder persistence and validation.
#[derive(Debug)]
pub enum ReminderError {
    /// Reminder text is blank after trim.
    EmptyText,
    /// Persisted list cannot be decoded.
    InvalidData(String),
    /// Substrate failure.
    Store(StoreError),
}

impl Display for ReminderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "reminder text must not be blank"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted reminder data: {message}")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReminderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ReminderError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Reminder repository over a keyed store.
pub struct ReminderRepository<'a, S: KeyedStore, C: Clock> {
    store: &'a mut S,
    clock: &'a C,
}

impl<'a, S: KeyedStore, C: Clock> ReminderRepository<'a, S, C> {
    pub fn new(store: &'a mut S, clock: &'a C) -> Self {
        Self { store, clock }
    }

    /// Loads the identity's reminders in insertion order.
    pub fn load(&self, identity: &Identity) -> ReminderResult<Vec<ReminderEntry>> {
        let key = reminders_key(&identity.id);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|err| {
            ReminderError::InvalidData(format!("list `{key}` is not a reminder array: {err}"))
        })
    }

    /// Appends one reminder with trimmed text.
    pub fn add(&mut self, identity: &Identity, text: &str) -> ReminderResult<ReminderEntry> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ReminderError::EmptyText);
        }

        let mut reminders = self.load(identity)?;
        let entry = ReminderEntry {
            id: next_entry_id(self.clock),
            text: trimmed.to_string(),
        };
        reminders.push(entry.clone());
        self.persist(identity, &reminders)?;
        Ok(entry)
    }

    /// Removes the reminder with `entry_id` when present.
    ///
    /// Absent ids are a no-op, not an error.
    pub fn remove(&mut self, identity: &Identity, entry_id: i64) -> ReminderResult<()> {
        let mut reminders = self.load(identity)?;
        reminders.retain(|entry| entry.id != entry_id);
        self.persist(identity, &reminders)
    }

    fn persist(&mut self, identity: &Identity, reminders: &[ReminderEntry]) -> ReminderResult<()> {
        let payload = serde_json::to_string(reminders)
            .map_err(|err| ReminderError::InvalidData(err.to_string()))?;
        self.store.set(&reminders_key(&identity.id), &payload)?;
        Ok(())
    }
}
