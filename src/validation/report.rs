//! Field identifiers and the aggregated failure report.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::i18n::{Locale, MessageKey, Translator};

/// Validated input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    /// Declaration order, used for both evaluation and report iteration.
    pub const ALL: [Field; 3] = [Field::Username, Field::Email, Field::Password];

    /// Wire name of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Aggregated validation failures, one message key per failing field.
///
/// Entries keep the order they were inserted in; the aggregator inserts
/// in [`Field::ALL`] order, so fields that passed are simply absent. An
/// empty collection means validation succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(Field, MessageKey)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for a field. Only the first key per field is
    /// kept, matching the rule chain's bail semantics.
    pub fn insert(&mut self, field: Field, key: MessageKey) {
        if !self.entries.iter().any(|(f, _)| *f == field) {
            self.entries.push((field, key));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, MessageKey)> + '_ {
        self.entries.iter().copied()
    }

    /// Resolve every message key for the requested locale.
    pub fn localize(&self, translator: &dyn Translator, locale: Locale) -> FieldErrorReport {
        FieldErrorReport {
            entries: self
                .entries
                .iter()
                .map(|(field, key)| (*field, translator.translate(*key, locale)))
                .collect(),
        }
    }
}

/// Localized form of [`FieldErrors`], ready for the response body.
///
/// Serializes as a JSON object whose keys preserve the field
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrorReport {
    entries: Vec<(Field, String)>,
}

impl FieldErrorReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Localized message for a field, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }
}

impl Serialize for FieldErrorReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field.as_str(), message)?;
        }
        map.end()
    }
}
