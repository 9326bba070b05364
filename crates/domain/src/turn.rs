//! The stored conversation turn.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// One immutable record in the turn log.
///
/// `text` is opaque to the store: it is either a raw chat blob saved by a
/// client or a synthesized `"User: …\nAI: …"` exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub id: u64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    /// The first `max_chars` characters of the text (not bytes).
    pub fn snippet(&self, max_chars: usize) -> &str {
        match self.text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }

    /// Calendar date of `created_at` as seen in `tz`.
    pub fn local_date(&self, tz: Tz) -> NaiveDate {
        self.created_at.with_timezone(&tz).date_naive()
    }
}
