//! Read-side views over the turn log: the date-grouped chat listing and
//! same-day selection.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use ag_domain::turn::Turn;

/// Characters of turn text shown in a listing entry.
pub const SNIPPET_CHARS: usize = 30;

/// One entry of the chat listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatListing {
    pub id: u64,
    pub snippet: String,
}

/// Turns grouped by local calendar date, in the order the dates were first
/// seen. Serializes as a JSON object keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateGroups(pub Vec<(NaiveDate, Vec<ChatListing>)>);

impl DateGroups {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&[ChatListing]> {
        self.0
            .iter()
            .find(|(d, _)| *d == date)
            .map(|(_, entries)| entries.as_slice())
    }
}

impl Serialize for DateGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (date, entries) in &self.0 {
            map.serialize_entry(&date.format("%Y-%m-%d").to_string(), entries)?;
        }
        map.end()
    }
}

/// Group `turns` by their date in `tz`, keeping the input order both across
/// and within groups. Pass turns newest first to get a newest-first listing.
pub fn group_by_date(turns: &[Turn], tz: Tz) -> DateGroups {
    let mut groups: Vec<(NaiveDate, Vec<ChatListing>)> = Vec::new();
    for turn in turns {
        let date = turn.local_date(tz);
        let entry = ChatListing {
            id: turn.id,
            snippet: turn.snippet(SNIPPET_CHARS).to_owned(),
        };
        match groups.iter_mut().find(|(d, _)| *d == date) {
            Some((_, entries)) => entries.push(entry),
            None => groups.push((date, vec![entry])),
        }
    }
    DateGroups(groups)
}

/// The turns whose local date in `tz` is `date`, in input order.
pub fn turns_on(turns: &[Turn], date: NaiveDate, tz: Tz) -> Vec<Turn> {
    turns
        .iter()
        .filter(|t| t.local_date(tz) == date)
        .cloned()
        .collect()
}
