//! Appointment extraction over the full history.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use ag_contextpack::{join_texts, prompts};
use ag_domain::message::Message;
use ag_domain::trace::TraceEvent;
use ag_providers::Credential;

use crate::error::ApiError;
use crate::state::AppState;

/// Shown in place of a list when the model reports nothing.
pub const NO_APPOINTMENTS: &str = "No appointments found.";

/// The distinct appointment lines the model produced.
///
/// Serializes as a JSON array of strings, or as the [`NO_APPOINTMENTS`]
/// sentinel string when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentList {
    NoneFound,
    Found(Vec<String>),
}

impl AppointmentList {
    pub fn len(&self) -> usize {
        match self {
            AppointmentList::NoneFound => 0,
            AppointmentList::Found(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for AppointmentList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AppointmentList::NoneFound => serializer.serialize_str(NO_APPOINTMENTS),
            AppointmentList::Found(items) => items.serialize(serializer),
        }
    }
}

/// Split a model reply into trimmed, non-empty, distinct lines.
///
/// Lines are compared exactly after trimming; the first occurrence wins and
/// keeps its position. No date parsing happens here.
pub fn parse_appointments(response: &str) -> AppointmentList {
    let mut seen = std::collections::HashSet::new();
    let items: Vec<String> = response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .map(str::to_owned)
        .collect();

    if items.is_empty() {
        AppointmentList::NoneFound
    } else {
        AppointmentList::Found(items)
    }
}

/// Ask the model for every future commitment mentioned in the history.
pub async fn find_appointments(
    state: &AppState,
    credential: &Credential,
    today: NaiveDate,
) -> Result<AppointmentList, ApiError> {
    let history = state.turns.list_ascending().await?;
    let prompt = prompts::appointment_prompt(&join_texts(&history), today);

    let response = state
        .gateway
        .generate(vec![Message::user(prompt)], credential)
        .await
        .into_result()?;

    let list = parse_appointments(&response);
    TraceEvent::AppointmentsExtracted {
        raw_lines: response.lines().count(),
        unique: list.len(),
    }
    .emit();
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_and_blank_lines_collapse() {
        let reply = "Wed 18 Sep 2024 - 10:00 - Call Francesca\n\n  \nWed 18 Sep 2024 - 10:00 - Call Francesca  \n";
        assert_eq!(
            parse_appointments(reply),
            AppointmentList::Found(vec!["Wed 18 Sep 2024 - 10:00 - Call Francesca".into()])
        );
    }

    #[test]
    fn first_seen_order_is_kept() {
        let reply = "b\na\nb\nc\na";
        assert_eq!(
            parse_appointments(reply),
            AppointmentList::Found(vec!["b".into(), "a".into(), "c".into()])
        );
    }

    #[test]
    fn no_lines_is_none_found() {
        assert_eq!(parse_appointments(""), AppointmentList::NoneFound);
        assert_eq!(parse_appointments("\n \n\t\n"), AppointmentList::NoneFound);
        assert!(AppointmentList::NoneFound.is_empty());
    }

    #[test]
    fn serializes_as_list_or_sentinel() {
        let found = AppointmentList::Found(vec!["x".into(), "y".into()]);
        assert_eq!(serde_json::to_string(&found).unwrap(), r#"["x","y"]"#);
        assert_eq!(
            serde_json::to_string(&AppointmentList::NoneFound).unwrap(),
            r#""No appointments found.""#
        );
    }

    #[test]
    fn crlf_replies_are_handled() {
        assert_eq!(
            parse_appointments("one\r\ntwo\r\none\r\n"),
            AppointmentList::Found(vec!["one".into(), "two".into()])
        );
    }
}
