use std::path::PathBuf;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Turn store
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding `turns.jsonl`.
    #[serde(default = "d_store_path")]
    pub path: PathBuf,
    /// IANA timezone that defines a "calendar day" for grouping and
    /// daily summaries.
    #[serde(default = "d_timezone")]
    pub timezone: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: d_store_path(),
            timezone: d_timezone(),
        }
    }
}

impl StoreConfig {
    /// Parse `timezone` into a [`Tz`].
    pub fn tz(&self) -> crate::error::Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| crate::error::Error::Config(format!("store.timezone: {e}")))
    }
}

fn d_store_path() -> PathBuf {
    PathBuf::from("./data")
}
fn d_timezone() -> String {
    "UTC".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timezone_parses() {
        assert_eq!(StoreConfig::default().tz().unwrap(), chrono_tz::UTC);
    }

    #[test]
    fn named_timezone_parses() {
        let cfg = StoreConfig {
            timezone: "Europe/Rome".into(),
            ..Default::default()
        };
        assert_eq!(cfg.tz().unwrap(), chrono_tz::Europe::Rome);
    }
}
