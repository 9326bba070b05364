use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Context window
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContextConfig {
    #[serde(default)]
    pub window: ContextWindow,
}

/// Which stored turns are fed to the model as history.
///
/// `All` grows without bound as history accumulates and will eventually
/// exceed any context-length-limited model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ContextWindow {
    #[default]
    All,
    /// Only the most recent `count` turns.
    LastTurns { count: usize },
    /// The most recent turns whose joined text fits in `chars` characters.
    MaxChars { chars: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_all() {
        let cfg: ContextConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.window, ContextWindow::All);
    }

    #[test]
    fn window_parses_tagged() {
        let cfg: ContextConfig = toml::from_str(
            r#"
            [window]
            mode = "last_turns"
            count = 20
        "#,
        )
        .unwrap();
        assert_eq!(cfg.window, ContextWindow::LastTurns { count: 20 });

        let cfg: ContextConfig =
            toml::from_str(r#"window = { mode = "max_chars", chars = 8000 }"#).unwrap();
        assert_eq!(cfg.window, ContextWindow::MaxChars { chars: 8000 });
    }
}
