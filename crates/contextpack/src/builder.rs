use ag_domain::config::ContextWindow;
use ag_domain::message::Message;
use ag_domain::turn::Turn;

use crate::prompts;
use crate::report::ContextReport;
use crate::truncation;

/// Newline-join the text of every turn, in the given order.
pub fn join_texts(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Deterministic chat-context builder.
///
/// Pure: accepts already-loaded turns and returns the assembled context plus
/// a machine-readable report. Nothing is read or logged here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextAssembler {
    pub window: ContextWindow,
}

impl ContextAssembler {
    pub fn new(window: ContextWindow) -> Self {
        Self { window }
    }

    /// Join the windowed history (`turns` oldest first) with `"\n"`.
    pub fn assemble(&self, turns: &[Turn]) -> (String, ContextReport) {
        let texts: Vec<&str> = turns.iter().map(|t| t.text.as_str()).collect();
        let windowed = truncation::apply_window(&texts, self.window);
        let context = windowed.texts.join("\n");

        let report = ContextReport {
            turns_total: turns.len(),
            turns_included: windowed.texts.len(),
            context_chars: context.chars().count(),
            windowed: windowed.truncated_front || windowed.texts.len() < turns.len(),
            truncated_front: windowed.truncated_front,
        };
        (context, report)
    }

    /// The three-message sequence for a chat request.
    pub fn chat_messages(system_prompt: &str, context: &str, user_message: &str) -> Vec<Message> {
        vec![
            Message::system(system_prompt),
            Message::user(prompts::context_message(context)),
            Message::user(user_message),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_domain::message::Role;
    use chrono::Utc;

    fn turns(texts: &[&str]) -> Vec<Turn> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Turn {
                id: i as u64 + 1,
                text: (*t).to_owned(),
                created_at: Utc::now(),
            })
            .collect()
    }

    #[test]
    fn all_window_is_plain_join() {
        let history = turns(&["User: a\nAI: b", "saved blob", "User: c\nAI: d"]);
        let (ctx, report) = ContextAssembler::default().assemble(&history);
        assert_eq!(ctx, "User: a\nAI: b\nsaved blob\nUser: c\nAI: d");
        assert_eq!(ctx, join_texts(&history));
        assert_eq!(report.turns_total, 3);
        assert_eq!(report.turns_included, 3);
        assert_eq!(report.context_chars, ctx.chars().count());
        assert!(!report.windowed);
    }

    #[test]
    fn no_turns_gives_empty_context() {
        let (ctx, report) = ContextAssembler::default().assemble(&[]);
        assert_eq!(ctx, "");
        assert_eq!(report.turns_included, 0);
    }

    #[test]
    fn last_turns_window_reports_windowed() {
        let history = turns(&["one", "two", "three"]);
        let (ctx, report) =
            ContextAssembler::new(ContextWindow::LastTurns { count: 2 }).assemble(&history);
        assert_eq!(ctx, "two\nthree");
        assert!(report.windowed);
        assert!(!report.truncated_front);
    }

    #[test]
    fn chat_messages_shape() {
        let msgs = ContextAssembler::chat_messages("sys", "history", "hello");
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[0].role, Role::System);
        assert_eq!(msgs[0].content, "sys");
        assert_eq!(msgs[1].role, Role::User);
        assert_eq!(msgs[1].content, "Context of previous conversations: history");
        assert_eq!(msgs[2].content, "hello");
    }
}
