//! Fixed prompt and record framings.

use chrono::NaiveDate;

/// The stored form of a completed chat exchange.
pub fn exchange_record(user_message: &str, reply: &str) -> String {
    format!("User: {user_message}\nAI: {reply}")
}

/// The user message carrying prior history into a chat request.
pub fn context_message(context: &str) -> String {
    format!("Context of previous conversations: {context}")
}

/// Instruction asking the model to list future commitments found in
/// `history`, one per line, with relative dates resolved against `today`.
pub fn appointment_prompt(history: &str, today: NaiveDate) -> String {
    format!(
        "Find all future appointments or commitments in the following messages: {history}. \
         Today is {long} ({iso}). \
         Make sure to correctly interpret relative terms such as 'tomorrow', 'next week', \
         'next Sunday', etc., and convert them into specific dates. \
         For example, if the text contains 'tomorrow', interpret it as tomorrow's date; \
         if it contains 'next Sunday', convert it to the date of the coming Sunday. \
         List one commitment per line in the format: \
         'Weekday Day Month Year - Time - Description of the commitment'. \
         Example output: \
         'Wed 18 Sep 2024 - 10:00 - Call Francesca', \
         'Thu 19 Sep 2024 - 09:00 - Mow the lawn'. \
         If you cannot find a specific date, still try to infer the commitment from the context.",
        long = today.format("%A %d %B %Y"),
        iso = today.format("%Y-%m-%d"),
    )
}

/// Instruction asking the model to summarize `content`.
pub fn summary_prompt(content: &str) -> String {
    format!("Summarize the following content: {content}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_record_format() {
        assert_eq!(
            exchange_record("Dentist Tuesday", "Noted."),
            "User: Dentist Tuesday\nAI: Noted."
        );
    }

    #[test]
    fn appointment_prompt_carries_history_and_date() {
        let today = NaiveDate::from_ymd_opt(2024, 9, 17).unwrap();
        let prompt = appointment_prompt("call mom tomorrow", today);
        assert!(prompt.contains("following messages: call mom tomorrow."));
        assert!(prompt.contains("Today is Tuesday 17 September 2024 (2024-09-17)"));
        assert!(prompt.contains("Weekday Day Month Year - Time - Description"));
    }

    #[test]
    fn summary_prompt_prefix() {
        assert_eq!(
            summary_prompt("a\nb"),
            "Summarize the following content: a\nb"
        );
    }
}
