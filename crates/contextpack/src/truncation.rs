use ag_domain::config::ContextWindow;

/// Texts selected by a window, oldest first.
pub struct Windowed<'a> {
    pub texts: Vec<&'a str>,
    /// The newest text alone exceeded a `max_chars` budget and was cut.
    pub truncated_front: bool,
}

/// Select the history texts that `window` admits.
///
/// `texts` must be in ascending (oldest first) order.
pub fn apply_window<'a>(texts: &[&'a str], window: ContextWindow) -> Windowed<'a> {
    match window {
        ContextWindow::All => Windowed {
            texts: texts.to_vec(),
            truncated_front: false,
        },
        ContextWindow::LastTurns { count } => Windowed {
            texts: texts[texts.len().saturating_sub(count)..].to_vec(),
            truncated_front: false,
        },
        ContextWindow::MaxChars { chars } => fit_newest(texts, chars),
    }
}

/// Keep the longest newest-first suffix whose newline-joined length fits in
/// `max_chars` characters.
fn fit_newest<'a>(texts: &[&'a str], max_chars: usize) -> Windowed<'a> {
    let mut used = 0usize;
    let mut start = texts.len();

    for (idx, text) in texts.iter().enumerate().rev() {
        let sep = usize::from(start != texts.len());
        let len = text.chars().count();
        if used + sep + len > max_chars {
            break;
        }
        used += sep + len;
        start = idx;
    }

    if start == texts.len() {
        // Nothing fits whole: keep the tail of the newest turn.
        return match texts.last() {
            Some(newest) if max_chars > 0 => Windowed {
                texts: vec![tail_chars(newest, max_chars)],
                truncated_front: true,
            },
            _ => Windowed {
                texts: Vec::new(),
                truncated_front: false,
            },
        };
    }

    Windowed {
        texts: texts[start..].to_vec(),
        truncated_front: false,
    }
}

/// The last `max_chars` characters of `s`.
pub fn tail_chars(s: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }
    match s.char_indices().rev().nth(max_chars - 1) {
        Some((start, _)) => &s[start..],
        None => s,
    }
}
