//! Context assembler - turns a follow-up query plus recent history into
//! the effective prompt text sent to the response generator.
//!
//! Pure string-in/string-out logic: no I/O, no clock, independently
//! testable against literal history fixtures.

use crate::session::{ConversationMessage, MessageRole};

/// How many history entries (3 exchanges) feed the context block.
const CONTEXT_WINDOW: usize = 6;

/// How many characters of an assistant answer are quoted back.
const RESPONSE_PREVIEW_CHARS: usize = 200;

/// Openers that signal a follow-up variation of the previous question.
const FOLLOW_UP_OPENERS: [&str; 3] = ["what about", "how about", "and"];

/// School names recognized by the "same question, different school"
/// heuristic. Fixed configuration, not runtime state.
const SCHOOL_TOKENS: [&str; 8] = [
    "ucla", "usc", "berkeley", "ucsd", "sdsu", "cal poly", "csun", "sjsu",
];

/// Builds the effective query text for a (possibly follow-up) question.
///
/// Policy:
/// 1. Fewer than 2 history entries: the query is returned unchanged.
/// 2. Otherwise the last 6 entries become context lines.
/// 3. A follow-up that names a different school gets an explicit
///    instruction to repeat the prior category of information for the
///    newly named school.
/// 4. Any other query with context lines gets a generic build-on-previous
///    instruction.
/// 5. No recognizable context lines: the query is returned unchanged.
pub fn build_context(current_query: &str, history: &[ConversationMessage]) -> String {
    if history.len() < 2 {
        return current_query.to_string();
    }

    let window_start = history.len().saturating_sub(CONTEXT_WINDOW);
    let context_lines: Vec<String> = history[window_start..]
        .iter()
        .map(context_line)
        .collect();

    if context_lines.is_empty() {
        return current_query.to_string();
    }

    let context_block = context_lines.join("\n");

    if is_school_follow_up(current_query, history) {
        format!(
            "Previous conversation context:\n{context_block}\n\n\
             Current question: {current_query}\n\n\
             The student is asking the same kind of question about a different school. \
             Provide the same category of information you gave before, now for the school \
             named in the current question."
        )
    } else {
        format!(
            "Previous conversation context:\n{context_block}\n\n\
             Current question: {current_query}\n\n\
             Answer the current question, building on the previous discussion where relevant."
        )
    }
}

/// Renders one history entry as a context line.
fn context_line(message: &ConversationMessage) -> String {
    match message.role {
        MessageRole::User => format!("Student previously asked: {}", message.content),
        MessageRole::Assistant => {
            let speaker = message
                .specialist
                .map(|s| s.display_name())
                .unwrap_or("Counselor");
            let preview: String = message
                .content
                .chars()
                .take(RESPONSE_PREVIEW_CHARS)
                .collect();
            format!("{} responded: {}...", speaker, preview)
        }
    }
}

/// Detects a "same question, different school" follow-up: the query opens
/// like a variation, names a known school, and there is a prior user
/// question to vary.
fn is_school_follow_up(current_query: &str, history: &[ConversationMessage]) -> bool {
    let query_lower = current_query.to_lowercase();

    let opens_as_follow_up = FOLLOW_UP_OPENERS
        .iter()
        .any(|opener| query_lower.starts_with(opener));
    if !opens_as_follow_up {
        return false;
    }

    let names_school = SCHOOL_TOKENS
        .iter()
        .any(|school| query_lower.contains(school));
    if !names_school {
        return false;
    }

    history.iter().any(|m| m.role == MessageRole::User)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specialist::SpecialistId;

    fn exchange(question: &str, answer: &str) -> Vec<ConversationMessage> {
        vec![
            ConversationMessage::user(question),
            ConversationMessage::assistant(answer, SpecialistId::FinancialAid),
        ]
    }

    #[test]
    fn test_short_history_returns_query_unchanged() {
        assert_eq!(build_context("What is FAFSA?", &[]), "What is FAFSA?");

        let one_entry = vec![ConversationMessage::user("earlier question")];
        assert_eq!(
            build_context("What is FAFSA?", &one_entry),
            "What is FAFSA?"
        );
    }

    #[test]
    fn test_school_follow_up_uses_different_school_template() {
        let history = exchange(
            "How much does it cost at UCLA?",
            "UCLA total cost is around $40k per year with room and board.",
        );

        let assembled = build_context("what about Berkeley", &history);
        assert!(assembled.contains("different school"));
        assert!(assembled.contains("Student previously asked: How much does it cost at UCLA?"));
        assert!(assembled.contains("Current question: what about Berkeley"));
    }

    #[test]
    fn test_generic_follow_up_uses_build_on_template() {
        let history = exchange("How much does tuition cost?", "Roughly $14k at a UC.");

        let assembled = build_context("Does that include housing?", &history);
        assert!(!assembled.contains("different school"));
        assert!(assembled.contains("building on the previous discussion"));
        assert!(assembled.contains("Student previously asked: How much does tuition cost?"));
        assert!(assembled.contains("Financial Aid Specialist responded: Roughly $14k at a UC...."));
    }

    #[test]
    fn test_follow_up_opener_without_school_is_generic() {
        let history = exchange("Is calculus hard?", "It depends on preparation.");
        let assembled = build_context("what about statistics", &history);
        assert!(!assembled.contains("different school"));
    }

    #[test]
    fn test_school_mention_without_opener_is_generic() {
        let history = exchange("Is calculus hard?", "It depends on preparation.");
        let assembled = build_context("Is Berkeley competitive?", &history);
        assert!(!assembled.contains("different school"));
    }

    #[test]
    fn test_context_window_keeps_last_six_entries() {
        let mut history = Vec::new();
        for i in 0..5 {
            history.extend(exchange(&format!("question {}", i), &format!("answer {}", i)));
        }

        let assembled = build_context("Does that include housing?", &history);
        // 10 entries total; only the last 6 (questions 2..=4) survive.
        assert!(!assembled.contains("question 1"));
        assert!(assembled.contains("question 2"));
        assert!(assembled.contains("question 4"));
    }

    #[test]
    fn test_assistant_preview_truncates_long_answers() {
        let long_answer = "x".repeat(500);
        let history = exchange("How much does tuition cost?", &long_answer);

        let assembled = build_context("Does that include housing?", &history);
        let expected_preview = "x".repeat(200);
        assert!(assembled.contains(&format!("responded: {}...", expected_preview)));
        assert!(!assembled.contains(&"x".repeat(201)));
    }
}
