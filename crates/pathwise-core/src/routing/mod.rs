//! Keyword router - maps a student query to the specialist best suited to
//! answer it.
//!
//! Scoring is a bag-of-words overlap count: each specialist's score is the
//! number of its trigger keywords occurring as substrings of the
//! lower-cased query. The table is ordered; on a tie the earliest entry
//! wins, so routing is deterministic for every input. A query matching
//! nothing routes to the coordinator.

use crate::error::{CounselError, Result};
use crate::specialist::SpecialistId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-specialist scoring detail produced by [`KeywordRouter::explain`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialistScore {
    pub specialist: SpecialistId,
    pub score: usize,
    pub matched_keywords: Vec<String>,
}

/// Full routing decision breakdown for observability and testing.
///
/// Built from the same scoring pass as [`KeywordRouter::route`], so the
/// two can never disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingExplanation {
    pub selected: SpecialistId,
    pub scores: Vec<SpecialistScore>,
}

/// Routes queries to specialists by keyword-overlap scoring.
pub struct KeywordRouter {
    /// Trigger keywords per specialist. Entry order is routing priority:
    /// ties resolve to the earliest entry.
    keywords: Vec<(SpecialistId, Vec<String>)>,
}

impl KeywordRouter {
    /// Creates a router seeded with the default trigger-keyword table.
    pub fn new() -> Self {
        Self {
            keywords: default_keyword_table(),
        }
    }

    /// Routes a query to a specialist.
    ///
    /// Total over all string inputs: an empty or unmatched query routes to
    /// the coordinator.
    pub fn route(&self, query: &str) -> SpecialistId {
        let selected = self.select(&self.score(query));
        debug!(query = %truncate_for_log(query), specialist = %selected, "routed query");
        selected
    }

    /// Explains a routing decision: per-specialist scores and matched
    /// keywords alongside the selected specialist.
    pub fn explain(&self, query: &str) -> RoutingExplanation {
        let scores = self.score(query);
        let selected = self.select(&scores);
        RoutingExplanation { selected, scores }
    }

    /// Adds trigger keywords to an existing specialist.
    ///
    /// Referencing a specialist with no keyword entry (or an unknown
    /// identifier) is a no-op reported as `NotFound`, never swallowed.
    pub fn add_keywords(&mut self, specialist: &str, words: &[&str]) -> Result<()> {
        let id = SpecialistId::parse(specialist)
            .ok_or_else(|| CounselError::not_found("Specialist", specialist))?;

        let entry = self
            .keywords
            .iter_mut()
            .find(|(entry_id, _)| *entry_id == id)
            .ok_or_else(|| CounselError::not_found("Specialist", specialist))?;

        entry.1.extend(words.iter().map(|w| w.to_lowercase()));
        debug!(specialist = %id, count = words.len(), "added custom keywords");
        Ok(())
    }

    /// Returns the trigger keywords for a specialist, empty for
    /// specialists with no keyword entry (the coordinator).
    pub fn keywords_for(&self, specialist: SpecialistId) -> &[String] {
        self.keywords
            .iter()
            .find(|(id, _)| *id == specialist)
            .map(|(_, words)| words.as_slice())
            .unwrap_or(&[])
    }

    /// The shared scoring pass behind both `route` and `explain`.
    fn score(&self, query: &str) -> Vec<SpecialistScore> {
        let query_lower = query.to_lowercase();
        self.keywords
            .iter()
            .map(|(id, words)| {
                let matched: Vec<String> = words
                    .iter()
                    .filter(|kw| query_lower.contains(kw.as_str()))
                    .cloned()
                    .collect();
                SpecialistScore {
                    specialist: *id,
                    score: matched.len(),
                    matched_keywords: matched,
                }
            })
            .collect()
    }

    /// Picks the first entry (in table order) achieving the maximum
    /// non-zero score, defaulting to the coordinator.
    fn select(&self, scores: &[SpecialistScore]) -> SpecialistId {
        let mut best: Option<&SpecialistScore> = None;
        for entry in scores {
            if entry.score > 0 && best.map_or(true, |b| entry.score > b.score) {
                best = Some(entry);
            }
        }
        best.map(|b| b.specialist).unwrap_or(SpecialistId::Coordinator)
    }
}

impl Default for KeywordRouter {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_for_log(query: &str) -> String {
    query.chars().take(50).collect()
}

/// The default trigger-keyword table, in routing priority order.
///
/// The coordinator has no entry: it is the zero-score default, not a
/// scored competitor.
fn default_keyword_table() -> Vec<(SpecialistId, Vec<String>)> {
    let to_owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();

    vec![
        (
            SpecialistId::FinancialAid,
            to_owned(&[
                "cost", "money", "fafsa", "financial", "scholarship", "afford",
                "tuition", "grant", "expensive", "budget", "payment", "aid",
                "funding", "cal grant", "pell grant",
            ]),
        ),
        (
            SpecialistId::CourseDifficulty,
            to_owned(&[
                "difficult", "study", "academic", "course", "struggling", "calculus",
                "chemistry", "physics", "roadmap", "transfer", "plan", "schedule",
                "semester", "prerequisites", "sequence", "math", "science", "english",
                "requirements", "units", "classes", "curriculum", "igetc", "breadth",
                "general education", "lower division", "upper division",
                "planning", "pathway", "preparation", "recommend", "suggestion",
            ]),
        ),
        (
            SpecialistId::CareerCounselor,
            to_owned(&[
                "major", "career", "job", "business", "psychology", "engineering",
                "computer science", "prospects", "employment", "profession",
                "occupation", "work", "salary", "internship", "networking",
            ]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_financial_aid_keywords_route_to_financial_aid() {
        let router = KeywordRouter::new();
        for query in [
            "How do I apply for FAFSA?",
            "Can I afford tuition?",
            "scholarship and grant options",
        ] {
            assert_eq!(router.route(query), SpecialistId::FinancialAid, "{}", query);
        }
    }

    #[test]
    fn test_academic_keywords_route_to_course_difficulty() {
        let router = KeywordRouter::new();
        assert_eq!(
            router.route("I'm struggling with calculus this semester"),
            SpecialistId::CourseDifficulty
        );
        assert_eq!(
            router.route("help me plan my igetc requirements"),
            SpecialistId::CourseDifficulty
        );
    }

    #[test]
    fn test_career_keywords_route_to_career_counselor() {
        let router = KeywordRouter::new();
        assert_eq!(
            router.route("what's the job outlook and salary for psychology?"),
            SpecialistId::CareerCounselor
        );
    }

    #[test]
    fn test_unmatched_routes_to_coordinator() {
        let router = KeywordRouter::new();
        assert_eq!(router.route(""), SpecialistId::Coordinator);
        assert_eq!(
            router.route("completely unrelated text"),
            SpecialistId::Coordinator
        );
    }

    #[test]
    fn test_tie_resolves_by_table_order() {
        let router = KeywordRouter::new();
        // "cost" (financial aid) and "course" (academic) both score 1;
        // financial aid comes first in the table.
        assert_eq!(
            router.route("cost of that course"),
            SpecialistId::FinancialAid
        );
    }

    #[test]
    fn test_explain_agrees_with_route() {
        let router = KeywordRouter::new();
        for query in [
            "",
            "How much does tuition cost?",
            "study plan for physics",
            "career prospects in engineering",
            "cost of that course",
            "hello there",
        ] {
            assert_eq!(router.explain(query).selected, router.route(query), "{}", query);
        }
    }

    #[test]
    fn test_explain_reports_matched_keywords() {
        let router = KeywordRouter::new();
        let explanation = router.explain("fafsa and cal grant deadlines");
        let financial = explanation
            .scores
            .iter()
            .find(|s| s.specialist == SpecialistId::FinancialAid)
            .unwrap();
        assert!(financial.matched_keywords.contains(&"fafsa".to_string()));
        assert!(financial.matched_keywords.contains(&"cal grant".to_string()));
    }

    #[test]
    fn test_add_keywords_extends_routing() {
        let mut router = KeywordRouter::new();
        assert_eq!(router.route("tell me about zorble"), SpecialistId::Coordinator);
        router.add_keywords("career_counselor", &["zorble"]).unwrap();
        assert_eq!(router.route("tell me about zorble"), SpecialistId::CareerCounselor);
    }

    #[test]
    fn test_add_keywords_unknown_specialist_is_reported() {
        let mut router = KeywordRouter::new();
        let err = router.add_keywords("astrologer", &["stars"]).unwrap_err();
        assert!(err.is_not_found());
        // The coordinator has no keyword entry to extend either.
        let err = router.add_keywords("coordinator", &["anything"]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_keywords_for() {
        let router = KeywordRouter::new();
        assert!(router
            .keywords_for(SpecialistId::FinancialAid)
            .contains(&"fafsa".to_string()));
        assert!(router.keywords_for(SpecialistId::Coordinator).is_empty());
    }
}
