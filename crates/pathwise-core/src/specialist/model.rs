//! Specialist domain model.
//!
//! Represents the fixed set of counseling specialists that can answer a
//! student query. Specialists are stateless: all per-conversation state
//! lives in the session, a specialist only carries its static prompt and
//! capability data.

use serde::{Deserialize, Serialize};

/// The closed set of specialist identifiers.
///
/// `ALL` lists the variants in routing priority order; when keyword scores
/// tie, the earlier variant wins. This order is part of the routing
/// contract, not an accident of table construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialistId {
    /// FAFSA, scholarships, grants, cost planning
    FinancialAid,
    /// Course planning, difficulty management, study strategies
    CourseDifficulty,
    /// Major selection, career paths, job prospects
    CareerCounselor,
    /// Default route and multi-specialist coordination
    Coordinator,
}

impl SpecialistId {
    /// All specialists in routing priority order.
    pub const ALL: [SpecialistId; 4] = [
        SpecialistId::FinancialAid,
        SpecialistId::CourseDifficulty,
        SpecialistId::CareerCounselor,
        SpecialistId::Coordinator,
    ];

    /// Stable snake_case identifier used in routing tables and metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FinancialAid => "financial_aid",
            Self::CourseDifficulty => "course_difficulty",
            Self::CareerCounselor => "career_counselor",
            Self::Coordinator => "coordinator",
        }
    }

    /// Human-readable display name, used in prompts and the CLI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FinancialAid => "Financial Aid Specialist",
            Self::CourseDifficulty => "Academic Advisor",
            Self::CareerCounselor => "Career Counselor",
            Self::Coordinator => "Transfer Coordinator",
        }
    }

    /// Parse from the snake_case identifier.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "financial_aid" => Some(Self::FinancialAid),
            "course_difficulty" => Some(Self::CourseDifficulty),
            "career_counselor" => Some(Self::CareerCounselor),
            "coordinator" => Some(Self::Coordinator),
            _ => None,
        }
    }
}

impl std::fmt::Display for SpecialistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static description of a specialist persona.
///
/// Profiles are immutable records: the instruction text becomes the system
/// prompt for the response generator, the capability and specialty lists
/// feed result metadata and the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialistProfile {
    /// Which specialist this profile describes
    pub id: SpecialistId,
    /// Display name
    pub name: String,
    /// One-line description used when handing a query off
    pub handoff_description: String,
    /// Full instruction/prompt text for the response generator
    pub instructions: String,
    /// Capability tags advertised for routing and discovery
    pub capabilities: Vec<String>,
    /// Specialty descriptions for display
    pub specialties: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trip() {
        for id in SpecialistId::ALL {
            assert_eq!(SpecialistId::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(SpecialistId::parse("astrology"), None);
        assert_eq!(SpecialistId::parse(""), None);
    }

    #[test]
    fn test_priority_order() {
        // Tie-break contract: financial aid outranks coordinator.
        assert_eq!(SpecialistId::ALL[0], SpecialistId::FinancialAid);
        assert_eq!(SpecialistId::ALL[3], SpecialistId::Coordinator);
    }
}
