//! Pre-written responses used when no generator is available or every
//! generator attempt has failed.
//!
//! Selection is keyword-based on the lowercased query, per specialist.
//! Every branch returns substantive guidance; there is no empty answer.

use pathwise_core::specialist::SpecialistId;

/// Returns the canned response for `specialist` that best matches `query`.
pub fn fallback_response(query: &str, specialist: SpecialistId) -> String {
    let lower = query.to_lowercase();
    match specialist {
        SpecialistId::FinancialAid => financial_aid_fallback(&lower),
        SpecialistId::CareerCounselor => career_counselor_fallback(&lower),
        SpecialistId::CourseDifficulty => academic_advisor_fallback(&lower),
        SpecialistId::Coordinator => coordinator_fallback(&lower),
    }
    .to_string()
}

fn contains_any(lower: &str, words: &[&str]) -> bool {
    words.iter().any(|word| lower.contains(word))
}

fn financial_aid_fallback(lower: &str) -> &'static str {
    if contains_any(lower, &["cost", "expensive", "afford", "money", "tuition"]) {
        return "For UC/CSU costs and financial aid:\n\n\
**UC Schools (2024-2025):**\n\
- Tuition & Fees: ~$14,000-15,000/year (residents)\n\
- Total Cost: ~$35,000-40,000/year (with room/board)\n\n\
**CSU Schools:**\n\
- Tuition & Fees: ~$6,000-7,000/year (residents)\n\
- Total Cost: ~$25,000-30,000/year (with room/board)\n\n\
**Financial Aid Steps:**\n\
1. Complete FAFSA by March 2nd priority deadline\n\
2. Apply for Cal Grant (automatic with FAFSA)\n\
3. Check school-specific scholarships and grants\n\
4. Consider work-study programs\n\n\
Visit your campus financial aid office for personalized guidance!";
    }

    if contains_any(lower, &["fafsa", "financial aid", "scholarship"]) {
        return "Financial Aid for Transfer Students:\n\n\
**FAFSA (Free Application for Federal Student Aid):**\n\
- Priority deadline: March 2nd annually\n\
- Required for federal grants, loans, work-study\n\
- Use your tax information from previous year\n\n\
**Key Programs:**\n\
- Pell Grant: Up to $7,395/year (no repayment needed)\n\
- Cal Grant A: Covers tuition at UC/CSU\n\
- Cal Grant B: Living expenses + tuition (after year 1)\n\
- Federal Direct Loans: Borrow responsibly\n\n\
**Transfer Tips:**\n\
- Apply early for best aid packages\n\
- Complete verification documents quickly\n\
- Check each campus's scholarship portal\n\n\
Need help with FAFSA? Visit studentaid.gov or your campus financial aid office.";
    }

    "I can help with financial aid questions including FAFSA, scholarships, \
grants, and cost planning for UC/CSU transfer students."
}

fn career_counselor_fallback(lower: &str) -> &'static str {
    if lower.contains("business") {
        return "UC vs CSU for Business Majors:\n\n\
**UC Business Programs:**\n\
- More research-focused, theoretical approach\n\
- Better for graduate school preparation\n\
- Strong alumni networks in finance/consulting\n\
- Examples: UC Berkeley (Haas), UCLA (Anderson prerequisites)\n\
- More competitive admission, higher costs\n\n\
**CSU Business Programs:**\n\
- Practical, career-focused curriculum\n\
- Strong industry connections and internships\n\
- Excellent job placement rates\n\
- Examples: SDSU, Cal Poly SLO, SJSU, CSU Fullerton\n\
- More accessible admission, lower costs\n\n\
**Career Outcomes:**\n\
- Both paths lead to excellent career opportunities\n\
- UC may have slight edge for competitive fields (investment banking, consulting)\n\
- CSU graduates often have strong practical skills valued by employers\n\
- Your performance matters more than the school system\n\n\
**Recommendation:** Choose based on learning style, career goals, and financial considerations.";
    }

    if contains_any(lower, &["major", "career", "job"]) {
        return "Choosing Your Transfer Major:\n\n\
**Popular Transfer-Friendly Majors:**\n\
- Business Administration\n\
- Psychology\n\
- Engineering (varies by campus)\n\
- Computer Science\n\
- Biology/Pre-health\n\
- Communications\n\
- Liberal Studies (teaching)\n\n\
**Career Guidance Questions:**\n\
1. What subjects genuinely interest you?\n\
2. What are your natural strengths?\n\
3. What lifestyle do you want (salary, work-life balance)?\n\
4. Are you willing to pursue graduate school?\n\n\
**Resources:**\n\
- O*NET Interest Profiler (online career assessment)\n\
- Bureau of Labor Statistics for job outlook\n\
- LinkedIn to research professionals in fields\n\
- Informational interviews with alumni\n\n\
Schedule an appointment with your campus career center for personalized guidance!";
    }

    "I can help with career guidance including major selection, career paths, \
job market analysis, and UC vs CSU program comparisons."
}

fn academic_advisor_fallback(lower: &str) -> &'static str {
    if contains_any(
        lower,
        &[
            "difficult",
            "hard",
            "struggling",
            "organic chemistry",
            "calculus",
            "physics",
        ],
    ) {
        return "Managing Difficult Courses:\n\n\
**Study Strategies:**\n\
- Active learning: Teach concepts to others\n\
- Spaced repetition: Review material regularly\n\
- Practice problems: Don't just read, DO\n\
- Form study groups with serious students\n\
- Use office hours - professors want to help!\n\n\
**For STEM Courses:**\n\
- Start homework early, don't procrastinate\n\
- Understand concepts before memorizing formulas\n\
- Use multiple resources (textbook, online videos, tutoring)\n\
- Practice past exams if available\n\n\
**Campus Resources:**\n\
- Tutoring centers (often free)\n\
- Supplemental Instruction (SI) sessions\n\
- Professor office hours\n\
- Study skills workshops\n\
- Academic counseling\n\n\
**Time Management:**\n\
- Block schedule for challenging courses\n\
- Break large assignments into smaller tasks\n\
- Use the Pomodoro Technique (25-min focused sessions)\n\n\
Remember: Struggling is normal! Seek help early, not after you're already behind.";
    }

    if contains_any(lower, &["roadmap", "plan", "course", "transfer", "schedule"]) {
        return "Creating Your Transfer Course Roadmap:\n\n\
**Step 1: Research Requirements**\n\
- Check ASSIST.org for transfer requirements\n\
- Review IGETC (Intersegmental General Education Transfer Curriculum)\n\
- Identify major prerequisites for your target schools\n\n\
**Step 2: Plan Your Path**\n\
- **Year 1**: Focus on English, Math, and basic major prerequisites\n\
- **Year 2**: Complete remaining IGETC and advanced prerequisites\n\
- Balance difficult courses with easier ones each semester\n\n\
**Step 3: Key Considerations**\n\
- Complete as many prerequisites as possible before transferring\n\
- Maintain a competitive GPA (3.0+ for CSU, 3.2+ for UC)\n\
- Consider course difficulty and your work schedule\n\n\
**Resources:**\n\
- ASSIST.org for articulation agreements\n\
- Campus transfer counselors\n\
- Academic advisors at your current college\n\
- UC/CSU Transfer Admission Planner (TAP)\n\n\
Meet with a counselor to create a personalized roadmap for your major and target schools!";
    }

    "I can help with academic planning including course roadmaps, study \
strategies, time management, and transfer preparation."
}

fn coordinator_fallback(lower: &str) -> &'static str {
    if contains_any(
        lower,
        &["cost", "money", "fafsa", "financial", "scholarship", "afford"],
    ) {
        return "I can help you with financial questions! For detailed financial aid \
guidance including FAFSA help, scholarship opportunities, and cost comparisons \
between UC and CSU schools, I'd recommend speaking with our Financial Aid Specialist.\n\n\
**Quick Financial Aid Overview:**\n\
- Complete FAFSA by March 2nd priority deadline\n\
- UC schools: ~$35-40k total cost, CSU: ~$25-30k total cost\n\
- Many grants and scholarships available for transfer students\n\n\
Would you like me to connect you with our Financial Aid Specialist for more detailed assistance?";
    }

    if contains_any(lower, &["major", "career", "job", "business", "psychology"]) {
        return "I can help you with career and major selection! For guidance on choosing \
the right major, comparing UC vs CSU programs, and career planning, our Career \
Counselor would be perfect for your needs.\n\n\
**Quick Career Guidance:**\n\
- Consider your interests, strengths, and career goals\n\
- Research job market trends and salary expectations\n\
- UC programs tend to be more research-focused\n\
- CSU programs are often more career-practical\n\n\
Would you like me to connect you with our Career Counselor for personalized guidance?";
    }

    if contains_any(
        lower,
        &["difficult", "study", "academic", "course", "struggling"],
    ) {
        return "I can help you with academic success strategies! For course difficulty \
management, study techniques, and academic planning, our Academic Advisor is \
the right specialist.\n\n\
**Quick Academic Tips:**\n\
- Start studying early, don't cram\n\
- Use active learning techniques\n\
- Take advantage of campus tutoring resources\n\
- Build relationships with professors and TAs\n\n\
Would you like me to connect you with our Academic Advisor for detailed study strategies?";
    }

    "Welcome to your UC/CSU Transfer Counseling System! I'm here to coordinate \
your questions with our team of specialists:\n\n\
**Our Specialists:**\n\
🏦 **Financial Aid Specialist** - FAFSA, scholarships, grants, cost planning\n\
👔 **Career Counselor** - Major selection, career paths, job market analysis\n\
📚 **Academic Advisor** - Study strategies, course planning, academic success\n\n\
**Example Questions:**\n\
- \"How much does it cost to transfer to UC Berkeley?\"\n\
- \"What's the job market like for psychology majors?\"\n\
- \"I'm struggling with calculus, what study strategies work best?\"\n\
- \"Should I choose UC or CSU for my major?\"\n\n\
What aspect of your UC/CSU transfer journey would you like guidance on today?"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_financial_aid_cost_branch() {
        let response = fallback_response(
            "How much does tuition cost at UCLA?",
            SpecialistId::FinancialAid,
        );
        assert!(response.contains("UC Schools (2024-2025)"));
    }

    #[test]
    fn test_financial_aid_fafsa_branch() {
        let response = fallback_response("Help me with my FAFSA", SpecialistId::FinancialAid);
        assert!(response.contains("Pell Grant"));
    }

    #[test]
    fn test_career_business_branch() {
        let response = fallback_response(
            "Is UC or CSU better for business?",
            SpecialistId::CareerCounselor,
        );
        assert!(response.contains("Haas"));
    }

    #[test]
    fn test_academic_struggling_branch() {
        let response = fallback_response(
            "I'm struggling with organic chemistry",
            SpecialistId::CourseDifficulty,
        );
        assert!(response.contains("Study Strategies"));
    }

    #[test]
    fn test_coordinator_welcome_branch() {
        let response = fallback_response("hello there", SpecialistId::Coordinator);
        assert!(response.contains("Welcome"));
    }

    #[test]
    fn test_coordinator_financial_redirect() {
        let response = fallback_response("can I afford this", SpecialistId::Coordinator);
        assert!(response.contains("Financial Aid Specialist"));
    }

    #[test]
    fn test_always_non_empty() {
        for specialist in SpecialistId::ALL {
            let response = fallback_response("", specialist);
            assert!(!response.trim().is_empty());
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let generic = fallback_response("random words", SpecialistId::FinancialAid);
        let matched = fallback_response("TUITION?", SpecialistId::FinancialAid);
        assert_ne!(generic, matched);
    }
}
