//! The built-in quiz bank.
//!
//! Quizzes for the introductory modules ship embedded; banks for the
//! remaining modules load from a `quizzes.toml` in the content root
//! using the same document shape.

use lessondeck_core::{LessondeckError, Quiz, Result};
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

const BUILTIN_BANK: &str = r#"
[[quizzes]]
module_id = 0
title = "Introduction to QA Engineering Quiz"

[[quizzes.questions]]
prompt = "What is the primary difference between QA and Testing?"
options = [
    "QA finds bugs, Testing prevents defects",
    "QA prevents defects, Testing finds bugs",
    "They are exactly the same",
    "QA is only for hardware, Testing is for software",
]
answer = 1
explanation = "QA (Quality Assurance) focuses on preventing defects through process improvement, while Testing focuses on finding bugs in the product."

[[quizzes.questions]]
prompt = "Which of these is NOT a core QA responsibility?"
options = ["Validation", "Risk Management", "Writing production code", "Process Improvement"]
answer = 2
explanation = "QA engineers focus on testing, validation, and quality processes - not writing production code."

[[quizzes.questions]]
prompt = "What percentage reduction in customer-reported defects can mature QE organizations achieve?"
options = ["10-20%", "30-40%", "60-90%", "100%"]
answer = 2
explanation = "Mature QE organizations can reduce customer-reported defects by 60-90% through proactive quality practices."

[[quizzes.questions]]
prompt = "Which skill is NOT typically required for QA engineers?"
options = ["Programming", "Risk assessment", "Graphic design", "Problem decomposition"]
answer = 2
explanation = "While technical skills like programming and analytical skills are essential, graphic design is not a typical QA requirement."

[[quizzes.questions]]
prompt = "What does SDET stand for?"
options = [
    "Software Development Engineer in Testing",
    "System Design and Engineering Test",
    "Standard Development Engineering Tool",
    "Software Development Engineering Team",
]
answer = 0
explanation = "SDET stands for Software Development Engineer in Testing - a role with stronger coding focus."

[[quizzes]]
module_id = 1
title = "QA Foundations Quiz"

[[quizzes.questions]]
prompt = "What is the difference between Verification and Validation?"
options = [
    "Verification: Are we building the right product? Validation: Are we building it right?",
    "Verification: Are we building it right? Validation: Are we building the right product?",
    "They mean the same thing",
    "Verification is for software, Validation is for hardware",
]
answer = 1
explanation = "Verification checks if we're building the product right (correct implementation). Validation checks if we're building the right product (meets requirements)."

[[quizzes.questions]]
prompt = "In the Test Pyramid, which tests should be most numerous?"
options = ["E2E (UI) Tests", "Integration Tests", "Unit Tests", "Manual Tests"]
answer = 2
explanation = "Unit tests should form the base/largest portion of the test pyramid as they're fastest and most reliable."

[[quizzes.questions]]
prompt = "What does 'Severity' measure in a bug report?"
options = [
    "When the bug should be fixed",
    "The impact of the bug on the system",
    "How many users are affected",
    "The cost to fix the bug",
]
answer = 1
explanation = "Severity measures the technical impact on the system, while Priority indicates when it should be fixed."

[[quizzes.questions]]
prompt = "Which test design technique involves testing with valid and invalid inputs?"
options = [
    "Boundary Value Analysis",
    "Equivalence Partitioning",
    "Decision Table Testing",
    "State Transition Testing",
]
answer = 1
explanation = "Equivalence Partitioning divides inputs into valid and invalid partitions to reduce test cases."

[[quizzes.questions]]
prompt = "What is traceability in QA?"
options = [
    "Tracking bugs to developers",
    "Mapping test cases to requirements",
    "Following code changes",
    "Monitoring test execution time",
]
answer = 1
explanation = "Traceability ensures every requirement has corresponding test coverage and vice versa."

[[quizzes]]
module_id = 2
title = "Software QA Quiz"

[[quizzes.questions]]
prompt = "What is the main advantage of API testing over UI testing?"
options = [
    "API tests are more user-friendly",
    "API tests are faster and more stable",
    "API tests require no programming",
    "API tests cover visual bugs",
]
answer = 1
explanation = "API tests are faster, more stable, and less prone to flakiness compared to UI tests. They test business logic directly without the UI layer."

[[quizzes.questions]]
prompt = "In microservices testing, what is contract testing?"
options = [
    "Testing legal agreements between teams",
    "Testing the agreement between service provider and consumer",
    "Testing service performance contracts",
    "Testing database constraints",
]
answer = 1
explanation = "Contract testing validates that the service provider's API matches what the consumer expects, preventing integration issues."

[[quizzes.questions]]
prompt = "What does CI/CD stand for?"
options = [
    "Code Integration / Code Deployment",
    "Continuous Improvement / Continuous Development",
    "Continuous Integration / Continuous Deployment",
    "Central Integration / Central Distribution",
]
answer = 2
explanation = "CI/CD stands for Continuous Integration and Continuous Deployment/Delivery, automating the software release process."

[[quizzes.questions]]
prompt = "What is exploratory testing?"
options = [
    "Testing without any planning",
    "Simultaneous learning, test design, and test execution",
    "Testing only new features",
    "Automated testing",
]
answer = 1
explanation = "Exploratory testing is an approach where testers simultaneously learn about the application, design tests, and execute them."
"#;

/// Document shape shared by the embedded bank and user bank files.
#[derive(Debug, Deserialize)]
struct QuizBank {
    #[serde(default)]
    quizzes: Vec<Quiz>,
}

static BUILTIN: LazyLock<Vec<Quiz>> = LazyLock::new(|| {
    let bank: QuizBank = toml::from_str(BUILTIN_BANK).expect("Built-in quiz bank should be valid");
    bank.quizzes
});

/// The embedded quizzes.
pub fn builtin_quizzes() -> &'static [Quiz] {
    &BUILTIN
}

/// Look up a built-in quiz by module id.
pub fn builtin_quiz(module_id: u32) -> Option<&'static Quiz> {
    BUILTIN.iter().find(|q| q.module_id == module_id)
}

/// Load additional quizzes from a bank file.
pub fn load_bank_from(path: &Path) -> Result<Vec<Quiz>> {
    let content = std::fs::read_to_string(path)?;
    let bank: QuizBank = toml::from_str(&content).map_err(|e| {
        LessondeckError::Catalog(format!("Quiz bank error in {}: {}", path.display(), e))
    })?;
    Ok(bank.quizzes)
}
