//! The built-in catalog document.
//!
//! The full content set of the playbook expressed as one TOML document,
//! parsed once through serde. Lesson `file` paths resolve against the
//! configured content root.

pub(crate) const DEFAULT_CATALOG: &str = r#"
[[modules]]
id = 0
title = "Introduction to QA Engineering"
description = "Learn what QA engineering is, career paths, and how to use this playbook effectively."
duration = "2-3 hours"
tags = ["Beginner", "Career", "Overview"]
lessons = [
    { title = "What is QA Engineering", file = "docs/00-introduction/01-what-is-qa-engineering.md" },
    { title = "Software vs Hardware vs Systems QA", file = "docs/00-introduction/02-software-hardware-systems-qa.md" },
    { title = "QA Career Paths", file = "docs/00-introduction/03-qa-career-paths.md" },
    { title = "How to Use This Playbook", file = "docs/00-introduction/04-how-to-use-this-playbook.md" },
]

[[modules]]
id = 1
title = "QA Foundations"
description = "Core principles and concepts that underpin all quality engineering work."
duration = "8-10 hours"
tags = ["Fundamentals", "Theory", "Essential"]
lessons = [
    { title = "QA vs QC vs QE", file = "docs/01-qa-foundations/01-qa-vs-qc-vs-qe.md" },
    { title = "Verification vs Validation", file = "docs/01-qa-foundations/02-verification-vs-validation.md" },
    { title = "Test Levels and Test Pyramids", file = "docs/01-qa-foundations/03-test-levels-and-pyramids.md" },
    { title = "Risk-Based Testing", file = "docs/01-qa-foundations/04-risk-based-testing.md" },
    { title = "Test Design Techniques", file = "docs/01-qa-foundations/05-test-design-techniques.md" },
    { title = "Severity vs Priority", file = "docs/01-qa-foundations/06-severity-vs-priority.md" },
    { title = "Traceability and Requirements Coverage", file = "docs/01-qa-foundations/07-traceability-requirements-coverage.md" },
]

[[modules]]
id = 2
title = "Software QA"
description = "Comprehensive guide to testing web, mobile, API, and database applications."
duration = "12-15 hours"
tags = ["Software", "API", "Database"]
lessons = [
    { title = "Web Testing Strategies", file = "docs/02-software-qa/01-web-testing-strategies.md" },
    { title = "API Testing", file = "docs/02-software-qa/02-api-testing.md" },
    { title = "Database Testing", file = "docs/02-software-qa/03-database-testing.md" },
    { title = "Microservices Testing", file = "docs/02-software-qa/04-microservices-testing.md" },
    { title = "CI/CD Quality Gates", file = "docs/02-software-qa/05-cicd-quality-gates.md" },
    { title = "Exploratory Testing", file = "docs/02-software-qa/06-exploratory-testing.md" },
    { title = "Regression Strategy", file = "docs/02-software-qa/07-regression-strategy.md" },
    { title = "Test Data Management", file = "docs/02-software-qa/08-test-data-management.md" },
]

[[modules]]
id = 3
title = "Test Automation"
description = "Build scalable test automation frameworks and integrate with CI/CD pipelines."
duration = "15-20 hours"
tags = ["Automation", "SDET", "Frameworks"]
lessons = [
    { title = "Automation Strategy", file = "docs/03-test-automation/01-automation-strategy.md" },
    { title = "UI Automation Principles", file = "docs/03-test-automation/02-ui-automation-principles.md" },
    { title = "API Automation Architecture", file = "docs/03-test-automation/03-api-automation-architecture.md" },
    { title = "Framework Design Patterns", file = "docs/03-test-automation/04-framework-design-patterns.md" },
    { title = "Page Object Model", file = "docs/03-test-automation/05-page-object-model.md" },
    { title = "Flaky Test Prevention", file = "docs/03-test-automation/07-flaky-test-prevention.md" },
    { title = "CI/CD Integration", file = "docs/03-test-automation/08-cicd-integration.md" },
    { title = "Reporting & Analytics", file = "docs/03-test-automation/09-reporting-analytics.md" },
]

[[modules]]
id = 4
title = "Performance & Reliability"
description = "Master load testing, observability, and reliability engineering for QA."
duration = "10-12 hours"
tags = ["Performance", "SRE", "Observability"]
lessons = [
    { title = "Load, Stress, and Soak Testing", file = "docs/04-performance-reliability/01-load-stress-soak-testing.md" },
    { title = "Observability for QA", file = "docs/04-performance-reliability/02-observability-for-qa.md" },
    { title = "SLO / SLA Validation", file = "docs/04-performance-reliability/03-slo-sla-validation.md" },
    { title = "Incident Learning", file = "docs/04-performance-reliability/04-incident-learning.md" },
    { title = "Reliability Metrics", file = "docs/04-performance-reliability/05-reliability-metrics.md" },
    { title = "Capacity Planning", file = "docs/04-performance-reliability/06-capacity-planning.md" },
    { title = "Performance Bottleneck Analysis", file = "docs/04-performance-reliability/07-performance-bottleneck-analysis.md" },
]

[[modules]]
id = 5
title = "Security & Privacy"
description = "QA's role in security testing, OWASP validation, and privacy compliance."
duration = "8-10 hours"
tags = ["Security", "Privacy", "Compliance"]
lessons = [
    { title = "QA's Role in Security", file = "docs/05-security-privacy/01-qa-role-in-security.md" },
    { title = "OWASP Top 10 Testing", file = "docs/05-security-privacy/02-owasp-top-10-testing.md" },
    { title = "Authentication & Authorization Testing", file = "docs/05-security-privacy/03-authentication-authorization-testing.md" },
    { title = "Privacy Test Cases (GDPR)", file = "docs/05-security-privacy/04-privacy-test-cases-gdpr.md" },
    { title = "Security Automation", file = "docs/05-security-privacy/05-security-automation.md" },
    { title = "Penetration Testing Basics", file = "docs/05-security-privacy/06-penetration-testing-basics.md" },
]

[[modules]]
id = 6
title = "Mobile QA"
description = "iOS and Android testing strategies, device fragmentation, and app store readiness."
duration = "10-12 hours"
tags = ["Mobile", "iOS", "Android"]
lessons = [
    { title = "iOS / Android Test Strategies", file = "docs/06-mobile-qa/01-ios-android-strategies.md" },
    { title = "Device Fragmentation", file = "docs/06-mobile-qa/02-device-fragmentation.md" },
    { title = "App Store Readiness", file = "docs/06-mobile-qa/03-app-store-readiness.md" },
    { title = "Network & Offline Testing", file = "docs/06-mobile-qa/04-network-offline-testing.md" },
    { title = "Mobile Automation", file = "docs/06-mobile-qa/05-mobile-automation.md" },
    { title = "Performance on Mobile", file = "docs/06-mobile-qa/06-performance-mobile.md" },
    { title = "Mobile Security Testing", file = "docs/06-mobile-qa/07-mobile-security.md" },
]

[[modules]]
id = 7
title = "Hardware QA"
description = "EVT/DVT/PVT validation, environmental testing, and manufacturing quality."
duration = "12-15 hours"
tags = ["Hardware", "EVT/DVT/PVT", "Manufacturing"]
lessons = [
    { title = "EVT/DVT/PVT Explained", file = "docs/07-hardware-qa/01-evt-dvt-pvt-explained.md" },
    { title = "Manufacturing Quality Lifecycle", file = "docs/07-hardware-qa/02-manufacturing-quality-lifecycle.md" },
    { title = "Environmental Testing", file = "docs/07-hardware-qa/03-environmental-testing.md" },
    { title = "Power & Battery Testing", file = "docs/07-hardware-qa/04-power-battery-testing.md" },
    { title = "Firmware Validation", file = "docs/07-hardware-qa/05-firmware-validation.md" },
    { title = "Supplier Quality Management", file = "docs/07-hardware-qa/06-supplier-quality.md" },
    { title = "Failure Analysis", file = "docs/07-hardware-qa/07-failure-analysis.md" },
    { title = "8D CAPA Process", file = "docs/07-hardware-qa/08-8d-capa-process.md" },
    { title = "Measurement & Uncertainty", file = "docs/07-hardware-qa/09-measurement-uncertainty.md" },
]

[[modules]]
id = 8
title = "Systems Integration"
description = "Testing complex systems where hardware, firmware, software, and cloud converge."
duration = "10-12 hours"
tags = ["Systems", "Integration", "IoT"]
lessons = [
    { title = "Device + App + Backend Testing", file = "docs/08-systems-integration/01-device-app-backend-testing.md" },
    { title = "Compatibility Matrices", file = "docs/08-systems-integration/02-compatibility-matrices.md" },
    { title = "Firmware / Software Versioning", file = "docs/08-systems-integration/03-firmware-software-versioning.md" },
    { title = "Interoperability Testing", file = "docs/08-systems-integration/04-interoperability-testing.md" },
    { title = "Field Issue Analysis", file = "docs/08-systems-integration/05-field-issue-analysis.md" },
    { title = "OTA Update Testing", file = "docs/08-systems-integration/06-ota-update-testing.md" },
    { title = "End-to-End System Validation", file = "docs/08-systems-integration/07-end-to-end-system-validation.md" },
]

[[modules]]
id = 9
title = "Release Quality"
description = "Go/No-Go decisions, bug triage, release readiness, and quality metrics."
duration = "8-10 hours"
tags = ["Release", "Metrics", "Management"]
lessons = [
    { title = "Go / No-Go Criteria", file = "docs/09-release-quality/01-go-no-go-criteria.md" },
    { title = "Bug Triage Process", file = "docs/09-release-quality/02-bug-triage-process.md" },
    { title = "Release Readiness Reviews", file = "docs/09-release-quality/03-release-readiness-reviews.md" },
    { title = "Quality Metrics That Matter", file = "docs/09-release-quality/04-quality-metrics-that-matter.md" },
    { title = "Defect Prediction", file = "docs/09-release-quality/05-defect-prediction.md" },
    { title = "Post-Release Monitoring", file = "docs/09-release-quality/06-post-release-monitoring.md" },
]

[[modules]]
id = 10
title = "Career & Interviews"
description = "Interview preparation, resume tips, and career advancement strategies."
duration = "6-8 hours"
tags = ["Career", "Interview", "Growth"]
lessons = [
    { title = "Interview Preparation", file = "docs/10-career-interviews/01-interview-preparation.md" },
    { title = "Common QA Interview Questions", file = "docs/10-career-interviews/02-common-interview-questions.md" },
    { title = "Technical Assessments", file = "docs/10-career-interviews/03-technical-assessments.md" },
    { title = "Resume & Portfolio", file = "docs/10-career-interviews/04-resume-portfolio.md" },
    { title = "Career Advancement", file = "docs/10-career-interviews/05-career-advancement.md" },
]

[[templates]]
title = "Test Plan"
description = "Comprehensive test plan template with all sections"
icon = "📋"
file = "templates/test-plan.md"

[[templates]]
title = "Test Case"
description = "Detailed test case template with multiple formats"
icon = "✅"
file = "templates/test-case.md"

[[templates]]
title = "Bug Report"
description = "Production-ready bug report template"
icon = "🐛"
file = "templates/bug-report.md"

[[templates]]
title = "Risk Assessment"
description = "Risk assessment matrix and analysis template"
icon = "⚠️"
file = "templates/risk-assessment.md"

[[templates]]
title = "Traceability Matrix"
description = "Requirements traceability matrix template"
icon = "🔗"
file = "templates/traceability-matrix.md"

[[templates]]
title = "Release Readiness"
description = "Go/No-Go release readiness review template"
icon = "🚀"
file = "templates/release-readiness.md"

[[templates]]
title = "Hardware Validation Plan"
description = "EVT/DVT/PVT validation plan template"
icon = "🔧"
file = "templates/hardware-validation-plan.md"

[[templates]]
title = "8D Root Cause Analysis"
description = "8D methodology for root cause analysis and CAPA"
icon = "🔍"
file = "templates/8d-root-cause-analysis.md"

[[labs]]
title = "Web Application Testing"
description = "Test a sample e-commerce application for functional bugs"
difficulty = "beginner"
duration = "2 hours"
category = "software"

[[labs]]
title = "API Test Automation"
description = "Build automated tests for a REST API using Postman/Newman"
difficulty = "intermediate"
duration = "3 hours"
category = "automation"

[[labs]]
title = "Performance Testing Lab"
description = "Load test a web application and analyze bottlenecks"
difficulty = "intermediate"
duration = "4 hours"
category = "software"

[[labs]]
title = "Security Testing Exercise"
description = "Test for OWASP Top 10 vulnerabilities in a vulnerable app"
difficulty = "advanced"
duration = "4 hours"
category = "software"

[[labs]]
title = "Mobile Testing Scenarios"
description = "Test mobile app across different devices and OS versions"
difficulty = "intermediate"
duration = "3 hours"
category = "software"

[[labs]]
title = "Hardware Validation Exercise"
description = "Paper-based EVT validation exercise for a smart device"
difficulty = "intermediate"
duration = "2 hours"
category = "hardware"

[[labs]]
title = "Environmental Testing Planning"
description = "Design environmental test plan for consumer electronics"
difficulty = "advanced"
duration = "3 hours"
category = "hardware"

[[labs]]
title = "Root Cause Analysis (8D)"
description = "Conduct 8D analysis on a sample hardware failure"
difficulty = "intermediate"
duration = "2 hours"
category = "hardware"

[[labs]]
title = "System Integration Testing"
description = "Test IoT device integration with mobile app and cloud"
difficulty = "advanced"
duration = "4 hours"
category = "systems"

[[labs]]
title = "CI/CD Pipeline Integration"
description = "Add automated tests to a CI/CD pipeline"
difficulty = "intermediate"
duration = "3 hours"
category = "automation"
"#;
