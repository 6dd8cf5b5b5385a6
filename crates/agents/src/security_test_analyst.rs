//! Security test analyst: parses BDD security requirements, maps them to
//! compliance frameworks, and emits Gherkin scenarios plus automation code.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{
    bool_prop, enum_prop, object_schema, string_array_prop, string_prop, Tool,
};
use promptdeck_mcp::ToolDefinition;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

use crate::excerpt;

static AS_A: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)As (?:a|an) ([^,]+)").expect("static regex"));
static I_WANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)I want (?:to )?(.+?)(?:,| so that)").expect("static regex"));
static SO_THAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)so that ([^.]+)").expect("static regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TestingScope {
    Unit,
    Integration,
    E2e,
    Compliance,
    Penetration,
}

impl TestingScope {
    fn label(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Integration => "integration",
            Self::E2e => "e2e",
            Self::Compliance => "compliance",
            Self::Penetration => "penetration",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    security_requirement: String,
    #[serde(default)]
    target_frameworks: Option<Vec<String>>,
    #[serde(default)]
    testing_scope: Option<TestingScope>,
    #[serde(default)]
    generate_automation: Option<bool>,
}

pub struct SecurityTestAnalyst;

#[async_trait]
impl Tool for SecurityTestAnalyst {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_security_test_analyst".into(),
            description: "Security test analyst that creates BDD security test scenarios \
                          from requirements. Generates Gherkin tests, automation code, and \
                          compliance matrices. Validates security controls."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "security_requirement",
                        string_prop("Security requirement as BDD user story or description"),
                    ),
                    (
                        "target_frameworks",
                        string_array_prop(
                            "Compliance frameworks to map tests to (CIS, NIST, ISO, PCI-DSS, \
                             HIPAA, SOC2)",
                        ),
                    ),
                    (
                        "testing_scope",
                        enum_prop(
                            "Scope of security testing. Default: compliance",
                            &["unit", "integration", "e2e", "compliance", "penetration"],
                        ),
                    ),
                    (
                        "generate_automation",
                        bool_prop("Whether to generate test automation code. Default: true"),
                    ),
                ],
                vec!["security_requirement"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_security_test_analyst")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let frameworks = args
        .target_frameworks
        .clone()
        .unwrap_or_else(|| vec!["CIS".to_string(), "NIST".to_string()]);
    let scope = args.testing_scope.unwrap_or(TestingScope::Compliance);
    let requirement = &args.security_requirement;

    let mut out = String::from("# Security Test Analyst - BDD Security Testing\n\n");
    out.push_str(&format!("## Security Requirement\n{requirement}\n\n"));
    out.push_str(&format!(
        "## Testing Scope: {}\n",
        scope.label().to_uppercase()
    ));
    out.push_str(&format!("## Target Frameworks: {}\n\n", frameworks.join(", ")));

    out.push_str("## BDD Story Analysis\n\n");
    out.push_str(&story_analysis(requirement));

    out.push_str("\n## Compliance Framework Mapping\n\n");
    out.push_str(&framework_mapping(requirement, &frameworks));

    out.push_str("\n## Gherkin Test Scenarios\n\n");
    out.push_str(&gherkin_scenarios(requirement));

    if args.generate_automation.unwrap_or(true) {
        out.push_str("\n## Test Automation Code\n\n");
        out.push_str(&test_automation(scope));
    }

    out.push_str("\n## Compliance Test Matrix\n\n");
    out.push_str(&compliance_matrix(requirement, &frameworks));

    out
}

fn contains_any(requirement: &str, needles: &[&str]) -> bool {
    let lower = requirement.to_lowercase();
    needles.iter().any(|n| lower.contains(n))
}

fn story_analysis(requirement: &str) -> String {
    let mut analysis = String::from("### Extracted Components\n\n");

    let role = AS_A.captures(requirement).map(|c| c[1].trim().to_string());
    let goal = I_WANT.captures(requirement).map(|c| c[1].trim().to_string());
    let benefit = SO_THAT.captures(requirement).map(|c| c[1].trim().to_string());

    if role.is_some() || goal.is_some() || benefit.is_some() {
        analysis.push_str(&format!(
            "**Role:** {}\n**Goal:** {}\n**Benefit:** {}\n\n",
            role.as_deref().unwrap_or("[Not specified]"),
            goal.as_deref().unwrap_or("[Not specified]"),
            benefit.as_deref().unwrap_or("[Not specified]"),
        ));
    } else {
        analysis.push_str(&format!("**Requirement:** {}\n\n", excerpt(requirement, 200)));
    }

    analysis.push_str("**Security Control Type:** ");
    let control = if contains_any(requirement, &["mfa", "multi-factor", "authentication"]) {
        "Identity & Access Management (IAM)"
    } else if contains_any(requirement, &["encrypt", "data protection", "backup"]) {
        "Data Protection"
    } else if contains_any(requirement, &["log", "monitor", "siem", "audit"]) {
        "Logging & Monitoring"
    } else if contains_any(requirement, &["network", "firewall", "segmentation"]) {
        "Network Security"
    } else if contains_any(requirement, &["vulnerability", "patch", "scan"]) {
        "Vulnerability Management"
    } else if contains_any(requirement, &["incident", "response", "recovery"]) {
        "Incident Response"
    } else {
        "General Security"
    };
    analysis.push_str(control);
    analysis.push('\n');

    analysis
}

fn framework_mapping(requirement: &str, frameworks: &[String]) -> String {
    let mut mapping = String::new();
    for framework in frameworks {
        mapping.push_str(&format!("### {framework}\n\n"));
        let controls = match framework.as_str() {
            "CIS" => cis_mapping(requirement),
            "NIST" => nist_mapping(requirement),
            "ISO" => iso_mapping(requirement),
            "PCI-DSS" => pci_mapping(requirement),
            _ => format!("Mapped controls for {framework} framework\n"),
        };
        mapping.push_str(&controls);
        mapping.push('\n');
    }
    mapping
}

fn cis_mapping(requirement: &str) -> String {
    if contains_any(requirement, &["mfa", "multi-factor"]) {
        "**CIS Control 6.3** - Require MFA for Externally-Exposed Applications\n\
         **CIS Control 6.4** - Require MFA for Remote Network Access\n"
    } else if contains_any(requirement, &["encrypt"]) {
        "**CIS Control 3.11** - Encrypt Sensitive Data at Rest\n\
         **CIS Control 3.10** - Encrypt Sensitive Data in Transit\n"
    } else if contains_any(requirement, &["log", "audit"]) {
        "**CIS Control 8.2** - Collect Audit Logs\n\
         **CIS Control 8.5** - Collect Detailed Audit Logs\n"
    } else if contains_any(requirement, &["firewall", "network"]) {
        "**CIS Control 4.4** - Implement and Manage a Firewall\n\
         **CIS Control 12.2** - Establish and Maintain a Secure Network Architecture\n"
    } else {
        "**CIS Controls** mapped based on requirement analysis\n"
    }
    .to_string()
}

fn nist_mapping(requirement: &str) -> String {
    if contains_any(requirement, &["mfa", "authentication"]) {
        "**PR.AC-7** - Users have unique credentials\n\
         **PR.AC-1** - Identities and credentials are issued, managed, and verified\n"
    } else if contains_any(requirement, &["encrypt"]) {
        "**PR.DS-1** - Data-at-rest is protected\n\
         **PR.DS-2** - Data-in-transit is protected\n"
    } else if contains_any(requirement, &["detect", "monitor"]) {
        "**DE.CM-1** - The network is monitored\n\
         **DE.AE-3** - Event data are collected and correlated\n"
    } else {
        "**NIST CSF** controls mapped\n"
    }
    .to_string()
}

fn iso_mapping(requirement: &str) -> String {
    if contains_any(requirement, &["authentication", "access"]) {
        "**ISO 27001 A.9.4.2** - Secure log-on procedures\n\
         **ISO 27001 A.9.2.1** - User registration and de-registration\n"
    } else if contains_any(requirement, &["encrypt"]) {
        "**ISO 27001 A.10.1.1** - Policy on the use of cryptographic controls\n"
    } else {
        "**ISO 27001/27002** controls mapped\n"
    }
    .to_string()
}

fn pci_mapping(requirement: &str) -> String {
    if contains_any(requirement, &["mfa", "authentication"]) {
        "**PCI-DSS 8.3** - Secure all individual non-console administrative access\n"
    } else if contains_any(requirement, &["encrypt"]) {
        "**PCI-DSS 3.4** - Render PAN unreadable\n\
         **PCI-DSS 4.1** - Use strong cryptography\n"
    } else {
        "**PCI-DSS** requirements mapped\n"
    }
    .to_string()
}

fn feature_name(requirement: &str) -> &'static str {
    if contains_any(requirement, &["mfa"]) {
        "Multi-Factor Authentication Enforcement"
    } else if contains_any(requirement, &["encrypt"]) {
        "Data Encryption Validation"
    } else if contains_any(requirement, &["log", "audit"]) {
        "Security Logging and Monitoring"
    } else if contains_any(requirement, &["firewall"]) {
        "Firewall Rule Validation"
    } else {
        "Security Control Validation"
    }
}

fn gherkin_scenarios(requirement: &str) -> String {
    let goal = I_WANT
        .captures(requirement)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| "validate the security requirement".to_string());

    format!(
        "```gherkin
Feature: {feature}
  As a security control
  I want to {goal}
  So that security is maintained

  Background:
    Given the security system is configured
    And security controls are enabled

  Scenario: Successful security control validation
    Given the security requirement is implemented
    When the security control is tested
    Then the control should function correctly
    And the security requirement should be met

  Scenario: Security control bypass attempt
    Given the security requirement is implemented
    When an attempt is made to bypass the control
    Then the bypass should be prevented
    And a security alert should be generated
    And the attempt should be logged

  @compliance @automated
  Scenario: Compliance validation
    Given the security control is active
    When compliance is verified
    Then all requirements should be met
    And evidence should be collected
```
",
        feature = feature_name(requirement),
    )
}

fn test_automation(scope: TestingScope) -> String {
    format!(
        "### Python (pytest-bdd)

```python
# test_{scope}_security.py
import pytest
from pytest_bdd import scenarios, given, when, then

scenarios('security_control.feature')

@given('the security requirement is implemented')
def security_implemented(security_system):
    assert security_system.is_configured() == True

@when('the security control is tested')
def test_control(security_system):
    security_system.run_test()

@then('the control should function correctly')
def verify_control(security_system):
    assert security_system.control_status() == 'pass'
```
",
        scope = scope.label(),
    )
}

fn compliance_matrix(requirement: &str, frameworks: &[String]) -> String {
    let mut matrix = format!(
        "| Security Requirement | Test Scenario | {} | Status |\n",
        frameworks.join(" | ")
    );
    matrix.push_str(&format!(
        "|---------------------|---------------|{}|--------|\n",
        frameworks.iter().map(|_| "---").collect::<Vec<_>>().join("|")
    ));
    matrix.push_str(&format!(
        "| {} | Security Control Validation | {} | Pending |\n",
        excerpt(requirement, 50),
        frameworks
            .iter()
            .map(|f| format!("{f} mapped"))
            .collect::<Vec<_>>()
            .join(" | "),
    ));
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MFA_STORY: &str = "As a CISO, I want MFA on all accounts, so that credential theft is prevented.";

    #[tokio::test]
    async fn parses_bdd_story_components() {
        let out = SecurityTestAnalyst
            .execute(json!({"security_requirement": MFA_STORY}))
            .await
            .unwrap();
        assert!(out.contains("**Role:** CISO"));
        assert!(out.contains("**Goal:** MFA on all accounts"));
        assert!(out.contains("**Benefit:** credential theft is prevented"));
        assert!(out.contains("Identity & Access Management (IAM)"));
    }

    #[tokio::test]
    async fn defaults_cis_nist_compliance_scope() {
        let out = SecurityTestAnalyst
            .execute(json!({"security_requirement": MFA_STORY}))
            .await
            .unwrap();
        assert!(out.contains("## Testing Scope: COMPLIANCE"));
        assert!(out.contains("## Target Frameworks: CIS, NIST"));
        assert!(out.contains("**CIS Control 6.3**"));
        assert!(out.contains("**PR.AC-7**"));
        assert!(out.contains("Feature: Multi-Factor Authentication Enforcement"));
        assert!(out.contains("test_compliance_security.py"));
    }

    #[tokio::test]
    async fn non_story_text_falls_back_to_excerpt() {
        let out = SecurityTestAnalyst
            .execute(json!({"security_requirement": "encrypt the backups nightly"}))
            .await
            .unwrap();
        assert!(out.contains("**Requirement:** encrypt the backups nightly"));
        assert!(out.contains("Data Protection"));
        assert!(out.contains("**CIS Control 3.11**"));
    }

    #[tokio::test]
    async fn automation_can_be_disabled() {
        let out = SecurityTestAnalyst
            .execute(json!({
                "security_requirement": MFA_STORY,
                "generate_automation": false,
                "testing_scope": "penetration",
            }))
            .await
            .unwrap();
        assert!(out.contains("## Testing Scope: PENETRATION"));
        assert!(!out.contains("## Test Automation Code"));
        assert!(out.contains("## Compliance Test Matrix"));
    }
}
