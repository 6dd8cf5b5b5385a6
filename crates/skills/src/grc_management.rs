//! Governance, risk and compliance assessments.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_array_prop, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum AssessmentType {
    GapAnalysis,
    RiskAssessment,
    ComplianceAudit,
}

impl AssessmentType {
    fn label(self) -> &'static str {
        match self {
            Self::GapAnalysis => "gap-analysis",
            Self::RiskAssessment => "risk-assessment",
            Self::ComplianceAudit => "compliance-audit",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    scope: String,
    #[serde(default)]
    frameworks: Option<Vec<String>>,
    #[serde(default)]
    assessment_type: Option<AssessmentType>,
}

pub struct GrcManagement;

#[async_trait]
impl Tool for GrcManagement {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_skill_grc_management".into(),
            description: "Governance, Risk, and Compliance (GRC) management skill. Performs \
                          gap analysis, risk assessments, and compliance audits against \
                          frameworks like NIST, ISO, SOC2."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "scope",
                        string_prop("Scope of GRC assessment (system, process, organization)"),
                    ),
                    (
                        "frameworks",
                        string_array_prop(
                            "Compliance frameworks (NIST, ISO27001, SOC2, PCI-DSS, HIPAA)",
                        ),
                    ),
                    (
                        "assessment_type",
                        enum_prop(
                            "Type of GRC assessment. Default: gap-analysis",
                            &["gap-analysis", "risk-assessment", "compliance-audit"],
                        ),
                    ),
                ],
                vec!["scope"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_skill_grc_management")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let frameworks = args
        .frameworks
        .clone()
        .unwrap_or_else(|| vec!["NIST CSF".into()]);
    let assessment_type = args.assessment_type.unwrap_or(AssessmentType::GapAnalysis);

    let mut out = String::from("# GRC Management Report\n\n");
    out.push_str(&format!("**Scope:** {}\n", args.scope));
    out.push_str(&format!("**Frameworks:** {}\n", frameworks.join(", ")));
    out.push_str(&format!("**Assessment Type:** {}\n\n", assessment_type.label()));

    match assessment_type {
        AssessmentType::GapAnalysis => out.push_str(&gap_analysis(&frameworks)),
        AssessmentType::RiskAssessment => out.push_str(risk_assessment()),
        AssessmentType::ComplianceAudit => out.push_str(&compliance_audit(&frameworks)),
    }

    out.push_str(
        "
## Recommendations
### High Priority
1. [Critical gap to address]
2. [Major risk to mitigate]

### Medium Priority
1. [Important improvement]
2. [Process enhancement]

### Low Priority
1. [Nice-to-have optimization]
",
    );

    out
}

fn gap_analysis(frameworks: &[String]) -> String {
    let mut out = String::from("## Gap Analysis\n\n");
    for framework in frameworks {
        out.push_str(&format!("### {framework}\n\n"));
        out.push_str(
            "| Control Domain | Current State | Target State | Gap | Priority |
|----------------|---------------|--------------|-----|----------|
| Identity & Access | Partial | Full | Medium | High |
| Data Protection | Basic | Advanced | Large | High |
| Logging & Monitoring | Minimal | Comprehensive | Large | High |
| Incident Response | Ad-hoc | Documented | Medium | Medium |
| Security Testing | None | Regular | Large | High |

",
        );
    }
    out
}

fn risk_assessment() -> &'static str {
    "## Risk Assessment

### Risk Register

| Risk | Likelihood | Impact | Risk Score | Mitigation |
|------|------------|--------|------------|------------|
| Data breach | Medium | High | 12 | Encryption, MFA |
| Insider threat | Low | High | 8 | Access controls, monitoring |
| Ransomware | Medium | High | 12 | Backups, EDR |
| DDoS attack | High | Medium | 12 | WAF, CDN |
| Supply chain | Low | Medium | 4 | Vendor assessment |

**Risk Scoring:** Likelihood (1-5) x Impact (1-5) = Risk Score (1-25)

"
}

fn compliance_audit(frameworks: &[String]) -> String {
    let mut out = String::from("## Compliance Audit\n\n");
    for framework in frameworks {
        out.push_str(&format!("### {framework} Compliance Status\n\n"));
        out.push_str(
            "**Overall Compliance:** 75%

| Category | Requirements | Met | Partial | Not Met | % Complete |
|----------|--------------|-----|---------|---------|------------|
| Governance | 10 | 8 | 2 | 0 | 80% |
| Risk Management | 8 | 5 | 2 | 1 | 62% |
| Compliance | 12 | 10 | 1 | 1 | 83% |
| Security Controls | 15 | 9 | 4 | 2 | 60% |

",
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn gap_analysis_is_default() {
        let out = GrcManagement
            .execute(json!({"scope": "payments platform"}))
            .await
            .unwrap();
        assert!(out.contains("**Frameworks:** NIST CSF"));
        assert!(out.contains("## Gap Analysis"));
        assert!(out.contains("### NIST CSF"));
    }

    #[tokio::test]
    async fn compliance_audit_per_framework() {
        let out = GrcManagement
            .execute(json!({
                "scope": "payments platform",
                "frameworks": ["SOC2", "PCI-DSS"],
                "assessment_type": "compliance-audit",
            }))
            .await
            .unwrap();
        assert!(out.contains("### SOC2 Compliance Status"));
        assert!(out.contains("### PCI-DSS Compliance Status"));
    }

    #[tokio::test]
    async fn risk_assessment_has_register() {
        let out = GrcManagement
            .execute(json!({"scope": "x", "assessment_type": "risk-assessment"}))
            .await
            .unwrap();
        assert!(out.contains("### Risk Register"));
        assert!(out.contains("| Ransomware | Medium | High | 12 | Backups, EDR |"));
    }
}
