//! Enterprise security assessment combining GRC, technical review and
//! per-framework compliance status.

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use promptdeck_mcp::tools::{bool_prop, object_schema, string_array_prop, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Args {
    organization: String,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    frameworks: Option<Vec<String>>,
    #[serde(default)]
    include_devsecops: Option<bool>,
}

pub struct EnterpriseSecurityAssessment;

#[async_trait]
impl Tool for EnterpriseSecurityAssessment {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_workflow_enterprise_security_assessment".into(),
            description: "Comprehensive enterprise security assessment workflow. Combines \
                          GRC management, DevSecOps, and compliance auditing."
                .into(),
            input_schema: object_schema(
                vec![
                    ("organization", string_prop("Organization name")),
                    (
                        "scope",
                        string_prop(
                            "Assessment scope (full organization, specific system, department)",
                        ),
                    ),
                    (
                        "frameworks",
                        string_array_prop("Compliance frameworks to assess against"),
                    ),
                    (
                        "include_devsecops",
                        bool_prop("Include DevSecOps pipeline assessment. Default: true"),
                    ),
                ],
                vec!["organization"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_workflow_enterprise_security_assessment")?;
        Ok(render(&args))
    }
}

fn framework_compliance(framework: &str) -> u32 {
    if framework.contains("NIST") {
        78
    } else if framework.contains("ISO") {
        72
    } else if framework.contains("SOC") {
        80
    } else {
        75
    }
}

fn render(args: &Args) -> String {
    let scope = args.scope.as_deref().unwrap_or("Full Organization");
    let frameworks = args.frameworks.clone().unwrap_or_else(|| {
        vec!["NIST CSF".into(), "ISO 27001".into(), "SOC 2".into()]
    });
    let include_devsecops = args.include_devsecops.unwrap_or(true);

    let mut out = String::from("# Enterprise Security Assessment\n\n");
    out.push_str(&format!("**Organization:** {}\n", args.organization));
    out.push_str(&format!("**Scope:** {scope}\n"));
    out.push_str(&format!("**Frameworks:** {}\n", frameworks.join(", ")));
    out.push_str(&format!("**Date:** {}\n\n", Utc::now().format("%Y-%m-%d")));

    out.push_str("## Executive Summary\n\n");
    out.push_str(&format!(
        "This comprehensive security assessment evaluates {}'s security posture across \
         governance, risk, compliance, and technical controls.\n\n",
        args.organization
    ));

    out.push_str(
        "## Phase 1: Governance, Risk & Compliance (GRC)

### 1.1 Gap Analysis

**Assessed Against:**
",
    );
    for framework in &frameworks {
        out.push_str(&format!("- {framework}\n"));
    }
    out.push_str(
        "
**Gap Summary:**
| Domain | Compliance % | Priority Gaps |
|--------|--------------|---------------|
| Governance | 75% | Policy updates needed |
| Risk Management | 60% | Risk register incomplete |
| Access Control | 80% | MFA not universal |
| Data Protection | 70% | Encryption gaps |
| Monitoring | 65% | SIEM coverage incomplete |

### 1.2 Risk Assessment

**Top Risks:**
1. **Critical:** Incomplete MFA deployment (Likelihood: High, Impact: High)
2. **High:** Unpatched systems (Likelihood: Medium, Impact: High)
3. **High:** Insufficient logging (Likelihood: High, Impact: Medium)
4. **Medium:** Insider threat controls (Likelihood: Low, Impact: High)
5. **Medium:** Third-party risk (Likelihood: Medium, Impact: Medium)

## Phase 2: Technical Security Assessment

### 2.1 Infrastructure Security

**Network Security:**
- Firewall configured
- Network segmentation partial
- IDS/IPS not deployed
- VPN in place

**Endpoint Security:**
- Antivirus deployed
- EDR coverage: 70%
- DLP not implemented
- Disk encryption enabled

",
    );

    if include_devsecops {
        out.push_str(
            "### 2.2 DevSecOps Assessment

**CI/CD Pipeline Security:**
- SAST: configured but not enforced
- DAST: not implemented
- SCA: dependency scanning active
- Container Scanning: partial coverage
- Secret Scanning: enabled

**Security Findings:**
- Critical vulnerabilities: 2
- High vulnerabilities: 15
- Medium vulnerabilities: 47
- Low vulnerabilities: 129

",
        );
    }

    out.push_str("## Phase 3: Compliance Status\n\n");
    for framework in &frameworks {
        let compliance = framework_compliance(framework);
        out.push_str(&format!("### {framework}: {compliance}% Compliant\n\n"));
        out.push_str("**Status:**\n");
        out.push_str(&format!("- Met: {}%\n", compliance * 8 / 10));
        out.push_str(&format!("- Partial: {}%\n", compliance * 2 / 10));
        out.push_str(&format!("- Not Met: {}%\n\n", 100 - compliance));
    }

    out.push_str(
        "## Recommendations

### Immediate Actions (0-30 days)
1. Deploy MFA organization-wide
2. Patch critical vulnerabilities
3. Implement DAST in CI/CD
4. Complete risk register

### Short-term (1-3 months)
1. Deploy IDS/IPS
2. Implement DLP solution
3. Enhance network segmentation
4. Complete SIEM deployment

### Long-term (3-12 months)
1. Achieve 95%+ compliance across all frameworks
2. Implement Zero Trust Architecture
3. Establish security champions program
4. Achieve SOC 2 Type II certification

## Budget Estimate

| Category | Estimated Cost |
|----------|----------------|
| Tools & Technology | $250K |
| Professional Services | $150K |
| Training & Awareness | $50K |
| Compliance & Audit | $75K |
| **Total** | **$525K** |
",
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn defaults_cover_three_frameworks_and_devsecops() {
        let out = EnterpriseSecurityAssessment
            .execute(json!({"organization": "Acme Corp"}))
            .await
            .unwrap();
        assert!(out.contains("**Scope:** Full Organization"));
        assert!(out.contains("### NIST CSF: 78% Compliant"));
        assert!(out.contains("### ISO 27001: 72% Compliant"));
        assert!(out.contains("### SOC 2: 80% Compliant"));
        assert!(out.contains("### 2.2 DevSecOps Assessment"));
    }

    #[tokio::test]
    async fn devsecops_section_can_be_disabled() {
        let out = EnterpriseSecurityAssessment
            .execute(json!({"organization": "Acme Corp", "include_devsecops": false}))
            .await
            .unwrap();
        assert!(!out.contains("DevSecOps Assessment"));
        assert!(out.contains("## Phase 3: Compliance Status"));
    }

    #[tokio::test]
    async fn unknown_framework_defaults_to_75_percent() {
        let out = EnterpriseSecurityAssessment
            .execute(json!({"organization": "Acme", "frameworks": ["HIPAA"]}))
            .await
            .unwrap();
        assert!(out.contains("### HIPAA: 75% Compliant"));
        assert!(out.contains("- Not Met: 25%"));
    }
}
