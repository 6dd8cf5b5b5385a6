//! Chief security officer: executive strategy, phased roadmap, and
//! risk-prioritized BDD control backlog for an organization.

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use promptdeck_mcp::tools::{bool_prop, object_schema, string_array_prop, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Args {
    organization_context: String,
    #[serde(default)]
    security_concerns: Vec<String>,
    #[serde(default)]
    budget: Option<String>,
    #[serde(default)]
    prioritize_bdd_stories: Option<bool>,
}

pub struct Cso;

#[async_trait]
impl Tool for Cso {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_cso".into(),
            description: "Chief Security Officer for executive security strategy and \
                          governance. Includes BDD story prioritization. Manages security \
                          programs, budgets, and compliance. Outputs: Security Strategy and \
                          Roadmap."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "organization_context",
                        string_prop(
                            "Organization description, size, industry, current security posture",
                        ),
                    ),
                    (
                        "security_concerns",
                        string_array_prop("Specific security concerns or initiatives"),
                    ),
                    (
                        "budget",
                        string_prop("Budget constraints or target (e.g., \"$5M annually\")"),
                    ),
                    (
                        "prioritize_bdd_stories",
                        bool_prop("Generate risk-prioritized BDD story roadmap (default: true)"),
                    ),
                ],
                vec!["organization_context"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_cso")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let concerns = &args.security_concerns;

    let mut out = String::from("# Chief Security Officer (CSO) - Security Strategy\n\n");
    out.push_str(&format!(
        "## Organization Context\n{}\n\n",
        args.organization_context
    ));

    if let Some(budget) = &args.budget {
        out.push_str(&format!("## Budget\n{budget}\n\n"));
    }

    if !concerns.is_empty() {
        out.push_str("## Security Concerns\n");
        for concern in concerns {
            out.push_str(&format!("- {concern}\n"));
        }
        out.push('\n');
    }

    out.push_str("## Executive Security Strategy\n\n");
    out.push_str(&security_strategy(concerns));

    out.push_str("\n## Security Program Roadmap\n\n");
    out.push_str(security_roadmap());

    if args.prioritize_bdd_stories.unwrap_or(true) {
        out.push_str("\n## BDD Security Story Prioritization\n\n");
        out.push_str(bdd_prioritization());
    }

    out
}

fn security_strategy(concerns: &[String]) -> String {
    let mut strategy = format!(
        "**Document Type:** Enterprise Security Strategy
**Generated:** {}
**Executive Level:** C-Suite

### 1. Executive Summary

**Vision:** Establish a robust security posture that enables business growth while protecting critical assets.

**Mission:** Implement defense-in-depth security controls, maintain compliance, and cultivate a security-aware culture.

**Strategic Objectives:**
1. Achieve compliance with industry regulations
2. Reduce security risk to acceptable levels
3. Enable secure digital transformation
4. Build resilient security operations
5. Develop security-aware workforce

### 2. Security Framework

**Primary Framework:** NIST Cybersecurity Framework

**Core Functions:**
1. **Identify:** Asset management, risk assessment
2. **Protect:** Access control, data security, awareness training
3. **Detect:** Continuous monitoring, anomaly detection
4. **Respond:** Incident response, communication
5. **Recover:** Recovery planning, business continuity

### 3. Risk Management

**Risk Appetite Statement:**
- Zero tolerance for compliance violations
- Low tolerance for critical data breaches
- Moderate tolerance for operational disruptions
- Calculated risks for innovation initiatives

**Top Risks:**
",
        Utc::now().format("%Y-%m-%d"),
    );

    if concerns.is_empty() {
        strategy.push_str(
            "1. Data breaches and unauthorized access
2. Ransomware and malware attacks
3. Insider threats
4. Supply chain vulnerabilities
5. Cloud security misconfiguration
",
        );
    } else {
        for (i, concern) in concerns.iter().enumerate() {
            strategy.push_str(&format!("{}. {concern}\n", i + 1));
        }
    }
    strategy.push('\n');

    strategy.push_str(
        "### 4. Governance Structure

**Security Leadership:**
```
[Board of Directors]
         |
    [CEO/CIO]
         |
       [CSO] <-- Security Strategy
    _____|_____
   |     |     |
 [Sec   [GRC  [Ops
  Arch]  Team] Team]
```

**Reporting:**
- **Board:** Quarterly risk reports
- **Executive Team:** Monthly security dashboard
- **Audit Committee:** Compliance status

### 5. Compliance Program

**Regulatory Requirements:**
- Industry-specific regulations (HIPAA, PCI-DSS, SOX, etc.)
- Data privacy laws (GDPR, CCPA)
- Security standards (ISO 27001, SOC 2)

**Compliance Management:**
- Annual audits and assessments
- Continuous compliance monitoring
- Policy review and updates
- Evidence collection and documentation

### 6. Security Architecture

**Principles:**
- **Zero Trust:** Never trust, always verify
- **Defense in Depth:** Layered security controls
- **Least Privilege:** Minimum necessary access
- **Secure by Design:** Security built-in from start

**Technology Stack:**
- **Identity & Access:** MFA, SSO, PAM
- **Network Security:** Firewall, IDS/IPS, WAF
- **Endpoint Protection:** EDR, DLP, encryption
- **Cloud Security:** CSPM, CWPP, CASB
- **Security Operations:** SIEM, SOAR, Threat Intel

### 7. Team & Organization

**Security Team Structure:**
- Security Architecture (design & standards)
- Security Operations (monitoring & response)
- GRC Team (compliance & risk)
- Security Engineering (implementation)
- Security Awareness (training & culture)

**Staffing Plan:**
- Current headcount: [TBD]
- Target headcount: [Based on organization size]
- Key roles to hire: [Based on gaps]

",
    );

    strategy
}

fn security_roadmap() -> &'static str {
    "**12-18 Month Security Roadmap**

### Phase 1: Foundation (Months 1-3)

**Objective:** Establish baseline security posture

**Initiatives:**
1. **Security Assessment**
   - Conduct comprehensive security audit
   - Identify critical gaps
   - Prioritize remediation

2. **Policy & Governance**
   - Define security policies
   - Establish governance framework
   - Create compliance baseline

3. **Quick Wins**
   - Enable MFA organization-wide
   - Implement endpoint protection
   - Deploy security awareness training

**Metrics:**
- Security assessment completed
- Policies published and approved
- MFA adoption >95%

---

### Phase 2: Build (Months 4-9)

**Objective:** Implement core security controls

**Initiatives:**
1. **Identity & Access Management**
   - Deploy SSO solution
   - Implement RBAC
   - Privileged access management

2. **Security Operations**
   - Deploy SIEM platform
   - Establish SOC (Security Operations Center)
   - Implement incident response procedures

3. **Application Security**
   - Integrate SAST/DAST in CI/CD
   - Security code review process
   - Vulnerability management program

4. **Cloud Security**
   - Cloud security posture management
   - Container security
   - Cloud access security broker

**Metrics:**
- SSO deployment: 100% coverage
- SOC operational 24/7
- Security scans in all pipelines

---

### Phase 3: Mature (Months 10-18)

**Objective:** Achieve security maturity and resilience

**Initiatives:**
1. **Advanced Threat Protection**
   - Threat hunting program
   - Threat intelligence integration
   - Deception technology

2. **Zero Trust Architecture**
   - Microsegmentation
   - Software-defined perimeter
   - Continuous verification

3. **Compliance Excellence**
   - Achieve certifications (ISO 27001, SOC 2)
   - Continuous compliance monitoring
   - Automated evidence collection

4. **Security Culture**
   - Security champions program
   - Gamified training
   - Regular phishing simulations

**Metrics:**
- Zero Trust maturity level 3+
- Certifications achieved
- Security awareness >90%

---

### Budget & Resources

**Investment Areas:**
- Technology & Tools: 40%
- Personnel & Training: 35%
- Professional Services: 15%
- Compliance & Audit: 10%

**Success Metrics (18 months):**
- [ ] Zero critical security incidents
- [ ] 100% compliance with regulations
- [ ] Mean time to detect (MTTD) <15 minutes
- [ ] Mean time to respond (MTTR) <1 hour
- [ ] Security awareness score >85%
- [ ] Certifications obtained

---
*Executive security strategy ready for board presentation and execution*
"
}

fn bdd_prioritization() -> &'static str {
    "*Strategic risk-based prioritization of security controls using BDD methodology*

### Priority 1: Critical (P1) - Immediate Action Required
**Timeline:** 0-3 months | **Budget:** 30% of total security spend

**IAM Controls:**
1. [ ] **MFA Enforcement** - \"As a CISO, I want MFA on all accounts, so that credential theft is prevented\"
   - Risk: CRITICAL | Framework: CIS 6.3, NIST PR.AC-7
   - Impact: Prevents 99.9% of account takeovers

2. [ ] **Privileged Access Management (PAM)** - \"As a CISO, I want PAM for all admin accounts, so that privilege escalation is controlled\"
   - Risk: CRITICAL | Framework: CIS 6.8, NIST PR.AC-4
   - Impact: Reduces insider threat by 80%

**Data Protection:**
3. [ ] **Encryption at Rest** - \"As a CISO, I want all sensitive data encrypted at rest, so that data breaches don't expose PII\"
   - Risk: CRITICAL | Framework: CIS 3.11, NIST PR.DS-1
   - Compliance: HIPAA, PCI-DSS, GDPR

### Priority 2: High (P2) - Quarterly Roadmap
**Timeline:** 3-6 months | **Budget:** 25% of total security spend

4. [ ] **SIEM Deployment** - \"As a CISO, I want a SIEM for log aggregation, so that threats are detected in real-time\"
   - Risk: HIGH | Framework: CIS 8.11, NIST DE.AE-3
   - Mean Time to Detect: <15 minutes

5. [ ] **Network Segmentation** - \"As a CISO, I want network segmentation with VLANs, so that lateral movement is prevented\"
   - Risk: HIGH | Framework: CIS 12.2, NIST PR.AC-5
   - Impact: Limits breach scope by 90%

### Priority 3: Medium (P3) - Annual Roadmap
**Timeline:** 6-12 months | **Budget:** 20% of total security spend

6. [ ] **DevSecOps Pipeline** - \"As a CISO, I want security scans in CI/CD, so that vulnerabilities are caught early\"
   - Risk: MEDIUM | Framework: CIS 16.3, NIST PR.IP-7
   - Tools: SAST, DAST, SCA

### Board Reporting Metrics

- % of P1 stories complete: Target 100% within 3 months
- Risk reduction: Measured monthly
- Compliance gaps: Tracked by framework
- Security ROI: Cost avoidance from prevented incidents

---
*Strategic BDD prioritization ready for executive review and resource allocation*
"
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn default_risks_when_no_concerns() {
        let out = Cso
            .execute(json!({"organization_context": "mid-size fintech"}))
            .await
            .unwrap();
        assert!(out.contains("1. Data breaches and unauthorized access"));
        assert!(out.contains("## BDD Security Story Prioritization"));
    }

    #[tokio::test]
    async fn concerns_replace_default_risk_list() {
        let out = Cso
            .execute(json!({
                "organization_context": "hospital network",
                "security_concerns": ["legacy VPN", "phishing"],
                "budget": "$2M annually",
            }))
            .await
            .unwrap();
        assert!(out.contains("## Budget\n$2M annually"));
        assert!(out.contains("1. legacy VPN\n2. phishing"));
        assert!(!out.contains("Ransomware and malware attacks"));
    }

    #[tokio::test]
    async fn prioritization_can_be_disabled() {
        let out = Cso
            .execute(json!({
                "organization_context": "startup",
                "prioritize_bdd_stories": false,
            }))
            .await
            .unwrap();
        assert!(!out.contains("## BDD Security Story Prioritization"));
        assert!(out.contains("## Security Program Roadmap"));
    }
}
