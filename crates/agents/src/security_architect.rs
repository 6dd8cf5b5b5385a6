//! Security architect: threat model, security controls, and optional BDD
//! security stories for a described system.

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use promptdeck_mcp::tools::{bool_prop, object_schema, string_array_prop, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

use crate::excerpt;

#[derive(Debug, Deserialize)]
struct Args {
    system: String,
    #[serde(default)]
    security_requirements: Option<String>,
    #[serde(default)]
    compliance_frameworks: Vec<String>,
    #[serde(default)]
    generate_bdd_stories: Option<bool>,
}

pub struct SecurityArchitect;

#[async_trait]
impl Tool for SecurityArchitect {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_security_architect".into(),
            description: "Enterprise security architect that designs security controls, \
                          performs threat modeling, and ensures compliance. Outputs: Security \
                          Architecture Document."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "system",
                        string_prop("System description or architecture to secure"),
                    ),
                    (
                        "security_requirements",
                        string_prop("Specific security requirements or constraints"),
                    ),
                    (
                        "compliance_frameworks",
                        string_array_prop(
                            "Required compliance frameworks (e.g., HIPAA, PCI-DSS, SOC2)",
                        ),
                    ),
                    (
                        "generate_bdd_stories",
                        bool_prop("Generate BDD user stories from security controls (default: true)"),
                    ),
                ],
                vec!["system"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_security_architect")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let frameworks = &args.compliance_frameworks;

    let mut out = String::from("# Security Architect - Security Design\n\n");
    out.push_str(&format!(
        "## System Under Analysis\n{}\n\n",
        excerpt(&args.system, 500)
    ));

    if !frameworks.is_empty() {
        out.push_str("## Compliance Frameworks\n");
        for fw in frameworks {
            out.push_str(&format!("- {fw}\n"));
        }
        out.push('\n');
    }

    if let Some(requirements) = &args.security_requirements {
        out.push_str(&format!("## Security Requirements\n{requirements}\n\n"));
    }

    out.push_str("## Security Architecture Document\n\n");
    out.push_str(&security_architecture(frameworks));

    if args.generate_bdd_stories.unwrap_or(true) {
        out.push_str("\n## BDD Security Stories\n\n");
        out.push_str(&bdd_security_stories(frameworks));
    }

    out
}

fn security_architecture(frameworks: &[String]) -> String {
    let mut arch = format!(
        "**Document Type:** Security Architecture Document
**Generated:** {}
**Frameworks:** {}

### 1. Security Principles
- **Zero Trust Architecture:** Never trust, always verify
- **Defense in Depth:** Multiple layers of security
- **Least Privilege:** Minimum necessary access
- **Security by Design:** Built-in from the start

### 2. Threat Model

**STRIDE Analysis:**
- **S**poofing: Authentication mechanisms
- **T**ampering: Data integrity controls
- **R**epudiation: Audit logging
- **I**nformation Disclosure: Encryption, access controls
- **D**enial of Service: Rate limiting, scalability
- **E**levation of Privilege: Authorization checks

### 3. Security Controls

**Authentication & Authorization:**
- Multi-Factor Authentication (MFA)
- Role-Based Access Control (RBAC)
- JWT / OAuth 2.0
- Session management

**Data Protection:**
- Encryption at rest (AES-256)
- Encryption in transit (TLS 1.3)
- Data classification
- Secure key management

**Application Security:**
- Input validation
- Output encoding
- CSRF protection
- XSS prevention
- SQL injection prevention

**Network Security:**
- Firewall rules
- Network segmentation
- WAF (Web Application Firewall)
- DDoS protection

",
        Utc::now().format("%Y-%m-%d"),
        if frameworks.is_empty() {
            "General Best Practices".to_string()
        } else {
            frameworks.join(", ")
        },
    );

    if frameworks.iter().any(|f| f == "NIST-CSF" || f == "ISO-27001") {
        arch.push_str(
            "### 4. Compliance Controls
**Access Control:**
- User access reviews (quarterly)
- Privilege management
- Access logging

**Monitoring & Response:**
- SIEM integration
- Incident response plan
- Security metrics

",
        );
    }

    arch.push_str(
        "### 5. DevSecOps Integration
**Security in CI/CD:**
- SAST (Static Application Security Testing)
- DAST (Dynamic Application Security Testing)
- SCA (Software Composition Analysis)
- Container scanning
- Secret scanning

### 6. Security Testing
- Vulnerability scanning
- Penetration testing (annual)
- Security code review
- Threat modeling updates

### 7. Operational Security
- Patch management
- Security awareness training
- Incident response procedures
- Business continuity planning

---
*Security architecture ready for implementation and validation*
",
    );

    arch
}

fn bdd_security_stories(frameworks: &[String]) -> String {
    let mut stories = String::from(
        "*Generated from security architecture for automated testing*

### IAM Stories

- [ ] **As a Security Architect**, I want to ensure multi-factor authentication is required for all user accounts, so that unauthorized access is prevented.
  - **Framework Mapping:** CIS 6.3, NIST PR.AC-7, ISO A.9.4.2

- [ ] **As a Security Architect**, I want to implement role-based access control (RBAC), so that users only have access to resources they need.
  - **Framework Mapping:** CIS 6.8, NIST PR.AC-4, ISO A.9.4.1

### Data Protection Stories

- [ ] **As a Security Architect**, I want all sensitive data encrypted at rest using AES-256, so that data breaches do not expose sensitive information.
  - **Framework Mapping:** CIS 3.11, NIST PR.DS-1, ISO A.10.1.1

- [ ] **As a Security Architect**, I want all data in transit encrypted using TLS 1.3, so that network eavesdropping cannot intercept sensitive data.
  - **Framework Mapping:** CIS 3.10, NIST PR.DS-2, ISO A.10.1.2

### Application Security Stories

- [ ] **As a Security Architect**, I want all user inputs validated and sanitized, so that injection attacks are prevented.
  - **Framework Mapping:** OWASP A03, CIS 16.5

- [ ] **As a Security Architect**, I want CSRF protection enabled on all forms, so that cross-site request forgery attacks are blocked.
  - **Framework Mapping:** OWASP A01, CIS 16.11

### Network Security Stories

- [ ] **As a Security Architect**, I want network segmentation implemented with VLANs, so that lateral movement is restricted.
  - **Framework Mapping:** CIS 12.2, NIST PR.AC-5

- [ ] **As a Security Architect**, I want a web application firewall (WAF) deployed, so that common web attacks are blocked.
  - **Framework Mapping:** CIS 9.5, OWASP AppSec

### Monitoring Stories

- [ ] **As a Security Architect**, I want all authentication attempts logged, so that suspicious access can be detected.
  - **Framework Mapping:** CIS 8.2, NIST DE.CM-1, ISO A.12.4.1

- [ ] **As a Security Architect**, I want a SIEM solution deployed, so that security events are correlated and analyzed.
  - **Framework Mapping:** CIS 8.11, NIST DE.AE-3

",
    );

    if frameworks.iter().any(|f| f == "PCI-DSS") {
        stories.push_str(
            "### PCI-DSS Specific Stories

- [ ] **As a Security Architect**, I want cardholder data encrypted and tokenized, so that PCI-DSS 3.4 is satisfied.

- [ ] **As a Security Architect**, I want quarterly vulnerability scans performed, so that PCI-DSS 11.2 is satisfied.

",
        );
    }

    if frameworks.iter().any(|f| f == "HIPAA") {
        stories.push_str(
            "### HIPAA Specific Stories

- [ ] **As a Security Architect**, I want PHI encrypted both at rest and in transit, so that HIPAA Security Rule is satisfied.

- [ ] **As a Security Architect**, I want audit logs maintained for all PHI access, so that HIPAA audit requirements are met.

",
        );
    }

    stories.push_str(
        "---
*These BDD stories can be used by the Security Test Analyst to create automated tests*
",
    );

    stories
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn bdd_stories_generated_by_default() {
        let out = SecurityArchitect
            .execute(json!({"system": "payments platform"}))
            .await
            .unwrap();
        assert!(out.contains("**Frameworks:** General Best Practices"));
        assert!(out.contains("## BDD Security Stories"));
        assert!(out.contains("**STRIDE Analysis:**"));
    }

    #[tokio::test]
    async fn bdd_stories_can_be_disabled() {
        let out = SecurityArchitect
            .execute(json!({"system": "payments platform", "generate_bdd_stories": false}))
            .await
            .unwrap();
        assert!(!out.contains("## BDD Security Stories"));
    }

    #[tokio::test]
    async fn framework_specific_sections() {
        let out = SecurityArchitect
            .execute(json!({
                "system": "hospital records",
                "compliance_frameworks": ["HIPAA", "NIST-CSF"],
            }))
            .await
            .unwrap();
        assert!(out.contains("### 4. Compliance Controls"));
        assert!(out.contains("### HIPAA Specific Stories"));
        assert!(!out.contains("### PCI-DSS Specific Stories"));
    }
}
