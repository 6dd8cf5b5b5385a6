//! Zero trust posture validation. Maturity is scored from the number of
//! implemented controls, ten points each, capped at 100.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{object_schema, string_array_prop, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Args {
    architecture: String,
    #[serde(default)]
    controls: Option<Vec<String>>,
}

pub struct ZeroTrust;

#[async_trait]
impl Tool for ZeroTrust {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_rule_zero_trust".into(),
            description: "Validates Zero Trust Architecture principles. Ensures \"never \
                          trust, always verify\" security posture with continuous \
                          authentication and least privilege access."
                .into(),
            input_schema: object_schema(
                vec![
                    ("architecture", string_prop("Security architecture description")),
                    ("controls", string_array_prop("Implemented security controls")),
                ],
                vec!["architecture"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_rule_zero_trust")?;
        anyhow::ensure!(
            !args.architecture.trim().is_empty(),
            "architecture must not be empty"
        );
        Ok(render(&args))
    }
}

fn maturity_score(controls: usize) -> usize {
    (controls * 10).min(100)
}

fn render(args: &Args) -> String {
    let controls = args.controls.as_deref().unwrap_or(&[]);

    let mut out = String::from("# Zero Trust Architecture Validation\n\n");
    out.push_str("**Rule:** Zero Trust Architecture (ZTA)\n");
    out.push_str("**Principle:** Never Trust, Always Verify\n");
    if !controls.is_empty() {
        out.push_str(&format!("**Controls Implemented:** {}\n", controls.len()));
    }
    out.push('\n');

    out.push_str(
        "## Zero Trust Principles

### 1. Verify Explicitly
- [ ] Multi-factor authentication (MFA)
- [ ] Continuous authentication
- [ ] Device posture checking
- [ ] User behavior analytics
- [ ] Risk-based adaptive authentication

### 2. Least Privilege Access
- [ ] Just-in-time (JIT) access
- [ ] Just-enough-access (JEA)
- [ ] Role-based access control (RBAC)
- [ ] Attribute-based access control (ABAC)
- [ ] Privileged Access Management (PAM)

### 3. Assume Breach
- [ ] Network segmentation
- [ ] Micro-segmentation
- [ ] Encryption everywhere
- [ ] Zero trust network access (ZTNA)
- [ ] Software-defined perimeter (SDP)

## Core Components

### Identity & Access Management
- Single Sign-On (SSO)
- Multi-Factor Authentication
- Identity Provider (IdP)
- Conditional access policies

### Network Security
- Network segmentation
- Micro-segmentation
- Software-defined networking
- Encrypted traffic (TLS 1.3+)

### Endpoint Security
- Endpoint Detection & Response (EDR)
- Device compliance checking
- Mobile Device Management (MDM)
- Endpoint encryption

### Data Security
- Data classification
- Data Loss Prevention (DLP)
- Encryption at rest
- Encryption in transit

### Monitoring & Analytics
- Security Information & Event Management (SIEM)
- User and Entity Behavior Analytics (UEBA)
- Continuous monitoring
- Automated threat response

## Implementation Maturity Model

### Level 1: Traditional (Perimeter-Based)
- Firewall-centric security
- VPN remote access
- Trust internal network
**Status:** Not Zero Trust

### Level 2: Advanced (Partial ZT)
- MFA enabled
- Some segmentation
- Basic monitoring
**Status:** Partial Zero Trust

### Level 3: Optimal (Full ZT)
- Continuous verification
- Micro-segmentation
- Comprehensive monitoring
**Status:** Zero Trust

## NIST Zero Trust Architecture

**Based on NIST SP 800-207**

**Logical Components:**
1. Policy Engine (PE)
2. Policy Administrator (PA)
3. Policy Enforcement Point (PEP)

**Data Sources:**
- Identity management
- SIEM/UEBA
- Threat intelligence
- Data access policies

",
    );

    if !controls.is_empty() {
        out.push_str("## Implemented Controls\n\n");
        for control in controls {
            out.push_str(&format!("- {control}\n"));
        }
        out.push('\n');
    }

    let score = maturity_score(controls.len());
    out.push_str("## Compliance Assessment\n\n");
    out.push_str(&format!("**Zero Trust Maturity:** {score}%\n\n"));

    if score < 50 {
        out.push_str(
            "**Status:** NON-COMPLIANT
**Priority Actions:**
1. Implement MFA organization-wide
2. Deploy network segmentation
3. Enable EDR on all endpoints
4. Implement SIEM/logging
",
        );
    } else if score < 80 {
        out.push_str(
            "**Status:** PARTIALLY COMPLIANT
**Improvements Needed:**
1. Add micro-segmentation
2. Enhanced continuous monitoring
3. Implement UEBA
4. Deploy DLP solution
",
        );
    } else {
        out.push_str(
            "**Status:** COMPLIANT
**Maintain:**
1. Regular security assessments
2. Continuous improvement
3. Stay current with threats
4. Update policies regularly
",
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn controls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("control-{i}")).collect()
    }

    #[tokio::test]
    async fn zero_controls_is_non_compliant() {
        let out = ZeroTrust
            .execute(json!({"architecture": "flat network"}))
            .await
            .unwrap();
        assert!(out.contains("**Zero Trust Maturity:** 0%"));
        assert!(out.contains("**Status:** NON-COMPLIANT"));
    }

    #[tokio::test]
    async fn six_controls_is_partially_compliant() {
        let out = ZeroTrust
            .execute(json!({"architecture": "x", "controls": controls(6)}))
            .await
            .unwrap();
        assert!(out.contains("**Zero Trust Maturity:** 60%"));
        assert!(out.contains("**Status:** PARTIALLY COMPLIANT"));
    }

    #[tokio::test]
    async fn ten_controls_is_compliant() {
        let out = ZeroTrust
            .execute(json!({"architecture": "x", "controls": controls(10)}))
            .await
            .unwrap();
        assert!(out.contains("**Zero Trust Maturity:** 100%"));
        assert!(out.contains("**Status:** COMPLIANT"));
    }

    #[test]
    fn score_caps_at_100() {
        assert_eq!(maturity_score(14), 100);
    }
}
