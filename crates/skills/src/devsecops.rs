//! Pipeline security scan report.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ScanType {
    Sast,
    Dast,
    Sca,
    Container,
    Iac,
    All,
}

impl ScanType {
    fn label(self) -> &'static str {
        match self {
            Self::Sast => "sast",
            Self::Dast => "dast",
            Self::Sca => "sca",
            Self::Container => "container",
            Self::Iac => "iac",
            Self::All => "all",
        }
    }

    fn covers(self, scan: ScanType) -> bool {
        self == Self::All || self == scan
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    pipeline_stage: String,
    #[serde(default)]
    scan_type: Option<ScanType>,
}

pub struct DevSecOps;

#[async_trait]
impl Tool for DevSecOps {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_skill_devsecops".into(),
            description: "DevSecOps security integration skill. Provides security scanning, \
                          vulnerability detection, and remediation guidance for CI/CD \
                          pipelines."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "pipeline_stage",
                        string_prop("CI/CD pipeline stage (commit, build, test, deploy)"),
                    ),
                    (
                        "scan_type",
                        enum_prop(
                            "Security scan type. Default: all",
                            &["sast", "dast", "sca", "container", "iac", "all"],
                        ),
                    ),
                ],
                vec!["pipeline_stage"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_skill_devsecops")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let scan_type = args.scan_type.unwrap_or(ScanType::All);

    let mut out = String::from("# DevSecOps Security Report\n\n");
    out.push_str(&format!("**Pipeline Stage:** {}\n", args.pipeline_stage));
    out.push_str(&format!("**Scan Type:** {}\n\n", scan_type.label()));

    out.push_str("## Security Scans\n\n");

    if scan_type.covers(ScanType::Sast) {
        out.push_str(
            "### SAST (Static Application Security Testing)
**Tool:** SonarQube / Semgrep
**Findings:**
- Critical: 0
- High: 2 (SQL injection risks)
- Medium: 5 (Input validation)
- Low: 12 (Code smells)

",
        );
    }

    if scan_type.covers(ScanType::Dast) {
        out.push_str(
            "### DAST (Dynamic Application Security Testing)
**Tool:** OWASP ZAP / Burp Suite
**Findings:**
- Critical: 0
- High: 1 (Missing HTTPS)
- Medium: 3 (XSS vulnerabilities)
- Low: 8 (Information disclosure)

",
        );
    }

    if scan_type.covers(ScanType::Sca) {
        out.push_str(
            "### SCA (Software Composition Analysis)
**Tool:** Snyk / Dependabot
**Dependency Vulnerabilities:**
- Critical: 1 (log4j 2.14.0 -> 2.17.1)
- High: 3 (outdated libraries)
- Medium: 7 (known CVEs)
- Low: 15 (deprecated packages)

",
        );
    }

    if scan_type.covers(ScanType::Container) {
        out.push_str(
            "### Container Security
**Tool:** Trivy / Aqua Security
**Image Scan:**
- Base image vulnerabilities: 12
- Outdated packages: 8
- Misconfigurations: 3
- Secrets detected: 0

",
        );
    }

    if scan_type.covers(ScanType::Iac) {
        out.push_str(
            "### IaC Security
**Tool:** Checkov / tfsec
**Infrastructure as Code:**
- Security group too permissive: 2
- Unencrypted storage: 1
- Missing backups: 1
- IAM overprivileged: 3

",
        );
    }

    out.push_str(
        "## Remediation Priority
1. **Critical:** Update log4j dependency immediately
2. **High:** Fix SQL injection vulnerabilities
3. **High:** Enable HTTPS enforcement
4. **Medium:** Patch XSS vulnerabilities

## CI/CD Integration
```yaml
# .github/workflows/security.yml
name: Security Scans
on: [push, pull_request]
jobs:
  security:
    runs-on: ubuntu-latest
    steps:
      - name: SAST
        run: semgrep --config=auto
      - name: SCA
        run: snyk test
      - name: Container Scan
        run: trivy image myapp:latest
```
",
    );

    out
}
