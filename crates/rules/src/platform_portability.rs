//! Cross-platform compatibility validation.

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
    target_platforms: Option<Vec<String>>,
}

pub struct PlatformPortability;

#[async_trait]
impl Tool for PlatformPortability {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_rule_platform_portability".into(),
            description: "Validates platform portability and cross-platform compatibility. \
                          Ensures architecture works across web, mobile, desktop, and cloud \
                          environments."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "architecture",
                        string_prop("Architecture description or design to validate"),
                    ),
                    (
                        "target_platforms",
                        string_array_prop("Target platforms (web, mobile, desktop, cloud)"),
                    ),
                ],
                vec!["architecture"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_rule_platform_portability")?;
        anyhow::ensure!(
            !args.architecture.trim().is_empty(),
            "architecture must not be empty"
        );
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let platforms = args
        .target_platforms
        .clone()
        .unwrap_or_else(|| vec!["web".into(), "mobile".into(), "desktop".into()]);

    let mut out = String::from("# Platform Portability Validation\n\n");
    out.push_str("**Rule:** Platform Portability\n");
    out.push_str(&format!("**Target Platforms:** {}\n\n", platforms.join(", ")));

    out.push_str(
        "## Validation Checklist

### Core Requirements
- [ ] Platform-agnostic data layer
- [ ] Abstracted UI components
- [ ] Cross-platform authentication
- [ ] Unified API contracts
- [ ] Platform-neutral storage

",
    );

    for platform in &platforms {
        out.push_str(&format!("### {} Platform\n", title_case(platform)));
        out.push_str(platform_checklist(platform));
    }

    out.push_str(
        "## Portability Patterns

### Recommended Approach
1. **Layered Architecture:**
   - Presentation Layer (platform-specific)
   - Business Logic Layer (shared)
   - Data Access Layer (abstracted)

2. **Abstraction Strategies:**
   - Interface-based design
   - Dependency injection
   - Platform adapters
   - Feature flags

3. **Technology Choices:**
   - Cross-platform frameworks (React, Flutter)
   - Platform-agnostic APIs (REST, GraphQL)
   - Universal authentication (OAuth, JWT)
   - Cloud-neutral storage (S3-compatible)

## Compliance Assessment

**Status:** Review Required

**Recommendations:**
1. Implement platform abstraction layer
2. Use cross-platform UI framework
3. Create platform-specific adapters
4. Test on all target platforms
",
    );

    out
}

fn platform_checklist(platform: &str) -> &'static str {
    match platform {
        "web" => {
            "- [ ] Responsive design (mobile, tablet, desktop)
- [ ] Browser compatibility (Chrome, Firefox, Safari, Edge)
- [ ] Progressive Web App (PWA) capabilities
- [ ] Offline support

"
        }
        "mobile" => {
            "- [ ] iOS compatibility (iOS 14+)
- [ ] Android compatibility (API 21+)
- [ ] React Native / Flutter considered
- [ ] Mobile-specific UX patterns

"
        }
        "desktop" => {
            "- [ ] Electron or Tauri framework
- [ ] Windows compatibility
- [ ] macOS compatibility
- [ ] Linux compatibility

"
        }
        "cloud" => {
            "- [ ] Cloud-native architecture
- [ ] Multi-cloud support (AWS, Azure, GCP)
- [ ] Containerization (Docker)
- [ ] Kubernetes orchestration

"
        }
        _ => "\n",
    }
}

pub(crate) fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn defaults_to_three_platforms() {
        let out = PlatformPortability
            .execute(json!({"architecture": "layered monolith"}))
            .await
            .unwrap();
        assert!(out.contains("**Target Platforms:** web, mobile, desktop"));
        assert!(out.contains("### Web Platform"));
        assert!(out.contains("### Desktop Platform"));
        assert!(!out.contains("Kubernetes"));
    }

    #[tokio::test]
    async fn cloud_platform_gets_cloud_checklist() {
        let out = PlatformPortability
            .execute(json!({"architecture": "svc", "target_platforms": ["cloud"]}))
            .await
            .unwrap();
        assert!(out.contains("### Cloud Platform"));
        assert!(out.contains("Kubernetes orchestration"));
    }

    #[tokio::test]
    async fn missing_architecture_is_an_error() {
        let err = PlatformPortability.execute(json!({})).await.unwrap_err();
        assert!(err.to_string().contains("promptdeck_rule_platform_portability"));
    }
}
