//! Technical blueprint designer: converts a PRD into an architecture
//! document with a tech stack matched to the detected project type.

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

use crate::excerpt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ProjectType {
    WebApp,
    MobileApp,
    Api,
    Cli,
    Desktop,
    FullStack,
}

impl ProjectType {
    fn label(self) -> &'static str {
        match self {
            Self::WebApp => "web-app",
            Self::MobileApp => "mobile-app",
            Self::Api => "api",
            Self::Cli => "cli",
            Self::Desktop => "desktop",
            Self::FullStack => "full-stack",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    prd: String,
    #[serde(default)]
    project_type: Option<ProjectType>,
    #[serde(default)]
    constraints: Option<String>,
}

pub struct Architect;

#[async_trait]
impl Tool for Architect {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_architect".into(),
            description: "Technical blueprint designer that converts PRDs into architecture \
                          documents. Defines tech stack, coding standards, and creates sharded \
                          context. Outputs: Architecture Document."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "prd",
                        string_prop("Product Requirements Document from the Product Manager"),
                    ),
                    (
                        "project_type",
                        enum_prop(
                            "Type of project to architect. Default: auto-detect",
                            &["web-app", "mobile-app", "api", "cli", "desktop", "full-stack"],
                        ),
                    ),
                    (
                        "constraints",
                        string_prop(
                            "Technical constraints (e.g., must use Python, serverless only)",
                        ),
                    ),
                ],
                vec!["prd"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_architect")?;
        Ok(render(&args))
    }
}

fn detect_project_type(prd: &str) -> ProjectType {
    let lower = prd.to_lowercase();
    if lower.contains("mobile app") || lower.contains("ios") || lower.contains("android") {
        ProjectType::MobileApp
    } else if lower.contains("api") || lower.contains("rest") || lower.contains("graphql") {
        ProjectType::Api
    } else if lower.contains("command line") || lower.contains("cli") || lower.contains("terminal")
    {
        ProjectType::Cli
    } else if lower.contains("desktop") || lower.contains("electron") {
        ProjectType::Desktop
    } else if lower.contains("full-stack")
        || (lower.contains("frontend") && lower.contains("backend"))
    {
        ProjectType::FullStack
    } else {
        ProjectType::WebApp
    }
}

fn render(args: &Args) -> String {
    let project_type = args
        .project_type
        .unwrap_or_else(|| detect_project_type(&args.prd));

    let mut out = String::from("# Architect - Technical Blueprint\n\n");
    out.push_str(&format!("## Input: PRD\n{}\n\n", excerpt(&args.prd, 500)));
    out.push_str(&format!(
        "## Detected Project Type: {}\n\n",
        project_type.label().to_uppercase()
    ));

    if let Some(constraints) = &args.constraints {
        out.push_str(&format!("## Technical Constraints\n{constraints}\n\n"));
    }

    out.push_str("## Architecture Document\n\n");
    out.push_str(&architecture(project_type));

    out
}

fn architecture(project_type: ProjectType) -> String {
    let mut arch = format!(
        "**Document Type:** Architecture Document
**Project Type:** {}
**Generated:** {}

### 1. Technology Stack

",
        project_type.label(),
        Utc::now().format("%Y-%m-%d"),
    );

    arch.push_str(tech_stack(project_type));
    arch.push_str("\n### 2. System Architecture\n\n");
    arch.push_str(system_architecture(project_type));

    arch.push_str(
        "\n### 3. Data Architecture
- **Database:** [Specify: PostgreSQL, MongoDB, etc.]
- **Caching:** [Redis, Memcached, or None]
- **Storage:** [AWS S3, local filesystem, etc.]

### 4. API Design
- **Protocol:** REST / GraphQL / gRPC
- **Authentication:** JWT / OAuth 2.0 / API Keys
- **Rate Limiting:** Yes / No

### 5. Security Architecture
- **Authentication & Authorization**
- **Data Encryption** (at rest and in transit)
- **Input Validation**
- **CSRF/XSS Protection**

### 6. Coding Standards
- **Code Style:** [Specify linter/formatter]
- **Documentation:** JSDoc / Python docstrings / etc.
- **Testing:** Unit tests required (>80% coverage)
- **Git Workflow:** Feature branches + PR reviews

### 7. Deployment Strategy
- **Environment:** Development, then Staging, then Production
- **CI/CD:** GitHub Actions / GitLab CI / Jenkins
- **Hosting:** [Cloud provider or on-premise]
- **Monitoring:** Logging + metrics + alerting

### 8. Context Sharding (Files for Developer)
The following context files will be created:
- `coding_standards.md` - Detailed coding conventions
- `tech_stack.md` - Complete technology specifications
- `source_tree.md` - Project structure and file organization

---
*This Architecture Document serves as input to the Developer*
",
    );

    arch
}

fn tech_stack(project_type: ProjectType) -> &'static str {
    match project_type {
        ProjectType::WebApp => {
            "**Frontend:**
- Framework: React 18+ / Vue 3+ / Next.js
- Language: TypeScript
- Styling: Tailwind CSS / CSS Modules
- State: Redux / Zustand / React Context

**Backend:**
- Runtime: Node.js 20+ / Python 3.11+
- Framework: Express / FastAPI / NestJS
- Language: TypeScript / Python
"
        }
        ProjectType::MobileApp => {
            "**Framework:** React Native / Flutter / Swift (iOS) / Kotlin (Android)
**Language:** TypeScript / Dart / Swift / Kotlin
**State Management:** Redux / Provider / MobX
**API Client:** Axios / Fetch
"
        }
        ProjectType::Api => {
            "**Runtime:** Node.js 20+ / Python 3.11+ / Go 1.21+
**Framework:** Express / FastAPI / Gin / NestJS
**Language:** TypeScript / Python / Go
**Documentation:** OpenAPI/Swagger
"
        }
        ProjectType::Cli => {
            "**Language:** Python / Node.js / Go / Rust
**Framework:** Click / Commander / Cobra / Clap
**Package Manager:** pip / npm / go mod / cargo
"
        }
        ProjectType::Desktop => {
            "**Framework:** Electron / Tauri / Qt
**Frontend:** React / Vue / Svelte
**Language:** TypeScript / Rust / C++
"
        }
        ProjectType::FullStack => {
            "**Frontend:** Next.js / Nuxt / SvelteKit
**Backend:** Node.js / Python / Go
**Database:** PostgreSQL / MongoDB
**Deployment:** Vercel / AWS / Docker
"
        }
    }
}

fn system_architecture(project_type: ProjectType) -> &'static str {
    match project_type {
        ProjectType::WebApp | ProjectType::FullStack => {
            "**Architecture Pattern:** MVC / Clean Architecture / Layered

**Layers:**
1. **Presentation Layer:** UI components, pages, routes
2. **Business Logic Layer:** Services, use cases, domain models
3. **Data Access Layer:** Repositories, database queries
4. **Infrastructure Layer:** External APIs, file system, caching

**Communication:** RESTful API / GraphQL between frontend and backend
"
        }
        _ => {
            "**Architecture Pattern:** Modular / Component-based
**Structure:** [Define based on project type]
"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_type_detection_by_keyword() {
        assert_eq!(detect_project_type("an iOS mobile app"), ProjectType::MobileApp);
        assert_eq!(detect_project_type("a REST api for billing"), ProjectType::Api);
        assert_eq!(detect_project_type("terminal tool"), ProjectType::Cli);
        assert_eq!(detect_project_type("electron editor"), ProjectType::Desktop);
        assert_eq!(
            detect_project_type("frontend and backend in one repo"),
            ProjectType::FullStack
        );
        assert_eq!(detect_project_type("a dashboard site"), ProjectType::WebApp);
    }

    #[tokio::test]
    async fn cli_projects_get_cli_stack() {
        let out = Architect
            .execute(json!({"prd": "build me something", "project_type": "cli"}))
            .await
            .unwrap();
        assert!(out.contains("## Detected Project Type: CLI"));
        assert!(out.contains("Click / Commander / Cobra / Clap"));
        assert!(out.contains("### 8. Context Sharding"));
    }

    #[tokio::test]
    async fn constraints_section_only_when_given() {
        let out = Architect
            .execute(json!({"prd": "web dashboard", "constraints": "serverless only"}))
            .await
            .unwrap();
        assert!(out.contains("## Technical Constraints\nserverless only"));
    }
}
