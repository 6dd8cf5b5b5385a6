//! Scale-adaptive planner: turns a Project Brief into a PRD whose depth
//! matches the detected (or requested) planning track.

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

use crate::excerpt;

static COMPLEX_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)enterprise|compliance|security|multi|integration").expect("static regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum PlanningTrack {
    QuickFlow,
    AgileStandard,
    Enterprise,
}

impl PlanningTrack {
    fn label(self) -> &'static str {
        match self {
            Self::QuickFlow => "quick-flow",
            Self::AgileStandard => "agile-standard",
            Self::Enterprise => "enterprise",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    project_brief: String,
    #[serde(default)]
    planning_track: Option<PlanningTrack>,
    #[serde(default)]
    scope: Option<String>,
}

pub struct ProductManager;

#[async_trait]
impl Tool for ProductManager {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_product_manager".into(),
            description: "Scale-adaptive planner that converts Project Briefs into PRDs with \
                          user stories. Outputs: PRD."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "project_brief",
                        string_prop("Project Brief from the Analyst agent"),
                    ),
                    (
                        "planning_track",
                        enum_prop(
                            "Planning depth: quick-flow (< 2 weeks), agile-standard (2-12 \
                             weeks), enterprise (12+ weeks). Default: auto-detect",
                            &["quick-flow", "agile-standard", "enterprise"],
                        ),
                    ),
                    (
                        "scope",
                        string_prop("Specific scope constraints or focus areas"),
                    ),
                ],
                vec!["project_brief"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_product_manager")?;
        Ok(render(&args))
    }
}

fn detect_track(brief: &str) -> PlanningTrack {
    let word_count = brief.split_whitespace().count();
    if COMPLEX_TERMS.is_match(brief) || word_count > 1000 {
        PlanningTrack::Enterprise
    } else if word_count > 300 {
        PlanningTrack::AgileStandard
    } else {
        PlanningTrack::QuickFlow
    }
}

fn track_description(track: PlanningTrack) -> &'static str {
    match track {
        PlanningTrack::QuickFlow => {
            "
**Quick Flow** (Simple, well-understood projects)
- Duration: Days to 1-2 weeks
- Documentation: Minimal
- Ideal for: MVPs, prototypes, simple features"
        }
        PlanningTrack::AgileStandard => {
            "
**Agile Standard** (Standard projects with moderate complexity)
- Duration: 2-12 weeks
- Documentation: Full (PRD, Architecture, Stories)
- Ideal for: New applications, major features, refactoring"
        }
        PlanningTrack::Enterprise => {
            "
**Enterprise Track** (Large, complex, multi-team projects)
- Duration: 12+ weeks
- Documentation: Comprehensive + governance
- Ideal for: Enterprise systems, compliance-heavy, high-risk projects"
        }
    }
}

fn render(args: &Args) -> String {
    let track = args
        .planning_track
        .unwrap_or_else(|| detect_track(&args.project_brief));

    let mut out = String::from("# Product Manager - Requirements Definition\n\n");
    out.push_str(&format!(
        "## Input: Project Brief\n{}\n\n",
        excerpt(&args.project_brief, 500)
    ));
    out.push_str(&format!(
        "## Selected Planning Track: {}\n\n",
        track.label().to_uppercase()
    ));

    if let Some(scope) = &args.scope {
        out.push_str(&format!("## Scope Constraints\n{scope}\n\n"));
    }

    out.push_str("## Scale-Adaptive Intelligence\n");
    out.push_str(&format!(
        "Based on project complexity analysis, selected **{}** track:\n\n",
        track.label()
    ));
    out.push_str(track_description(track));

    out.push_str("\n\n## Product Requirements Document (PRD)\n\n");
    out.push_str(&prd(track));

    out
}

fn prd(track: PlanningTrack) -> String {
    let mut prd = format!(
        "**Document Type:** Product Requirements Document (PRD)
**Planning Track:** {}
**Generated:** {}

",
        track.label(),
        Utc::now().format("%Y-%m-%d"),
    );

    prd.push_str(
        "### 1. Executive Summary
[Synthesize project purpose and goals from Project Brief]

### 2. Goals and Objectives
**Primary Goal:** [Main objective]

**Success Metrics:**
- [Metric 1]
- [Metric 2]
- [Metric 3]

### 3. User Stories (Epics)

#### Epic 1: [Category]
**As a** [user type], **I want** [goal], **so that** [benefit].

**Acceptance Criteria:**
- [ ] [Criteria 1]
- [ ] [Criteria 2]

",
    );

    if track != PlanningTrack::QuickFlow {
        prd.push_str(
            "### 4. Functional Requirements
1. [Requirement 1]
2. [Requirement 2]
3. [Requirement 3]

### 5. Non-Functional Requirements
- **Performance:** [Specifications]
- **Security:** [Requirements]
- **Scalability:** [Targets]

",
        );
    }

    if track == PlanningTrack::Enterprise {
        prd.push_str(
            "### 6. Compliance Requirements
- [Framework 1: e.g., HIPAA, PCI DSS]
- [Framework 2]

### 7. Risk Assessment
| Risk | Impact | Mitigation |
|------|--------|------------|
| [Risk 1] | High | [Strategy] |

",
        );
    }

    let next_steps = match track {
        PlanningTrack::Enterprise => "8",
        PlanningTrack::QuickFlow => "4",
        PlanningTrack::AgileStandard => "6",
    };
    prd.push_str(&format!(
        "### {next_steps}. Next Steps
1. **Architect:** Create technical architecture
2. **UX Designer:** Design user experience (if applicable)
3. **Scrum Master:** Break down into Developer Stories

---
*This PRD serves as input to the Architect*
"
    ));

    prd
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keyword_or_length_selects_enterprise() {
        assert_eq!(
            detect_track("a small app with compliance requirements"),
            PlanningTrack::Enterprise
        );
        assert_eq!(detect_track("a todo list"), PlanningTrack::QuickFlow);

        let medium = "word ".repeat(400);
        assert_eq!(detect_track(&medium), PlanningTrack::AgileStandard);
    }

    #[tokio::test]
    async fn quick_flow_omits_deeper_sections() {
        let out = ProductManager
            .execute(json!({"project_brief": "tiny prototype", "planning_track": "quick-flow"}))
            .await
            .unwrap();
        assert!(out.contains("## Selected Planning Track: QUICK-FLOW"));
        assert!(!out.contains("### 5. Non-Functional Requirements"));
        assert!(out.contains("### 4. Next Steps"));
    }

    #[tokio::test]
    async fn enterprise_includes_risk_assessment() {
        let out = ProductManager
            .execute(json!({"project_brief": "multi-region platform", "planning_track": "enterprise"}))
            .await
            .unwrap();
        assert!(out.contains("### 7. Risk Assessment"));
        assert!(out.contains("### 8. Next Steps"));
    }

    #[tokio::test]
    async fn scope_constraints_rendered_when_given() {
        let out = ProductManager
            .execute(json!({
                "project_brief": "x",
                "planning_track": "agile-standard",
                "scope": "mobile only",
            }))
            .await
            .unwrap();
        assert!(out.contains("## Scope Constraints\nmobile only"));
    }
}
