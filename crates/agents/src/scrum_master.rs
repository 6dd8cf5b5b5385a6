//! Scrum master: breaks a PRD (and optional UX design) into sprint-ready
//! developer stories with acceptance criteria.

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use promptdeck_mcp::tools::{number_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

use crate::excerpt;

#[derive(Debug, Deserialize)]
struct Args {
    prd: String,
    #[serde(default)]
    ux_design: Option<String>,
    #[serde(default)]
    sprint_duration: Option<u32>,
}

pub struct ScrumMaster;

#[async_trait]
impl Tool for ScrumMaster {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_scrum_master".into(),
            description: "Scrum Master that breaks down PRDs and UX designs into developer \
                          stories. Creates sprint-ready backlog. Outputs: Developer Stories \
                          with acceptance criteria."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "prd",
                        string_prop("Product Requirements Document from the Product Manager"),
                    ),
                    (
                        "ux_design",
                        string_prop("UX Design Document (optional, enhances story detail)"),
                    ),
                    (
                        "sprint_duration",
                        number_prop("Sprint duration in weeks (default: 2)"),
                    ),
                ],
                vec!["prd"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_scrum_master")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let sprint_duration = args.sprint_duration.unwrap_or(2);

    let mut out = String::from("# Scrum Master - Developer Stories\n\n");
    out.push_str("## Input\n");
    out.push_str(&format!("**PRD:** {}\n", excerpt(&args.prd, 300)));
    if args.ux_design.is_some() {
        out.push_str("**UX Design:** Provided\n");
    }
    out.push_str(&format!(
        "\n## Sprint Configuration\n**Sprint Duration:** {sprint_duration} weeks\n\
         **Story Point Scale:** Fibonacci (1, 2, 3, 5, 8, 13)\n\n"
    ));

    out.push_str("## Story Development Process\n\n");
    out.push_str(story_process());

    out.push_str("\n## Developer Stories\n\n");
    out.push_str(&developer_stories(args.ux_design.is_some()));

    out
}

fn story_process() -> &'static str {
    "### 1. Epic Breakdown
**Identify Epics:**
- Extract high-level features from PRD
- Group related functionality
- Prioritize by business value

### 2. Story Slicing
**Break Epics into Stories:**
- Each story = one vertical slice of functionality
- Stories are independently deliverable
- Size: completable in 1 sprint

### 3. Acceptance Criteria
**Define \"Done\":**
- Given-When-Then format
- Testable conditions
- Clear success metrics

### 4. Story Pointing
**Estimate Effort:**
- Complexity assessment
- Uncertainty factors
- Team capacity consideration
"
}

fn developer_stories(has_ux: bool) -> String {
    let mut stories = format!(
        "**Generated:** {}
**Format:** User Story with Acceptance Criteria

---

### Epic 1: Core Functionality

#### Story 1.1: [Feature Name]
**Priority:** High
**Story Points:** 5
**Sprint:** 1

**User Story:**
> As a [user type],
> I want [goal/desire],
> So that [benefit/value].

**Acceptance Criteria:**
- [ ] **Given** [context/precondition]
      **When** [action/event]
      **Then** [outcome/result]

- [ ] **Given** [context]
      **When** [action]
      **Then** [outcome]

**Technical Notes:**
- Implementation approach
- Dependencies (if any)
- API endpoints needed

**Definition of Done:**
- [ ] Code written and reviewed
- [ ] Unit tests passing (>80% coverage)
- [ ] Integration tests passing
- [ ] Documentation updated
- [ ] Deployed to staging

",
        Utc::now().format("%Y-%m-%d"),
    );

    if has_ux {
        stories.push_str(
            "**UX Reference:**
- See wireframe: [Component Name]
- Interaction pattern: [Pattern Type]

",
        );
    }

    stories.push_str(
        "---

#### Story 1.2: [Related Feature]
**Priority:** High
**Story Points:** 3
**Sprint:** 1

**User Story:**
> As a [user type],
> I want [goal],
> So that [benefit].

**Acceptance Criteria:**
- [ ] [Criteria 1]
- [ ] [Criteria 2]
- [ ] [Criteria 3]

---

### Epic 2: Secondary Features

#### Story 2.1: [Feature Name]
**Priority:** Medium
**Story Points:** 8
**Sprint:** 2

[Detailed story structure as above...]

---

## Sprint Planning

### Sprint 1 (High Priority)
- Story 1.1 (5 points)
- Story 1.2 (3 points)
- Story 1.3 (5 points)
**Total:** 13 points

### Sprint 2 (Medium Priority)
- Story 2.1 (8 points)
- Story 2.2 (5 points)
**Total:** 13 points

## Backlog Grooming Notes
- Stories ready for Sprint 1
- Stories 2.x need refinement
- Dependency: UX design finalization for Story 3.x

---
*Developer Stories ready for implementation*
",
    );

    stories
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn default_sprint_is_two_weeks() {
        let out = ScrumMaster
            .execute(json!({"prd": "a PRD"}))
            .await
            .unwrap();
        assert!(out.contains("**Sprint Duration:** 2 weeks"));
        assert!(!out.contains("**UX Reference:**"));
    }

    #[tokio::test]
    async fn ux_design_adds_reference_block() {
        let out = ScrumMaster
            .execute(json!({
                "prd": "a PRD",
                "ux_design": "wireframes",
                "sprint_duration": 3,
            }))
            .await
            .unwrap();
        assert!(out.contains("**Sprint Duration:** 3 weeks"));
        assert!(out.contains("**UX Design:** Provided"));
        assert!(out.contains("**UX Reference:**"));
    }
}
