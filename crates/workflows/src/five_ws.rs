//! Five W's structured questioning. A focus area narrows the output to a
//! single section.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum FocusArea {
    Who,
    What,
    Where,
    When,
    Why,
    All,
}

impl FocusArea {
    fn label(self) -> &'static str {
        match self {
            Self::Who => "WHO",
            Self::What => "WHAT",
            Self::Where => "WHERE",
            Self::When => "WHEN",
            Self::Why => "WHY",
            Self::All => "Complete Analysis",
        }
    }

    fn covers(self, section: FocusArea) -> bool {
        self == Self::All || self == section
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    topic: String,
    #[serde(default)]
    focus_area: Option<FocusArea>,
}

pub struct FiveWs;

#[async_trait]
impl Tool for FiveWs {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_workflow_five_ws".into(),
            description: "Five W's (Who, What, Where, When, Why) structured questioning \
                          framework for comprehensive analysis."
                .into(),
            input_schema: object_schema(
                vec![
                    ("topic", string_prop("Topic or problem to analyze")),
                    (
                        "focus_area",
                        enum_prop(
                            "Specific W to focus on. Default: all",
                            &["who", "what", "where", "when", "why", "all"],
                        ),
                    ),
                ],
                vec!["topic"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_workflow_five_ws")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let focus = args.focus_area.unwrap_or(FocusArea::All);

    let mut out = String::from("# Five W's Analysis\n\n");
    out.push_str(&format!("**Topic:** {}\n", args.topic));
    out.push_str(&format!("**Focus:** {}\n\n", focus.label()));

    if focus.covers(FocusArea::Who) {
        out.push_str(
            "## Who

**Stakeholders:**
- Who will use this?
- Who will be affected?
- Who has authority or influence?
- Who are the decision makers?
- Who are the beneficiaries?
- Who might resist or oppose?

**Roles & Responsibilities:**
- Primary users: [Description]
- Secondary users: [Description]
- Administrators: [Description]
- Stakeholders: [Description]

",
        );
    }

    if focus.covers(FocusArea::What) {
        out.push_str(
            "## What

**Problem & Solution:**
- What is the problem?
- What would success look like?
- What are the constraints?
- What are the requirements?
- What are the deliverables?
- What resources are needed?

**Scope:**
- In scope: [List]
- Out of scope: [List]
- Dependencies: [List]

",
        );
    }

    if focus.covers(FocusArea::Where) {
        out.push_str(
            "## Where

**Context:**
- Where will this be used?
- Where are the boundaries?
- Where does this fit in the larger system?
- Where will it be deployed?
- Where are the integration points?

**Environment:**
- Physical location: [Description]
- Digital environment: [Description]
- Organizational context: [Description]

",
        );
    }

    if focus.covers(FocusArea::When) {
        out.push_str(
            "## When

**Timeline:**
- When is this needed?
- When are the critical milestones?
- When will each phase happen?
- When should we start?
- When is the deadline?

**Schedule:**
- Phase 1: [Timeframe]
- Phase 2: [Timeframe]
- Phase 3: [Timeframe]
- Launch: [Target date]

",
        );
    }

    if focus.covers(FocusArea::Why) {
        out.push_str(
            "## Why

**Root Cause:**
- Why is this important?
- Why now?
- Why this approach?
- Why not alternative solutions?
- Why are we the right team?

**Value Proposition:**
- Business value: [Description]
- User value: [Description]
- Strategic alignment: [Description]

",
        );
    }

    out.push_str("---\n\n## Summary\n\n");
    out.push_str(&format!(
        "By answering the Five W's for \"{}\", we have:\n",
        args.topic
    ));
    out.push_str(
        "- Identified all stakeholders (Who)
- Defined the problem and solution (What)
- Established the context (Where)
- Created a timeline (When)
- Understood the purpose (Why)

**Next Actions:**
1. Validate findings with stakeholders
2. Refine requirements based on analysis
3. Develop detailed implementation plan
4. Proceed to solution design
",
    );

    out
}
