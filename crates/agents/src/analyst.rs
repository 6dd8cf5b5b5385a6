//! Ideation coach: refines a raw idea through a structured brainstorming
//! workflow and emits a Project Brief for the product manager.

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum Workflow {
    SixThinkingHats,
    FiveWs,
}

impl Workflow {
    fn label(self) -> &'static str {
        match self {
            Self::SixThinkingHats => "Six Thinking Hats",
            Self::FiveWs => "Five W's",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    user_idea: String,
    #[serde(default)]
    workflow: Option<Workflow>,
    #[serde(default)]
    context: Option<String>,
}

pub struct Analyst;

#[async_trait]
impl Tool for Analyst {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_analyst".into(),
            description: "Reflective coach for ideation. Guides brainstorming with Six \
                          Thinking Hats or Five W's methodology. Outputs: Project Brief."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "user_idea",
                        string_prop("Raw idea, aspiration, or project concept to refine"),
                    ),
                    (
                        "workflow",
                        enum_prop(
                            "Brainstorming workflow to use. Default: six-thinking-hats",
                            &["six-thinking-hats", "five-ws"],
                        ),
                    ),
                    (
                        "context",
                        string_prop("Additional context or constraints for the ideation session"),
                    ),
                ],
                vec!["user_idea"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_analyst")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let workflow = args.workflow.unwrap_or(Workflow::SixThinkingHats);

    let mut out = String::from("# Analyst - Ideation Session\n\n");
    out.push_str(&format!("## User Idea\n{}\n\n", args.user_idea));

    if let Some(context) = &args.context {
        out.push_str(&format!("## Context\n{context}\n\n"));
    }

    out.push_str(&format!("## Workflow: {}\n\n", workflow.label()));
    match workflow {
        Workflow::SixThinkingHats => out.push_str(six_thinking_hats()),
        Workflow::FiveWs => out.push_str(five_ws()),
    }

    out.push_str("\n\n## Project Brief\n\n");
    out.push_str(&project_brief(&args.user_idea, workflow));

    out
}

fn six_thinking_hats() -> &'static str {
    "### White Hat: Facts & Information
**Objective Assessment:**
- What facts do we have about this idea?
- What information is missing?
- What data would support this concept?

### Red Hat: Emotions & Feelings
**Gut Reactions:**
- How do you feel about this idea?
- What's your initial emotional response?
- What excites you? What concerns you?

### Black Hat: Critical Judgment
**Risk Analysis:**
- What could go wrong?
- What are the weaknesses?
- What obstacles might we face?

### Yellow Hat: Positive Aspects
**Benefits & Value:**
- What are the benefits of this idea?
- Why would this work?
- What value does it create?

### Green Hat: Creativity & Alternatives
**Innovation:**
- What other options exist?
- How could we innovate here?
- What creative variations are possible?

### Blue Hat: Process Control
**Meta-Thinking:**
- What have we learned from this exercise?
- What's the next step?
- How should we proceed?

"
}

fn five_ws() -> &'static str {
    "### Who
**Stakeholders:**
- Who will use this?
- Who will be affected?
- Who has authority or influence?

### What
**Problem & Solution:**
- What is the problem?
- What would success look like?
- What are the constraints?

### Where
**Context:**
- Where will this be used?
- Where are the boundaries?
- Where does this fit in the larger system?

### When
**Timeline:**
- When is this needed?
- When are the critical milestones?
- When will each phase happen?

### Why
**Root Cause:**
- Why is this important?
- Why now?
- Why this approach?

"
}

fn project_brief(idea: &str, workflow: Workflow) -> String {
    format!(
        "**Generated:** {date}
**Method:** {method}

### Executive Summary
[Synthesize the analysis above into a concise summary]

### Problem Statement
[Core problem this idea addresses]

### Target Users
[Who will benefit from this]

### Proposed Solution
{idea}

### Key Insights
[Main takeaways from the {method} analysis]

### Next Steps
1. Refine requirements with Product Manager
2. Develop technical architecture
3. Create detailed user stories

---
*This Project Brief serves as input to the Product Manager*
",
        date = Utc::now().format("%Y-%m-%d"),
        method = workflow.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn defaults_to_six_thinking_hats() {
        let out = Analyst
            .execute(json!({"user_idea": "a recipe sharing app"}))
            .await
            .unwrap();
        assert!(out.contains("## Workflow: Six Thinking Hats"));
        assert!(out.contains("### Blue Hat: Process Control"));
        assert!(out.contains("a recipe sharing app"));
    }

    #[tokio::test]
    async fn five_ws_has_all_questions() {
        let out = Analyst
            .execute(json!({"user_idea": "bug triage bot", "workflow": "five-ws"}))
            .await
            .unwrap();
        for section in ["### Who", "### What", "### Where", "### When", "### Why"] {
            assert!(out.contains(section), "missing {section}");
        }
        assert!(out.contains("## Project Brief"));
    }

    #[tokio::test]
    async fn context_section_only_when_supplied() {
        let with = Analyst
            .execute(json!({"user_idea": "x", "context": "solo founder"}))
            .await
            .unwrap();
        assert!(with.contains("## Context\nsolo founder"));

        let without = Analyst.execute(json!({"user_idea": "x"})).await.unwrap();
        assert!(!without.contains("## Context"));
    }
}
