//! Ideation session scaffolds.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum Method {
    FreeForm,
    Structured,
    Brainwriting,
}

impl Method {
    fn label(self) -> &'static str {
        match self {
            Self::FreeForm => "free-form",
            Self::Structured => "structured",
            Self::Brainwriting => "brainwriting",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    topic: String,
    #[serde(default)]
    method: Option<Method>,
    #[serde(default)]
    constraints: Option<String>,
}

pub struct Brainstorming;

#[async_trait]
impl Tool for Brainstorming {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_skill_brainstorming".into(),
            description: "Creative brainstorming skill for generating ideas. Supports \
                          free-form, structured, and brainwriting methods."
                .into(),
            input_schema: object_schema(
                vec![
                    ("topic", string_prop("Topic or problem to brainstorm")),
                    (
                        "method",
                        enum_prop(
                            "Brainstorming method. Default: structured",
                            &["free-form", "structured", "brainwriting"],
                        ),
                    ),
                    ("constraints", string_prop("Any constraints or guidelines")),
                ],
                vec!["topic"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_skill_brainstorming")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let method = args.method.unwrap_or(Method::Structured);

    let mut out = String::from("# Brainstorming Session\n\n");
    out.push_str(&format!("**Topic:** {}\n", args.topic));
    out.push_str(&format!("**Method:** {}\n\n", method.label()));
    if let Some(constraints) = &args.constraints {
        out.push_str(&format!("**Constraints:** {constraints}\n\n"));
    }

    out.push_str("## Ideas Generated\n\n");
    match method {
        Method::FreeForm => out.push_str(&free_form_ideas(&args.topic)),
        Method::Structured => out.push_str(structured_ideas()),
        Method::Brainwriting => out.push_str(&brainwriting_ideas(&args.topic)),
    }

    out
}

fn free_form_ideas(topic: &str) -> String {
    format!(
        "### Free-Form Ideation

**Idea 1:** [Creative approach to {topic}]
**Idea 2:** [Alternative perspective on {topic}]
**Idea 3:** [Unconventional solution for {topic}]
**Idea 4:** [Hybrid approach combining multiple concepts]
**Idea 5:** [Disruptive innovation idea]

**Wild Ideas:**
- [Crazy but potentially brilliant idea]
- [Out-of-the-box thinking]
"
    )
}

fn structured_ideas() -> &'static str {
    "### Structured Ideation

**Category 1: Direct Solutions**
1. [Straightforward approach]
2. [Standard industry practice]

**Category 2: Innovative Approaches**
1. [Novel technology application]
2. [Creative process improvement]

**Category 3: Cost-Effective Options**
1. [Budget-friendly solution]
2. [Resource-efficient approach]

**Category 4: Scalable Solutions**
1. [Growth-oriented design]
2. [Enterprise-grade architecture]
"
}

fn brainwriting_ideas(topic: &str) -> String {
    format!(
        "### Brainwriting (6-3-5 Method)

**Round 1:**
- Participant 1: [Initial idea for {topic}]
- Participant 2: [Different angle]
- Participant 3: [Another perspective]

**Round 2 (Building on Round 1):**
- Enhanced Idea 1: [Refinement]
- Enhanced Idea 2: [Extension]
- Enhanced Idea 3: [Combination]

**Round 3 (Synthesis):**
- Final Concept 1: [Polished version]
- Final Concept 2: [Alternative direction]
- Final Concept 3: [Optimal solution]
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn structured_is_the_default_method() {
        let out = Brainstorming
            .execute(json!({"topic": "faster onboarding"}))
            .await
            .unwrap();
        assert!(out.contains("**Method:** structured"));
        assert!(out.contains("### Structured Ideation"));
    }

    #[tokio::test]
    async fn brainwriting_uses_635_rounds() {
        let out = Brainstorming
            .execute(json!({"topic": "faster onboarding", "method": "brainwriting"}))
            .await
            .unwrap();
        assert!(out.contains("Brainwriting (6-3-5 Method)"));
        assert!(out.contains("**Round 3 (Synthesis):**"));
    }

    #[tokio::test]
    async fn constraints_render_when_given() {
        let out = Brainstorming
            .execute(json!({"topic": "t", "constraints": "no new vendors"}))
            .await
            .unwrap();
        assert!(out.contains("**Constraints:** no new vendors"));
    }
}
