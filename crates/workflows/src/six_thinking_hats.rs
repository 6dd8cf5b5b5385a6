//! Six hats multi-perspective analysis.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Args {
    topic: String,
    #[serde(default)]
    context: Option<String>,
}

pub struct SixThinkingHats;

#[async_trait]
impl Tool for SixThinkingHats {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_workflow_six_thinking_hats".into(),
            description: "Edward de Bono's Six Thinking Hats methodology for structured \
                          multi-perspective thinking. Analyzes topics from 6 different \
                          viewpoints."
                .into(),
            input_schema: object_schema(
                vec![
                    ("topic", string_prop("Topic or idea to analyze")),
                    ("context", string_prop("Additional context or background")),
                ],
                vec!["topic"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_workflow_six_thinking_hats")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let mut out = String::from("# Six Thinking Hats Analysis\n\n");
    out.push_str(&format!("**Topic:** {}\n", args.topic));
    if let Some(context) = &args.context {
        out.push_str(&format!("**Context:** {context}\n"));
    }
    out.push('\n');

    out.push_str(&format!(
        "## White Hat: Facts & Information

**Objective Assessment:**
- What facts do we have about \"{topic}\"?
- What information is missing?
- What data would support this concept?
- What are the measurable aspects?

## Red Hat: Emotions & Feelings

**Gut Reactions:**
- How do stakeholders feel about this?
- What's the initial emotional response?
- What excites people? What concerns them?
- What are the intuitions and hunches?

## Black Hat: Critical Judgment

**Risk Analysis:**
- What could go wrong?
- What are the weaknesses and vulnerabilities?
- What obstacles might we face?
- Why might this fail?
- What are the risks and downsides?

## Yellow Hat: Positive Aspects

**Benefits & Value:**
- What are the benefits of this idea?
- Why would this work?
- What value does it create?
- What are the opportunities?
- What's the best-case scenario?

## Green Hat: Creativity & Alternatives

**Innovation:**
- What other options exist?
- How could we innovate here?
- What creative variations are possible?
- What if we approached this differently?
- What are the alternative solutions?

## Blue Hat: Process Control

**Meta-Thinking:**
- What have we learned from this exercise?
- What's the summary of our thinking?
- What's the next step?
- How should we proceed?
- What decisions need to be made?

---

## Synthesis

**Balanced Perspective:**
After examining \"{topic}\" from six different perspectives, we can now make a more informed decision that considers:
- Facts and data (White)
- Emotions and intuition (Red)
- Risks and challenges (Black)
- Benefits and opportunities (Yellow)
- Creative alternatives (Green)
- Overall process and next steps (Blue)

**Recommended Next Steps:**
1. Address critical risks identified in Black Hat thinking
2. Pursue opportunities highlighted in Yellow Hat analysis
3. Explore creative alternatives from Green Hat session
4. Gather additional data identified in White Hat review
",
        topic = args.topic,
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn emits_all_six_hats_and_synthesis() {
        let out = SixThinkingHats
            .execute(json!({"topic": "offline-first sync"}))
            .await
            .unwrap();
        for hat in ["White", "Red", "Black", "Yellow", "Green", "Blue"] {
            assert!(out.contains(&format!("## {hat} Hat")), "missing {hat} hat");
        }
        assert!(out.contains("## Synthesis"));
        assert!(out.contains("offline-first sync"));
    }

    #[tokio::test]
    async fn context_line_only_when_supplied() {
        let with = SixThinkingHats
            .execute(json!({"topic": "t", "context": "greenfield"}))
            .await
            .unwrap();
        assert!(with.contains("**Context:** greenfield"));

        let without = SixThinkingHats.execute(json!({"topic": "t"})).await.unwrap();
        assert!(!without.contains("**Context:**"));
    }
}
