//! Brainstorming facilitator with selectable ideation techniques.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum Technique {
    FreeForm,
    SixThinkingHats,
    Scamper,
    RandomWord,
}

impl Technique {
    fn label(self) -> &'static str {
        match self {
            Self::FreeForm => "free-form",
            Self::SixThinkingHats => "six-thinking-hats",
            Self::Scamper => "scamper",
            Self::RandomWord => "random-word",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    topic: String,
    #[serde(default)]
    technique: Option<Technique>,
    #[serde(default)]
    context: Option<String>,
}

pub struct BrainstormingCoach;

#[async_trait]
impl Tool for BrainstormingCoach {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_brainstorming_coach".into(),
            description: "Energetic brainstorming facilitator using structured techniques \
                          like Six Thinking Hats and SCAMPER."
                .into(),
            input_schema: object_schema(
                vec![
                    ("topic", string_prop("Topic, problem, or idea to brainstorm about")),
                    (
                        "technique",
                        enum_prop(
                            "Brainstorming technique to use. Default: free-form",
                            &["free-form", "six-thinking-hats", "scamper", "random-word"],
                        ),
                    ),
                    ("context", string_prop("Additional context or constraints")),
                ],
                vec!["topic"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_brainstorming_coach")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let technique = args.technique.unwrap_or(Technique::FreeForm);

    let mut out = String::from("# Brainstorming Session\n\n");
    out.push_str(&format!("**Topic:** {}\n", args.topic));
    out.push_str(&format!("**Technique:** {}\n", technique.label()));

    if let Some(context) = &args.context {
        out.push_str(&format!("**Context:** {context}\n\n"));
    } else {
        out.push('\n');
    }

    out.push_str("## Facilitation Guide\n");
    match technique {
        Technique::SixThinkingHats => out.push_str(
            "Let's look at this from six distinct perspectives:

1. **White Hat (Data):** What facts do we know? What information is missing?
2. **Red Hat (Feelings):** What is your gut reaction? Emotions?
3. **Black Hat (Risks):** What could go wrong? Weaknesses?
4. **Yellow Hat (Benefits):** What is the value? The upside?
5. **Green Hat (Creativity):** New ideas, alternatives, \"what if\"?
6. **Blue Hat (Process):** What is our next step? Summary.
",
        ),
        Technique::Scamper => out.push_str(
            "Let's remix this idea using SCAMPER:

- **S**ubstitute: What can we replace?
- **C**ombine: What can we merge with this?
- **A**dapt: What else is like this?
- **M**odify: Change meaning, color, motion?
- **P**ut to another use: Who else could use this?
- **E**liminate: What can we remove?
- **R**everse: What if we did the opposite?
",
        ),
        Technique::RandomWord => {
            out.push_str(
                "Let's trigger new connections using a random stimulus.
*Imagine the concept of \"Ocean\" applied to your topic...*

",
            );
            out.push_str(&format!(
                "- How does \"Depth\" relate to {}?\n- How does \"Flow\" relate?\n- How does \"Waves\" relate?\n",
                args.topic
            ));
        }
        Technique::FreeForm => out.push_str(
            "Let's generate a high volume of ideas! No judgement yet.

- Go for quantity over quality right now.
- Build on other ideas (\"Yes, and...\").
- Encourage wild ideas.
",
        ),
    }

    out.push_str("\n## Session Log Template\n");
    out.push_str("Capture ideas as they come, then cluster and rank them at the end.\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn free_form_is_the_default() {
        let out = BrainstormingCoach
            .execute(json!({"topic": "team retro format"}))
            .await
            .unwrap();
        assert!(out.contains("**Technique:** free-form"));
        assert!(out.contains("quantity over quality"));
    }

    #[tokio::test]
    async fn scamper_lists_all_seven_prompts() {
        let out = BrainstormingCoach
            .execute(json!({"topic": "coffee mug", "technique": "scamper"}))
            .await
            .unwrap();
        assert!(out.contains("SCAMPER"));
        assert!(out.contains("**S**ubstitute"));
        assert!(out.contains("**R**everse"));
    }

    #[tokio::test]
    async fn random_word_references_the_topic() {
        let out = BrainstormingCoach
            .execute(json!({"topic": "onboarding", "technique": "random-word"}))
            .await
            .unwrap();
        assert!(out.contains("How does \"Depth\" relate to onboarding?"));
    }
}
