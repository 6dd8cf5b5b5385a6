//! Five-phase design thinking scaffold.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Phase {
    Empathize,
    Define,
    Ideate,
    Prototype,
    Test,
    All,
}

impl Phase {
    fn label(self) -> &'static str {
        match self {
            Self::Empathize => "empathize",
            Self::Define => "define",
            Self::Ideate => "ideate",
            Self::Prototype => "prototype",
            Self::Test => "test",
            Self::All => "all",
        }
    }

    fn covers(self, phase: Phase) -> bool {
        self == Self::All || self == phase
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    problem: String,
    #[serde(default)]
    user_persona: Option<String>,
    #[serde(default)]
    phase: Option<Phase>,
}

pub struct DesignThinking;

#[async_trait]
impl Tool for DesignThinking {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_skill_design_thinking".into(),
            description: "Applies Design Thinking methodology for user-centered problem \
                          solving. Covers all 5 phases: Empathize, Define, Ideate, \
                          Prototype, Test."
                .into(),
            input_schema: object_schema(
                vec![
                    ("problem", string_prop("Problem statement or design challenge")),
                    (
                        "user_persona",
                        string_prop("Target user or persona description"),
                    ),
                    (
                        "phase",
                        enum_prop(
                            "Specific phase to execute. Default: all",
                            &["empathize", "define", "ideate", "prototype", "test", "all"],
                        ),
                    ),
                ],
                vec!["problem"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_skill_design_thinking")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let phase = args.phase.unwrap_or(Phase::All);
    let persona = args.user_persona.as_deref().unwrap_or("end user");

    let mut out = String::from("# Design Thinking Process\n\n");
    out.push_str(&format!("**Problem:** {}\n", args.problem));
    out.push_str(&format!("**User Persona:** {persona}\n"));
    out.push_str(&format!("**Phase:** {}\n\n", phase.label()));

    if phase.covers(Phase::Empathize) {
        out.push_str(
            "## 1. Empathize

**Goal:** Understand the user's needs, experiences, and motivations

**User Research:**
- Pain points: [What frustrates users?]
- Goals: [What do users want to achieve?]
- Context: [Where/when/how do users interact?]
- Emotions: [How do users feel?]

**Empathy Map:**
- Says: [User quotes]
- Thinks: [User thoughts]
- Does: [User actions]
- Feels: [User emotions]

",
        );
    }

    if phase.covers(Phase::Define) {
        out.push_str(
            "## 2. Define

**Goal:** Clearly articulate the problem to solve

**Problem Statement:**
[User persona] needs [need] because [insight]

**Point of View (POV):**
We met [persona]. We were amazed to realize [insight]. It would be game-changing if [solution direction].

",
        );
    }

    if phase.covers(Phase::Ideate) {
        out.push_str(
            "## 3. Ideate

**Goal:** Generate a wide range of creative solutions

**Ideas:**
1. [Conventional solution]
2. [Innovative approach]
3. [Technology-driven idea]
4. [Low-cost alternative]
5. [Disruptive concept]

",
        );
    }

    if phase.covers(Phase::Prototype) {
        out.push_str(
            "## 4. Prototype

**Goal:** Build quick, low-fidelity versions to explore ideas

**Prototype Types:**
- Paper sketches
- Wireframes
- Clickable mockups
- Minimum Viable Product (MVP)

**Key Features to Test:**
- Core functionality
- User flow
- Visual design

",
        );
    }

    if phase.covers(Phase::Test) {
        out.push_str(
            "## 5. Test

**Goal:** Gather feedback and refine the solution

**Testing Methods:**
- Usability testing
- A/B testing
- User interviews
- Analytics review

**Learnings:**
- What worked well: [Successes]
- What needs improvement: [Issues]
- Unexpected insights: [Surprises]

",
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn all_phases_by_default() {
        let out = DesignThinking
            .execute(json!({"problem": "checkout drop-off"}))
            .await
            .unwrap();
        assert!(out.contains("**User Persona:** end user"));
        for section in [
            "## 1. Empathize",
            "## 2. Define",
            "## 3. Ideate",
            "## 4. Prototype",
            "## 5. Test",
        ] {
            assert!(out.contains(section), "missing {section}");
        }
    }

    #[tokio::test]
    async fn single_phase_narrows_output() {
        let out = DesignThinking
            .execute(json!({"problem": "checkout drop-off", "phase": "prototype"}))
            .await
            .unwrap();
        assert!(out.contains("## 4. Prototype"));
        assert!(!out.contains("## 1. Empathize"));
        assert!(!out.contains("## 5. Test"));
    }
}
