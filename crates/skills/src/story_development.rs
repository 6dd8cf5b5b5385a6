//! User story scaffolding with Given-When-Then acceptance criteria.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{bool_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Args {
    feature: String,
    #[serde(default)]
    user_type: Option<String>,
    #[serde(default)]
    acceptance_criteria: Option<bool>,
}

pub struct StoryDevelopment;

#[async_trait]
impl Tool for StoryDevelopment {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_skill_story_development".into(),
            description: "Creates well-formed user stories with acceptance criteria in \
                          Given-When-Then format."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "feature",
                        string_prop("Feature or functionality to create story for"),
                    ),
                    (
                        "user_type",
                        string_prop("Type of user (e.g., \"end user\", \"admin\", \"developer\")"),
                    ),
                    (
                        "acceptance_criteria",
                        bool_prop("Generate detailed acceptance criteria. Default: true"),
                    ),
                ],
                vec!["feature"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_skill_story_development")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let user_type = args.user_type.as_deref().unwrap_or("user");
    let include_ac = args.acceptance_criteria.unwrap_or(true);

    let mut out = String::from("# User Story\n\n## Story Format\n\n");
    out.push_str(&format!("**As a** {user_type},  \n"));
    out.push_str(&format!("**I want** {},  \n", args.feature));
    out.push_str("**So that** [benefit/value]\n\n");

    if include_ac {
        out.push_str(
            "## Acceptance Criteria

### Scenario 1: Happy Path
**Given** [initial state/context]  \n**When** [action performed]  \n**Then** [expected outcome]

### Scenario 2: Error Handling
**Given** [error condition]  \n**When** [action attempted]  \n**Then** [error handled gracefully]

### Scenario 3: Edge Case
**Given** [edge condition]  \n**When** [boundary action]  \n**Then** [correct behavior]

",
        );
    }

    out.push_str(
        "## Story Metadata
- **Priority:** [High/Medium/Low]
- **Story Points:** [Fibonacci estimate]
- **Sprint:** [Sprint number]

## Definition of Done
- [ ] Code implemented
- [ ] Unit tests written (>80% coverage)
- [ ] Integration tests passing
- [ ] Code reviewed
- [ ] Documentation updated
- [ ] Acceptance criteria validated
",
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn default_user_type_and_criteria() {
        let out = StoryDevelopment
            .execute(json!({"feature": "export to CSV"}))
            .await
            .unwrap();
        assert!(out.contains("**As a** user,"));
        assert!(out.contains("**I want** export to CSV,"));
        assert!(out.contains("### Scenario 1: Happy Path"));
    }

    #[tokio::test]
    async fn criteria_can_be_suppressed() {
        let out = StoryDevelopment
            .execute(json!({"feature": "export to CSV", "acceptance_criteria": false}))
            .await
            .unwrap();
        assert!(!out.contains("## Acceptance Criteria"));
        assert!(out.contains("## Definition of Done"));
    }
}
