//! Pre-task context validation. A task is compliant once context was
//! provided and at least four context items are loaded.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{bool_prop, object_schema, string_array_prop, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

const MIN_CONTEXT_ITEMS: usize = 4;

#[derive(Debug, Deserialize)]
struct Args {
    task: String,
    #[serde(default)]
    context_provided: Option<bool>,
    #[serde(default)]
    context_items: Option<Vec<String>>,
}

pub struct ContextLoading;

#[async_trait]
impl Tool for ContextLoading {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_rule_context_loading".into(),
            description: "Validates that all necessary context is loaded before executing a \
                          task. Ensures developers have architecture, standards, and \
                          requirements."
                .into(),
            input_schema: object_schema(
                vec![
                    ("task", string_prop("Task or story to validate")),
                    ("context_provided", bool_prop("Whether context was provided")),
                    ("context_items", string_array_prop("List of context items loaded")),
                ],
                vec!["task"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_rule_context_loading")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let has_context = args.context_provided.unwrap_or(false);
    let items = args.context_items.as_deref().unwrap_or(&[]);

    let task_excerpt: String = args.task.chars().take(100).collect();

    let mut out = String::from("# Mandatory Context Loading Validation\n\n");
    out.push_str("**Rule:** Mandatory Context Loading Protocol (MCLP)\n");
    out.push_str(&format!("**Task:** {task_excerpt}...\n"));
    out.push_str(&format!(
        "**Context Status:** {}\n\n",
        if has_context { "Provided" } else { "Missing" }
    ));

    out.push_str(
        "## Required Context Items

### Essential Context
- [ ] Architecture document
- [ ] Coding standards
- [ ] Technology stack
- [ ] User story/requirements
- [ ] Acceptance criteria

### Technical Context
- [ ] API contracts
- [ ] Database schema
- [ ] Dependencies
- [ ] Environment configuration

### Quality Context
- [ ] Testing requirements
- [ ] Performance criteria
- [ ] Security guidelines
- [ ] Accessibility standards

",
    );

    if !items.is_empty() {
        out.push_str("## Context Items Loaded\n\n");
        for item in items {
            out.push_str(&format!("- {item}\n"));
        }
        out.push('\n');
    }

    out.push_str(
        "## Context Loading Protocol

**Before starting any development task:**

1. **Load Architecture Context**
   - System architecture diagram
   - Component relationships
   - Design patterns in use

2. **Load Standards Context**
   - Coding style guide
   - Naming conventions
   - File structure
   - Best practices

3. **Load Requirements Context**
   - User story
   - Acceptance criteria
   - Business rules
   - Edge cases

4. **Load Technical Context**
   - Tech stack documentation
   - API specifications
   - Database models
   - Third-party integrations

## Compliance Status

",
    );

    if has_context && items.len() >= MIN_CONTEXT_ITEMS {
        out.push_str("**COMPLIANT** - Sufficient context loaded\n\n");
        out.push_str(&format!(
            "Context items loaded: {}/{MIN_CONTEXT_ITEMS} minimum\n",
            items.len()
        ));
    } else {
        out.push_str("**NON-COMPLIANT** - Insufficient context\n\n");
        out.push_str(
            "**Action Required:**
1. Load architecture documentation
2. Review coding standards
3. Understand requirements fully
4. Gather technical specifications
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
    async fn compliant_with_four_items() {
        let out = ContextLoading
            .execute(json!({
                "task": "implement login",
                "context_provided": true,
                "context_items": ["architecture", "standards", "story", "schema"],
            }))
            .await
            .unwrap();
        assert!(out.contains("**COMPLIANT** - Sufficient context loaded"));
        assert!(out.contains("Context items loaded: 4/4 minimum"));
    }

    #[tokio::test]
    async fn provided_but_too_few_items_is_non_compliant() {
        let out = ContextLoading
            .execute(json!({
                "task": "implement login",
                "context_provided": true,
                "context_items": ["architecture"],
            }))
            .await
            .unwrap();
        assert!(out.contains("**NON-COMPLIANT** - Insufficient context"));
    }

    #[tokio::test]
    async fn defaults_to_missing_context() {
        let out = ContextLoading
            .execute(json!({"task": "implement login"}))
            .await
            .unwrap();
        assert!(out.contains("**Context Status:** Missing"));
        assert!(out.contains("NON-COMPLIANT"));
    }
}
