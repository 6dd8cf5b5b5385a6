//! Developer agent: produces an implementation plan and code guidance
//! for a developer story.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

use crate::excerpt;

#[derive(Debug, Deserialize)]
struct Args {
    story: String,
    #[serde(default)]
    architecture: Option<String>,
    #[serde(default)]
    task: Option<String>,
}

pub struct Developer;

#[async_trait]
impl Tool for Developer {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_developer".into(),
            description: "Code implementer that executes developer stories following \
                          architecture and coding standards. Outputs: Implementation plan \
                          and code guidance."
                .into(),
            input_schema: object_schema(
                vec![
                    ("story", string_prop("Developer Story from the Scrum Master")),
                    (
                        "architecture",
                        string_prop("Architecture context (coding standards, tech stack)"),
                    ),
                    (
                        "task",
                        string_prop("Specific task within the story to implement"),
                    ),
                ],
                vec!["story"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_developer")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let mut out = String::from("# Developer - Implementation\n\n");
    out.push_str(&format!("## Developer Story\n{}\n\n", excerpt(&args.story, 500)));

    if args.architecture.is_some() {
        out.push_str(
            "## Architecture Context Loaded\n- Coding standards\n- Tech stack\n- Project structure\n\n",
        );
    }

    if let Some(task) = &args.task {
        out.push_str(&format!("## Current Task\n{task}\n\n"));
    }

    out.push_str("## Implementation Plan\n\n");
    out.push_str(implementation_plan());

    out.push_str("\n## Code Implementation Guidance\n\n");
    out.push_str(code_guidance());

    out.push_str(
        "\n## Next Steps
1. Implement code following standards
2. Write unit tests (>80% coverage)
3. Run linter and formatter
4. Create pull request
5. Hand off to Test Architect for validation

---
*Implementation ready for Test Architect validation*
",
    );

    out
}

fn implementation_plan() -> &'static str {
    "### 1. Requirements Analysis
- Parse user story acceptance criteria
- Identify dependencies
- Break into subtasks

### 2. Design Approach
- Component/module design
- Data structures
- API contracts (if applicable)
- Error handling strategy

### 3. Implementation Steps
**Step 1:** Set up file structure
**Step 2:** Implement core logic
**Step 3:** Add error handling
**Step 4:** Write tests
**Step 5:** Documentation

### 4. Quality Checks
- [ ] Code follows style guide
- [ ] All tests pass
- [ ] No linter errors
- [ ] Documentation complete
"
}

fn code_guidance() -> &'static str {
    "### File Structure
```
src/
  components/    # Reusable components
  services/      # Business logic
  utils/         # Helper functions
  types/         # Type definitions
  tests/         # Unit tests
```

### Coding Principles
1. **SOLID principles**
2. **DRY (Don't Repeat Yourself)**
3. **KISS (Keep It Simple)**
4. **Meaningful naming**
5. **Single responsibility per function/class**

### Example Implementation Pattern
```typescript
// 1. Define types
interface User {
  id: string;
  name: string;
}

// 2. Implement function with docs
/**
 * Retrieves user by ID
 * @param id - User identifier
 * @returns User object or null
 */
async function getUser(id: string): Promise<User | null> {
  // Implementation
}

// 3. Write tests
describe('getUser', () => {
  it('should return user when exists', async () => {
    // Test implementation
  });
});
```
"
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn plan_and_guidance_always_present() {
        let out = Developer
            .execute(json!({"story": "implement login"}))
            .await
            .unwrap();
        assert!(out.contains("## Implementation Plan"));
        assert!(out.contains("## Code Implementation Guidance"));
        assert!(!out.contains("## Architecture Context Loaded"));
    }

    #[tokio::test]
    async fn architecture_and_task_blocks_when_supplied() {
        let out = Developer
            .execute(json!({
                "story": "implement login",
                "architecture": "REST + postgres",
                "task": "add session endpoint",
            }))
            .await
            .unwrap();
        assert!(out.contains("## Architecture Context Loaded"));
        assert!(out.contains("## Current Task\nadd session endpoint"));
    }
}
