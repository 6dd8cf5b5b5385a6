//! Modular design validation: SOLID checklist and module dependency chain.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{object_schema, string_array_prop, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Args {
    architecture: String,
    #[serde(default)]
    modules: Option<Vec<String>>,
}

pub struct ModularArchitecture;

#[async_trait]
impl Tool for ModularArchitecture {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_rule_modular_architecture".into(),
            description: "Validates modular architecture principles. Ensures loose coupling, \
                          high cohesion, and clear module boundaries."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "architecture",
                        string_prop("Architecture description or design to validate"),
                    ),
                    ("modules", string_array_prop("List of modules in the system")),
                ],
                vec!["architecture"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_rule_modular_architecture")?;
        anyhow::ensure!(
            !args.architecture.trim().is_empty(),
            "architecture must not be empty"
        );
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let modules = args.modules.as_deref().unwrap_or(&[]);

    let mut out = String::from("# Modular Architecture Validation\n\n");
    out.push_str("**Rule:** Modular Architecture\n");
    if !modules.is_empty() {
        out.push_str(&format!("**Modules:** {} detected\n", modules.len()));
    }
    out.push('\n');

    out.push_str(
        "## SOLID Principles Check

### S - Single Responsibility
- [ ] Each module has one clear purpose
- [ ] No overlapping responsibilities
- [ ] Clear module boundaries

### O - Open/Closed
- [ ] Modules open for extension
- [ ] Modules closed for modification
- [ ] Plugin architecture support

### L - Liskov Substitution
- [ ] Interface-based design
- [ ] Substitutable implementations
- [ ] Polymorphism support

### I - Interface Segregation
- [ ] Small, focused interfaces
- [ ] No fat interfaces
- [ ] Client-specific interfaces

### D - Dependency Inversion
- [ ] Depend on abstractions
- [ ] Dependency injection used
- [ ] IoC container considered

## Module Quality Metrics

### Coupling (Should be LOW)
- **Tight Coupling:** Avoid
- **Loose Coupling:** Target
- **Metric:** Dependencies between modules < 3

### Cohesion (Should be HIGH)
- **Low Cohesion:** Avoid
- **High Cohesion:** Target
- **Metric:** Related functions within module > 80%

## Modular Patterns

### Recommended Patterns
1. **Layered Architecture**
   - Presentation
   - Business Logic
   - Data Access

2. **Microservices**
   - Independent deployment
   - Service-to-service communication
   - API gateways

3. **Plugin Architecture**
   - Core + plugins
   - Dynamic loading
   - Extension points

## Module Dependencies

",
    );

    if modules.is_empty() {
        out.push_str("*No modules specified for dependency analysis*\n\n");
    } else {
        out.push_str("**Dependency Graph:**\n```\n");
        for (i, module) in modules.iter().enumerate() {
            out.push_str(module);
            out.push('\n');
            if i < modules.len() - 1 {
                out.push_str("  |\n  v\n");
            }
        }
        out.push_str("```\n\n");
    }

    out.push_str(
        "## Compliance Recommendations

1. Define clear module boundaries
2. Use dependency injection
3. Create module interfaces
4. Minimize inter-module dependencies
5. Document module contracts
",
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn renders_dependency_chain() {
        let out = ModularArchitecture
            .execute(json!({"architecture": "x", "modules": ["auth", "billing"]}))
            .await
            .unwrap();
        assert!(out.contains("**Modules:** 2 detected"));
        assert!(out.contains("auth\n  |\n  v\nbilling"));
    }

    #[tokio::test]
    async fn no_modules_notes_missing_analysis() {
        let out = ModularArchitecture
            .execute(json!({"architecture": "x"}))
            .await
            .unwrap();
        assert!(out.contains("*No modules specified for dependency analysis*"));
        assert!(out.contains("### D - Dependency Inversion"));
    }
}
