//! Agent tool catalog: a pipeline of planning personas, from ideation
//! through implementation and security validation.

pub mod analyst;
pub mod architect;
pub mod brainstorming_coach;
pub mod cso;
pub mod developer;
pub mod product_manager;
pub mod scrum_master;
pub mod security_architect;
pub mod security_test_analyst;
pub mod test_architect;
pub mod ux_designer;

use std::sync::Arc;

use promptdeck_mcp::ToolRegistry;

/// Truncates long pasted documents for echo sections. Appends an
/// ellipsis only when something was cut.
pub(crate) fn excerpt(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let head: String = text.chars().take(limit).collect();
        format!("{head}...")
    }
}

/// Catalog served by `promptdeck-agents`: the agile pipeline first, then
/// the security specialists, then the coach.
pub fn registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(analyst::Analyst));
    registry.register(Arc::new(product_manager::ProductManager));
    registry.register(Arc::new(architect::Architect));
    registry.register(Arc::new(ux_designer::UxDesigner));
    registry.register(Arc::new(scrum_master::ScrumMaster));
    registry.register(Arc::new(developer::Developer));
    registry.register(Arc::new(test_architect::TestArchitect));
    registry.register(Arc::new(security_architect::SecurityArchitect));
    registry.register(Arc::new(cso::Cso));
    registry.register(Arc::new(security_test_analyst::SecurityTestAnalyst));
    registry.register(Arc::new(brainstorming_coach::BrainstormingCoach));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_complete_and_ordered() {
        let names: Vec<String> = registry()
            .definitions()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(
            names,
            [
                "promptdeck_analyst",
                "promptdeck_product_manager",
                "promptdeck_architect",
                "promptdeck_ux_designer",
                "promptdeck_scrum_master",
                "promptdeck_developer",
                "promptdeck_test_architect",
                "promptdeck_security_architect",
                "promptdeck_cso",
                "promptdeck_security_test_analyst",
                "promptdeck_brainstorming_coach",
            ]
        );
    }

    #[test]
    fn excerpt_truncates_with_ellipsis() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("abcdefghij", 5), "abcde...");
    }
}
