//! Multi-step methodology workflows.
//!
//! Workflows are larger than skills: each renders a phased plan for a
//! whole exercise (structured thinking, research, planning track
//! selection, security assessment).

pub mod enterprise_security_assessment;
pub mod extensive_research;
pub mod five_ws;
pub mod scale_adaptive_planning;
pub mod six_thinking_hats;

use std::sync::Arc;

use promptdeck_mcp::ToolRegistry;

/// Catalog served by `promptdeck-workflows`.
pub fn registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(six_thinking_hats::SixThinkingHats));
    registry.register(Arc::new(five_ws::FiveWs));
    registry.register(Arc::new(scale_adaptive_planning::ScaleAdaptivePlanning));
    registry.register(Arc::new(extensive_research::ExtensiveResearch));
    registry.register(Arc::new(
        enterprise_security_assessment::EnterpriseSecurityAssessment,
    ));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_workflows() {
        let names: Vec<String> = registry()
            .definitions()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "promptdeck_workflow_six_thinking_hats",
                "promptdeck_workflow_five_ws",
                "promptdeck_workflow_scale_adaptive_planning",
                "promptdeck_workflow_extensive_research",
                "promptdeck_workflow_enterprise_security_assessment",
            ]
        );
    }
}
