//! Architecture and process validation rules.
//!
//! Each rule takes a description of a system plus a few knobs and renders
//! a markdown validation report: checklists, pattern guidance and a
//! compliance verdict.

pub mod cloud_storage_sync;
pub mod context_loading;
pub mod modular_architecture;
pub mod multi_org_isolation;
pub mod platform_portability;
pub mod zero_trust;

use std::sync::Arc;

use promptdeck_mcp::ToolRegistry;

/// Catalog served by `promptdeck-rules`.
pub fn registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(platform_portability::PlatformPortability));
    registry.register(Arc::new(modular_architecture::ModularArchitecture));
    registry.register(Arc::new(context_loading::ContextLoading));
    registry.register(Arc::new(multi_org_isolation::MultiOrgIsolation));
    registry.register(Arc::new(cloud_storage_sync::CloudStorageSync));
    registry.register(Arc::new(zero_trust::ZeroTrust));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_rules() {
        let names: Vec<String> = registry()
            .definitions()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names.len(), 6);
        assert_eq!(names[0], "promptdeck_rule_platform_portability");
        assert_eq!(names[5], "promptdeck_rule_zero_trust");
    }
}
