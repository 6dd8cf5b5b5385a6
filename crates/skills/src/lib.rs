//! Reusable skills: nine markdown template generators plus two file
//! utilities (image downloading, note renaming) that touch the
//! filesystem and network.

pub mod brainstorming;
pub mod content_creation;
pub mod design_thinking;
pub mod devsecops;
pub mod download_images;
pub mod grc_management;
pub mod image_creation;
pub mod life_management;
pub mod rename_notes;
pub mod research;
pub mod story_development;

use std::sync::Arc;

use promptdeck_mcp::ToolRegistry;

/// Catalog served by `promptdeck-skills`.
pub fn registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(brainstorming::Brainstorming));
    registry.register(Arc::new(design_thinking::DesignThinking));
    registry.register(Arc::new(research::Research));
    registry.register(Arc::new(story_development::StoryDevelopment));
    registry.register(Arc::new(grc_management::GrcManagement));
    registry.register(Arc::new(devsecops::DevSecOps));
    registry.register(Arc::new(content_creation::ContentCreation));
    registry.register(Arc::new(image_creation::ImageCreation));
    registry.register(Arc::new(life_management::LifeManagement));
    registry.register(Arc::new(download_images::DownloadImages::new()));
    registry.register(Arc::new(rename_notes::RenameNotes));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eleven_skills() {
        let names: Vec<String> = registry()
            .definitions()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names.len(), 11);
        assert!(names.contains(&"promptdeck_skill_brainstorming".to_string()));
        assert!(names.contains(&"promptdeck_skill_download_images".to_string()));
        assert!(names.contains(&"promptdeck_skill_rename_notes".to_string()));
    }
}
