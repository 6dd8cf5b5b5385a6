//! Renames markdown notes in a directory after their first-line heading,
//! producing clean slugged file names and a rename log.

use std::path::Path;

use anyhow::{bail, Context as _};
use async_trait::async_trait;
use promptdeck_mcp::tools::{number_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

const DEFAULT_MAX_LENGTH: usize = 30;

#[derive(Debug, Deserialize)]
struct Args {
    directory: String,
    #[serde(default)]
    max_length: Option<u32>,
}

pub struct RenameNotes;

#[async_trait]
impl Tool for RenameNotes {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_skill_rename_notes".into(),
            description: "Renames markdown files in a directory to match the heading on their \
                          first line, slugified and length-limited. README.md and files that \
                          do not open with a heading are left alone. Returns a markdown table \
                          log of the renames."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "directory",
                        string_prop("Directory containing the markdown files"),
                    ),
                    (
                        "max_length",
                        number_prop("Maximum file name length including extension. Default: 30"),
                    ),
                ],
                vec!["directory"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_skill_rename_notes")?;

        let dir = Path::new(&args.directory);
        if !dir.is_dir() {
            bail!("directory not found: {}", dir.display());
        }
        let max_length = args.max_length.map(|n| n as usize).unwrap_or(DEFAULT_MAX_LENGTH);

        let mut files: Vec<String> = Vec::new();
        let mut entries = tokio::fs::read_dir(dir)
            .await
            .with_context(|| format!("reading {}", dir.display()))?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".md") && name != "README.md" {
                files.push(name);
            }
        }
        files.sort();

        let mut renamed = 0usize;
        let mut log = String::from("# Renaming Log\n\n");
        log.push_str("| Original | Title | New Name |\n");
        log.push_str("| --- | --- | --- |\n");

        for original in &files {
            let path = dir.join(original);
            let content = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("reading {}", path.display()))?;

            let Some(title) = note_title(&content) else {
                info!(file = %original, "no change");
                let stem = original.trim_end_matches(".md");
                log.push_str(&format!("| {original} | {stem} | (No Change) |\n"));
                continue;
            };

            let mut new_name = format!("{}.md", slugify(&title, max_length.saturating_sub(3)));

            if new_name != *original && dir.join(&new_name).exists() {
                // one level of collision resolution; truncate only when the
                // -1 suffix would push past max_length
                let stem = slugify(&title, max_length.saturating_sub(3));
                let room = max_length.saturating_sub(5);
                let truncated: String = if stem.chars().count() > room {
                    stem.chars().take(room).collect()
                } else {
                    stem
                };
                new_name = format!("{}-1.md", truncated.trim_end_matches('-'));
            }

            if new_name != *original {
                tokio::fs::rename(&path, dir.join(&new_name))
                    .await
                    .with_context(|| format!("renaming {original}"))?;
                renamed += 1;
                log.push_str(&format!("| {original} | {title} | {new_name} |\n"));
            } else {
                info!(file = %original, "no change");
                log.push_str(&format!("| {original} | {title} | (No Change) |\n"));
            }
        }

        Ok(format!(
            "Renamed {renamed} files in {}.\n\n{log}",
            dir.display()
        ))
    }
}

/// Heading text from the file's first line. A note whose first line is
/// prose keeps its name, even if a heading appears further down.
fn note_title(content: &str) -> Option<String> {
    let first = content.lines().next()?.trim_start();
    if !first.starts_with('#') {
        return None;
    }
    let title = first.trim_start_matches('#').trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Lowercase-free slug: keeps letters, digits, spaces and dashes, turns
/// spaces into dashes and truncates to `max_stem` characters.
fn slugify(title: &str, max_stem: usize) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
        .collect();
    let slug: String = cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(max_stem)
        .collect();
    let slug = slug.trim_end_matches('-').to_string();
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}
