//! Downloads remote images referenced by a local markdown or HTML file
//! into an `images/` directory beside it. Full-page mode also rewrites
//! the references to point at the downloaded copies.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{bail, Context as _};
use async_trait::async_trait;
use promptdeck_mcp::tools::{bool_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::warn;
use url::Url;

static MD_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"!\[([^\]]*)\]\((https?://[^\s)]+?)(?:\s+"([^"]*)")?\)"#).expect("static regex")
});
static HTML_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img\s+[^>]*src=["'](https?://[^"']+)["'][^>]*>"#).expect("static regex")
});

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_3) \
                          AppleWebKit/537.36 (KHTML, like Gecko) Chrome/35.0.1916.47 \
                          Safari/537.36";

#[derive(Debug, Deserialize)]
struct Args {
    target: String,
    #[serde(default)]
    full_page: bool,
    #[serde(default)]
    images_only: bool,
}

pub struct DownloadImages {
    client: Client,
}

impl DownloadImages {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for DownloadImages {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for DownloadImages {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_skill_download_images".into(),
            description: "Downloads remote images referenced by a local Markdown/HTML file \
                          into an images/ directory beside it. Full-page mode also rewrites \
                          the references."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "target",
                        string_prop("Path of the Markdown/HTML file to process"),
                    ),
                    (
                        "full_page",
                        bool_prop("Download all images and rewrite references in place"),
                    ),
                    (
                        "images_only",
                        bool_prop("Download images only, leaving the file untouched"),
                    ),
                ],
                vec!["target"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_skill_download_images")?;

        let rewrite = match (args.full_page, args.images_only) {
            (true, false) => true,
            (false, true) => false,
            _ => bail!("specify exactly one of full_page or images_only"),
        };

        let target = PathBuf::from(&args.target);
        if tokio::fs::metadata(&target).await.is_err() {
            bail!("target file not found: {}", target.display());
        }

        let images_dir = target
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("images");
        tokio::fs::create_dir_all(&images_dir)
            .await
            .with_context(|| format!("creating {}", images_dir.display()))?;

        let content = tokio::fs::read_to_string(&target)
            .await
            .with_context(|| format!("reading {}", target.display()))?;

        let mut downloaded = 0usize;

        if rewrite {
            let mut new_content = content.clone();

            for caps in MD_IMAGE.captures_iter(&content) {
                let original = &caps[0];
                let alt = &caps[1];
                let url = &caps[2];
                if let Some(filename) = self.fetch_image(url, &images_dir).await {
                    downloaded += 1;
                    let replacement = match caps.get(3) {
                        Some(title) => {
                            format!("![{alt}](images/{filename} \"{}\")", title.as_str())
                        }
                        None => format!("![{alt}](images/{filename})"),
                    };
                    new_content = new_content.replace(original, &replacement);
                }
            }

            for caps in HTML_IMAGE.captures_iter(&content) {
                let tag = &caps[0];
                let url = &caps[1];
                if let Some(filename) = self.fetch_image(url, &images_dir).await {
                    downloaded += 1;
                    let replacement = tag.replace(url, &format!("images/{filename}"));
                    new_content = new_content.replace(tag, &replacement);
                }
            }

            if downloaded > 0 {
                tokio::fs::write(&target, new_content)
                    .await
                    .with_context(|| format!("rewriting {}", target.display()))?;
            }

            Ok(format!(
                "Processed (full page): {}\nImages downloaded: {downloaded}\nImages saved to: {}",
                target.display(),
                images_dir.display(),
            ))
        } else {
            let mut urls: Vec<String> = Vec::new();
            for caps in MD_IMAGE.captures_iter(&content) {
                let url = caps[2].to_string();
                if !urls.contains(&url) {
                    urls.push(url);
                }
            }
            for caps in HTML_IMAGE.captures_iter(&content) {
                let url = caps[1].to_string();
                if !urls.contains(&url) {
                    urls.push(url);
                }
            }

            for url in &urls {
                if self.fetch_image(url, &images_dir).await.is_some() {
                    downloaded += 1;
                }
            }

            Ok(format!(
                "Processed (images only): {}\nImages downloaded: {downloaded}\nImages saved to: {}",
                target.display(),
                images_dir.display(),
            ))
        }
    }
}

impl DownloadImages {
    /// Download one image. Returns the local file name on success; failures
    /// are logged and tolerated so one dead link does not abort the run.
    async fn fetch_image(&self, url: &str, images_dir: &Path) -> Option<String> {
        let filename = image_filename(url)?;
        let filepath = images_dir.join(&filename);

        if tokio::fs::metadata(&filepath).await.is_ok() {
            return Some(filename);
        }

        let response = match self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(Duration::from_secs(30))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e, "image request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(url, status = %response.status(), "image request rejected");
            return None;
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(url, error = %e, "reading image body failed");
                return None;
            }
        };

        if let Err(e) = tokio::fs::write(&filepath, &bytes).await {
            warn!(url, error = %e, "writing image failed");
            return None;
        }
        Some(filename)
    }
}

/// Content-addressed local name: `img_` plus the first ten hex chars of
/// the URL's SHA-256, keeping the original extension (`.jpg` fallback).
fn image_filename(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let ext = Path::new(parsed.path())
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_else(|| ".jpg".to_string());

    let digest = Sha256::digest(url.as_bytes());
    let hash = hex::encode(&digest[..5]);
    Some(format!("img_{hash}{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filename_is_stable_and_keeps_extension() {
        let a = image_filename("https://example.com/a/pic.png").unwrap();
        let b = image_filename("https://example.com/a/pic.png").unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with("img_"));
        assert!(a.ends_with(".png"));

        let c = image_filename("https://example.com/no-extension").unwrap();
        assert!(c.ends_with(".jpg"));
    }

    #[test]
    fn markdown_pattern_captures_alt_url_title() {
        let caps = MD_IMAGE
            .captures("before ![logo](https://example.com/logo.svg \"The Logo\") after")
            .unwrap();
        assert_eq!(&caps[1], "logo");
        assert_eq!(&caps[2], "https://example.com/logo.svg");
        assert_eq!(&caps[3], "The Logo");
    }

    #[test]
    fn html_pattern_captures_src() {
        let caps = HTML_IMAGE
            .captures("<p><img class=\"hero\" src=\"https://example.com/h.png\" alt=\"\"></p>")
            .unwrap();
        assert_eq!(&caps[1], "https://example.com/h.png");
    }

    #[test]
    fn local_references_are_ignored() {
        assert!(MD_IMAGE.captures("![local](./images/pic.png)").is_none());
        assert!(HTML_IMAGE.captures("<img src=\"/static/pic.png\">").is_none());
    }

    #[tokio::test]
    async fn requires_exactly_one_mode_flag() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("page.md");
        tokio::fs::write(&file, "# page\n").await.unwrap();
        let target = file.to_str().unwrap();

        let neither = DownloadImages::new()
            .execute(json!({"target": target}))
            .await
            .unwrap_err();
        assert!(neither.to_string().contains("exactly one"));

        let both = DownloadImages::new()
            .execute(json!({"target": target, "full_page": true, "images_only": true}))
            .await
            .unwrap_err();
        assert!(both.to_string().contains("exactly one"));
    }

    #[tokio::test]
    async fn missing_target_fails() {
        let err = DownloadImages::new()
            .execute(json!({"target": "/nonexistent/page.md", "images_only": true}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("target file not found"));
    }

    #[tokio::test]
    async fn file_without_remote_images_reports_zero() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("page.md");
        tokio::fs::write(&file, "# page\n\n![local](./pic.png)\n")
            .await
            .unwrap();

        let out = DownloadImages::new()
            .execute(json!({"target": file.to_str().unwrap(), "full_page": true}))
            .await
            .unwrap();
        assert!(out.contains("Images downloaded: 0"));

        // no rewrite happened
        let content = tokio::fs::read_to_string(&file).await.unwrap();
        assert!(content.contains("![local](./pic.png)"));
    }
}
