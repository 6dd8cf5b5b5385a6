//! Visual asset specifications: Mermaid diagrams, wireframe specs and
//! generation prompts. No actual image rendering happens here.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ImageType {
    Diagram,
    Wireframe,
    Icon,
    Illustration,
    ScreenshotMockup,
}

impl ImageType {
    fn label(self) -> &'static str {
        match self {
            Self::Diagram => "diagram",
            Self::Wireframe => "wireframe",
            Self::Icon => "icon",
            Self::Illustration => "illustration",
            Self::ScreenshotMockup => "screenshot-mockup",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    image_type: ImageType,
    description: String,
    #[serde(default)]
    style: Option<String>,
}

pub struct ImageCreation;

#[async_trait]
impl Tool for ImageCreation {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_skill_image_creation".into(),
            description: "Generates descriptions and specifications for visual assets. Can \
                          create diagrams, wireframes, icons, and illustrations using \
                          Mermaid or image generation APIs."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "image_type",
                        enum_prop(
                            "Type of image to create",
                            &[
                                "diagram",
                                "wireframe",
                                "icon",
                                "illustration",
                                "screenshot-mockup",
                            ],
                        ),
                    ),
                    ("description", string_prop("Description of desired image")),
                    (
                        "style",
                        string_prop("Visual style (minimalist, modern, hand-drawn, etc.)"),
                    ),
                ],
                vec!["image_type", "description"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_skill_image_creation")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let style = args.style.as_deref().unwrap_or("modern");

    let mut out = String::from("# Image Creation Specification\n\n");
    out.push_str(&format!("**Type:** {}\n", args.image_type.label()));
    out.push_str(&format!("**Description:** {}\n", args.description));
    out.push_str(&format!("**Style:** {style}\n\n"));

    match args.image_type {
        ImageType::Diagram => {
            out.push_str("## Mermaid Diagram\n\n");
            out.push_str(&mermaid_diagram(&args.description));
        }
        ImageType::Wireframe => out.push_str(&wireframe_spec(&args.description, style)),
        _ => {
            out.push_str("## Image Generation Prompt\n\n");
            out.push_str("**For DALL-E/Midjourney/Stable Diffusion:**\n");
            out.push_str(&format!(
                "\"{}, {style} style, high quality, professional\"\n\n",
                args.description
            ));
            out.push_str(
                "**Specifications:**
- Dimensions: 1024x1024px
- Format: PNG
- Color scheme: [Based on brand guidelines]
",
            );
        }
    }

    out
}

fn mermaid_diagram(description: &str) -> String {
    format!(
        "```mermaid
graph TD
    A[Start] --> B{{Decision}}
    B -->|Yes| C[Process 1]
    B -->|No| D[Process 2]
    C --> E[End]
    D --> E
```

**Note:** Customize diagram based on: {description}
"
    )
}

fn wireframe_spec(description: &str, style: &str) -> String {
    format!(
        "## Wireframe Specification

**Layout:** {description}
**Style:** {style}

### Components
- **Header**
  - Logo (left)
  - Navigation menu (right)
  - Search bar (center)

- **Main Content**
  - Hero section
  - Feature cards (3 columns)
  - CTA button

- **Footer**
  - Links
  - Social media icons
  - Copyright

### Dimensions
- Desktop: 1440px wide
- Tablet: 768px wide
- Mobile: 375px wide

### ASCII Wireframe
```
+---------------------------------+
|  Logo    Nav  Nav  Nav  Search  |  Header
+---------------------------------+
|                                 |
|       [ Hero Section ]          |  Hero
|                                 |
+---------------------------------+
|  [Card]   [Card]   [Card]       |  Features
|                                 |
|       [ CTA Button ]            |
+---------------------------------+
|  Footer Links    Social Icons   |  Footer
+---------------------------------+
```
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn diagram_emits_mermaid_block() {
        let out = ImageCreation
            .execute(json!({"image_type": "diagram", "description": "auth flow"}))
            .await
            .unwrap();
        assert!(out.contains("```mermaid"));
        assert!(out.contains("Customize diagram based on: auth flow"));
    }

    #[tokio::test]
    async fn wireframe_emits_component_spec() {
        let out = ImageCreation
            .execute(json!({
                "image_type": "wireframe",
                "description": "landing page",
                "style": "minimalist",
            }))
            .await
            .unwrap();
        assert!(out.contains("## Wireframe Specification"));
        assert!(out.contains("**Style:** minimalist"));
        assert!(out.contains("### ASCII Wireframe"));
    }

    #[tokio::test]
    async fn other_types_get_a_generation_prompt() {
        let out = ImageCreation
            .execute(json!({"image_type": "icon", "description": "gear with checkmark"}))
            .await
            .unwrap();
        assert!(out.contains("## Image Generation Prompt"));
        assert!(out.contains("\"gear with checkmark, modern style, high quality, professional\""));
    }
}
