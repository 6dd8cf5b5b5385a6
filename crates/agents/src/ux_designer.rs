//! UX designer: applies a Design Thinking pass to a PRD and produces a
//! UX design document with platform-specific wireframes.

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

use crate::excerpt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum TargetPlatform {
    Web,
    Mobile,
    Desktop,
    CrossPlatform,
}

impl TargetPlatform {
    fn label(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::CrossPlatform => "cross-platform",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    prd: String,
    #[serde(default)]
    target_platform: Option<TargetPlatform>,
    #[serde(default)]
    user_personas: Option<String>,
}

pub struct UxDesigner;

#[async_trait]
impl Tool for UxDesigner {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_ux_designer".into(),
            description: "UX designer that creates user experience designs from PRDs. Uses \
                          Design Thinking methodology. Outputs: UX Design Document with \
                          wireframes and flows."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "prd",
                        string_prop("Product Requirements Document from the Product Manager"),
                    ),
                    (
                        "target_platform",
                        enum_prop(
                            "Target platform for the design. Default: web",
                            &["web", "mobile", "desktop", "cross-platform"],
                        ),
                    ),
                    (
                        "user_personas",
                        string_prop("User personas or target audience description"),
                    ),
                ],
                vec!["prd"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_ux_designer")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let platform = args.target_platform.unwrap_or(TargetPlatform::Web);

    let mut out = String::from("# UX Designer - User Experience Design\n\n");
    out.push_str(&format!("## Input: PRD\n{}\n\n", excerpt(&args.prd, 500)));
    out.push_str(&format!(
        "## Target Platform: {}\n\n",
        platform.label().to_uppercase()
    ));

    if let Some(personas) = &args.user_personas {
        out.push_str(&format!("## User Personas\n{personas}\n\n"));
    }

    out.push_str("## Design Thinking Process\n\n");
    out.push_str(design_thinking());

    out.push_str("\n## UX Design Document\n\n");
    out.push_str(&ux_design(platform));

    out
}

fn design_thinking() -> &'static str {
    "### 1. Empathize
**User Research:**
- Understand user needs and pain points
- Conduct user interviews (if applicable)
- Analyze user behavior patterns

### 2. Define
**Problem Statement:**
- \"Users need a way to [goal] because [insight]\"
- Key user needs identified from PRD
- Success metrics defined

### 3. Ideate
**Design Concepts:**
- Brainstorm multiple UI approaches
- Consider different interaction patterns
- Evaluate trade-offs

### 4. Prototype
**Wireframes & Flows:**
- Low-fidelity wireframes
- User flow diagrams
- Interactive prototype (described)

### 5. Test
**Validation:**
- Usability testing plan
- Heuristic evaluation
- Iteration based on feedback
"
}

fn ux_design(platform: TargetPlatform) -> String {
    let mut design = format!(
        "**Document Type:** UX Design Document
**Platform:** {}
**Generated:** {}

### 1. User Flows

**Primary User Journey:**
```
[Entry Point] -> [Action 1] -> [Action 2] -> [Goal Achieved]
```

**Alternative Flows:**
- Error states
- Edge cases
- Return user flows

### 2. Information Architecture
```
Homepage
|-- Section 1
|   |-- Feature A
|   `-- Feature B
|-- Section 2
`-- Section 3
```

### 3. Wireframes

",
        platform.label(),
        Utc::now().format("%Y-%m-%d"),
    );

    design.push_str(platform_wireframes(platform));

    design.push_str(
        "\n### 4. UI Components
**Component Library:**
- Navigation (header, sidebar, tabs)
- Forms (inputs, buttons, validation)
- Data Display (cards, tables, lists)
- Feedback (modals, toasts, alerts)
- Loading states

### 5. Interaction Patterns
- **Click/Tap:** Primary actions
- **Swipe/Scroll:** Navigation
- **Drag and Drop:** Reordering (if applicable)
- **Keyboard Shortcuts:** Power users

### 6. Accessibility (WCAG 2.1 AA)
- **Perceivable:** Alt text for images, color contrast
- **Operable:** Keyboard navigation, focus indicators
- **Understandable:** Clear labels, error messages
- **Robust:** Semantic HTML, ARIA labels

### 7. Responsive Design
",
    );

    if matches!(platform, TargetPlatform::Web | TargetPlatform::CrossPlatform) {
        design.push_str(
            "**Breakpoints:**
- Mobile: < 768px
- Tablet: 768px - 1024px
- Desktop: > 1024px

",
        );
    }

    design.push_str(
        "### 8. Visual Design Principles
- **Hierarchy:** Clear visual hierarchy
- **Consistency:** Design system adherence
- **Feedback:** Immediate response to actions
- **Simplicity:** Minimal cognitive load

### 9. Usability Metrics
- **Task Success Rate:** > 90%
- **Time on Task:** Minimize
- **Error Rate:** < 5%
- **Satisfaction Score:** > 4/5

---
*UX Design ready for development (handoff to Scrum Master)*
",
    );

    design
}

fn platform_wireframes(platform: TargetPlatform) -> &'static str {
    match platform {
        TargetPlatform::Web => {
            "**Homepage Wireframe:**
```
+----------------------------------+
|  [Logo]    [Nav] [Nav] [Profile] |
+----------------------------------+
|                                  |
|  [Hero Section]                  |
|  Headline                        |
|  Subheadline                     |
|  [CTA Button]                    |
|                                  |
+----------------------------------+
|  [Feature 1] [Feature 2] [F3]    |
+----------------------------------+
|  [Footer]                        |
+----------------------------------+
```
"
        }
        TargetPlatform::Mobile => {
            "**Mobile Screen Wireframe:**
```
+------------------+
| [Menu] Logo [Me] |
+------------------+
|                  |
|  [Hero Image]    |
|                  |
|  Headline        |
|  Description     |
|                  |
|  [CTA Button]    |
|                  |
+------------------+
|  [Feature Card]  |
|  [Feature Card]  |
|  [Feature Card]  |
+------------------+
|  [Bottom Nav]    |
+------------------+
```
"
        }
        TargetPlatform::Desktop => {
            "**Desktop Application Wireframe:**
```
+-------------------------------------+
|  [File] [Edit] [View] [Help]        |
+-------------------------------------+
| [Sidebar]  |  [Main Content Area]   |
|            |                        |
| - Item 1   |  [Toolbar]             |
| - Item 2   |  +------------------+  |
| - Item 3   |  |                  |  |
|            |  |  Work Area       |  |
|            |  |                  |  |
|            |  +------------------+  |
+-------------------------------------+
|  [Status Bar]                       |
+-------------------------------------+
```
"
        }
        TargetPlatform::CrossPlatform => {
            "**Responsive Layout (adapts to screen size):**
```
Mobile:     Tablet:         Desktop:
[Stack]     [2 columns]     [3 columns + sidebar]
```
"
        }
    }
}
