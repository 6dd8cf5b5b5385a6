//! Research report scaffolds at three depth levels. Extensive depth is
//! the standard report plus a deep-dive section.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_array_prop, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Depth {
    Quick,
    Standard,
    Extensive,
}

impl Depth {
    fn label(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Standard => "standard",
            Self::Extensive => "extensive",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    topic: String,
    #[serde(default)]
    depth: Option<Depth>,
    #[serde(default)]
    sources: Option<Vec<String>>,
}

pub struct Research;

#[async_trait]
impl Tool for Research {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_skill_research".into(),
            description: "Deep research skill for gathering and analyzing information. \
                          Supports quick, standard, and extensive depth levels."
                .into(),
            input_schema: object_schema(
                vec![
                    ("topic", string_prop("Research topic or question")),
                    (
                        "depth",
                        enum_prop(
                            "Research depth. Default: standard",
                            &["quick", "standard", "extensive"],
                        ),
                    ),
                    (
                        "sources",
                        string_array_prop(
                            "Preferred source types (academic, industry, blogs, etc.)",
                        ),
                    ),
                ],
                vec!["topic"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_skill_research")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let depth = args.depth.unwrap_or(Depth::Standard);
    let sources = args.sources.clone().unwrap_or_else(|| {
        vec!["academic".into(), "industry".into(), "technical".into()]
    });

    let mut out = String::from("# Research Report\n\n");
    out.push_str(&format!("**Topic:** {}\n", args.topic));
    out.push_str(&format!("**Depth:** {}\n", depth.label()));
    out.push_str(&format!("**Sources:** {}\n\n", sources.join(", ")));

    out.push_str("## Executive Summary\n\n");
    out.push_str(&format!("[Concise overview of findings on {}]\n\n", args.topic));

    match depth {
        Depth::Quick => out.push_str(quick_findings()),
        Depth::Standard => out.push_str(&standard_analysis(&args.topic)),
        Depth::Extensive => {
            out.push_str(&standard_analysis(&args.topic));
            out.push_str(deep_dive());
        }
    }

    out
}

fn quick_findings() -> &'static str {
    "## Quick Research Findings

### Key Points
1. **Main Concept:** [Primary definition/explanation]
2. **Current State:** [Industry status]
3. **Common Use Cases:** [Where it's applied]

### Quick Recommendations
- [Action item 1]
- [Action item 2]
"
}

fn standard_analysis(topic: &str) -> String {
    format!(
        "## Standard Research Analysis

### Background
[Historical context and evolution of {topic}]

### Current Landscape
**Market Leaders:**
- Company/Technology 1
- Company/Technology 2
- Company/Technology 3

### Technical Details
**Architecture/Approach:**
[Technical implementation details]

**Strengths:**
- Advantage 1
- Advantage 2

**Limitations:**
- Challenge 1
- Challenge 2

### Use Cases
1. **Industry A:** [Application]
2. **Industry B:** [Application]
3. **Industry C:** [Application]

### Recommendations
Based on research, consider:
- [Strategic recommendation]
- [Tactical recommendation]
"
    )
}

fn deep_dive() -> &'static str {
    "
### Deep Dive Analysis

**Comparative Analysis:**
| Solution | Pros | Cons | Best For |
|----------|------|------|----------|
| Option A | [++] | [--] | [Use case] |
| Option B | [++] | [--] | [Use case] |
| Option C | [++] | [--] | [Use case] |

**Future Trends:**
- Emerging technology 1
- Industry shift 2
- Innovation area 3

**Cost-Benefit Analysis:**
- Implementation cost: [Estimate]
- Maintenance cost: [Estimate]
- Expected ROI: [Projection]

**Risk Assessment:**
- Technical risks: [Analysis]
- Business risks: [Analysis]
- Mitigation strategies: [Recommendations]

### References
1. [Academic source]
2. [Industry report]
3. [Technical documentation]
"
}
