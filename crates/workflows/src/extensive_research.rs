//! Four-phase research plan across several source types.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_array_prop, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Deliverable {
    Report,
    Presentation,
    Documentation,
}

impl Deliverable {
    fn label(self) -> &'static str {
        match self {
            Self::Report => "report",
            Self::Presentation => "presentation",
            Self::Documentation => "documentation",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    topic: String,
    #[serde(default)]
    sources: Option<Vec<String>>,
    #[serde(default)]
    deliverable: Option<Deliverable>,
}

pub struct ExtensiveResearch;

#[async_trait]
impl Tool for ExtensiveResearch {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_workflow_extensive_research".into(),
            description: "Comprehensive multi-phase research workflow. Coordinates research \
                          across multiple sources and synthesizes findings."
                .into(),
            input_schema: object_schema(
                vec![
                    ("topic", string_prop("Research topic or question")),
                    (
                        "sources",
                        string_array_prop(
                            "Source types to research (academic, industry, technical, market)",
                        ),
                    ),
                    (
                        "deliverable",
                        enum_prop(
                            "Output format. Default: report",
                            &["report", "presentation", "documentation"],
                        ),
                    ),
                ],
                vec!["topic"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_workflow_extensive_research")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let sources = args.sources.clone().unwrap_or_else(|| {
        vec![
            "academic".into(),
            "industry".into(),
            "technical".into(),
            "market".into(),
        ]
    });
    let deliverable = args.deliverable.unwrap_or(Deliverable::Report);

    let mut out = String::from("# Extensive Research Workflow\n\n");
    out.push_str(&format!("**Topic:** {}\n", args.topic));
    out.push_str(&format!("**Sources:** {}\n", sources.join(", ")));
    out.push_str(&format!("**Deliverable:** {}\n\n", deliverable.label()));

    out.push_str(&format!(
        "## Phase 1: Research Planning

**Objective:** Define research scope and methodology

**Tasks:**
- [ ] Define research questions
- [ ] Identify key sources
- [ ] Set success criteria
- [ ] Allocate time/resources

**Research Questions:**
1. What is {topic}?
2. How does it work?
3. What are the alternatives?
4. What are the pros/cons?
5. What are the trends?

",
        topic = args.topic,
    ));

    out.push_str("## Phase 2: Data Collection\n\n**Sources to Research:**\n\n");
    for source in &sources {
        out.push_str(&format!("### {} Sources\n", title_case(source)));
        out.push_str(source_outlets(source));
    }

    out.push_str(
        "## Phase 3: Analysis & Synthesis

**Analysis Framework:**
- Comparative analysis
- SWOT analysis
- Trend analysis
- Cost-benefit analysis

### Key Findings
[To be populated with research results]

### Insights
[Synthesized insights from multiple sources]

## Phase 4: Report Generation

",
    );

    out.push_str(deliverable_outline(deliverable));

    out.push_str(
        "## Timeline

- **Week 1:** Research planning
- **Week 2-3:** Data collection
- **Week 4:** Analysis & synthesis
- **Week 5:** Report generation & review
",
    );

    out
}

fn source_outlets(source: &str) -> &'static str {
    match source {
        "academic" => {
            "- Google Scholar
- IEEE Xplore
- ACM Digital Library
- arXiv

"
        }
        "industry" => {
            "- Gartner reports
- Forrester research
- Industry blogs
- Case studies

"
        }
        "technical" => {
            "- Technical documentation
- API references
- GitHub repositories
- Stack Overflow

"
        }
        "market" => {
            "- Market analysis reports
- Competitor analysis
- User reviews
- Pricing data

"
        }
        _ => "\n",
    }
}

fn deliverable_outline(deliverable: Deliverable) -> &'static str {
    match deliverable {
        Deliverable::Report => {
            "**Research Report Structure:**
1. Executive Summary
2. Introduction & Methodology
3. Findings by Source
4. Comparative Analysis
5. Recommendations
6. References

"
        }
        Deliverable::Presentation => {
            "**Presentation Outline:**
- Slide 1: Topic Overview
- Slide 2-3: Key Findings
- Slide 4: Comparative Analysis
- Slide 5: Recommendations
- Slide 6: Next Steps

"
        }
        Deliverable::Documentation => {
            "**Documentation Structure:**
- Overview
- Technical Details
- Implementation Guide
- Best Practices
- Examples

"
        }
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn default_sources_and_report_outline() {
        let out = ExtensiveResearch
            .execute(json!({"topic": "vector databases"}))
            .await
            .unwrap();
        assert!(out.contains("**Sources:** academic, industry, technical, market"));
        assert!(out.contains("### Academic Sources"));
        assert!(out.contains("Research Report Structure"));
        assert!(out.contains("## Phase 4: Report Generation"));
    }

    #[tokio::test]
    async fn presentation_deliverable_gets_slide_outline() {
        let out = ExtensiveResearch
            .execute(json!({
                "topic": "vector databases",
                "sources": ["technical"],
                "deliverable": "presentation",
            }))
            .await
            .unwrap();
        assert!(out.contains("Presentation Outline"));
        assert!(out.contains("Stack Overflow"));
        assert!(!out.contains("Gartner reports"));
    }
}
