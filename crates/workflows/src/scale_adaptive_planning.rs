//! Planning track selection from an additive complexity score.
//!
//! Duration, team size and stated complexity each contribute points; the
//! total (capped at 100) picks one of three tracks.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{enum_prop, number_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Complexity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Track {
    QuickFlow,
    AgileStandard,
    Enterprise,
}

impl Track {
    fn label(self) -> &'static str {
        match self {
            Self::QuickFlow => "QUICK-FLOW",
            Self::AgileStandard => "AGILE-STANDARD",
            Self::Enterprise => "ENTERPRISE",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    project_goal: String,
    #[serde(default)]
    estimated_duration: Option<String>,
    #[serde(default)]
    team_size: Option<u32>,
    #[serde(default)]
    complexity: Option<Complexity>,
}

pub struct ScaleAdaptivePlanning;

#[async_trait]
impl Tool for ScaleAdaptivePlanning {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_workflow_scale_adaptive_planning".into(),
            description: "Automatically selects the appropriate planning track (Quick Flow, \
                          Agile Standard, or Enterprise) based on project complexity, \
                          duration, and team size."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "project_goal",
                        string_prop("High-level project goal or objective"),
                    ),
                    (
                        "estimated_duration",
                        string_prop("Estimated duration (e.g., \"1 week\", \"3 months\", \"1 year\")"),
                    ),
                    ("team_size", number_prop("Number of team members")),
                    (
                        "complexity",
                        enum_prop("Perceived complexity level", &["low", "medium", "high"]),
                    ),
                ],
                vec!["project_goal"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_workflow_scale_adaptive_planning")?;
        Ok(render(&args))
    }
}

fn complexity_score(args: &Args) -> u32 {
    let mut score = 0;

    match &args.estimated_duration {
        Some(duration) => {
            let duration = duration.to_lowercase();
            if duration.contains("day") || duration.contains("week") {
                score += 10;
            } else if duration.contains("month") {
                let months = leading_number(&duration).unwrap_or(3);
                score += (months * 5).min(40);
            } else if duration.contains("year") {
                score += 60;
            }
        }
        None => score += 30,
    }

    match args.team_size {
        Some(n) if n <= 3 => score += 10,
        Some(n) if n <= 10 => score += 25,
        Some(_) => score += 40,
        None => score += 15,
    }

    match args.complexity {
        Some(Complexity::Low) => score += 10,
        Some(Complexity::Medium) => score += 25,
        Some(Complexity::High) => score += 40,
        None => score += 20,
    }

    score.min(100)
}

fn leading_number(s: &str) -> Option<u32> {
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

fn select_track(score: u32) -> Track {
    if score < 35 {
        Track::QuickFlow
    } else if score < 70 {
        Track::AgileStandard
    } else {
        Track::Enterprise
    }
}

fn render(args: &Args) -> String {
    let score = complexity_score(args);
    let track = select_track(score);

    let mut out = String::from("# Scale-Adaptive Planning Analysis\n\n");
    out.push_str(&format!("**Project Goal:** {}\n", args.project_goal));
    if let Some(duration) = &args.estimated_duration {
        out.push_str(&format!("**Estimated Duration:** {duration}\n"));
    }
    if let Some(team_size) = args.team_size {
        out.push_str(&format!("**Team Size:** {team_size} members\n"));
    }
    out.push('\n');

    out.push_str("## Complexity Assessment\n\n");
    out.push_str(&format!("**Complexity Score:** {score}/100\n\n"));
    out.push_str("**Factors Analyzed:**\n");
    out.push_str(&format!(
        "- Duration: {}\n",
        args.estimated_duration.as_deref().unwrap_or("Not specified")
    ));
    out.push_str(&format!(
        "- Team size: {}\n",
        args.team_size
            .map(|n| n.to_string())
            .unwrap_or_else(|| "Solo/Small".into())
    ));
    out.push_str(&format!(
        "- Stated complexity: {}\n\n",
        match args.complexity {
            Some(Complexity::Low) => "low",
            Some(Complexity::Medium) => "medium",
            Some(Complexity::High) => "high",
            None => "Medium",
        }
    ));

    out.push_str(&format!("## Recommended Track: {}\n\n", track.label()));
    out.push_str(track_guidance(track));

    out.push_str("\n## Planning Workflow\n\n");
    out.push_str(planning_workflow(track));
    out.push('\n');

    out
}

fn track_guidance(track: Track) -> &'static str {
    match track {
        Track::QuickFlow => {
            "### Quick Flow (< 2 weeks)

**Characteristics:**
- Simple, well-defined scope
- Small team (1-3 people)
- Minimal dependencies
- Clear requirements

**Documentation:**
- Quick PRD (1-2 pages)
- Basic architecture sketch
- Simple user stories

**Process:**
- Daily standups (optional)
- Continuous deployment
- Minimal ceremony

**Timeframe:** 1-10 days
"
        }
        Track::AgileStandard => {
            "### Agile Standard (2-12 weeks)

**Characteristics:**
- Moderate complexity
- Medium team (4-10 people)
- Some dependencies
- Evolving requirements

**Documentation:**
- Full PRD with user stories
- Architecture document
- Sprint planning
- Test strategy

**Process:**
- 2-week sprints
- Sprint planning, review, retro
- Daily standups
- CI/CD pipeline

**Timeframe:** 2-12 weeks
"
        }
        Track::Enterprise => {
            "### Enterprise (12+ weeks)

**Characteristics:**
- High complexity
- Large team (10+ people)
- Many dependencies
- Extensive requirements

**Documentation:**
- Comprehensive design document
- Detailed architecture
- Multi-sprint roadmap
- Compliance documentation
- Security assessment

**Process:**
- 3-4 week sprints
- Multiple tracks (frontend, backend, infra)
- Program management
- Quarterly planning

**Timeframe:** 3-18 months
"
        }
    }
}

fn planning_workflow(track: Track) -> &'static str {
    match track {
        Track::QuickFlow => {
            "1. **Day 1:** Define scope & create PRD
2. **Day 1-2:** Design & architecture
3. **Day 3-7:** Development
4. **Day 8-9:** Testing
5. **Day 10:** Deploy"
        }
        Track::AgileStandard => {
            "1. **Week 1:** Discovery & PRD
2. **Week 1-2:** Architecture & design
3. **Week 2-8:** Development sprints
4. **Week 9-10:** Testing & QA
5. **Week 11-12:** Deployment & stabilization"
        }
        Track::Enterprise => {
            "1. **Month 1:** Requirements & planning
2. **Month 2-3:** Architecture & design
3. **Month 4-12:** Phased development
4. **Month 13-15:** Integration & testing
5. **Month 16-18:** Deployment & optimization"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn small_solo_project_selects_quick_flow() {
        let out = ScaleAdaptivePlanning
            .execute(json!({
                "project_goal": "landing page",
                "estimated_duration": "1 week",
                "team_size": 1,
                "complexity": "low",
            }))
            .await
            .unwrap();
        // 10 + 10 + 10 = 30
        assert!(out.contains("**Complexity Score:** 30/100"));
        assert!(out.contains("## Recommended Track: QUICK-FLOW"));
    }

    #[tokio::test]
    async fn large_long_project_selects_enterprise() {
        let out = ScaleAdaptivePlanning
            .execute(json!({
                "project_goal": "core banking replacement",
                "estimated_duration": "1 year",
                "team_size": 25,
                "complexity": "high",
            }))
            .await
            .unwrap();
        // 60 + 40 + 40 capped at 100
        assert!(out.contains("**Complexity Score:** 100/100"));
        assert!(out.contains("## Recommended Track: ENTERPRISE"));
    }

    #[tokio::test]
    async fn defaults_land_in_agile_standard() {
        // 30 + 15 + 20 = 65
        let out = ScaleAdaptivePlanning
            .execute(json!({"project_goal": "internal dashboard"}))
            .await
            .unwrap();
        assert!(out.contains("**Complexity Score:** 65/100"));
        assert!(out.contains("## Recommended Track: AGILE-STANDARD"));
    }

    #[test]
    fn month_durations_scale_and_cap() {
        let args = |duration: &str| Args {
            project_goal: "g".into(),
            estimated_duration: Some(duration.into()),
            team_size: Some(1),
            complexity: Some(Complexity::Low),
        };
        // months * 5 capped at 40, plus 10 team and 10 complexity
        assert_eq!(complexity_score(&args("2 months")), 30);
        assert_eq!(complexity_score(&args("12 months")), 60);
        // unparsable month count falls back to 3
        assert_eq!(complexity_score(&args("a few months")), 35);
    }
}
