//! Personal productivity scaffolds.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum TaskType {
    GoalSetting,
    TimeManagement,
    HabitTracking,
    DecisionMaking,
}

impl TaskType {
    fn label(self) -> &'static str {
        match self {
            Self::GoalSetting => "goal-setting",
            Self::TimeManagement => "time-management",
            Self::HabitTracking => "habit-tracking",
            Self::DecisionMaking => "decision-making",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    task_type: TaskType,
    context: String,
}

pub struct LifeManagement;

#[async_trait]
impl Tool for LifeManagement {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_skill_life_management".into(),
            description: "Personal productivity and life management skill. Helps with goal \
                          setting, time management, habit tracking, and decision making."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "task_type",
                        enum_prop(
                            "Type of life management task",
                            &[
                                "goal-setting",
                                "time-management",
                                "habit-tracking",
                                "decision-making",
                            ],
                        ),
                    ),
                    ("context", string_prop("Context or specific goal/situation")),
                ],
                vec!["task_type", "context"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_skill_life_management")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let mut out = String::from("# Life Management Plan\n\n");
    out.push_str(&format!("**Focus Area:** {}\n", args.task_type.label()));
    out.push_str(&format!("**Context:** {}\n\n", args.context));

    match args.task_type {
        TaskType::GoalSetting => out.push_str(&smart_goals(&args.context)),
        TaskType::TimeManagement => out.push_str(time_management()),
        TaskType::HabitTracking => out.push_str(&habit_tracker(&args.context)),
        TaskType::DecisionMaking => out.push_str(&decision_framework(&args.context)),
    }

    out
}

fn smart_goals(context: &str) -> String {
    format!(
        "## SMART Goals Framework

### Specific
What exactly do you want to accomplish?
- [Clearly defined goal based on: {context}]

### Measurable
How will you track progress?
- Metric 1: [Quantifiable measure]
- Metric 2: [Progress indicator]

### Achievable
Is this realistic?
- Resources needed: [List]
- Skills required: [List]

### Relevant
Why is this important?
- Alignment with values: [Connection]
- Long-term impact: [Benefit]

### Time-bound
When will you achieve this?
- Start date: [Date]
- Milestones: [Timeline]
- Target completion: [Date]

## Action Plan
1. Week 1: [First steps]
2. Week 2-4: [Core actions]
3. Month 2-3: [Development]
4. Review & adjust: [Checkpoint]
"
    )
}

fn time_management() -> &'static str {
    "## Time Management System

### Eisenhower Matrix
| Urgent & Important | Not Urgent & Important |
|--------------------|------------------------|
| Do First           | Schedule               |
| Crises, Deadlines  | Planning, Learning     |

| Urgent & Not Important | Not Urgent & Not Important |
|------------------------|----------------------------|
| Delegate               | Eliminate                  |
| Interruptions          | Time wasters               |

### Daily Schedule Template
**Morning (6-12):**
- 6:00 - Morning routine
- 7:00 - Deep work block 1
- 9:00 - Break
- 9:15 - Meetings/collaboration

**Afternoon (12-18):**
- 12:00 - Lunch
- 13:00 - Deep work block 2
- 15:00 - Email/admin
- 16:00 - Team sync

**Evening (18-22):**
- 18:00 - Exercise
- 19:00 - Dinner
- 20:00 - Learning/reading
- 21:30 - Wind down

### Weekly Review
- [ ] Review accomplishments
- [ ] Plan next week
- [ ] Adjust priorities
"
}

fn habit_tracker(habit: &str) -> String {
    format!(
        "## Habit: {habit}

### 30-Day Challenge
Track daily completion:

Week 1: [ ][ ][ ][ ][ ][ ][ ]
Week 2: [ ][ ][ ][ ][ ][ ][ ]
Week 3: [ ][ ][ ][ ][ ][ ][ ]
Week 4: [ ][ ][ ][ ][ ][ ][ ]

### Habit Stacking
**Trigger:** [Existing habit]
**New Habit:** {habit}
**Reward:** [Positive reinforcement]

**Example:** After [trigger], I will [habit], then [reward]

### Obstacles & Solutions
| Obstacle | Solution |
|----------|----------|
| Lack of time | Wake up 30min earlier |
| Forget | Set phone reminder |
| Low motivation | Find accountability partner |

### Progress Metrics
- Streak: 0 days
- Success rate: 0%
- Target: 21 days (habit formation)
"
    )
}

fn decision_framework(decision: &str) -> String {
    format!(
        "## Decision: {decision}

### Pros & Cons Analysis
| Pros | Cons |
|------|------|
| + Benefit 1 | - Risk 1 |
| + Benefit 2 | - Risk 2 |
| + Benefit 3 | - Cost/effort |

### Decision Matrix
| Option | Cost | Time | Impact | Risk | Total |
|--------|------|------|--------|------|-------|
| Option A | 3 | 2 | 5 | 2 | 12 |
| Option B | 4 | 4 | 4 | 1 | 13 |
| Option C | 2 | 3 | 3 | 3 | 11 |

*Scale: 1 (low) to 5 (high), lower risk is better*

### 10-10-10 Rule
- **10 minutes:** How will I feel?
- **10 months:** How will it affect me?
- **10 years:** What will be the long-term impact?

### Recommendation
Based on analysis: [Suggested option with reasoning]
"
    )
}
