//! Content scaffolds: documentation, readme, tutorial, blog, presentation.

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ContentType {
    Documentation,
    Readme,
    Tutorial,
    Blog,
    Presentation,
}

#[derive(Debug, Deserialize)]
struct Args {
    content_type: ContentType,
    topic: String,
    #[serde(default)]
    audience: Option<String>,
}

pub struct ContentCreation;

#[async_trait]
impl Tool for ContentCreation {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_skill_content_creation".into(),
            description: "Creates professional documentation, READMEs, tutorials, blog \
                          posts, and presentations. Tailored to target audience."
                .into(),
            input_schema: object_schema(
                vec![
                    (
                        "content_type",
                        enum_prop(
                            "Type of content to create",
                            &["documentation", "readme", "tutorial", "blog", "presentation"],
                        ),
                    ),
                    ("topic", string_prop("Topic or subject matter")),
                    (
                        "audience",
                        string_prop("Target audience (developers, executives, end-users, etc.)"),
                    ),
                ],
                vec!["content_type", "topic"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_skill_content_creation")?;
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let audience = args.audience.as_deref().unwrap_or("general");

    let mut out = format!("# {}\n\n", args.topic);
    match args.content_type {
        ContentType::Documentation => out.push_str(&documentation(&args.topic)),
        ContentType::Readme => out.push_str(&readme(&args.topic)),
        ContentType::Tutorial => out.push_str(&tutorial(&args.topic)),
        ContentType::Blog => out.push_str(&blog_post(&args.topic)),
        ContentType::Presentation => out.push_str(&presentation(&args.topic, audience)),
    }
    out
}

fn package_slug(topic: &str) -> String {
    topic
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn documentation(topic: &str) -> String {
    format!(
        "## Overview

[Introduction to {topic}]

## Getting Started

### Prerequisites
- Requirement 1
- Requirement 2

### Installation
```bash
npm install {slug}
```

## Usage

### Basic Example
```javascript
// Example code
```

### Advanced Features
- Feature 1
- Feature 2

## API Reference

### Methods
- `method1()` - Description
- `method2()` - Description

## Best Practices
1. Practice 1
2. Practice 2

## Troubleshooting
**Issue:** Common problem
**Solution:** How to fix

## FAQ
**Q:** Common question?
**A:** Answer

## License
MIT
",
        slug = package_slug(topic),
    )
}

fn readme(topic: &str) -> String {
    format!(
        "
## Description
[Brief description of {topic}]

## Features
- Feature 1
- Feature 2
- Feature 3

## Installation
```bash
npm install
```

## Quick Start
```javascript
// Quick example
```

## Documentation
See [full documentation](./docs)

## Contributing
Contributions welcome! See [CONTRIBUTING.md](./CONTRIBUTING.md)

## License
MIT
"
    )
}

fn tutorial(topic: &str) -> String {
    format!(
        "
## What You'll Learn
By the end of this tutorial, you'll be able to:
- [ ] Understand {topic} fundamentals
- [ ] Build a working example
- [ ] Apply best practices

## Prerequisites
- Basic knowledge of [prerequisite]
- [Tool] installed

## Step 1: Setup
[Setup instructions]

## Step 2: Core Concepts
[Explanation]

## Step 3: Building the Example
[Code walkthrough]

## Step 4: Testing
[How to test]

## Next Steps
- Advanced topic 1
- Advanced topic 2

## Resources
- [Link 1](url)
- [Link 2](url)
"
    )
}

fn blog_post(topic: &str) -> String {
    let tag: String = topic.split_whitespace().collect();
    format!(
        "
*Published: {date}*

## Introduction
[Hook that grabs attention about {topic}]

## The Problem
[Describe the problem/challenge]

## The Solution
[Introduce your approach/solution]

## How It Works
[Detailed explanation with examples]

```code
// Example
```

## Benefits
1. **Benefit 1:** Description
2. **Benefit 2:** Description
3. **Benefit 3:** Description

## Real-World Example
[Case study or practical application]

## Conclusion
[Summary and call-to-action]

---
*Tags: #{tag} #development*
",
        date = Utc::now().format("%Y-%m-%d"),
    )
}

fn presentation(topic: &str, audience: &str) -> String {
    format!(
        "
## Slide 1: Title
**{topic}**
*Presented for {audience}*

---

## Slide 2: Agenda
1. Problem Statement
2. Solution Overview
3. Technical Details
4. Demo
5. Q&A

---

## Slide 3: The Problem
- Pain point 1
- Pain point 2
- Why it matters

---

## Slide 4: Our Solution
**Key Innovation:** [Main idea]
- Approach 1
- Approach 2

---

## Slide 5: Technical Architecture
[High-level diagram description]

---

## Slide 6: Demo
[Live demonstration notes]

---

## Slide 7: Benefits
- Benefit 1
- Benefit 2
- Benefit 3

---

## Slide 8: Next Steps
1. Action item 1
2. Action item 2

---

## Slide 9: Q&A
Questions?
"
    )
}
