//! Cloud storage synchronization strategy validation.

use anyhow::Context;
use async_trait::async_trait;
use promptdeck_mcp::tools::{enum_prop, object_schema, string_prop, Tool};
use promptdeck_mcp::ToolDefinition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum SyncStrategy {
    RealTime,
    Batch,
    EventDriven,
}

impl SyncStrategy {
    fn label(self) -> &'static str {
        match self {
            Self::RealTime => "real-time",
            Self::Batch => "batch",
            Self::EventDriven => "event-driven",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    architecture: String,
    #[serde(default)]
    cloud_provider: Option<String>,
    #[serde(default)]
    sync_strategy: Option<SyncStrategy>,
}

pub struct CloudStorageSync;

#[async_trait]
impl Tool for CloudStorageSync {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "promptdeck_rule_cloud_storage_sync".into(),
            description: "Validates cloud storage synchronization strategy. Ensures data \
                          consistency, conflict resolution, and offline support."
                .into(),
            input_schema: object_schema(
                vec![
                    ("architecture", string_prop("Storage architecture description")),
                    (
                        "cloud_provider",
                        string_prop("Cloud provider (AWS, Azure, GCP, multi-cloud)"),
                    ),
                    (
                        "sync_strategy",
                        enum_prop(
                            "Synchronization strategy",
                            &["real-time", "batch", "event-driven"],
                        ),
                    ),
                ],
                vec!["architecture"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> anyhow::Result<String> {
        let args: Args = serde_json::from_value(arguments)
            .context("invalid arguments for promptdeck_rule_cloud_storage_sync")?;
        anyhow::ensure!(
            !args.architecture.trim().is_empty(),
            "architecture must not be empty"
        );
        Ok(render(&args))
    }
}

fn render(args: &Args) -> String {
    let provider = args.cloud_provider.as_deref().unwrap_or("multi-cloud");
    let strategy = args.sync_strategy.unwrap_or(SyncStrategy::EventDriven);

    let mut out = String::from("# Cloud Storage Synchronization Validation\n\n");
    out.push_str("**Rule:** Cloud Storage Sync\n");
    out.push_str(&format!("**Provider:** {provider}\n"));
    out.push_str(&format!("**Strategy:** {}\n\n", strategy.label()));

    out.push_str("## Sync Strategy Analysis\n\n");
    out.push_str(strategy_analysis(strategy));

    out.push_str(
        "## Validation Checklist

### Data Consistency
- [ ] Conflict resolution strategy
- [ ] Last-write-wins vs. manual merge
- [ ] Version control
- [ ] Transaction support

### Offline Support
- [ ] Local storage caching
- [ ] Queue for offline changes
- [ ] Sync on reconnection
- [ ] Conflict detection

### Performance
- [ ] Delta sync (only changes)
- [ ] Compression
- [ ] CDN for static assets
- [ ] Bandwidth optimization

### Reliability
- [ ] Retry mechanism
- [ ] Error handling
- [ ] Sync status monitoring
- [ ] Failure recovery

## Cloud Provider Implementation

",
    );

    if provider == "AWS" || provider == "multi-cloud" {
        out.push_str(
            "### AWS S3 Sync
```bash
# S3 sync command
aws s3 sync ./local s3://bucket/prefix --delete

# With event notifications
# S3 -> SQS -> Lambda -> Process
```

",
        );
    }
    if provider == "Azure" || provider == "multi-cloud" {
        out.push_str(
            "### Azure Blob Storage Sync
```bash
# AzCopy sync
azcopy sync ./local https://account.blob.core.windows.net/container
```

",
        );
    }
    if provider == "GCP" || provider == "multi-cloud" {
        out.push_str(
            "### GCP Cloud Storage Sync
```bash
# gsutil sync
gsutil -m rsync -r ./local gs://bucket
```

",
        );
    }

    out.push_str("## Conflict Resolution\n\n");
    out.push_str(&format!(
        "**Strategy:** {}\n\n",
        if strategy == SyncStrategy::RealTime {
            "Operational Transformation"
        } else {
            "Last-Write-Wins"
        }
    ));
    out.push_str(
        "**Conflict Types:**
1. Concurrent updates: merge or overwrite
2. Delete vs. update: preserve update
3. Create conflicts: use timestamps

## Compliance Status

",
    );

    let verdict = match strategy {
        SyncStrategy::RealTime => "Optimal for real-time apps",
        SyncStrategy::Batch => "Limited for real-time needs",
        SyncStrategy::EventDriven => "Good balance",
    };
    out.push_str(&format!("**Sync Strategy:** {verdict}\n\n"));
    out.push_str(
        "**Recommendations:**
1. Implement delta sync for efficiency
2. Add conflict resolution UI
3. Monitor sync success rates
4. Test offline-to-online scenarios
",
    );

    out
}

fn strategy_analysis(strategy: SyncStrategy) -> &'static str {
    match strategy {
        SyncStrategy::RealTime => {
            "### Real-Time Sync
**Latency:** < 1 second
**Complexity:** HIGH
**Cost:** HIGH

**Use Cases:**
- Collaborative editing
- Live dashboards
- Real-time analytics

"
        }
        SyncStrategy::Batch => {
            "### Batch Sync
**Latency:** Minutes to hours
**Complexity:** LOW
**Cost:** LOW

**Use Cases:**
- Backups
- Data warehousing
- Reporting

"
        }
        SyncStrategy::EventDriven => {
            "### Event-Driven Sync
**Latency:** Seconds
**Complexity:** MEDIUM
**Cost:** MEDIUM

**Use Cases:**
- File uploads
- Data replication
- Cross-region sync

"
        }
    }
}
