//! Fan-out over the immediate children of a root
//!
//! One blocking task per child, each walking its own subtree; results come
//! back over a single channel and are joined in arrival order.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::reporter::DistributionReporter;
use super::walker::walk_size;
use crate::model::{EntryKind, SizeMap, SizeResult};
use crate::util::{format_size, relative_key};

/// Size of every immediate child of `root`, keyed relative to `root`.
///
/// A plain-file root yields a single entry keyed by the root path. Failing to
/// stat or list the root is an error; failures further down only zero out the
/// affected subtree.
pub async fn compute_distribution(
    root: impl AsRef<Path>,
    reporter: &mut dyn DistributionReporter,
) -> Result<SizeMap> {
    let root = root.as_ref();
    let start = Instant::now();

    let metadata = tokio::fs::metadata(root)
        .await
        .with_context(|| format!("Failed to stat root {}", root.display()))?;

    reporter.begin(root).context("Failed to write report")?;

    if !metadata.is_dir() {
        let result = SizeResult::new(
            root.to_path_buf(),
            metadata.len(),
            EntryKind::File,
            start.elapsed(),
        );
        let mut sizes = SizeMap::with_capacity(1);
        sizes.insert(root.to_path_buf(), result.size);
        reporter.entry(&result).context("Failed to write report")?;
        reporter
            .finish(result.size, start.elapsed())
            .context("Failed to write report")?;
        return Ok(sizes);
    }

    let children = list_children(root).await?;
    debug!(root = %root.display(), children = children.len(), "Spawning walkers");

    let (tx, rx) = mpsc::unbounded_channel::<SizeResult>();
    for child in &children {
        let tx = tx.clone();
        let child = child.clone();
        tokio::task::spawn_blocking(move || {
            walk_size(&child, Some(&tx));
        });
    }
    // Only the walkers hold senders now, so a lost walker closes the channel
    drop(tx);

    let (sizes, total) = join_results(root, children.len(), rx, reporter).await?;

    reporter
        .finish(total, start.elapsed())
        .context("Failed to write report")?;

    Ok(sizes)
}

/// Receives exactly `expected` results in arrival order, keying each by its
/// path relative to `root`. The channel closing early is an error.
async fn join_results(
    root: &Path,
    expected: usize,
    mut rx: mpsc::UnboundedReceiver<SizeResult>,
    reporter: &mut dyn DistributionReporter,
) -> Result<(SizeMap, u64)> {
    let mut sizes = SizeMap::with_capacity(expected);
    let mut total: u64 = 0;
    let mut unreadable = 0usize;

    for received in 0..expected {
        let Some(result) = rx.recv().await else {
            bail!(
                "{} of {} walkers under {} exited without reporting",
                expected - received,
                expected,
                root.display()
            );
        };

        debug!(
            path = %result.path.display(),
            size = %format_size(result.size),
            elapsed = ?result.elapsed,
            "Walker finished"
        );

        if !sizes.insert(relative_key(root, &result.path), result.size) {
            warn!(path = %result.path.display(), "Duplicate result ignored");
            continue;
        }
        if !result.is_readable() {
            unreadable += 1;
        }
        total += result.size;
        reporter.entry(&result).context("Failed to write report")?;
    }

    if unreadable > 0 {
        debug!(root = %root.display(), unreadable, "Children counted as zero");
    }
    Ok((sizes, total))
}

/// Full paths of the root's immediate children; any listing error is fatal
async fn list_children(root: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(root)
        .await
        .with_context(|| format!("Failed to read directory {}", root.display()))?;

    let mut children = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("Failed to read directory {}", root.display()))?
    {
        children.push(root.join(entry.file_name()));
    }
    Ok(children)
}
