//! Build runner: one task per file group, bounded concurrency, first fatal error wins
//!
//! Each group runs synchronously on a blocking worker. Up to
//! `max_concurrent_groups` groups are in flight. The first failure raises a
//! stop flag: no further group is started, and groups already queued skip
//! their work. Groups already running finish before `run` returns, so the
//! summary is stable once the error reaches the caller. Nothing is rolled back.

use crate::error::RevisionError;
use crate::orchestrator::GroupOrchestrator;
use crate::summary::Summary;
use crate::types::{FileGroup, GroupReport};
use futures::stream::{FuturesUnordered, StreamExt};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinError;
use tracing::{debug, error, info};

/// Default number of groups processed at once.
pub const DEFAULT_MAX_CONCURRENT_GROUPS: usize = 4;

/// `None` when the group was skipped because an earlier group failed
type GroupOutcome = Result<Option<GroupReport>, RevisionError>;

/// Per-group reports for a completed build, in input order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildReport {
    pub groups: Vec<GroupReport>,
}

impl BuildReport {
    pub fn total_revised(&self) -> usize {
        self.groups.iter().map(|g| g.revised).sum()
    }

    pub fn total_companions(&self) -> usize {
        self.groups.iter().map(|g| g.companions).sum()
    }
}

/// Runs file groups through a shared orchestrator
pub struct BuildRunner {
    orchestrator: Arc<GroupOrchestrator>,
    max_concurrent_groups: usize,
}

impl BuildRunner {
    pub fn new(orchestrator: GroupOrchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            max_concurrent_groups: DEFAULT_MAX_CONCURRENT_GROUPS,
        }
    }

    /// Set the concurrency bound; 1 processes groups strictly one after another.
    pub fn with_max_concurrent_groups(mut self, max: usize) -> Self {
        self.max_concurrent_groups = max.max(1);
        self
    }

    pub fn max_concurrent_groups(&self) -> usize {
        self.max_concurrent_groups
    }

    /// Run all groups, recording into `summary`.
    pub async fn run(
        &self,
        groups: Vec<FileGroup>,
        summary: Arc<Summary>,
    ) -> Result<BuildReport, RevisionError> {
        let total = groups.len();
        info!(
            groups = total,
            max_concurrent_groups = self.max_concurrent_groups,
            "Build started"
        );

        let stop = Arc::new(AtomicBool::new(false));
        let mut pending = groups.into_iter().enumerate();
        let mut in_flight = FuturesUnordered::new();
        for (index, group) in pending.by_ref().take(self.max_concurrent_groups) {
            in_flight.push(self.spawn_group(index, group, &summary, &stop));
        }

        let mut reports: Vec<Option<GroupReport>> = (0..total).map(|_| None).collect();
        let mut first_error: Option<RevisionError> = None;

        while let Some((index, group_id, joined)) = in_flight.next().await {
            let outcome = joined
                .map_err(|e| RevisionError::Task(format!("{}: {}", group_id, e)))
                .and_then(|outcome| outcome);
            match outcome {
                Ok(Some(group_report)) => reports[index] = Some(group_report),
                Ok(None) => {}
                Err(e) => {
                    stop.store(true, Ordering::SeqCst);
                    error!(group = %group_id, error = %e, "Group aborted");
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }

            if !stop.load(Ordering::SeqCst) {
                if let Some((index, group)) = pending.next() {
                    in_flight.push(self.spawn_group(index, group, &summary, &stop));
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        let report = BuildReport {
            groups: reports.into_iter().flatten().collect(),
        };
        info!(
            groups = report.groups.len(),
            revised = report.total_revised(),
            companions = report.total_companions(),
            "Build finished"
        );
        Ok(report)
    }

    /// Start one group on a blocking worker; it skips itself once `stop` is raised.
    fn spawn_group(
        &self,
        index: usize,
        group: FileGroup,
        summary: &Arc<Summary>,
        stop: &Arc<AtomicBool>,
    ) -> impl Future<Output = (usize, String, Result<GroupOutcome, JoinError>)> {
        let orchestrator = Arc::clone(&self.orchestrator);
        let summary = Arc::clone(summary);
        let stop = Arc::clone(stop);
        let group_id = group.id.clone();
        let handle = tokio::task::spawn_blocking(move || {
            if stop.load(Ordering::SeqCst) {
                debug!(group = %group.id, "Skipping group after earlier failure");
                return Ok(None);
            }
            let result = orchestrator.process_group(&group, &summary);
            if result.is_err() {
                stop.store(true, Ordering::SeqCst);
            }
            result.map(Some)
        });
        async move { (index, group_id, handle.await) }
    }

    /// Synchronous entry point: runs [`BuildRunner::run`] on a fresh runtime.
    pub fn run_blocking(
        &self,
        groups: Vec<FileGroup>,
        summary: Arc<Summary>,
    ) -> Result<BuildReport, RevisionError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| RevisionError::Task(format!("Failed to start runtime: {}", e)))?;
        runtime.block_on(self.run(groups, summary))
    }
}
