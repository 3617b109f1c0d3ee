//! Group orchestrator: drives one file group through hash, place, companion, record
//!
//! Per group: validate the destination, then for each source in order hash it,
//! place it, carry its companion along, and record the entries. Directories
//! among the sources are skipped. Any error stops the group where it is;
//! files already placed stay placed.

use crate::error::RevisionError;
use crate::revision::{companion, namer};
use crate::revision::placer::Placer;
use crate::summary::{Summary, SummaryRecorder};
use crate::types::{FileGroup, GroupReport, RevisionEntry, RevisionOptions};
use tracing::{debug, info};

/// Runs file groups against a fixed set of options
#[derive(Debug, Clone)]
pub struct GroupOrchestrator {
    options: RevisionOptions,
}

impl GroupOrchestrator {
    /// Create an orchestrator; rejects options that could never produce a name.
    pub fn new(options: RevisionOptions) -> Result<Self, RevisionError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &RevisionOptions {
        &self.options
    }

    /// Revision every regular file of `group`, recording into `summary`.
    pub fn process_group(
        &self,
        group: &FileGroup,
        summary: &Summary,
    ) -> Result<GroupReport, RevisionError> {
        let placer = Placer::for_group(group);
        placer.prepare(&group.id)?;

        let recorder =
            SummaryRecorder::new(group.working_directory.clone(), self.options.drop_cwd);
        let mut report = GroupReport {
            group: group.id.clone(),
            ..Default::default()
        };

        for file in &group.sources {
            if file.is_dir() {
                debug!(group = %group.id, path = %file.display(), "Skipping directory");
                continue;
            }

            let revised_name = namer::name(file, &self.options)?;
            let (mode, result_path) = placer.place(file, &revised_name)?;

            let entry = RevisionEntry::new(file.clone(), result_path.clone());
            recorder.record(summary, &entry);
            info!(
                group = %group.id,
                "✔ {} changed to {}",
                file.display(),
                revised_name.to_string_lossy()
            );
            report.entries.push(entry);
            report.revised += 1;

            if let Some(entry) = companion::resolve_companion(file, &result_path, mode)? {
                recorder.record(summary, &entry);
                info!(
                    group = %group.id,
                    "✔ {} changed to {}",
                    entry.original.display(),
                    entry
                        .revised
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default()
                );
                report.entries.push(entry);
                report.companions += 1;
            }
        }

        info!(
            group = %group.id,
            "Revved {} {}",
            report.revised,
            if report.revised == 1 { "file" } else { "files" }
        );
        Ok(report)
    }
}
