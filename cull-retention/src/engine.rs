use cull_core::library::{ResolvedExclusions, RetentionThresholds};
use cull_core::traits::IRetentionSubject;

use crate::blocklist;
use crate::classify::{self, RetentionContext, RetentionState};
use crate::exclusion;

/// Retention engine: one classifier for movies, seasons, and disk-aware
/// seasons, parameterized by the subject's capability set.
pub struct RetentionEngine {
    thresholds: RetentionThresholds,
    exclusions: ResolvedExclusions,
}

impl RetentionEngine {
    pub fn new(thresholds: RetentionThresholds, exclusions: ResolvedExclusions) -> Self {
        Self {
            thresholds,
            exclusions,
        }
    }

    pub fn thresholds(&self) -> &RetentionThresholds {
        &self.thresholds
    }

    /// Classify one subject for this pass.
    pub fn evaluate(
        &self,
        subject: &dyn IRetentionSubject,
        ctx: &RetentionContext,
    ) -> RetentionState {
        let exempt = exclusion::is_exempt(subject.tag_ids(), &self.exclusions);
        let unwanted = exclusion::has_unwanted_genre(subject.genres(), &self.exclusions);
        classify::classify(subject.anchor(), exempt, unwanted, &self.thresholds, ctx)
    }

    /// The `add_import_exclusion` flag for a hard delete of this subject.
    /// Subjects reaching a hard delete always have an anchor; a missing one
    /// conservatively keeps the block in place.
    pub fn exclusion_flag(&self, subject: &dyn IRetentionSubject) -> bool {
        match subject.anchor() {
            Some(anchor) => {
                blocklist::should_block_reacquisition(anchor, subject.tag_ids(), &self.exclusions)
            }
            None => true,
        }
    }
}
