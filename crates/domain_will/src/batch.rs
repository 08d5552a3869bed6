//! Batch generation
//!
//! Every request is an independent unit of work. Wills share no state, so
//! requests are assembled in parallel on the rayon pool and a failure in one
//! never touches another. Outcomes come back in input order.

use core_kernel::{BatchId, WillId};
use rayon::prelude::*;
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};
use tracing::{info, instrument};

use crate::aggregate::Will;
use crate::assembler::{assemble, AssembledWill, AssemblyContext};
use crate::error::WillError;

/// One entry of a batch: a built will, or the error that stopped it being built
pub type WillDraft = Result<Will, WillError>;

/// Result for one request of a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    /// Position of the request in the input
    pub index: usize,
    /// Id of the will, if it was built
    pub will_id: Option<WillId>,
    #[serde(skip)]
    pub result: Result<AssembledWill, WillError>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Summary of a batch run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub batch_id: BatchId,
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Assembles every draft independently
#[instrument(skip(drafts, ctx), fields(requests = drafts.len()))]
pub fn generate_batch(drafts: Vec<WillDraft>, ctx: &AssemblyContext) -> BatchReport {
    let batch_id = BatchId::new();

    let outcomes: Vec<BatchOutcome> = drafts
        .into_par_iter()
        .enumerate()
        .map(|(index, draft)| {
            panic::catch_unwind(AssertUnwindSafe(|| process(index, draft, ctx)))
                .unwrap_or_else(|_| aborted(index))
        })
        .collect();

    let report = BatchReport { batch_id, outcomes };
    info!(
        batch_id = %report.batch_id,
        succeeded = report.succeeded(),
        failed = report.failed(),
        "Batch generated"
    );
    report
}

fn aborted(index: usize) -> BatchOutcome {
    BatchOutcome {
        index,
        will_id: None,
        result: Err(WillError::validation(
            vec!["Will generation aborted unexpectedly".to_string()],
            Vec::new(),
        )),
    }
}

fn process(index: usize, draft: WillDraft, ctx: &AssemblyContext) -> BatchOutcome {
    match draft {
        Ok(will) => BatchOutcome {
            index,
            will_id: Some(will.id()),
            result: assemble(&will, ctx),
        },
        Err(e) => BatchOutcome {
            index,
            will_id: None,
            result: Err(e),
        },
    }
}
