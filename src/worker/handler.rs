use tracing::{Instrument, info, info_span};

use super::WorkerDeps;
use super::completion::run_completion;
use super::image_text::run_image_text;
use super::summarize::run_page_summary;
use crate::core::models::{PipelineTask, TaskKind};

/// Run one task through its pipeline.
///
/// Every pipeline ends in exactly one callback delivery attempt, so this
/// never fails.
pub async fn process_task(deps: &WorkerDeps, task: PipelineTask) {
    let span = info_span!(
        "task",
        correlation_id = %task.correlation_id,
        kind = task.kind.name()
    );

    async move {
        info!("Task started");
        match &task.kind {
            TaskKind::Ask { utterance } => {
                run_completion(deps, &task.callback_url, utterance, false).await;
            }
            TaskKind::SummarizeUrl { url } => {
                run_page_summary(deps, &task.callback_url, url).await;
            }
            TaskKind::ExtractImageText { image_url } => {
                run_image_text(deps, &task.callback_url, image_url).await;
            }
        }
        info!("Task finished");
    }
    .instrument(span)
    .await;
}
