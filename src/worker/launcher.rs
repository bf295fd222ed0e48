//! Bounded task launcher.
//!
//! A fixed set of workers pulls tasks from a bounded channel. `launch` never
//! waits: when the channel is full the task is rejected so the caller can
//! answer the user right away instead of piling up work.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::{TASK_FAILURE_MESSAGE, WorkerDeps};
use super::handler::process_task;
use crate::core::models::PipelineTask;
use crate::kakao::response_builder::format_result;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Task queue is full")]
    QueueFull,

    #[error("Task launcher is shut down")]
    Closed,
}

/// Cloneable handle used by request handlers to start tasks.
#[derive(Debug, Clone)]
pub struct TaskLauncher {
    tx: mpsc::Sender<PipelineTask>,
}

/// Owns the worker tasks. Dropping it detaches them.
#[derive(Debug)]
pub struct WorkerPool {
    workers: Vec<JoinHandle<()>>,
}

impl TaskLauncher {
    /// Start `worker_count` workers behind a queue holding up to
    /// `queue_capacity` pending tasks. Both values are raised to at least 1.
    #[must_use]
    pub fn start(
        deps: WorkerDeps,
        worker_count: usize,
        queue_capacity: usize,
    ) -> (TaskLauncher, WorkerPool) {
        let (tx, rx) = mpsc::channel(queue_capacity.max(1));
        let rx = Arc::new(Mutex::new(rx));

        let workers = (0..worker_count.max(1))
            .map(|worker_id| tokio::spawn(worker_loop(worker_id, deps.clone(), Arc::clone(&rx))))
            .collect();

        info!(
            worker_count = worker_count.max(1),
            queue_capacity = queue_capacity.max(1),
            "Task launcher started"
        );
        (TaskLauncher { tx }, WorkerPool { workers })
    }

    /// Hand a task to the workers without waiting for it to run.
    pub fn launch(&self, task: PipelineTask) -> Result<(), LaunchError> {
        let correlation_id = task.correlation_id.clone();
        let kind = task.kind.name();
        match self.tx.try_send(task) {
            Ok(()) => {
                info!(correlation_id = %correlation_id, kind, "Task queued");
                Ok(())
            }
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(correlation_id = %correlation_id, kind, "Task rejected: queue full");
                Err(LaunchError::QueueFull)
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                warn!(correlation_id = %correlation_id, kind, "Task rejected: launcher closed");
                Err(LaunchError::Closed)
            }
        }
    }
}

impl WorkerPool {
    /// Wait until every launcher handle is gone and all queued tasks have
    /// finished.
    pub async fn join(self) {
        for result in futures::future::join_all(self.workers).await {
            if let Err(e) = result {
                error!("Worker terminated abnormally: {}", e);
            }
        }
        info!("All workers finished");
    }
}

async fn worker_loop(
    worker_id: usize,
    deps: WorkerDeps,
    rx: Arc<Mutex<mpsc::Receiver<PipelineTask>>>,
) {
    loop {
        // Hold the lock only while waiting for the next task.
        let next = { rx.lock().await.recv().await };
        let Some(task) = next else {
            break;
        };

        let correlation_id = task.correlation_id.clone();
        let callback_url = task.callback_url.clone();
        let task_deps = deps.clone();
        // Run on its own task so a panic is contained to this one job.
        let handle = tokio::spawn(async move { process_task(&task_deps, task).await });
        if let Err(e) = handle.await {
            error!(
                worker_id,
                correlation_id = %correlation_id,
                "Task panicked: {}",
                e
            );
            // The pipeline never reached its own delivery.
            deps.dispatcher
                .deliver(&callback_url, &format_result(TASK_FAILURE_MESSAGE))
                .await;
        }
    }
}
