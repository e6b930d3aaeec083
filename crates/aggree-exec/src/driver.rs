use std::time::Duration;
use std::time::Instant;

use aggree_core::ConsoleEffect;
use aggree_core::RuntimeAction;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::contracts::DeferredTask;
use crate::insights::InsightSource;
use crate::insights::SimulatedInsightSource;
use crate::scheduler::TaskScheduler;
use crate::scheduler::UploadDelayPolicy;

/// Turns timer effects into scheduled tasks and due tasks back into runtime
/// actions for the reducer.
#[derive(Debug)]
pub struct TaskDriver<S = SimulatedInsightSource> {
    scheduler: TaskScheduler,
    upload_delay: UploadDelayPolicy,
    insights: S,
    rng: StdRng,
}

impl TaskDriver<SimulatedInsightSource> {
    pub fn simulated(upload_delay: UploadDelayPolicy) -> Self {
        Self::new(upload_delay, SimulatedInsightSource::new(), StdRng::from_entropy())
    }

    /// Deterministic delays and figures.
    pub fn seeded(upload_delay: UploadDelayPolicy, seed: u64) -> Self {
        Self::new(
            upload_delay,
            SimulatedInsightSource::seeded(seed),
            StdRng::seed_from_u64(seed),
        )
    }
}

impl<S: InsightSource> TaskDriver<S> {
    pub fn new(upload_delay: UploadDelayPolicy, insights: S, rng: StdRng) -> Self {
        Self {
            scheduler: TaskScheduler::new(),
            upload_delay,
            insights,
            rng,
        }
    }

    /// Consumes the effects this driver owns. Returns false for anything
    /// else so the caller can handle it.
    pub fn handle(&mut self, effect: &ConsoleEffect, now: Instant) -> bool {
        match effect {
            ConsoleEffect::ScheduleLogin { ticket, delay_ms } => {
                self.scheduler.schedule(
                    DeferredTask::CompleteLogin { ticket: *ticket },
                    now,
                    Duration::from_millis(*delay_ms),
                );
                true
            }
            ConsoleEffect::ScheduleUpload { file_id } => {
                let delay = self.upload_delay.draw(&mut self.rng);
                tracing::debug!(file = %file_id, delay_ms = delay.as_millis() as u64, "upload timer armed");
                self.scheduler.schedule(
                    DeferredTask::FinishUpload {
                        file_id: file_id.clone(),
                    },
                    now,
                    delay,
                );
                true
            }
            ConsoleEffect::CancelAllTasks => {
                self.scheduler.cancel_all();
                true
            }
            _ => false,
        }
    }

    pub fn due_actions(&mut self, now: Instant) -> Vec<RuntimeAction> {
        self.scheduler
            .poll_due(now)
            .into_iter()
            .map(|task| match task {
                DeferredTask::CompleteLogin { ticket } => RuntimeAction::LoginCompleted { ticket },
                DeferredTask::FinishUpload { file_id } => {
                    let insights = self.insights.insights_for(&file_id);
                    RuntimeAction::UploadProcessed { file_id, insights }
                }
            })
            .collect()
    }

    pub fn pending(&self) -> usize {
        self.scheduler.pending()
    }
}
