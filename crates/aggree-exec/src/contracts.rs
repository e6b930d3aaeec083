use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskTicket(pub u64);

/// Work the console defers to a later tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeferredTask {
    CompleteLogin { ticket: u64 },
    FinishUpload { file_id: String },
}

impl DeferredTask {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CompleteLogin { .. } => "complete_login",
            Self::FinishUpload { .. } => "finish_upload",
        }
    }
}
