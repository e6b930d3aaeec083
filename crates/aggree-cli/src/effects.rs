//! Runs reducer effects against the outside world: timers, the export
//! directory and the filesystem for picked uploads.

use std::collections::VecDeque;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use aggree_core::export::write_export;
use aggree_core::reduce;
use aggree_core::upload::guess_mime;
use aggree_core::upload::FileMeta;
use aggree_core::ConsoleAction;
use aggree_core::ConsoleEffect;
use aggree_core::ConsoleState;
use aggree_core::RuntimeAction;
use aggree_core::UserAction;
use aggree_exec::InsightSource;
use aggree_exec::SimulatedInsightSource;
use aggree_exec::TaskDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct EffectRunner<S = SimulatedInsightSource> {
    driver: TaskDriver<S>,
    export_dir: PathBuf,
}

impl<S: InsightSource> EffectRunner<S> {
    pub fn new(driver: TaskDriver<S>, export_dir: PathBuf) -> Self {
        Self { driver, export_dir }
    }

    /// Feeds every due timer back into the reducer.
    pub fn tick(&mut self, state: &mut ConsoleState, now: Instant) -> Flow {
        for action in self.driver.due_actions(now) {
            let effects = reduce(state, ConsoleAction::Runtime(action));
            if self.run(state, effects, now) == Flow::Exit {
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    /// Executes `effects` and whatever follow-up effects they cause.
    pub fn run(&mut self, state: &mut ConsoleState, effects: Vec<ConsoleEffect>, now: Instant) -> Flow {
        let mut queue: VecDeque<ConsoleEffect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            if self.driver.handle(&effect, now) {
                continue;
            }
            match effect {
                ConsoleEffect::Quit => return Flow::Exit,
                ConsoleEffect::WriteExport { file_name, payload } => {
                    let action = match write_export(&self.export_dir, &file_name, &payload) {
                        Ok(path) => RuntimeAction::ExportWritten {
                            path: path.display().to_string(),
                        },
                        Err(err) => {
                            tracing::error!(error = %err, "export write failed");
                            RuntimeAction::ExportFailed {
                                message: err.to_string(),
                            }
                        }
                    };
                    queue.extend(reduce(state, action.into()));
                }
                ConsoleEffect::StatUploadPaths(paths) => {
                    let (files, rejected) = stat_upload_paths(&paths);
                    for (path, reason) in rejected {
                        queue.extend(reduce(
                            state,
                            RuntimeAction::UploadRejected { path, reason }.into(),
                        ));
                    }
                    if !files.is_empty() {
                        queue.extend(reduce(state, UserAction::UploadFiles(files).into()));
                    }
                }
                ConsoleEffect::RequestFrame
                | ConsoleEffect::ScheduleLogin { .. }
                | ConsoleEffect::ScheduleUpload { .. }
                | ConsoleEffect::CancelAllTasks => {}
            }
        }
        Flow::Continue
    }
}

/// Reads size and name for each path. Contents are not opened.
pub fn stat_upload_paths(paths: &[String]) -> (Vec<FileMeta>, Vec<(String, String)>) {
    let mut files = Vec::new();
    let mut rejected = Vec::new();
    for raw in paths {
        let path = Path::new(raw);
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| raw.clone());
                let mime = guess_mime(&name).to_string();
                files.push(FileMeta {
                    name,
                    mime,
                    size: meta.len(),
                });
            }
            Ok(_) => rejected.push((raw.clone(), "not a regular file".to_string())),
            Err(err) => rejected.push((raw.clone(), err.to_string())),
        }
    }
    (files, rejected)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use aggree_core::ConsoleOptions;
    use aggree_core::RoleCategory;
    use aggree_core::ViewId;
    use aggree_exec::UploadDelayPolicy;
    use pretty_assertions::assert_eq;

    use super::*;

    fn runner(export_dir: PathBuf) -> EffectRunner {
        EffectRunner::new(TaskDriver::seeded(UploadDelayPolicy::default(), 1), export_dir)
    }

    fn send(runner: &mut EffectRunner, state: &mut ConsoleState, action: UserAction, now: Instant) -> Flow {
        let effects = reduce(state, action.into());
        runner.run(state, effects, now)
    }

    fn signed_in(runner: &mut EffectRunner, now: Instant) -> ConsoleState {
        let mut state = ConsoleState::new(ConsoleOptions::default());
        send(runner, &mut state, UserAction::LoginQuickFill(RoleCategory::Admin), now);
        send(runner, &mut state, UserAction::SubmitLogin, now);
        runner.tick(&mut state, now + Duration::from_secs(2));
        assert!(state.is_authenticated());
        state
    }

    #[test]
    fn export_lands_in_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let now = Instant::now();
        let mut runner = runner(dir.path().join("exports"));
        let mut state = signed_in(&mut runner, now);

        send(&mut runner, &mut state, UserAction::Export, now);

        let written: Vec<_> = std::fs::read_dir(dir.path().join("exports"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(written.len(), 1);
        assert!(written[0].starts_with("aggree-export-"));
        assert!(state
            .interaction
            .status
            .as_deref()
            .is_some_and(|status| status.starts_with("Exported to")));
    }

    #[test]
    fn export_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let now = Instant::now();
        let mut runner = runner(blocker.join("nested"));
        let mut state = signed_in(&mut runner, now);

        send(&mut runner, &mut state, UserAction::Export, now);

        assert!(state
            .interaction
            .status
            .as_deref()
            .is_some_and(|status| status.starts_with("Export failed")));
    }

    #[test]
    fn upload_prompt_paths_become_uploads() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("sales.csv");
        std::fs::write(&csv, vec![0u8; 1536]).unwrap();
        let now = Instant::now();
        let mut runner = runner(dir.path().to_path_buf());
        let mut state = signed_in(&mut runner, now);

        send(&mut runner, &mut state, UserAction::OpenUploadPrompt, now);
        let input = format!("{};{}", csv.display(), dir.path().join("missing.csv").display());
        for ch in input.chars() {
            send(&mut runner, &mut state, UserAction::UploadPromptInput(ch), now);
        }
        send(&mut runner, &mut state, UserAction::UploadPromptSubmit, now);

        assert_eq!(state.routing.view, ViewId::Upload);
        let files = state.uploads.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "sales.csv");
        assert_eq!(files[0].mime, "text/csv");
        assert_eq!(files[0].size, 1536);

        runner.tick(&mut state, now + Duration::from_secs(5));
        assert!(state.uploads.files()[0].insights.is_some());
    }

    #[test]
    fn directories_are_not_uploads() {
        let dir = tempfile::tempdir().unwrap();
        let (files, rejected) = stat_upload_paths(&[dir.path().display().to_string()]);
        assert!(files.is_empty());
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].1, "not a regular file");
    }

    #[test]
    fn quit_effect_stops_the_loop() {
        let dir = tempfile::tempdir().unwrap();
        let now = Instant::now();
        let mut runner = runner(dir.path().to_path_buf());
        let mut state = ConsoleState::new(ConsoleOptions::default());

        assert_eq!(send(&mut runner, &mut state, UserAction::Quit, now), Flow::Exit);
    }
}
