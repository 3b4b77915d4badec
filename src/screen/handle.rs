use std::collections::VecDeque;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

use super::controller::{DraftField, ScreenController, ScreenSnapshot, ScreenState, SubmitOutcome};
use crate::api::{ApiError, DraftRecord, ModelRecord, ModelsApi};

const COMMAND_BUFFER: usize = 64;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("screen task is no longer running")]
    Closed,
}

enum Command {
    Mount,
    Snapshot(oneshot::Sender<ScreenSnapshot>),
    Edit { field: DraftField, value: String },
    /// `None` sends the draft as it stands when the command arrives.
    Submit {
        draft: Option<DraftRecord>,
        reply: oneshot::Sender<SubmitOutcome>,
    },
}

type ListResult = Result<Vec<ModelRecord>, ApiError>;

enum Completion {
    Listed(ListResult),
    Created(Result<(), ApiError>),
    /// The list fetched after a successful create.
    Refreshed(ListResult),
}

struct Submission {
    draft: DraftRecord,
    reply: oneshot::Sender<SubmitOutcome>,
}

/// Cheap, cloneable access to the running screen.
#[derive(Debug, Clone)]
pub struct ScreenHandle {
    commands: mpsc::Sender<Command>,
}

impl ScreenHandle {
    /// Display the screen. The first call fetches the model list.
    ///
    /// # Errors
    ///
    /// Returns an error if the screen task has stopped.
    pub async fn mount(&self) -> Result<(), ScreenError> {
        self.send(Command::Mount).await
    }

    /// Current list, draft and state. Consumes the pending alert.
    ///
    /// # Errors
    ///
    /// Returns an error if the screen task has stopped.
    pub async fn snapshot(&self) -> Result<ScreenSnapshot, ScreenError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Snapshot(reply)).await?;
        rx.await.map_err(|_| ScreenError::Closed)
    }

    /// Overwrite one draft field.
    ///
    /// # Errors
    ///
    /// Returns an error if the screen task has stopped.
    pub async fn edit(&self, field: DraftField, value: impl Into<String>) -> Result<(), ScreenError> {
        self.send(Command::Edit {
            field,
            value: value.into(),
        })
        .await
    }

    /// Send the current draft and wait for the outcome.
    ///
    /// See [`submit_draft`](Self::submit_draft).
    ///
    /// # Errors
    ///
    /// Returns an error if the screen task has stopped.
    pub async fn submit(&self) -> Result<SubmitOutcome, ScreenError> {
        self.submit_command(None).await
    }

    /// Replace the draft with `draft` and send it, in one step.
    ///
    /// Submissions are sent one at a time in arrival order. A successful one
    /// resolves after the refreshed list has been applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the screen task has stopped.
    pub async fn submit_draft(&self, draft: DraftRecord) -> Result<SubmitOutcome, ScreenError> {
        self.submit_command(Some(draft)).await
    }

    async fn submit_command(&self, draft: Option<DraftRecord>) -> Result<SubmitOutcome, ScreenError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Submit { draft, reply }).await?;
        rx.await.map_err(|_| ScreenError::Closed)
    }

    async fn send(&self, command: Command) -> Result<(), ScreenError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| ScreenError::Closed)
    }
}

/// Start the task that owns the screen controller.
///
/// The task ends once every [`ScreenHandle`] is dropped. Requests still in
/// flight at that point complete, and their results are discarded.
pub fn spawn_screen<A>(api: Arc<A>) -> (ScreenHandle, JoinHandle<()>)
where
    A: ModelsApi + 'static,
{
    let (commands, rx) = mpsc::channel(COMMAND_BUFFER);
    let task = tokio::spawn(run_screen(api, rx));
    (ScreenHandle { commands }, task)
}

async fn run_screen<A>(api: Arc<A>, mut commands: mpsc::Receiver<Command>)
where
    A: ModelsApi + 'static,
{
    let (done, mut done_rx) = mpsc::unbounded_channel();
    let mut task = ScreenTask {
        api,
        controller: ScreenController::new(),
        done,
        queue: VecDeque::new(),
        current: None,
    };

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else { break };
                task.handle_command(command);
            }
            Some(done) = done_rx.recv() => task.handle_completion(done),
        }
    }

    debug!(dropped = task.queue.len(), "Screen closed");
}

struct ScreenTask<A> {
    api: Arc<A>,
    controller: ScreenController,
    done: mpsc::UnboundedSender<Completion>,
    queue: VecDeque<Submission>,
    /// Reply for the submission being sent or refreshed.
    current: Option<oneshot::Sender<SubmitOutcome>>,
}

impl<A> ScreenTask<A>
where
    A: ModelsApi + 'static,
{
    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Mount => {
                if self.controller.mount() {
                    self.spawn_list(Completion::Listed);
                }
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(self.controller.snapshot());
            }
            Command::Edit { field, value } => self.controller.edit(field, value),
            Command::Submit { draft, reply } => {
                let draft = draft.unwrap_or_else(|| self.controller.draft().clone());
                self.queue.push_back(Submission { draft, reply });
                if self.current.is_some() {
                    debug!(queued = self.queue.len(), "Submission queued");
                }
                self.start_next();
            }
        }
    }

    fn handle_completion(&mut self, done: Completion) {
        match done {
            Completion::Listed(result) => self.controller.apply_list(result),
            Completion::Created(result) => match self.controller.finish_submit(result) {
                SubmitOutcome::Created => self.spawn_list(Completion::Refreshed),
                SubmitOutcome::Failed => self.finish(SubmitOutcome::Failed),
            },
            Completion::Refreshed(result) => {
                self.controller.apply_list(result);
                self.finish(SubmitOutcome::Created);
            }
        }
    }

    fn finish(&mut self, outcome: SubmitOutcome) {
        if let Some(reply) = self.current.take() {
            let _ = reply.send(outcome);
        }
        self.start_next();
    }

    fn start_next(&mut self) {
        if self.current.is_some() || self.controller.state() == ScreenState::Submitting {
            return;
        }
        let Some(next) = self.queue.pop_front() else {
            return;
        };
        self.controller.replace_draft(next.draft);
        if let Some(draft) = self.controller.begin_submit() {
            self.current = Some(next.reply);
            self.spawn_create(draft);
        }
    }

    fn spawn_list(&self, completion: fn(ListResult) -> Completion) {
        let api = Arc::clone(&self.api);
        let done = self.done.clone();
        tokio::spawn(async move {
            let result = api.list_models().await;
            // The screen may be gone by now; then there is nobody to update.
            let _ = done.send(completion(result));
        });
    }

    fn spawn_create(&self, draft: DraftRecord) {
        let api = Arc::clone(&self.api);
        let done = self.done.clone();
        tokio::spawn(async move {
            let result = api.create_model(&draft).await;
            let _ = done.send(Completion::Created(result));
        });
    }
}
