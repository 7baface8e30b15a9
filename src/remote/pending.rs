use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tokio::task::JoinHandle;

use super::ApiError;
use super::http_client::{check_status, error_chain};

/// Raw outcome of a non-blocking request.
#[derive(Debug)]
pub enum Reply {
    Finished {
        status: reqwest::StatusCode,
        body: Vec<u8>,
    },
    Failed(String),
    Cancelled,
}

impl Reply {
    pub(super) fn into_body(self, label: &'static str) -> Result<Vec<u8>, ApiError> {
        match self {
            Reply::Finished { status, body } => {
                check_status(label, status, &body)?;
                Ok(body)
            }
            Reply::Failed(message) => Err(ApiError::Transport(message)),
            Reply::Cancelled => Err(ApiError::Cancelled),
        }
    }
}

/// A request in flight on the client's reply runtime.
///
/// The owner polls it from its own thread. Dropping the handle aborts the
/// request; a reply that completes after that is discarded.
#[derive(Debug)]
pub struct PendingReply {
    label: &'static str,
    rx: Option<oneshot::Receiver<Reply>>,
    task: Option<JoinHandle<()>>,
}

impl PendingReply {
    pub(super) fn spawn(
        runtime: &tokio::runtime::Runtime,
        label: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Self {
        let (tx, rx) = oneshot::channel();
        let task = runtime.spawn(async move {
            let reply = match request.send().await {
                Ok(resp) => {
                    let status = resp.status();
                    match resp.bytes().await {
                        Ok(body) => Reply::Finished {
                            status,
                            body: body.to_vec(),
                        },
                        Err(err) => Reply::Failed(error_chain(&err)),
                    }
                }
                Err(err) => Reply::Failed(error_chain(&err)),
            };
            if tx.send(reply).is_err() {
                tracing::debug!(label, "reply arrived after its owner went away");
            }
        });
        Self {
            label,
            rx: Some(rx),
            task: Some(task),
        }
    }

    /// A reply that is already known, e.g. a request that could not be built.
    pub(super) fn ready(label: &'static str, reply: Reply) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(reply);
        Self {
            label,
            rx: Some(rx),
            task: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the reply once it has arrived, and `None` before that or after
    /// it has been taken.
    pub fn try_finish(&mut self) -> Option<Reply> {
        let rx = self.rx.as_mut()?;
        let reply = match rx.try_recv() {
            Ok(reply) => reply,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Reply::Cancelled,
        };
        self.rx = None;
        self.task = None;
        Some(reply)
    }

    pub fn is_taken(&self) -> bool {
        self.rx.is_none()
    }

    /// Blocks the calling thread until the reply arrives.
    ///
    /// Must not be called from inside an async runtime.
    pub fn wait(mut self) -> Reply {
        let reply = match self.rx.take() {
            Some(rx) => rx.blocking_recv().unwrap_or(Reply::Cancelled),
            None => Reply::Cancelled,
        };
        self.task = None;
        reply
    }

    pub fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            tracing::debug!(label = self.label, "aborting ion request");
            task.abort();
        }
    }
}

impl Drop for PendingReply {
    fn drop(&mut self) {
        self.abort();
    }
}
