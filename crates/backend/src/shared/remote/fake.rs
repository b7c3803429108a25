use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use contracts::system::auth::User;

use super::{InitialBundle, RemoteAction, RemoteError, RemoteReply, RemoteService};

/// Записанный вызов
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub action: RemoteAction,
    pub payload: serde_json::Value,
    pub user: Option<User>,
}

/// Внешний сервис в памяти для тестов: заранее заданные ответы по действию
#[derive(Default)]
pub struct FakeRemote {
    initial: Mutex<Option<Result<InitialBundle, RemoteError>>>,
    replies: Mutex<HashMap<RemoteAction, Result<RemoteReply, RemoteError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial(self, bundle: InitialBundle) -> Self {
        *self.initial.lock().unwrap() = Some(Ok(bundle));
        self
    }

    pub fn reply(self, action: RemoteAction, data: serde_json::Value) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(action, Ok(RemoteReply::new(data)));
        self
    }

    pub fn reply_with(self, action: RemoteAction, reply: RemoteReply) -> Self {
        self.replies.lock().unwrap().insert(action, Ok(reply));
        self
    }

    pub fn fail(self, action: RemoteAction, error: RemoteError) -> Self {
        self.replies.lock().unwrap().insert(action, Err(error));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteService for FakeRemote {
    async fn fetch_initial(&self) -> Result<InitialBundle, RemoteError> {
        self.initial
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(Err(RemoteError::NotConfigured))
    }

    async fn call(
        &self,
        action: RemoteAction,
        payload: serde_json::Value,
        user: Option<&User>,
    ) -> Result<RemoteReply, RemoteError> {
        self.calls.lock().unwrap().push(RecordedCall {
            action,
            payload,
            user: user.cloned(),
        });
        self.replies
            .lock()
            .unwrap()
            .get(&action)
            .cloned()
            .unwrap_or_else(|| Err(RemoteError::Api(format!("no reply for {}", action))))
    }
}
