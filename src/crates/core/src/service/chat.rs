use crate::events::{emit_global_event, ChatEvent};
use crate::responder::ResponseSelector;
use crate::session::{get_global_conversation_manager, ConversationManager};
use crate::stream::{EmitterConfig, StreamEmitter};
use crate::util::errors::AxiaoResult;
use axiao_core_types::{ApiResponse, ChatMessage, ConversationListResponse, MessageRole};
use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

pub const DELETE_SUCCESS_MESSAGE: &str = "删除成功";
pub const CLEAR_SUCCESS_MESSAGE: &str = "清空成功";

/// Simulated latency of the conversation management endpoints.
const MOCK_LATENCY: Duration = Duration::from_millis(300);

struct MockBackend {
    selector: ResponseSelector,
    emitter: StreamEmitter,
}

/// Mock chat service.
///
/// Fabricates assistant replies and streams them into the conversation
/// store. The backend mutex serializes sends, so exactly one emission
/// session is active per service at a time.
pub struct ChatService {
    manager: Arc<ConversationManager>,
    backend: Mutex<MockBackend>,
}

impl ChatService {
    pub fn new() -> Self {
        Self::with_manager(get_global_conversation_manager())
    }

    pub fn with_manager(manager: Arc<ConversationManager>) -> Self {
        Self {
            manager,
            backend: Mutex::new(MockBackend {
                selector: ResponseSelector::new(),
                emitter: StreamEmitter::new(),
            }),
        }
    }

    pub fn with_config(manager: Arc<ConversationManager>, config: EmitterConfig) -> Self {
        Self {
            manager,
            backend: Mutex::new(MockBackend {
                selector: ResponseSelector::new(),
                emitter: StreamEmitter::with_config(config),
            }),
        }
    }

    /// Deterministic variant for tests and reproducible runs.
    pub fn with_seed(manager: Arc<ConversationManager>, config: EmitterConfig, seed: u64) -> Self {
        Self {
            manager,
            backend: Mutex::new(MockBackend {
                selector: ResponseSelector::with_seed(seed),
                emitter: StreamEmitter::with_seed(config, seed),
            }),
        }
    }

    pub fn manager(&self) -> &Arc<ConversationManager> {
        &self.manager
    }

    /// Send a user message and stream the fabricated reply.
    ///
    /// Appends the user message plus an empty assistant placeholder, then
    /// fills the placeholder chunk by chunk. Resolves after the last chunk
    /// with the "sent" envelope.
    pub async fn send_message(&self, content: &str) -> AxiaoResult<ApiResponse> {
        if self.manager.current_conversation_id().is_none() {
            self.manager.create_conversation();
        }

        let now = chrono::Utc::now().timestamp_millis();
        let user_message = ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: MessageRole::User,
            content: content.to_string(),
            timestamp_ms: now,
        };
        let conversation_id = self.manager.append_message(user_message)?;

        let assistant_message = ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: MessageRole::Assistant,
            content: String::new(),
            timestamp_ms: now,
        };
        let assistant_id = assistant_message.id.clone();
        self.manager.append_message(assistant_message)?;

        self.manager.set_generating(true);

        let mut backend = self.backend.lock().await;
        let response = backend.selector.select(content);
        debug!(
            "Streaming reply: conversation_id={}, chars={}",
            conversation_id,
            response.chars().count()
        );

        let manager = self.manager.clone();
        let mut accumulated = String::new();
        let result = backend
            .emitter
            .emit(response, |chunk| {
                accumulated.push_str(chunk);
                if let Err(e) = manager.update_last_message(&conversation_id, &accumulated) {
                    // Conversation was deleted mid-stream; keep draining.
                    warn!("Stream update dropped: {}", e);
                    return;
                }
                emit_global_event(ChatEvent::AssistantDelta {
                    conversation_id: conversation_id.clone(),
                    message_id: assistant_id.clone(),
                    delta: chunk.to_string(),
                    content: accumulated.clone(),
                });
            })
            .await;
        drop(backend);

        self.manager.set_generating(false);
        Ok(ApiResponse {
            success: result.success,
            message: result.message,
        })
    }

    /// Conversation history, most recently updated first.
    pub async fn get_conversations(&self) -> ConversationListResponse {
        ConversationListResponse {
            success: true,
            data: self.manager.sorted_conversations(),
        }
    }

    pub async fn delete_conversation(&self, conversation_id: &str) -> AxiaoResult<ApiResponse> {
        tokio::time::sleep(MOCK_LATENCY).await;
        self.manager.delete_conversation(conversation_id)?;
        Ok(ApiResponse::ok(DELETE_SUCCESS_MESSAGE))
    }

    pub async fn clear_all_conversations(&self) -> ApiResponse {
        tokio::time::sleep(MOCK_LATENCY).await;
        self.manager.clear_all();
        ApiResponse::ok(CLEAR_SUCCESS_MESSAGE)
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new()
    }
}
