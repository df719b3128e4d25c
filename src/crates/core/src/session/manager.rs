use crate::events::{emit_global_event, ChatEvent};
use crate::util::errors::{AxiaoError, AxiaoResult};
use axiao_core_types::{ChatMessage, Conversation, MessageRole};
use dashmap::DashMap;
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock, RwLock};

/// Titles derive from the first user message, truncated to this many
/// characters (char counted, the texts are Chinese).
const TITLE_MAX_CHARS: usize = 30;

/// Conversation manager (in-memory).
///
/// Notes:
/// - Platform-agnostic: no UI coupling, communicates via the chat event bus.
/// - Persistence: in-memory only for the process lifetime.
pub struct ConversationManager {
    conversations: DashMap<String, Conversation>,
    current_id: RwLock<Option<String>>,
    generating: AtomicBool,
}

impl ConversationManager {
    pub fn new() -> Self {
        Self {
            conversations: DashMap::new(),
            current_id: RwLock::new(None),
            generating: AtomicBool::new(false),
        }
    }

    /// Create a new conversation and make it current.
    pub fn create_conversation(&self) -> Conversation {
        let now = chrono::Utc::now().timestamp_millis();
        let conversation = Conversation {
            id: uuid::Uuid::new_v4().to_string(),
            title: None,
            messages: vec![],
            created_at_ms: now,
            updated_at_ms: now,
        };

        self.conversations
            .insert(conversation.id.clone(), conversation.clone());
        *self.current_id.write().unwrap() = Some(conversation.id.clone());

        debug!("Conversation created: id={}", conversation.id);
        emit_global_event(ChatEvent::ConversationCreated {
            conversation_id: conversation.id.clone(),
            timestamp_ms: now,
        });
        conversation
    }

    pub fn switch_conversation(&self, conversation_id: &str) -> AxiaoResult<()> {
        if !self.conversations.contains_key(conversation_id) {
            return Err(AxiaoError::NotFound(format!(
                "Conversation not found: {}",
                conversation_id
            )));
        }
        *self.current_id.write().unwrap() = Some(conversation_id.to_string());
        Ok(())
    }

    pub fn current_conversation_id(&self) -> Option<String> {
        self.current_id.read().unwrap().clone()
    }

    pub fn current_conversation(&self) -> Option<Conversation> {
        let id = self.current_conversation_id()?;
        self.conversations.get(&id).map(|c| c.clone())
    }

    /// All conversations, most recently updated first.
    pub fn sorted_conversations(&self) -> Vec<Conversation> {
        let mut conversations: Vec<Conversation> =
            self.conversations.iter().map(|c| c.clone()).collect();
        conversations.sort_by(|a, b| b.updated_at_ms.cmp(&a.updated_at_ms));
        conversations
    }

    /// Append a message to the current conversation; a first user message
    /// also sets the title. Returns the conversation id the message landed in.
    pub fn append_message(&self, message: ChatMessage) -> AxiaoResult<String> {
        let conversation_id = self.current_conversation_id().ok_or_else(|| {
            AxiaoError::NotFound("No current conversation".to_string())
        })?;

        let mut conversation = self.conversations.get_mut(&conversation_id).ok_or_else(|| {
            AxiaoError::NotFound(format!("Conversation not found: {}", conversation_id))
        })?;

        if message.role == MessageRole::User && conversation.title.is_none() {
            conversation.title = Some(derive_title(&message.content));
        }

        let message_id = message.id.clone();
        conversation.messages.push(message);
        conversation.updated_at_ms = chrono::Utc::now().timestamp_millis();
        drop(conversation);

        emit_global_event(ChatEvent::MessageAppended {
            conversation_id: conversation_id.clone(),
            message_id,
        });
        Ok(conversation_id)
    }

    /// Overwrite the content of the last message of `conversation_id`
    /// (streaming updates). No-op on an empty conversation.
    ///
    /// Conversation-scoped on purpose: a stream keeps writing into the
    /// conversation it started in even if the user switches away mid-stream.
    pub fn update_last_message(&self, conversation_id: &str, content: &str) -> AxiaoResult<()> {
        let mut conversation = self.conversations.get_mut(conversation_id).ok_or_else(|| {
            AxiaoError::NotFound(format!("Conversation not found: {}", conversation_id))
        })?;

        if let Some(last) = conversation.messages.last_mut() {
            last.content = content.to_string();
        }
        Ok(())
    }

    pub fn set_generating(&self, generating: bool) {
        self.generating.store(generating, Ordering::SeqCst);
        emit_global_event(ChatEvent::GeneratingChanged { generating });
    }

    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::SeqCst)
    }

    /// Delete a conversation; clears the current pointer when it pointed at
    /// the deleted one.
    pub fn delete_conversation(&self, conversation_id: &str) -> AxiaoResult<()> {
        self.conversations.remove(conversation_id).ok_or_else(|| {
            AxiaoError::NotFound(format!("Conversation not found: {}", conversation_id))
        })?;

        let mut current = self.current_id.write().unwrap();
        if current.as_deref() == Some(conversation_id) {
            *current = None;
        }
        drop(current);

        emit_global_event(ChatEvent::ConversationDeleted {
            conversation_id: conversation_id.to_string(),
        });
        Ok(())
    }

    pub fn clear_all(&self) {
        self.conversations.clear();
        *self.current_id.write().unwrap() = None;
        emit_global_event(ChatEvent::ConversationsCleared);
    }
}

impl Default for ConversationManager {
    fn default() -> Self {
        Self::new()
    }
}

fn derive_title(content: &str) -> String {
    let truncated: String = content.chars().take(TITLE_MAX_CHARS).collect();
    if content.chars().count() > TITLE_MAX_CHARS {
        format!("{}...", truncated)
    } else {
        truncated
    }
}

static GLOBAL_CONVERSATION_MANAGER: OnceLock<Arc<ConversationManager>> = OnceLock::new();

pub fn get_global_conversation_manager() -> Arc<ConversationManager> {
    GLOBAL_CONVERSATION_MANAGER
        .get_or_init(|| Arc::new(ConversationManager::new()))
        .clone()
}
