//! Event layer
//!
//! Chat event bus used to push store changes to front ends (CLI today;
//! any transport that can drain an mpsc receiver tomorrow).

use log::trace;
use serde::Serialize;
use std::sync::{Arc, Mutex, OnceLock};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    ConversationCreated {
        conversation_id: String,
        timestamp_ms: i64,
    },
    MessageAppended {
        conversation_id: String,
        message_id: String,
    },
    /// One streamed chunk. `delta` is the new text, `content` the full
    /// assistant message so far.
    AssistantDelta {
        conversation_id: String,
        message_id: String,
        delta: String,
        content: String,
    },
    GeneratingChanged {
        generating: bool,
    },
    ConversationDeleted {
        conversation_id: String,
    },
    ConversationsCleared,
}

/// Fan-out bus: every subscriber gets every event. Closed receivers are
/// pruned on the next emit.
pub struct ChatEventBus {
    senders: Mutex<Vec<mpsc::UnboundedSender<ChatEvent>>>,
}

impl ChatEventBus {
    pub fn new() -> Self {
        Self {
            senders: Mutex::new(Vec::new()),
        }
    }

    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<ChatEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.lock().unwrap().push(tx);
        rx
    }

    pub fn emit(&self, event: ChatEvent) {
        trace!("Chat event: {:?}", event);
        let mut senders = self.senders.lock().unwrap();
        senders.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for ChatEventBus {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_EVENT_BUS: OnceLock<Arc<ChatEventBus>> = OnceLock::new();

pub fn get_global_event_bus() -> Arc<ChatEventBus> {
    GLOBAL_EVENT_BUS
        .get_or_init(|| Arc::new(ChatEventBus::new()))
        .clone()
}

pub fn emit_global_event(event: ChatEvent) {
    get_global_event_bus().emit(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_emitted_events() {
        let bus = ChatEventBus::new();
        let mut rx = bus.subscribe();
        bus.emit(ChatEvent::GeneratingChanged { generating: true });

        match rx.recv().await {
            Some(ChatEvent::GeneratingChanged { generating }) => assert!(generating),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn dropped_subscribers_are_pruned() {
        let bus = ChatEventBus::new();
        let rx = bus.subscribe();
        drop(rx);
        bus.emit(ChatEvent::ConversationsCleared);
        assert!(bus.senders.lock().unwrap().is_empty());
    }
}
