// Axiao Wenwen Core Library - Platform-agnostic chat logic
// Layering: Util -> Responder/Stream -> Session -> Service

pub mod events; // Event layer - chat event bus for front ends
pub mod responder; // Response generator - input classification, canned catalog
pub mod service; // Service layer - mock chat API facade
pub mod session; // Session layer - in-memory conversation store
pub mod stream; // Streaming emitter - tick-driven chunk delivery
pub mod util; // Utility layer - error types

// Export main types
pub use util::errors::*;

// Re-export the shared DTOs so consumers only need this crate
pub use axiao_core_types::{
    ApiResponse, ChatMessage, Conversation, ConversationListResponse, MessageRole,
};

pub use events::{emit_global_event, get_global_event_bus, ChatEvent, ChatEventBus};
pub use responder::{Category, ResponseCatalog, ResponseSelector};
pub use service::ChatService;
pub use session::{get_global_conversation_manager, ConversationManager};
pub use stream::{EmitterConfig, StreamEmitter, StreamResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CORE_NAME: &str = "Axiao Wenwen Core";
