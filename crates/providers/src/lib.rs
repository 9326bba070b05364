pub mod credential;
pub mod gateway;
pub mod openai_compat;
pub mod registry;
pub mod traits;
pub(crate) mod util;

// Re-exports for convenience.
pub use credential::Credential;
pub use gateway::{FailureKind, Generation, GenerationFailure, ModelGateway};
pub use registry::ProviderRegistry;
pub use traits::{ChatRequest, ChatResponse, LlmProvider, Usage};
