//! # seo-core
//!
//! Core SEO suggestion engine: a provider-agnostic completion abstraction
//! wrapped in a retry policy and a TTL cache.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  SuggestionGenerator                          │
//! │  ┌──────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │ Suggestion   │  │   Retry     │  │ CompletionProvider  │  │
//! │  │   Cache      │──│   Policy    │──│    (Strategy)       │  │
//! │  └──────────────┘  └─────────────┘  └─────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `CompletionProvider` trait enables swapping between OpenAI,
//! compatible gateways, or test doubles without changing engine logic.

pub mod cache;
pub mod error;
pub mod generator;
pub mod message;
pub mod provider;
pub mod retry;
pub mod suggestion;

pub use cache::{SuggestionCache, FRESHNESS_WINDOW};
pub use error::{Result, SeoError};
pub use generator::{SuggestionGenerator, SEO_SYSTEM_PROMPT};
pub use message::{Message, Role};
pub use provider::{Completion, CompletionProvider, GenerationOptions, TokenUsage};
pub use retry::RetryPolicy;
pub use suggestion::Suggestion;
