//! Repository layer
//!
//! Repositories are thin, trait-based wrappers over the HTTP clients so the
//! poll loop can be exercised without a network.

mod notifier;
mod statuses;

// Re-export traits
pub use notifier::Notifier;
pub use statuses::StatusRepository;

// Re-export implementations
pub use notifier::TelegramNotifier;
pub use statuses::HttpStatusRepository;
