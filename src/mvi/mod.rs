//! Unidirectional state-container primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot held behind an `Arc`
//! - **Action**: Events describing a requested change
//! - **Reducer**: Pure function `(Arc<State>, &Action) -> Arc<State>`
//!
//! Returning the incoming `Arc` is the identity transition. Consumers compare
//! snapshots with `Arc::ptr_eq` instead of deep equality.

mod action;
mod combine;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use reducer::Reducer;
pub use state::SliceState;
pub use store::Store;
