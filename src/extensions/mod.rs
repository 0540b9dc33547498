//! Hooks for code that observes interactions without owning them.

pub mod plugins;

pub use plugins::{InteractionEvent, InteractionListener, ListenerContext};
