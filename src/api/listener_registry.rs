use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::extensions::InteractionListener;

use super::{ChartInteraction, ViewportHost};

impl<H: ViewportHost> ChartInteraction<H> {
    /// Adds `listener` after the ones already registered; events reach
    /// listeners in registration order.
    ///
    /// Fails with [`ChartError::InvalidListener`] for an empty or taken id.
    pub fn register_listener(&mut self, listener: Box<dyn InteractionListener>) -> ChartResult<()> {
        let reason = if listener.id().is_empty() {
            Some("id must not be empty")
        } else if self.has_listener(listener.id()) {
            Some("id is already registered")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(ChartError::InvalidListener {
                id: listener.id().to_owned(),
                reason,
            });
        }

        debug!(id = listener.id(), "interaction listener registered");
        self.listeners.push(listener);
        Ok(())
    }

    /// Returns `true` when a listener with `id` was removed.
    pub fn unregister_listener(&mut self, id: &str) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id() != id);
        let removed = self.listeners.len() != before;
        if removed {
            debug!(id, "interaction listener removed");
        }
        removed
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, id: &str) -> bool {
        self.listeners.iter().any(|listener| listener.id() == id)
    }
}
