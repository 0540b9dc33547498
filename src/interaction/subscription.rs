use crate::interaction::input::InputEventKind;

/// Which handler an input subscription feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Gesture,
    WheelZoom,
}

/// Disposable handle returned for every subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle {
    id: u64,
    kind: InputEventKind,
    listener: ListenerKind,
}

impl SubscriptionHandle {
    #[must_use]
    pub fn kind(self) -> InputEventKind {
        self.kind
    }

    #[must_use]
    pub fn listener(self) -> ListenerKind {
        self.listener
    }
}

/// Input subscriptions held by one controller, released together on teardown.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    handles: Vec<SubscriptionHandle>,
    next_id: u64,
}

impl SubscriptionSet {
    pub fn subscribe(&mut self, kind: InputEventKind, listener: ListenerKind) -> SubscriptionHandle {
        self.next_id += 1;
        let handle = SubscriptionHandle {
            id: self.next_id,
            kind,
            listener,
        };
        self.handles.push(handle);
        handle
    }

    /// Releases one subscription. Returns `false` for already released handles.
    pub fn dispose(&mut self, handle: SubscriptionHandle) -> bool {
        let before = self.handles.len();
        self.handles.retain(|entry| entry.id != handle.id);
        self.handles.len() != before
    }

    #[must_use]
    pub fn is_subscribed(&self, kind: InputEventKind, listener: ListenerKind) -> bool {
        self.handles
            .iter()
            .any(|entry| entry.kind == kind && entry.listener == listener)
    }

    /// Releases everything and returns how many subscriptions were live.
    pub fn release_all(&mut self) -> usize {
        let released = self.handles.len();
        self.handles.clear();
        released
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
