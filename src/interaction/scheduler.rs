/// Identifies one scheduled execution; stale tokens cancel nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CancelToken(u64);

#[derive(Debug)]
struct PendingTask<T> {
    token: CancelToken,
    due_ms: u64,
    payload: T,
}

/// Cancellable delayed execution with at most one pending task.
///
/// Scheduling replaces whatever is pending (cancel-and-reschedule). Time is
/// supplied by the host clock; nothing fires until `take_due` is polled with a
/// timestamp at or past the due time.
#[derive(Debug)]
pub struct DelayedTask<T> {
    pending: Option<PendingTask<T>>,
    next_token: u64,
}

impl<T> Default for DelayedTask<T> {
    fn default() -> Self {
        Self {
            pending: None,
            next_token: 0,
        }
    }
}

impl<T> DelayedTask<T> {
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, payload: T) -> CancelToken {
        self.next_token += 1;
        let token = CancelToken(self.next_token);
        self.pending = Some(PendingTask {
            token,
            due_ms: now_ms.saturating_add(delay_ms),
            payload,
        });
        token
    }

    /// Drops the pending task. Returns `true` when something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Cancels only when `token` still identifies the pending task.
    pub fn cancel_token(&mut self, token: CancelToken) -> bool {
        if self.pending.as_ref().is_some_and(|task| task.token == token) {
            self.pending = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn due_at(&self) -> Option<u64> {
        self.pending.as_ref().map(|task| task.due_ms)
    }

    /// Removes and returns the payload when the task is due at `now_ms`.
    pub fn take_due(&mut self, now_ms: u64) -> Option<T> {
        if self.due_at()? > now_ms {
            return None;
        }
        self.pending.take().map(|task| task.payload)
    }
}
