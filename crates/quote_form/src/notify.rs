use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Instant,
    pub expires_at: Instant,
}

impl Toast {
    /// Fraction of the lifetime left, used for fading out.
    pub fn remaining(&self, now: Instant) -> f32 {
        let total = self.expires_at.saturating_duration_since(self.created_at);
        if total.is_zero() {
            return 0.0;
        }
        let left = self.expires_at.saturating_duration_since(now);
        (left.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Transient notifications stacked in creation order.
#[derive(Debug, Clone)]
pub struct ToastStack {
    ttl: Duration,
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            next_id: 1,
            toasts: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            created_at: now,
            expires_at: now + self.ttl,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.push(ToastKind::Success, message, now)
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.push(ToastKind::Error, message, now)
    }

    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_stack_in_creation_order_and_expire() {
        let start = Instant::now();
        let mut stack = ToastStack::new(Duration::from_secs(3));

        stack.success("first", start);
        stack.error("second", start + Duration::from_secs(1));

        let messages: Vec<_> = stack.active().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);

        stack.prune(start + Duration::from_secs(3));
        assert_eq!(stack.active().len(), 1);
        assert_eq!(stack.active()[0].kind, ToastKind::Error);

        stack.prune(start + Duration::from_secs(4));
        assert!(stack.active().is_empty());
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let now = Instant::now();
        let mut stack = ToastStack::new(Duration::from_secs(3));
        let first = stack.success("a", now);
        stack.success("b", now);

        stack.dismiss(first);
        assert_eq!(stack.active().len(), 1);
        assert_eq!(stack.active()[0].message, "b");
    }

    #[test]
    fn remaining_fraction_decays_to_zero() {
        let now = Instant::now();
        let mut stack = ToastStack::new(Duration::from_secs(2));
        stack.success("a", now);
        let toast = &stack.active()[0];

        assert_eq!(toast.remaining(now), 1.0);
        assert!((toast.remaining(now + Duration::from_secs(1)) - 0.5).abs() < 1e-3);
        assert_eq!(toast.remaining(now + Duration::from_secs(5)), 0.0);
    }
}
