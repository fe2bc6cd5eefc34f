//! Toast notifications

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// A single notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    /// Preformatted body, rendered as a code block
    pub body: String,
    pub created_at: DateTime<Local>,
    shown_at: Instant,
    lifetime: Duration,
}

impl Toast {
    /// Slide-in duration
    const SLIDE_DURATION: Duration = Duration::from_millis(250);

    pub fn new(title: impl Into<String>, body: impl Into<String>, lifetime: Duration) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            created_at: Local::now(),
            shown_at: Instant::now(),
            lifetime,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.lifetime
    }

    pub fn is_sliding(&self) -> bool {
        self.shown_at.elapsed() < Self::SLIDE_DURATION
    }

    /// Columns still hidden off the right edge while sliding in
    pub fn slide_offset(&self, width: u16) -> u16 {
        let elapsed = self.shown_at.elapsed();
        if elapsed >= Self::SLIDE_DURATION {
            return 0;
        }
        let progress = elapsed.as_secs_f32() / Self::SLIDE_DURATION.as_secs_f32();
        // Cubic ease-out: fast entry, gentle stop
        let eased = simple_easing::cubic_out(progress);
        ((1.0 - eased) * width as f32).round() as u16
    }
}

/// Visible toasts, newest last
#[derive(Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    lifetime: Duration,
}

impl ToastQueue {
    /// Toasts shown at once; older ones are dropped
    pub const MAX_VISIBLE: usize = 3;

    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.toasts.push(Toast::new(title, body, self.lifetime));
        if self.toasts.len() > Self::MAX_VISIBLE {
            let excess = self.toasts.len() - Self::MAX_VISIBLE;
            self.toasts.drain(..excess);
        }
    }

    /// Drop expired toasts
    pub fn prune(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        self.toasts.iter().any(Toast::is_sliding)
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::from_secs(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_latest() {
        let mut queue = ToastQueue::default();
        queue.push("Saved", "{}");
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.latest().unwrap().title, "Saved");
        assert_eq!(queue.latest().unwrap().body, "{}");
    }

    #[test]
    fn test_oldest_dropped_past_max() {
        let mut queue = ToastQueue::default();
        for i in 0..5 {
            queue.push(format!("t{i}"), "");
        }
        assert_eq!(queue.len(), ToastQueue::MAX_VISIBLE);
        assert_eq!(queue.toasts()[0].title, "t2");
    }

    #[test]
    fn test_zero_lifetime_expires_on_prune() {
        let mut queue = ToastQueue::new(Duration::ZERO);
        queue.push("gone", "");
        queue.prune();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_fresh_toast_survives_prune() {
        let mut queue = ToastQueue::new(Duration::from_secs(60));
        queue.push("kept", "");
        queue.prune();
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_dismiss_all() {
        let mut queue = ToastQueue::default();
        queue.push("a", "");
        queue.push("b", "");
        queue.dismiss_all();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_slide_offset_bounded_by_width() {
        let toast = Toast::new("t", "", Duration::from_secs(5));
        assert!(toast.slide_offset(40) <= 40);
    }

    #[test]
    fn test_slide_offset_zero_after_slide() {
        let mut toast = Toast::new("t", "", Duration::from_secs(5));
        toast.shown_at = Instant::now() - Duration::from_secs(1);
        assert_eq!(toast.slide_offset(40), 0);
        assert!(!toast.is_sliding());
    }
}
