//! The scrollable body area and its scroll notifications.
//!
//! Listeners subscribe through [`Viewport::subscribe`] and receive a
//! [`ScrollSubscription`] guard.  Dropping the guard closes its channel; the
//! viewport prunes closed listeners on the next notification, so nothing
//! outlives the view that asked for it.

use tokio::sync::mpsc;

/// A single scroll notification: the new vertical offset in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEvent {
    pub offset: usize,
}

/// Receiving end of a viewport subscription.  Releases on drop.
#[derive(Debug)]
pub struct ScrollSubscription {
    rx: mpsc::UnboundedReceiver<ScrollEvent>,
}

impl ScrollSubscription {
    /// Next pending notification, without blocking.
    pub fn try_next(&mut self) -> Option<ScrollEvent> {
        self.rx.try_recv().ok()
    }
}

/// Vertical scroll position over a document taller than the screen.
#[derive(Debug, Default)]
pub struct Viewport {
    offset: usize,
    max_offset: usize,
    /// Rows visible at once (used for page-wise scrolling).
    visible_rows: usize,
    listeners: Vec<mpsc::UnboundedSender<ScrollEvent>>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.  Notifications start with the next offset change.
    pub fn subscribe(&mut self) -> ScrollSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        self.listeners.push(tx);
        tracing::debug!("viewport: listener subscribed ({} live)", self.listener_count());
        ScrollSubscription { rx }
    }

    /// Number of subscriptions that are still held.
    pub fn listener_count(&self) -> usize {
        self.listeners.iter().filter(|tx| !tx.is_closed()).count()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn max_offset(&self) -> usize {
        self.max_offset
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Update the scrollable extent after a layout pass.  Re-clamps the
    /// current offset (notifying if it moved).
    pub fn set_extent(&mut self, content_rows: usize, visible_rows: usize) {
        self.visible_rows = visible_rows;
        self.max_offset = content_rows.saturating_sub(visible_rows);
        if self.offset > self.max_offset {
            self.offset = self.max_offset;
            self.notify();
        }
    }

    /// Jump to `offset` (clamped).  Notifies only when the offset changes.
    pub fn scroll_to(&mut self, offset: usize) {
        let clamped = offset.min(self.max_offset);
        if clamped != self.offset {
            self.offset = clamped;
            self.notify();
        }
    }

    /// Scroll relative to the current offset (negative = up).
    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.offset.saturating_add_signed(delta);
        self.scroll_to(target);
    }

    /// Scroll by one screenful, keeping one row of overlap.
    pub fn page(&mut self, down: bool) {
        let step = self.visible_rows.saturating_sub(1).max(1) as isize;
        self.scroll_by(if down { step } else { -step });
    }

    fn notify(&mut self) {
        let event = ScrollEvent {
            offset: self.offset,
        };
        // A failed send means the subscription was dropped.
        self.listeners.retain(|tx| tx.send(event).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tall_viewport() -> Viewport {
        let mut vp = Viewport::new();
        vp.set_extent(200, 40);
        vp
    }

    #[test]
    fn scroll_is_clamped_to_extent() {
        let mut vp = tall_viewport();
        vp.scroll_to(1_000);
        assert_eq!(vp.offset(), 160);
        vp.scroll_by(-1_000);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn subscribers_receive_offset_changes_only() {
        let mut vp = tall_viewport();
        let mut sub = vp.subscribe();

        vp.scroll_to(0); // unchanged, no event
        assert_eq!(sub.try_next(), None);

        vp.scroll_by(5);
        vp.scroll_by(5);
        assert_eq!(sub.try_next(), Some(ScrollEvent { offset: 5 }));
        assert_eq!(sub.try_next(), Some(ScrollEvent { offset: 10 }));
        assert_eq!(sub.try_next(), None);
    }

    #[test]
    fn dropped_subscription_is_released() {
        let mut vp = tall_viewport();
        let sub = vp.subscribe();
        assert_eq!(vp.listener_count(), 1);

        drop(sub);
        assert_eq!(vp.listener_count(), 0);

        vp.scroll_by(3);
        assert!(vp.listeners.is_empty());
    }

    #[test]
    fn shrinking_extent_reclamps_and_notifies() {
        let mut vp = tall_viewport();
        vp.scroll_to(150);
        let mut sub = vp.subscribe();

        vp.set_extent(100, 40);
        assert_eq!(vp.offset(), 60);
        assert_eq!(sub.try_next(), Some(ScrollEvent { offset: 60 }));
    }

    #[test]
    fn page_keeps_one_row_of_overlap() {
        let mut vp = tall_viewport();
        vp.page(true);
        assert_eq!(vp.offset(), 39);
        vp.page(false);
        assert_eq!(vp.offset(), 0);
    }
}
