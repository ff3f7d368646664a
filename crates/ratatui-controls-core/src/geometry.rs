use ratatui::layout::Rect;
use std::cell::Cell;
use std::time::Duration;
use std::time::Instant;

/// Horizontal extent of a rendered element, in terminal cells.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

impl From<Rect> for Bounds {
    fn from(r: Rect) -> Self {
        Self {
            left: r.x as f64,
            width: r.width as f64,
        }
    }
}

/// Live reference to the area an element occupied on its last render.
///
/// Renderers call [`LayoutRef::set`] with the `Rect` they drew into. The reference is empty
/// until the first render and after [`LayoutRef::clear`].
#[derive(Debug, Default)]
pub struct LayoutRef {
    rect: Cell<Option<Rect>>,
}

impl LayoutRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, rect: Rect) {
        self.rect.set(Some(rect));
    }

    pub fn clear(&self) {
        self.rect.set(None);
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect.get()
    }
}

/// Reads the current bounds of a rendered element. `None` when it is not mounted.
pub fn bounding_rect(element: &LayoutRef) -> Option<Bounds> {
    element.rect().map(Bounds::from)
}

/// Deferred measurement: a single pending deadline, replaced on every schedule.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeasureSchedule {
    due: Option<Instant>,
}

impl MeasureSchedule {
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Returns `true` once when the deadline has passed, clearing it.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_reads_latest_rect() {
        let el = LayoutRef::new();
        assert_eq!(bounding_rect(&el), None);

        el.set(Rect::new(4, 2, 30, 1));
        assert_eq!(
            bounding_rect(&el),
            Some(Bounds {
                left: 4.0,
                width: 30.0
            })
        );

        el.set(Rect::new(0, 2, 12, 1));
        assert_eq!(bounding_rect(&el).map(|b| b.width), Some(12.0));

        el.clear();
        assert_eq!(bounding_rect(&el), None);
    }

    #[test]
    fn schedule_fires_once_after_delay() {
        let t0 = Instant::now();
        let mut s = MeasureSchedule::default();
        s.schedule(t0, Duration::from_millis(10));
        assert!(!s.poll(t0));
        assert!(s.poll(t0 + Duration::from_millis(10)));
        assert!(!s.poll(t0 + Duration::from_millis(20)));
        assert!(!s.is_pending());
    }

    #[test]
    fn cancel_drops_pending_deadline() {
        let t0 = Instant::now();
        let mut s = MeasureSchedule::default();
        s.schedule(t0, Duration::from_millis(10));
        s.cancel();
        assert!(!s.poll(t0 + Duration::from_secs(1)));
    }
}
