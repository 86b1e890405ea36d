// Touch/pinch gesture state for the canvas event listeners.
use crate::model::Point;

/// Max gap between taps counted as one multi-tap, in milliseconds.
pub const MULTI_TAP_INTERVAL_MS: f64 = 300.0;
/// Max distance between taps counted as one multi-tap, in view pixels.
pub const MULTI_TAP_SLOP_PX: f64 = 24.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinchPhase {
    Began,
    Changed,
    Ended,
}

/// One pinch update. `scale` is relative to the last time a consumer reset
/// it to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pinch {
    pub scale: f64,
    pub phase: PinchPhase,
}

/// One finger as seen by the scene, in view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Touch {
    pub location: Point,
    pub previous_location: Point,
    pub tap_count: u32,
}

#[derive(Default, Debug, Clone)]
pub struct TapTracker {
    last: Option<(Point, f64)>,
    count: u32,
}

impl TapTracker {
    /// Records a touch-down and returns its tap count.
    pub fn register(&mut self, location: Point, timestamp_ms: f64) -> u32 {
        let continues = self.last.is_some_and(|(at, t)| {
            timestamp_ms - t <= MULTI_TAP_INTERVAL_MS
                && at.distance(location) <= MULTI_TAP_SLOP_PX
        });
        self.count = if continues { self.count + 1 } else { 1 };
        self.last = Some((location, timestamp_ms));
        self.count
    }

    pub fn reset(&mut self) {
        self.last = None;
        self.count = 0;
    }
}

#[derive(Default, Debug, Clone)]
pub struct PinchTracker {
    anchor: Option<f64>,
    last_distance: f64,
}

impl PinchTracker {
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn begin(&mut self, distance: f64) -> Pinch {
        self.anchor = Some(distance);
        self.last_distance = distance;
        Pinch { scale: 1.0, phase: PinchPhase::Began }
    }

    pub fn change(&mut self, distance: f64) -> Option<Pinch> {
        let anchor = self.anchor?;
        self.last_distance = distance;
        Some(Pinch {
            scale: ratio(distance, anchor),
            phase: PinchPhase::Changed,
        })
    }

    /// Re-anchors on the latest distance if the consumer reset the scale.
    pub fn commit(&mut self, pinch: &Pinch) {
        if self.anchor.is_some() && pinch.scale == 1.0 {
            self.anchor = Some(self.last_distance);
        }
    }

    pub fn end(&mut self) -> Option<Pinch> {
        let anchor = self.anchor.take()?;
        Some(Pinch {
            scale: ratio(self.last_distance, anchor),
            phase: PinchPhase::Ended,
        })
    }
}

fn ratio(distance: f64, anchor: f64) -> f64 {
    if anchor > 0.0 { distance / anchor } else { 1.0 }
}

/// Listener-side bookkeeping shared by the touch and mouse handlers.
#[derive(Default, Debug, Clone)]
pub struct TouchState {
    /// Identifier of the finger driving drags, if any.
    pub primary_id: Option<i32>,
    pub last_location: Point,
    pub mouse_down: bool,
    pub taps: TapTracker,
    pub pinch: PinchTracker,
}

impl TouchState {
    pub fn begin_primary(&mut self, id: i32, location: Point, timestamp_ms: f64) -> Touch {
        self.primary_id = Some(id);
        self.last_location = location;
        let tap_count = self.taps.register(location, timestamp_ms);
        Touch {
            location,
            previous_location: location,
            tap_count,
        }
    }

    /// Moves the primary finger and returns the touch with its previous spot.
    pub fn move_primary(&mut self, location: Point) -> Touch {
        let previous_location = self.last_location;
        self.last_location = location;
        Touch {
            location,
            previous_location,
            tap_count: 0,
        }
    }

    pub fn end_primary(&mut self) -> Touch {
        self.primary_id = None;
        self.mouse_down = false;
        Touch {
            location: self.last_location,
            previous_location: self.last_location,
            tap_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_taps_count_up() {
        let mut t = TapTracker::default();
        let p = Point::new(50.0, 50.0);
        assert_eq!(t.register(p, 0.0), 1);
        assert_eq!(t.register(Point::new(55.0, 52.0), 200.0), 2);
        assert_eq!(t.register(p, 400.0), 3);
    }

    #[test]
    fn slow_or_distant_taps_reset() {
        let mut t = TapTracker::default();
        assert_eq!(t.register(Point::new(0.0, 0.0), 0.0), 1);
        assert_eq!(t.register(Point::new(0.0, 0.0), 500.0), 1);
        assert_eq!(t.register(Point::new(100.0, 0.0), 600.0), 1);
    }

    #[test]
    fn pinch_reanchors_after_reset() {
        let mut p = PinchTracker::default();
        p.begin(100.0);
        let mut tick = p.change(110.0).unwrap();
        assert!((tick.scale - 1.1).abs() < 1e-12);
        tick.scale = 1.0;
        p.commit(&tick);
        let tick = p.change(132.0).unwrap();
        assert!((tick.scale - 1.2).abs() < 1e-12);
    }

    #[test]
    fn pinch_keeps_anchor_without_reset() {
        let mut p = PinchTracker::default();
        p.begin(100.0);
        let tick = p.change(120.0).unwrap();
        p.commit(&tick);
        let tick = p.change(150.0).unwrap();
        assert!((tick.scale - 1.5).abs() < 1e-12);
        let end = p.end().unwrap();
        assert_eq!(end.phase, PinchPhase::Ended);
        assert!(!p.is_active());
    }

    #[test]
    fn move_reports_previous_location() {
        let mut s = TouchState::default();
        s.begin_primary(7, Point::new(10.0, 10.0), 0.0);
        let t = s.move_primary(Point::new(14.0, 9.0));
        assert_eq!(t.previous_location, Point::new(10.0, 10.0));
        assert_eq!(t.location, Point::new(14.0, 9.0));
    }
}
