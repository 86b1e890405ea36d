//! Time-based property animation.
//!
//! An [`Animated`] value is driven one frame at a time through
//! [`Animated::advance`]. Only one transition runs per property: calling
//! [`Animated::animate_to`] or [`Animated::set`] replaces any transition in
//! flight, and a new transition always starts from the current interpolated
//! value.

use crate::model::Point;

pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Point {
    fn lerp(self, to: Self, t: f64) -> Self {
        Point::new(self.x.lerp(to.x, t), self.y.lerp(to.y, t))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tween<T> {
    from: T,
    to: T,
    elapsed: f64,
    duration: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animated<T> {
    value: T,
    tween: Option<Tween<T>>,
}

impl<T: Lerp> Animated<T> {
    pub fn new(value: T) -> Self {
        Self { value, tween: None }
    }

    pub fn value(&self) -> T {
        self.value
    }

    /// Where the property is heading; the current value when idle.
    pub fn target(&self) -> T {
        self.tween.map_or(self.value, |t| t.to)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Jumps to `value`, dropping any running transition.
    pub fn set(&mut self, value: T) {
        self.tween = None;
        self.value = value;
    }

    /// Starts a linear transition to `target` lasting `duration` seconds.
    pub fn animate_to(&mut self, target: T, duration: f64) {
        if !(duration > 0.0) {
            self.set(target);
            return;
        }
        self.tween = Some(Tween {
            from: self.value,
            to: target,
            elapsed: 0.0,
            duration,
        });
    }

    pub fn advance(&mut self, dt: f64) {
        let Some(mut tween) = self.tween else { return };
        tween.elapsed += dt.max(0.0);
        if tween.elapsed >= tween.duration {
            self.value = tween.to;
            self.tween = None;
        } else {
            self.value = tween.from.lerp(tween.to, tween.elapsed / tween.duration);
            self.tween = Some(tween);
        }
    }
}
