//! Quantizes continuous scroll/drag offsets into single wheel steps.

use crate::state::SharedWheel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Mouse wheel / trackpad scroll offset.
    Scroll,
    /// Touch drag; mirrored so dragging up feels like scrolling down.
    Drag,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Increment,
    Decrement,
}

#[inline]
pub fn bucket_for(y: f32, bucket_size: f32) -> i64 {
    (y / bucket_size).floor() as i64
}

/// At most one step per call, however many buckets were crossed.
#[inline]
pub fn step_between(last_bucket: i64, bucket: i64, source: InputSource) -> Option<Step> {
    use std::cmp::Ordering;
    let forward = match bucket.cmp(&last_bucket) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => return None,
    };
    Some(match (source, forward) {
        (InputSource::Scroll, true) | (InputSource::Drag, false) => Step::Decrement,
        (InputSource::Scroll, false) | (InputSource::Drag, true) => Step::Increment,
    })
}

pub struct GestureMapper {
    wheel: SharedWheel,
    bucket_size: f32,
    last_bucket: i64,
}

impl GestureMapper {
    pub fn new(wheel: SharedWheel, bucket_size: f32) -> Self {
        Self {
            wheel,
            bucket_size,
            last_bucket: 0,
        }
    }

    pub fn last_bucket(&self) -> i64 {
        self.last_bucket
    }

    pub fn bucket_size(&self) -> f32 {
        self.bucket_size
    }

    /// Feed one input event carrying the current vertical offset `y`.
    ///
    /// Ignored entirely while the wheel is closed: `last_bucket` keeps its
    /// value so nothing is banked for when the wheel reopens.
    pub fn handle(&mut self, source: InputSource, y: f32) -> Option<Step> {
        if !y.is_finite() || !self.wheel.borrow().is_open() {
            return None;
        }
        let bucket = bucket_for(y, self.bucket_size);
        let step = step_between(self.last_bucket, bucket, source)?;
        self.last_bucket = bucket;
        let mut wheel = self.wheel.borrow_mut();
        match step {
            Step::Increment => wheel.increment(),
            Step::Decrement => wheel.decrement(),
        }
        Some(step)
    }

    /// Re-anchor the quantizer, e.g. at the start of a new drag so the
    /// pointer's absolute position does not register as a jump.
    /// Like [`GestureMapper::handle`], does nothing while closed.
    pub fn reset_to(&mut self, y: f32) {
        if y.is_finite() && self.wheel.borrow().is_open() {
            self.last_bucket = bucket_for(y, self.bucket_size);
        }
    }
}
