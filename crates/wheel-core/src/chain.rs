//! Strict sequencing of the two open/close springs.
//!
//! Opening plays rotation-about-Y then position; closing plays position then
//! rotation. Only the active track moves; the other track's new target is
//! applied when its turn starts.

use crate::constants::{POS_X_CLOSED, POS_X_OPEN, POS_Z_CLOSED, POS_Z_OPEN, ROT_Y_CLOSED, ROT_Y_OPEN};
use crate::spring::{Spring, SpringConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainPhase {
    Idle,
    RunningFirst,
    RunningSecond,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Track {
    RotationY,
    Position,
}

#[inline]
pub fn chain_order(open: bool) -> [Track; 2] {
    if open {
        [Track::RotationY, Track::Position]
    } else {
        [Track::Position, Track::RotationY]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackTargets {
    pub rot_y: f32,
    pub pos_x: f32,
    pub pos_z: f32,
}

#[inline]
pub fn targets_for(open: bool) -> TrackTargets {
    if open {
        TrackTargets {
            rot_y: ROT_Y_OPEN,
            pos_x: POS_X_OPEN,
            pos_z: POS_Z_OPEN,
        }
    } else {
        TrackTargets {
            rot_y: ROT_Y_CLOSED,
            pos_x: POS_X_CLOSED,
            pos_z: POS_Z_CLOSED,
        }
    }
}

type TransitionFn = Box<dyn FnMut(ChainPhase, ChainPhase)>;

pub struct AnimationChain {
    rot_y: Spring,
    pos_x: Spring,
    pos_z: Spring,
    phase: ChainPhase,
    order: [Track; 2],
    pending: TrackTargets,
    on_transition: Option<TransitionFn>,
}

impl AnimationChain {
    /// Both tracks at rest on the targets for `open`.
    pub fn new(open: bool, config: SpringConfig) -> Self {
        let t = targets_for(open);
        Self {
            rot_y: Spring::new(t.rot_y, config),
            pos_x: Spring::new(t.pos_x, config),
            pos_z: Spring::new(t.pos_z, config),
            phase: ChainPhase::Idle,
            order: chain_order(open),
            pending: t,
            on_transition: None,
        }
    }

    pub fn phase(&self) -> ChainPhase {
        self.phase
    }

    pub fn order(&self) -> [Track; 2] {
        self.order
    }

    pub fn rot_y(&self) -> f32 {
        self.rot_y.value()
    }

    pub fn pos_x(&self) -> f32 {
        self.pos_x.value()
    }

    pub fn pos_z(&self) -> f32 {
        self.pos_z.value()
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, ChainPhase::RunningFirst | ChainPhase::RunningSecond)
    }

    /// Called with `(from, to)` on every phase change.
    pub fn on_transition(&mut self, f: impl FnMut(ChainPhase, ChainPhase) + 'static) {
        self.on_transition = Some(Box::new(f));
    }

    /// Restart the chain toward the open/closed pose from the current values.
    pub fn retarget(&mut self, open: bool) {
        self.order = chain_order(open);
        self.pending = targets_for(open);
        self.start_track(self.order[0]);
        self.set_phase(ChainPhase::RunningFirst);
    }

    pub fn tick(&mut self, dt_sec: f32) -> ChainPhase {
        match self.phase {
            ChainPhase::Idle | ChainPhase::Done => {}
            ChainPhase::RunningFirst => {
                if self.step_track(self.order[0], dt_sec) {
                    self.start_track(self.order[1]);
                    self.set_phase(ChainPhase::RunningSecond);
                }
            }
            ChainPhase::RunningSecond => {
                if self.step_track(self.order[1], dt_sec) {
                    self.set_phase(ChainPhase::Done);
                }
            }
        }
        self.phase
    }

    fn start_track(&mut self, track: Track) {
        match track {
            Track::RotationY => self.rot_y.set_target(self.pending.rot_y),
            Track::Position => {
                self.pos_x.set_target(self.pending.pos_x);
                self.pos_z.set_target(self.pending.pos_z);
            }
        }
    }

    fn step_track(&mut self, track: Track, dt_sec: f32) -> bool {
        match track {
            Track::RotationY => self.rot_y.step(dt_sec),
            Track::Position => {
                let x = self.pos_x.step(dt_sec);
                let z = self.pos_z.step(dt_sec);
                x && z
            }
        }
    }

    fn set_phase(&mut self, next: ChainPhase) {
        let prev = self.phase;
        self.phase = next;
        log::debug!("[chain] {:?} -> {:?} order={:?}", prev, next, self.order);
        if let Some(f) = &mut self.on_transition {
            f(prev, next);
        }
    }
}
