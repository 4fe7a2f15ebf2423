use crate::chain::AnimationChain;
use crate::constants::NUM;
use crate::spring::{Spring, SpringConfig};
use crate::state::{ListenerId, SharedWheel, WheelSnapshot};
use std::cell::RefCell;
use std::f32::consts::TAU;
use std::rc::Rc;

/// Current animated placement of the wheel group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelTransform {
    pub pos_x: f32,
    pub pos_z: f32,
    pub rot_y: f32,
    pub rot_x: f32,
}

#[inline]
pub fn rot_x_for(index: i64) -> f32 {
    TAU * index as f32 / NUM as f32
}

/// Drives the open/close chain plus the index-driven spin about X, which runs
/// independently of the chain.
pub struct WheelAnimator {
    chain: AnimationChain,
    rot_x: Spring,
    last: WheelSnapshot,
}

impl WheelAnimator {
    pub fn new(initial: WheelSnapshot, config: SpringConfig) -> Self {
        Self {
            chain: AnimationChain::new(initial.open, config),
            rot_x: Spring::new(rot_x_for(initial.index), config),
            last: initial,
        }
    }

    /// Build an animator for the wheel's current state and keep it in sync
    /// through a change listener.
    pub fn attach(wheel: &SharedWheel, config: SpringConfig) -> (Rc<RefCell<Self>>, ListenerId) {
        let initial = wheel.borrow().snapshot();
        let animator = Rc::new(RefCell::new(Self::new(initial, config)));
        let handle = animator.clone();
        let id = wheel
            .borrow_mut()
            .subscribe(move |snap| handle.borrow_mut().sync(snap));
        (animator, id)
    }

    pub fn sync(&mut self, snap: WheelSnapshot) {
        if snap.open != self.last.open {
            self.chain.retarget(snap.open);
        }
        if snap.index != self.last.index {
            self.rot_x.set_target(rot_x_for(snap.index));
        }
        self.last = snap;
    }

    pub fn tick(&mut self, dt_sec: f32) {
        self.chain.tick(dt_sec);
        self.rot_x.step(dt_sec);
    }

    pub fn transform(&self) -> WheelTransform {
        WheelTransform {
            pos_x: self.chain.pos_x(),
            pos_z: self.chain.pos_z(),
            rot_y: self.chain.rot_y(),
            rot_x: self.rot_x.value(),
        }
    }

    pub fn chain(&self) -> &AnimationChain {
        &self.chain
    }

    pub fn chain_mut(&mut self) -> &mut AnimationChain {
        &mut self.chain
    }

    pub fn is_animating(&self) -> bool {
        self.chain.is_animating() || !self.rot_x.is_settled()
    }

    pub fn snapshot(&self) -> WheelSnapshot {
        self.last
    }
}
