// Host-side tests for springs, the open/close chain and the wheel animator.

use std::cell::RefCell;
use std::rc::Rc;
use wheel_core::*;

const DT: f32 = 1.0 / 60.0;

fn settle(s: &mut Spring) -> u32 {
    let mut frames = 0;
    while !s.step(DT) {
        frames += 1;
        assert!(frames < 600, "spring did not settle");
    }
    frames
}

#[test]
fn default_spring_is_near_critically_damped() {
    let c = SpringConfig::default();
    assert!(c.validate().is_ok());
    assert!((c.damping_ratio() - 1.0).abs() < 0.01);
}

#[test]
fn invalid_spring_config_is_rejected() {
    let c = SpringConfig {
        tension: 0.0,
        ..SpringConfig::default()
    };
    assert_eq!(
        c.validate(),
        Err(WheelError::InvalidSpring {
            field: "tension",
            value: 0.0
        })
    );
}

#[test]
fn spring_reaches_target_and_snaps() {
    let mut s = Spring::new(0.0, SpringConfig::default());
    assert!(s.is_settled());
    s.set_target(2.0);
    assert!(!s.is_settled());
    let frames = settle(&mut s);
    assert!(frames > 10);
    assert_eq!(s.value(), 2.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn spring_barely_overshoots() {
    let mut s = Spring::new(0.0, SpringConfig::default());
    s.set_target(1.0);
    let mut max = 0.0_f32;
    while !s.step(DT) {
        max = max.max(s.value());
    }
    assert!(max < 1.01);
}

#[test]
fn setting_current_value_as_target_stays_settled() {
    let mut s = Spring::new(3.0, SpringConfig::default());
    s.set_target(3.0);
    assert!(s.is_settled());
    assert!(s.step(DT));
}

#[test]
fn opening_runs_rotation_then_position() {
    let mut chain = AnimationChain::new(false, SpringConfig::default());
    assert_eq!(chain.phase(), ChainPhase::Idle);
    let phases = Rc::new(RefCell::new(Vec::new()));
    let sink = phases.clone();
    chain.on_transition(move |from, to| sink.borrow_mut().push((from, to)));

    chain.retarget(true);
    assert_eq!(chain.order(), [Track::RotationY, Track::Position]);
    assert_eq!(chain.phase(), ChainPhase::RunningFirst);

    let start_x = chain.pos_x();
    while chain.tick(DT) == ChainPhase::RunningFirst {
        // Position must not move until rotation has settled.
        assert_eq!(chain.pos_x(), start_x);
    }
    assert_eq!(chain.rot_y(), ROT_Y_OPEN);
    assert_eq!(chain.phase(), ChainPhase::RunningSecond);

    let mut frames = 0;
    while chain.tick(DT) != ChainPhase::Done {
        assert_eq!(chain.rot_y(), ROT_Y_OPEN);
        frames += 1;
        assert!(frames < 600);
    }
    assert_eq!(chain.pos_x(), POS_X_OPEN);
    assert_eq!(chain.pos_z(), POS_Z_OPEN);
    assert!(!chain.is_animating());
    assert_eq!(
        *phases.borrow(),
        vec![
            (ChainPhase::Idle, ChainPhase::RunningFirst),
            (ChainPhase::RunningFirst, ChainPhase::RunningSecond),
            (ChainPhase::RunningSecond, ChainPhase::Done),
        ]
    );
}

#[test]
fn closing_runs_position_then_rotation() {
    let mut chain = AnimationChain::new(true, SpringConfig::default());
    chain.retarget(false);
    assert_eq!(chain.order(), [Track::Position, Track::RotationY]);
    while chain.tick(DT) == ChainPhase::RunningFirst {
        assert_eq!(chain.rot_y(), ROT_Y_OPEN);
    }
    assert_eq!(chain.pos_x(), POS_X_CLOSED);
    assert_eq!(chain.pos_z(), POS_Z_CLOSED);
    while chain.tick(DT) != ChainPhase::Done {}
    assert_eq!(chain.rot_y(), ROT_Y_CLOSED);
}

#[test]
fn retarget_mid_chain_restarts_from_current_values() {
    let mut chain = AnimationChain::new(false, SpringConfig::default());
    chain.retarget(true);
    for _ in 0..5 {
        chain.tick(DT);
    }
    let mid = chain.rot_y();
    assert!(mid < ROT_Y_CLOSED && mid > ROT_Y_OPEN);
    chain.retarget(false);
    assert_eq!(chain.phase(), ChainPhase::RunningFirst);
    assert_eq!(chain.rot_y(), mid);
    while chain.tick(DT) != ChainPhase::Done {}
    assert_eq!(chain.rot_y(), ROT_Y_CLOSED);
    assert_eq!(chain.pos_x(), POS_X_CLOSED);
}

#[test]
fn animator_spins_with_index_independently_of_chain() {
    let wheel = WheelState::new().shared();
    let (anim, _) = WheelAnimator::attach(&wheel, SpringConfig::default());
    assert!(!anim.borrow().is_animating());

    wheel.borrow_mut().increment();
    assert_eq!(anim.borrow().chain().phase(), ChainPhase::Idle);
    for _ in 0..300 {
        anim.borrow_mut().tick(DT);
    }
    let t = anim.borrow().transform();
    assert_eq!(t.rot_x, rot_x_for(1));
    assert_eq!(t.rot_y, ROT_Y_CLOSED);
    assert_eq!(t.pos_x, POS_X_CLOSED);
}

#[test]
fn animator_follows_open_flag() {
    let wheel = WheelState::new().shared();
    let (anim, id) = WheelAnimator::attach(&wheel, SpringConfig::default());
    wheel.borrow_mut().set_open(true);
    assert!(anim.borrow().is_animating());
    assert_eq!(anim.borrow().snapshot().open, true);
    for _ in 0..600 {
        anim.borrow_mut().tick(DT);
    }
    let t = anim.borrow().transform();
    assert_eq!((t.rot_y, t.pos_x, t.pos_z), (ROT_Y_OPEN, POS_X_OPEN, POS_Z_OPEN));

    assert!(wheel.borrow_mut().unsubscribe(id));
    wheel.borrow_mut().set_open(false);
    assert!(!anim.borrow().is_animating());
}
