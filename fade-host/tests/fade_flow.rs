//! # 淡入淡出集成测试
//!
//! 测试 宿主适配器 → FadeStepper → FrameClock 的完整链路。
//! 这些测试不依赖真实的渲染/音频设备。

use std::rc::Rc;

use fade_host::{AudioChannel, CanvasGroup, Color, Sprite, TextLabel};
use fade_runtime::{
    AbortReason, FadeDirection, FadeError, FadeEvent, FadeRequest, FadeStepper, FrameClock,
    FrameDelta,
};

const FRAME: f32 = 1.0 / 60.0;

/// 测试 UI 组淡入、音频淡出同时进行
#[test]
fn test_canvas_and_audio_together() {
    let mut stepper = FadeStepper::new();
    let mut clock = FrameClock::new();

    let menu = CanvasGroup::new("menu", 0.0);
    let bgm = AudioChannel::new("bgm", 0.8);
    let menu_id = stepper.register(Rc::new(menu.clone()));
    let bgm_id = stepper.register(Rc::new(bgm.clone()));

    let menu_fade = stepper.fade_in(menu_id, 0.5).unwrap();
    let bgm_fade = stepper.fade_out(bgm_id, 1.0).unwrap();
    assert_eq!(stepper.active_count(), 2);

    let mut last_opacity = menu.opacity();
    let mut last_volume = bgm.volume();
    while stepper.has_active_fades() {
        stepper.update(clock.advance(FRAME));

        // 淡入不减，淡出不增
        assert!(menu.opacity() >= last_opacity);
        assert!(bgm.volume() <= last_volume);
        last_opacity = menu.opacity();
        last_volume = bgm.volume();
    }

    assert!(!stepper.is_active(&menu_fade));
    assert!(!stepper.is_active(&bgm_fade));
    assert_eq!(menu.opacity(), 1.0);
    assert_eq!(bgm.volume(), 0.0);
    assert_eq!(bgm.effective_volume(), 0.0);
}

/// 测试暂停：缩放时间的淡入停住，真实时间的淡入继续
#[test]
fn test_pause_menu_scenario() {
    let mut stepper = FadeStepper::new();
    let mut clock = FrameClock::new();

    let sprite = Sprite::new("alice", Color::rgba(1.0, 0.5, 0.5, 1.0));
    let pause_label = TextLabel::new("暂停");
    let sprite_id = stepper.register(Rc::new(sprite.clone()));
    let label_id = stepper.register(Rc::new(pause_label.clone()));

    stepper.fade_in(sprite_id, 1.0).unwrap();
    stepper.update(clock.advance(0.25));
    assert_eq!(sprite.color().a, 0.25);

    clock.pause();
    stepper
        .fade(
            label_id,
            FadeRequest::new(FadeDirection::In, 0.5).unscaled(),
        )
        .unwrap();

    stepper.update(clock.advance(0.25));
    stepper.update(clock.advance(0.25));

    assert_eq!(sprite.color().a, 0.25);
    assert_eq!(sprite.color().r, 1.0);
    assert_eq!(pause_label.alpha(), 1.0);
    assert_eq!(stepper.active_count(), 1);

    clock.resume();
    stepper.update(clock.advance(0.75));
    assert_eq!(sprite.color().a, 1.0);
    assert!(!stepper.has_active_fades());
}

/// 测试所有错误请求都不修改目标
#[test]
fn test_rejected_requests_leave_target_untouched() {
    let mut stepper = FadeStepper::new();
    let group = CanvasGroup::new("hud", 0.3);
    let id = stepper.register(Rc::new(group.clone()));

    assert!(matches!(
        stepper.fade_token(id, "IN", 1.0),
        Err(FadeError::InvalidDirection { .. })
    ));
    assert!(matches!(
        stepper.fade_in(id, 0.0),
        Err(FadeError::InvalidDuration { .. })
    ));
    assert!(matches!(
        stepper.fade_out(id, -1.0),
        Err(FadeError::InvalidDuration { .. })
    ));
    assert_eq!(
        stepper.fade(
            id,
            FadeRequest::new(FadeDirection::Out, 1.0).with_unscaled_flag(false)
        ),
        Err(FadeError::RedundantFlag)
    );

    assert_eq!(group.opacity(), 0.3);
    assert_eq!(stepper.active_count(), 0);
    assert!(stepper.update(FrameDelta::uniform(FRAME)).is_empty());
}

/// 测试淡入途中改为淡出：只保留第二次请求
#[test]
fn test_fade_out_interrupts_fade_in() {
    let mut stepper = FadeStepper::new();
    let mut clock = FrameClock::new();
    let label = TextLabel::new("标题");
    let id = stepper.register(Rc::new(label.clone()));

    let fade_in = stepper.fade_in(id, 1.0).unwrap();
    for _ in 0..10 {
        stepper.update(clock.advance(FRAME));
    }

    let fade_out = stepper.fade_out(id, 0.5).unwrap();
    assert_eq!(label.alpha(), 1.0);
    assert_eq!(stepper.tween_for(id).map(|t| t.end_value()), Some(0.0));

    let mut events = Vec::new();
    while stepper.has_active_fades() {
        events.extend(stepper.update(clock.advance(FRAME)));
    }

    assert_eq!(label.alpha(), 0.0);
    assert_eq!(
        events,
        vec![
            FadeEvent::Aborted(fade_in.tween_id(), AbortReason::Preempted),
            FadeEvent::Started(fade_out.tween_id()),
            FadeEvent::Completed(fade_out.tween_id()),
        ]
    );
}

/// 测试取消后目标停在最后写入的值
#[test]
fn test_cancel_mid_fade() {
    let mut stepper = FadeStepper::new();
    let bgm = AudioChannel::new("bgm", 1.0);
    let id = stepper.register(Rc::new(bgm.clone()));

    let handle = stepper.fade_out(id, 1.0).unwrap();
    stepper.update(FrameDelta::uniform(0.5));
    assert!(handle.cancel(&mut stepper));
    assert_eq!(bgm.volume(), 0.5);

    for _ in 0..5 {
        stepper.update(FrameDelta::uniform(0.5));
    }
    assert_eq!(bgm.volume(), 0.5);
}
