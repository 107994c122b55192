//! # Demo 模块
//!
//! 无窗口的淡入淡出模拟：以固定帧率推进 `FadeStepper`，记录每帧的目标值。

use std::rc::Rc;

use fade_runtime::{
    FadeDirection, FadeEvent, FadeRequest, FadeResult, FadeStepper, FadeTarget, FrameClock,
    TargetId,
};
use tracing::debug;

use crate::config::HostConfig;
use crate::targets::{AudioChannel, CanvasGroup, Color, Sprite, TargetKind, TextLabel};

/// 没有活跃 Tween 之前最多模拟的帧数
const DEFAULT_MAX_FRAMES: u64 = 100_000;

/// 模拟参数
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOptions {
    pub target: TargetKind,
    pub direction: FadeDirection,
    /// 时长（秒）
    pub duration: f32,
    /// 原样传给 `FadeRequest` 的 unscaled 标志
    pub unscaled: Option<bool>,
    pub frame_rate: u32,
    pub time_scale: f32,
    /// 在第几帧之后暂停缩放时间
    pub pause_after: Option<u64>,
    pub max_frames: u64,
}

impl DemoOptions {
    pub fn from_config(config: &HostConfig) -> Self {
        Self {
            target: config.demo.target,
            direction: config.demo.direction,
            duration: config.default_duration,
            unscaled: config.demo.unscaled.then_some(true),
            frame_rate: config.frame_rate,
            time_scale: config.time_scale,
            pause_after: None,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }
}

/// 单帧采样
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// 帧序号，0 表示请求刚发起、尚未推进
    pub frame: u64,
    /// 累计真实时间（秒）
    pub time: f64,
    pub value: f32,
}

/// 模拟结果
#[derive(Debug, Clone)]
pub struct DemoReport {
    /// 目标描述
    pub target: String,
    pub samples: Vec<Sample>,
    pub events: Vec<FadeEvent>,
    /// 是否在 `max_frames` 内完成
    pub completed: bool,
}

impl DemoReport {
    pub fn final_value(&self) -> Option<f32> {
        self.samples.last().map(|sample| sample.value)
    }
}

fn register<T: FadeTarget>(stepper: &mut FadeStepper, object: T) -> (TargetId, String) {
    let label = object.describe();
    (stepper.register(Rc::new(object)), label)
}

fn register_target(stepper: &mut FadeStepper, kind: TargetKind) -> (TargetId, String) {
    match kind {
        TargetKind::Canvas => register(stepper, CanvasGroup::new("demo", 0.5)),
        TargetKind::Audio => register(stepper, AudioChannel::new("bgm", 1.0)),
        TargetKind::Sprite => register(stepper, Sprite::new("demo", Color::WHITE)),
        TargetKind::Text => register(stepper, TextLabel::new("demo")),
    }
}

/// 运行模拟
///
/// 请求非法时同步返回错误，不会推进任何帧。
pub fn run(options: &DemoOptions) -> FadeResult<DemoReport> {
    let mut stepper = FadeStepper::new();
    let mut clock = FrameClock::new().with_time_scale(options.time_scale);
    let (target_id, target) = register_target(&mut stepper, options.target);

    let mut request = FadeRequest::new(options.direction, options.duration);
    request.unscaled = options.unscaled;
    let handle = stepper.fade(target_id, request)?;

    let frame_dt = 1.0 / options.frame_rate.max(1) as f32;
    let mut samples = vec![Sample {
        frame: 0,
        time: 0.0,
        value: stepper.current_value(target_id).unwrap_or_default(),
    }];
    let mut events = Vec::new();
    let mut frame = 0;

    while stepper.is_active(&handle) && frame < options.max_frames {
        if options.pause_after == Some(frame) {
            debug!(frame, "暂停缩放时间");
            clock.pause();
        }

        frame += 1;
        events.extend(stepper.update(clock.advance(frame_dt)));
        samples.push(Sample {
            frame,
            time: clock.unscaled_total(),
            value: stepper.current_value(target_id).unwrap_or_default(),
        });
    }

    let completed = events.contains(&FadeEvent::Completed(handle.tween_id()));
    Ok(DemoReport {
        target,
        samples,
        events,
        completed,
    })
}
