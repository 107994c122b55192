//! # Fade Host
//!
//! `fade-runtime` 的宿主层实现。
//!
//! ## 架构说明
//!
//! Host 层负责：
//! - 常见对象（UI 组、音频通道、精灵、文本）的 `FadeTarget` 适配
//! - 配置加载
//! - 日志初始化
//! - 无窗口的淡入淡出模拟
//!
//! Host 层不包含插值逻辑，每帧只负责把 delta time 交给 `FadeStepper`。

pub mod config;
pub mod demo;
pub mod targets;

pub use config::{ConfigError, DemoConfig, HostConfig};
pub use demo::{DemoOptions, DemoReport, Sample};
pub use targets::{AudioChannel, CanvasGroup, Color, Sprite, TargetKind, TextLabel};

/// 初始化日志输出
pub fn init_tracing(level: tracing::Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
