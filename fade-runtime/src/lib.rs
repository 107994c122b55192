//! # Fade Runtime
//!
//! 基于帧推进的淡入淡出核心库。
//!
//! ## 架构概述
//!
//! `fade-runtime` 是纯逻辑核心，不依赖任何渲染或音频引擎。
//! 宿主每帧把 delta time 交给 [`FadeStepper`]，由它驱动所有活跃的 [`Tween`]：
//!
//! ```text
//! Host                               Runtime
//!   │                                   │
//!   │──── fade(target, request) ──────►│ 解析方向 → 创建 Tween
//!   │◄─── FadeHandle / FadeError ───────│
//!   │                                   │
//!   │──── update(FrameDelta) ─────────►│ 每个 Tween 推进一步
//!   │◄─── Vec<FadeEvent> ───────────────│
//! ```
//!
//! ## 模块结构
//!
//! - [`direction`]：淡入淡出方向与端点解析
//! - [`target`]：可淡入淡出对象的能力接口
//! - [`time`]：时间源、帧 delta 与帧时钟
//! - [`tween`]：单次淡入淡出的状态机
//! - [`stepper`]：每帧驱动器
//! - [`error`]：错误类型定义

pub mod direction;
pub mod error;
pub mod stepper;
pub mod target;
pub mod time;
pub mod tween;

// 重导出核心类型
pub use direction::{FadeDirection, resolve, resolve_token};
pub use error::{FadeError, FadeResult};
pub use stepper::{FadeEvent, FadeHandle, FadeRequest, FadeStepper};
pub use target::{FadeTarget, SharedScalar, TargetId};
pub use time::{FrameClock, FrameDelta, TimeSource};
pub use tween::{AbortReason, Tween, TweenId, TweenStatus};

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_public_api_accessible() {
        let mut stepper = FadeStepper::new();
        let mut clock = FrameClock::new();
        let scalar = SharedScalar::new(1.0);
        let id = stepper.register(Rc::new(scalar.clone()));

        let handle = stepper.fade_out(id, 0.1).unwrap();
        while stepper.is_active(&handle) {
            stepper.update(clock.advance(0.05));
        }

        assert_eq!(scalar.get(), 0.0);
    }
}
