//! # Time 模块
//!
//! 时间源选择与每帧的 delta time。
//!
//! - `Scaled`：受时间缩放和暂停影响
//! - `Unscaled`：真实时间，暂停时依然流逝

use serde::{Deserialize, Serialize};

use crate::error::{FadeError, FadeResult};

/// 时间源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSource {
    /// 缩放时间（可暂停）
    #[default]
    Scaled,
    /// 真实时间
    Unscaled,
}

impl TimeSource {
    /// 兼容旧调用方式的 `use_unscaled` 标志
    ///
    /// - `None` → `Scaled`
    /// - `Some(true)` → `Unscaled`
    /// - `Some(false)` → `RedundantFlag`（调用方应直接省略该参数）
    pub fn from_unscaled_flag(flag: Option<bool>) -> FadeResult<Self> {
        match flag {
            None => Ok(Self::Scaled),
            Some(true) => Ok(Self::Unscaled),
            Some(false) => Err(FadeError::RedundantFlag),
        }
    }
}

/// 单帧的 delta time（秒）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameDelta {
    /// 缩放后的 delta
    pub scaled: f32,
    /// 真实 delta
    pub unscaled: f32,
}

impl FrameDelta {
    /// 创建新的 delta，负值按 0 处理
    pub fn new(scaled: f32, unscaled: f32) -> Self {
        Self {
            scaled: scaled.max(0.0),
            unscaled: unscaled.max(0.0),
        }
    }

    /// 两种时间源相同的 delta
    pub fn uniform(dt: f32) -> Self {
        Self::new(dt, dt)
    }

    /// 按时间源选择 delta
    pub fn for_source(&self, source: TimeSource) -> f32 {
        match source {
            TimeSource::Scaled => self.scaled,
            TimeSource::Unscaled => self.unscaled,
        }
    }
}

/// 帧时钟
///
/// 宿主每帧把真实经过的时间交给时钟，得到两种时间源的 delta。
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    time_scale: f32,
    paused: bool,
    scaled_total: f64,
    unscaled_total: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// 创建时间缩放为 1.0 的时钟
    pub fn new() -> Self {
        Self {
            time_scale: 1.0,
            paused: false,
            scaled_total: 0.0,
            unscaled_total: 0.0,
        }
    }

    /// 设置时间缩放（负值按 0 处理）
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.set_time_scale(time_scale);
        self
    }

    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.time_scale = time_scale.max(0.0);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// 暂停缩放时间
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// 恢复缩放时间
    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// 推进一帧
    ///
    /// # 参数
    /// - `real_dt`: 真实经过的时间（秒）
    pub fn advance(&mut self, real_dt: f32) -> FrameDelta {
        let unscaled = real_dt.max(0.0);
        let scaled = if self.paused {
            0.0
        } else {
            unscaled * self.time_scale
        };

        self.unscaled_total += f64::from(unscaled);
        self.scaled_total += f64::from(scaled);

        FrameDelta::new(scaled, unscaled)
    }

    /// 累计缩放时间
    pub fn scaled_total(&self) -> f64 {
        self.scaled_total
    }

    /// 累计真实时间
    pub fn unscaled_total(&self) -> f64 {
        self.unscaled_total
    }
}
