//! # Tween 模块
//!
//! 单次淡入淡出的状态机。
//!
//! 进度完全由 `elapsed` 表达，不依赖任何挂起的调用栈，
//! 因此可以在两帧之间随时检查、序列化或取消。

use serde::{Deserialize, Serialize};

use crate::direction::FadeDirection;
use crate::error::{FadeError, FadeResult};
use crate::target::TargetId;
use crate::time::TimeSource;

/// Tween ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TweenId(pub(crate) u64);

impl TweenId {
    /// 创建新的 Tween ID（仅供 FadeStepper 内部使用）
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// 获取内部 ID 值
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TweenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TweenId({})", self.0)
    }
}

/// 中止原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbortReason {
    /// 外部取消
    Cancelled,
    /// 同一目标上的新请求替换了它
    Preempted,
    /// 目标被注销
    TargetRemoved,
}

/// Tween 状态
///
/// `Completed` / `Aborted` 为终态，不会再离开。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TweenStatus {
    /// 正在进行
    Running,
    /// 正常结束
    Completed,
    /// 被中止
    Aborted(AbortReason),
}

impl TweenStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// 淡入淡出实例
///
/// 反序列化时与 [`Tween::new`] 做同样的时长校验。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TweenFields")]
pub struct Tween {
    id: TweenId,
    target: TargetId,
    direction: FadeDirection,
    from: f32,
    to: f32,
    /// 时长（秒）
    duration: f32,
    /// 已经过的时间（秒），只增不减
    ///
    /// 使用 f64 累加，长时长下单帧的 delta 不会被舍入掉。
    elapsed: f64,
    time_source: TimeSource,
    status: TweenStatus,
}

impl Tween {
    /// 创建新的 Tween
    ///
    /// 时长必须是大于 0 的有限值，否则返回 `InvalidDuration`。
    pub fn new(
        id: TweenId,
        target: TargetId,
        direction: FadeDirection,
        duration: f32,
        time_source: TimeSource,
    ) -> FadeResult<Self> {
        validate_duration(duration)?;

        let (from, to) = direction.endpoints();
        Ok(Self {
            id,
            target,
            direction,
            from,
            to,
            duration,
            elapsed: 0.0,
            time_source,
            status: TweenStatus::Running,
        })
    }

    /// 推进一步
    ///
    /// # 返回
    /// - `Some(value)`: 本步应写入目标的值
    /// - `None`: 已处于终态，不写入
    pub fn step(&mut self, dt: f32) -> Option<f32> {
        if !self.status.is_running() {
            return None;
        }

        self.elapsed += f64::from(dt.max(0.0));

        // 结束时直接写入终点值，避免浮点累积误差
        if self.elapsed >= f64::from(self.duration) {
            self.status = TweenStatus::Completed;
            return Some(self.to);
        }

        Some(self.interpolate())
    }

    /// 中止
    ///
    /// 只有 `Running` 状态可以被中止，返回是否发生了状态变化。
    pub fn abort(&mut self, reason: AbortReason) -> bool {
        if self.status.is_running() {
            self.status = TweenStatus::Aborted(reason);
            true
        } else {
            false
        }
    }

    fn interpolate(&self) -> f32 {
        let fraction = self.fraction();
        self.from + (self.to - self.from) * fraction
    }

    /// 当前进度（0.0 - 1.0）
    pub fn fraction(&self) -> f32 {
        (self.elapsed / f64::from(self.duration)).clamp(0.0, 1.0) as f32
    }

    /// 按当前进度计算的值
    pub fn current_value(&self) -> f32 {
        if self.status == TweenStatus::Completed {
            self.to
        } else {
            self.interpolate()
        }
    }

    pub fn id(&self) -> TweenId {
        self.id
    }

    pub fn target(&self) -> TargetId {
        self.target
    }

    pub fn direction(&self) -> FadeDirection {
        self.direction
    }

    pub fn start_value(&self) -> f32 {
        self.from
    }

    pub fn end_value(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn time_source(&self) -> TimeSource {
        self.time_source
    }

    pub fn status(&self) -> TweenStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }
}

fn validate_duration(duration: f32) -> FadeResult<()> {
    if duration > 0.0 && duration.is_finite() {
        Ok(())
    } else {
        Err(FadeError::InvalidDuration { duration })
    }
}

/// `Tween` 的反序列化中间结构
#[derive(Deserialize)]
struct TweenFields {
    id: TweenId,
    target: TargetId,
    direction: FadeDirection,
    duration: f32,
    elapsed: f64,
    time_source: TimeSource,
    status: TweenStatus,
}

impl TryFrom<TweenFields> for Tween {
    type Error = FadeError;

    /// 端点总是由方向重新计算，不信任外部数据
    fn try_from(fields: TweenFields) -> FadeResult<Self> {
        let mut tween = Tween::new(
            fields.id,
            fields.target,
            fields.direction,
            fields.duration,
            fields.time_source,
        )?;
        tween.elapsed = if fields.elapsed.is_finite() {
            fields.elapsed.max(0.0)
        } else {
            0.0
        };
        tween.status = fields.status;
        Ok(tween)
    }
}
