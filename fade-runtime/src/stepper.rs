//! # Stepper 模块
//!
//! 协作式的每帧驱动器。
//!
//! 宿主每帧调用一次 [`FadeStepper::update`]，所有活跃的 Tween 各推进一步：
//! ```rust,ignore
//! let target_id = stepper.register(Rc::new(panel));
//! let handle = stepper.fade_in(target_id, 0.3)?;
//!
//! // 宿主主循环
//! let events = stepper.update(clock.advance(dt));
//! ```
//!
//! ## 抢占策略
//!
//! 每个目标同一时间最多只有一个 Tween。对同一目标发起新的淡入淡出时，
//! 旧的 Tween 以 `AbortReason::Preempted` 中止并被替换，两者不做混合。

use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::direction::FadeDirection;
use crate::error::{FadeError, FadeResult};
use crate::target::{FadeTarget, TargetId};
use crate::time::{FrameDelta, TimeSource};
use crate::tween::{AbortReason, Tween, TweenId, TweenStatus};

/// 淡入淡出事件
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeEvent {
    /// 开始
    Started(TweenId),
    /// 正常完成
    Completed(TweenId),
    /// 被中止
    Aborted(TweenId, AbortReason),
}

/// 淡入淡出请求
///
/// `unscaled` 保留调用方原始的标志，校验推迟到 `FadeStepper::fade` 中统一进行。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeRequest {
    pub direction: FadeDirection,
    /// 时长（秒）
    pub duration: f32,
    /// 旧调用方式的 `use_unscaled` 标志
    pub unscaled: Option<bool>,
}

impl FadeRequest {
    /// 使用缩放时间的请求
    pub fn new(direction: FadeDirection, duration: f32) -> Self {
        Self {
            direction,
            duration,
            unscaled: None,
        }
    }

    /// 从字符串方向创建请求
    pub fn from_token(token: &str, duration: f32) -> FadeResult<Self> {
        Ok(Self::new(token.parse()?, duration))
    }

    /// 改用真实时间
    pub fn unscaled(mut self) -> Self {
        self.unscaled = Some(true);
        self
    }

    /// 原样传入调用方给出的标志，`false` 会在 `fade` 时被拒绝
    pub fn with_unscaled_flag(mut self, flag: bool) -> Self {
        self.unscaled = Some(flag);
        self
    }

    pub fn with_time_source(mut self, time_source: TimeSource) -> Self {
        self.unscaled = match time_source {
            TimeSource::Scaled => None,
            TimeSource::Unscaled => Some(true),
        };
        self
    }
}

/// Tween 句柄
///
/// 句柄只标识发起时的那一个 Tween；目标被新的请求抢占后，
/// 旧句柄的 `cancel` 不会影响新的 Tween。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FadeHandle {
    tween: TweenId,
    target: TargetId,
}

impl FadeHandle {
    pub fn tween_id(&self) -> TweenId {
        self.tween
    }

    pub fn target_id(&self) -> TargetId {
        self.target
    }

    /// 取消对应的 Tween
    pub fn cancel(&self, stepper: &mut FadeStepper) -> bool {
        stepper.cancel(self)
    }
}

/// 已注册的目标
struct RegisteredTarget {
    object: Rc<dyn FadeTarget>,
    /// 注册时记录的描述（用于日志）
    label: String,
}

/// 淡入淡出驱动器
///
/// 单线程、协作式：只有在两次 `update` 之间才能增删 Tween，
/// 单次推进本身是原子的。
pub struct FadeStepper {
    /// 已注册的目标
    targets: HashMap<TargetId, RegisteredTarget>,
    /// 活跃的 Tween（每个目标最多一个）
    tweens: HashMap<TargetId, Tween>,
    next_tween_id: u64,
    next_target_id: u64,
    /// 已执行的 tick 数
    tick: u64,
    /// 待处理的事件队列
    events: Vec<FadeEvent>,
}

impl Default for FadeStepper {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FadeStepper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FadeStepper")
            .field("targets", &self.targets.len())
            .field("tweens", &self.tweens.len())
            .field("tick", &self.tick)
            .finish()
    }
}

impl FadeStepper {
    pub fn new() -> Self {
        Self {
            targets: HashMap::new(),
            tweens: HashMap::new(),
            next_tween_id: 1,
            next_target_id: 1,
            tick: 0,
            events: Vec::new(),
        }
    }

    // ========== 目标管理 ==========

    /// 注册目标，返回系统分配的 `TargetId`
    ///
    /// 同一个 `Rc` 重复注册时返回已有的 ID，保证一个属性只对应一个 Tween。
    ///
    /// 调用方需要保证每个属性只注册一次：内部共享同一份数据的不同 `Rc`
    /// （例如克隆出来的适配器）无法被识别，会得到不同的 ID。
    pub fn register<T: FadeTarget>(&mut self, object: Rc<T>) -> TargetId {
        let ptr = Rc::as_ptr(&object) as *const ();
        if let Some(id) = self.find_registered(ptr) {
            debug!(target_id = %id, "目标已注册，复用已有 ID");
            return id;
        }

        let id = TargetId::new(self.next_target_id);
        self.next_target_id += 1;

        let label = object.describe();
        debug!(target_id = %id, label = %label, "注册淡入淡出目标");
        self.targets.insert(
            id,
            RegisteredTarget {
                object: object as Rc<dyn FadeTarget>,
                label,
            },
        );
        id
    }

    fn find_registered(&self, ptr: *const ()) -> Option<TargetId> {
        self.targets
            .iter()
            .find(|(_, registered)| {
                std::ptr::eq(Rc::as_ptr(&registered.object) as *const (), ptr)
            })
            .map(|(id, _)| *id)
    }

    /// 注销目标，同时中止其 Tween
    pub fn unregister(&mut self, target_id: TargetId) -> bool {
        if self.targets.remove(&target_id).is_none() {
            return false;
        }
        if let Some(mut tween) = self.tweens.remove(&target_id) {
            self.abort_tween(&mut tween, AbortReason::TargetRemoved);
        }
        true
    }

    pub fn is_registered(&self, target_id: TargetId) -> bool {
        self.targets.contains_key(&target_id)
    }

    pub fn registered_count(&self) -> usize {
        self.targets.len()
    }

    // ========== 淡入淡出控制 ==========

    /// 发起淡入淡出
    ///
    /// 校验失败时同步返回错误，目标不会被修改。
    /// 成功时立即把起始值写入目标，并替换该目标上正在进行的 Tween。
    pub fn fade(&mut self, target_id: TargetId, request: FadeRequest) -> FadeResult<FadeHandle> {
        let tween = match self.build_tween(target_id, &request) {
            Ok(tween) => tween,
            Err(e) => {
                warn!(
                    error = %e,
                    target_id = %target_id,
                    direction = %request.direction,
                    duration = request.duration,
                    "淡入淡出请求被拒绝"
                );
                return Err(e);
            }
        };
        self.next_tween_id += 1;

        if let Some(mut previous) = self.tweens.remove(&target_id) {
            self.abort_tween(&mut previous, AbortReason::Preempted);
        }

        if let Some(registered) = self.targets.get(&target_id) {
            registered.object.set_value(tween.start_value());
            debug!(
                tween = %tween.id(),
                label = %registered.label,
                direction = %tween.direction(),
                duration = tween.duration(),
                time_source = ?tween.time_source(),
                "开始淡入淡出"
            );
        }

        let handle = FadeHandle {
            tween: tween.id(),
            target: target_id,
        };
        self.events.push(FadeEvent::Started(tween.id()));
        self.tweens.insert(target_id, tween);

        Ok(handle)
    }

    fn build_tween(&self, target_id: TargetId, request: &FadeRequest) -> FadeResult<Tween> {
        if !self.targets.contains_key(&target_id) {
            return Err(FadeError::TargetNotRegistered { target: target_id });
        }
        let time_source = TimeSource::from_unscaled_flag(request.unscaled)?;
        Tween::new(
            TweenId::new(self.next_tween_id),
            target_id,
            request.direction,
            request.duration,
            time_source,
        )
    }

    /// 淡入（缩放时间）
    pub fn fade_in(&mut self, target_id: TargetId, duration: f32) -> FadeResult<FadeHandle> {
        self.fade(target_id, FadeRequest::new(FadeDirection::In, duration))
    }

    /// 淡出（缩放时间）
    pub fn fade_out(&mut self, target_id: TargetId, duration: f32) -> FadeResult<FadeHandle> {
        self.fade(target_id, FadeRequest::new(FadeDirection::Out, duration))
    }

    /// 使用字符串方向发起淡入淡出
    pub fn fade_token(
        &mut self,
        target_id: TargetId,
        token: &str,
        duration: f32,
    ) -> FadeResult<FadeHandle> {
        let request = FadeRequest::from_token(token, duration).inspect_err(|e| {
            warn!(error = %e, target_id = %target_id, "淡入淡出请求被拒绝");
        })?;
        self.fade(target_id, request)
    }

    /// 取消 Tween
    ///
    /// 目标保持最后一次写入的值。句柄已失效时返回 `false`。
    pub fn cancel(&mut self, handle: &FadeHandle) -> bool {
        if !self.is_active(handle) {
            return false;
        }
        match self.tweens.remove(&handle.target) {
            Some(mut tween) => {
                self.abort_tween(&mut tween, AbortReason::Cancelled);
                true
            }
            None => false,
        }
    }

    /// 取消所有 Tween，返回被取消的数量
    pub fn cancel_all(&mut self) -> usize {
        let mut tweens: Vec<Tween> = self.tweens.drain().map(|(_, tween)| tween).collect();
        tweens.sort_by_key(Tween::id);
        for tween in &mut tweens {
            self.abort_tween(tween, AbortReason::Cancelled);
        }
        tweens.len()
    }

    fn abort_tween(&mut self, tween: &mut Tween, reason: AbortReason) {
        if tween.abort(reason) {
            debug!(tween = %tween.id(), reason = ?reason, elapsed = tween.elapsed(), "淡入淡出中止");
            self.events.push(FadeEvent::Aborted(tween.id(), reason));
        }
    }

    /// 推进一帧
    ///
    /// 每个 Tween 按自己的时间源从 `delta` 中取值，推进恰好一次；
    /// 离开 `Running` 的 Tween 在本帧结束时移除。
    ///
    /// # 返回
    /// 自上次 `update` 以来产生的事件
    pub fn update(&mut self, delta: FrameDelta) -> Vec<FadeEvent> {
        self.tick += 1;
        let mut finished: Vec<TargetId> = Vec::new();

        for (target_id, tween) in &mut self.tweens {
            let dt = delta.for_source(tween.time_source());
            if let Some(value) = tween.step(dt) {
                if let Some(registered) = self.targets.get(target_id) {
                    registered.object.set_value(value);
                }
            }

            if !tween.is_running() {
                finished.push(*target_id);
            }
        }

        for target_id in finished {
            if let Some(tween) = self.tweens.remove(&target_id) {
                if tween.status() == TweenStatus::Completed {
                    debug!(tween = %tween.id(), tick = self.tick, "淡入淡出完成");
                    self.events.push(FadeEvent::Completed(tween.id()));
                }
            }
        }

        std::mem::take(&mut self.events)
    }

    // ========== 查询方法 ==========

    /// 句柄对应的 Tween 是否仍在进行
    pub fn is_active(&self, handle: &FadeHandle) -> bool {
        self.tween(handle).is_some()
    }

    /// 句柄对应的 Tween
    pub fn tween(&self, handle: &FadeHandle) -> Option<&Tween> {
        self.tweens
            .get(&handle.target)
            .filter(|tween| tween.id() == handle.tween)
    }

    /// 目标上正在进行的 Tween
    pub fn tween_for(&self, target_id: TargetId) -> Option<&Tween> {
        self.tweens.get(&target_id)
    }

    pub fn has_active_fades(&self) -> bool {
        !self.tweens.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// 所有活跃 Tween 的副本，按 ID 排序
    pub fn snapshot(&self) -> Vec<Tween> {
        let mut tweens: Vec<Tween> = self.tweens.values().cloned().collect();
        tweens.sort_by_key(Tween::id);
        tweens
    }

    /// 读取目标当前值（仅用于诊断）
    pub fn current_value(&self, target_id: TargetId) -> Option<f32> {
        self.targets
            .get(&target_id)
            .map(|registered| registered.object.value())
    }
}
