//! # Target 模块
//!
//! 可淡入淡出对象的能力接口。
//!
//! 任何对象只要暴露一个 `[0, 1]` 范围内可读写的标量（透明度、音量……），
//! 就可以交给 `FadeStepper` 驱动。

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// 目标唯一标识符
///
/// 由 `FadeStepper` 在注册时分配，不会重复。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId(pub(crate) u64);

impl TargetId {
    /// 创建新的目标 ID（仅供 FadeStepper 内部使用）
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// 获取内部 ID 值
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TargetId({})", self.0)
    }
}

/// 可淡入淡出的对象
///
/// ## 约定
///
/// - `value()` 只用于诊断，新的淡入淡出不会从当前值继续
/// - `set_value()` 必须幂等，重复写入同一个值不产生副作用
///
/// 使用 `&self` 写入，对象自己通过 `Cell` / `RefCell` 实现内部可变性。
///
/// ## 实现示例
///
/// ```rust,ignore
/// struct Panel {
///     opacity: Cell<f32>,
/// }
///
/// impl FadeTarget for Panel {
///     fn value(&self) -> f32 {
///         self.opacity.get()
///     }
///
///     fn set_value(&self, value: f32) {
///         self.opacity.set(value);
///     }
/// }
/// ```
pub trait FadeTarget: 'static {
    /// 当前值
    fn value(&self) -> f32;

    /// 写入新值
    fn set_value(&self, value: f32);

    /// 用于日志的描述
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// 简单的共享标量
///
/// 使用 `Rc<Cell<f32>>` 包装单个值，克隆后共享同一份数据。
#[derive(Debug, Clone, Default)]
pub struct SharedScalar {
    value: Rc<Cell<f32>>,
}

impl SharedScalar {
    pub fn new(initial_value: f32) -> Self {
        Self {
            value: Rc::new(Cell::new(initial_value)),
        }
    }

    pub fn get(&self) -> f32 {
        self.value.get()
    }
}

impl FadeTarget for SharedScalar {
    fn value(&self) -> f32 {
        self.value.get()
    }

    fn set_value(&self, value: f32) {
        self.value.set(value);
    }

    fn describe(&self) -> String {
        "SharedScalar".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_id() {
        let id1 = TargetId::new(1);
        let id2 = TargetId::new(2);

        assert_eq!(id1, TargetId::new(1));
        assert_ne!(id1, id2);
        assert_eq!(id1.value(), 1);
        assert_eq!(id2.to_string(), "TargetId(2)");
    }

    #[test]
    fn test_shared_scalar() {
        let scalar = SharedScalar::new(0.5);
        let shared = scalar.clone();

        scalar.set_value(0.8);
        assert_eq!(shared.get(), 0.8);

        // 幂等写入
        scalar.set_value(0.8);
        assert_eq!(shared.value(), 0.8);
    }
}
