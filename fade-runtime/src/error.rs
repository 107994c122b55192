//! # Error 模块
//!
//! 定义 fade-runtime 中使用的错误类型。
//!
//! 所有错误都在请求淡入淡出时同步返回，不会在动画进行中途出现。

use thiserror::Error;

use crate::target::TargetId;

/// 淡入淡出请求错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FadeError {
    /// 无法识别的方向（枚举外的值或错误的字符串）
    #[error("无效的淡入淡出方向 '{token}'，只接受 \"in\" 或 \"out\"")]
    InvalidDirection { token: String },

    /// 时长必须大于 0
    #[error("无效的时长 {duration}，必须大于 0 秒")]
    InvalidDuration { duration: f32 },

    /// 显式传入了 false 的 unscaled 标志
    #[error("unscaled 标志为 false 时是多余的，请直接省略该参数")]
    RedundantFlag,

    /// 目标未注册
    #[error("目标 {target} 未注册")]
    TargetNotRegistered { target: TargetId },
}

/// Result 类型别名
pub type FadeResult<T> = Result<T, FadeError>;
