//! # Direction 模块
//!
//! 淡入淡出方向与端点解析。
//!
//! 字符串形式（`"in"` / `"out"`）只在边界处解析一次，
//! 内部统一使用 [`FadeDirection`]。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FadeError, FadeResult};

/// 淡入淡出方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FadeDirection {
    /// 淡入：0 → 1
    In,
    /// 淡出：1 → 0
    Out,
}

impl FadeDirection {
    /// 计算方向对应的 `(起始值, 结束值)`
    pub fn endpoints(self) -> (f32, f32) {
        match self {
            Self::In => (0.0, 1.0),
            Self::Out => (1.0, 0.0),
        }
    }

    /// 字符串 token 形式
    pub fn as_token(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

impl FromStr for FadeDirection {
    type Err = FadeError;

    /// 严格匹配 `"in"` / `"out"`，大小写变体同样视为无效
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            _ => Err(FadeError::InvalidDirection {
                token: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for FadeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// 将方向解析为端点
pub fn resolve(direction: FadeDirection) -> (f32, f32) {
    direction.endpoints()
}

/// 将字符串 token 解析为端点
pub fn resolve_token(token: &str) -> FadeResult<(f32, f32)> {
    token.parse::<FadeDirection>().map(resolve)
}
