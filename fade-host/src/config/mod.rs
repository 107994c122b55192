//! # Config 模块
//!
//! 宿主配置管理。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件 (fade.json)
//! 3. 默认值（最低）

use std::fs;
use std::path::Path;
use std::str::FromStr;

use fade_runtime::FadeDirection;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::targets::TargetKind;

/// 宿主配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// 默认淡入淡出时长（秒）
    #[serde(default = "default_duration")]
    pub default_duration: f32,

    /// 缩放时间倍率
    #[serde(default = "default_time_scale")]
    pub time_scale: f32,

    /// 模拟帧率（headless 演示）
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,

    /// 日志级别（trace / debug / info / warn / error）
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// 演示配置
    #[serde(default)]
    pub demo: DemoConfig,
}

/// 演示配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// 目标种类
    #[serde(default)]
    pub target: TargetKind,

    /// 淡入淡出方向
    #[serde(default = "default_direction")]
    pub direction: FadeDirection,

    /// 是否使用真实时间
    #[serde(default)]
    pub unscaled: bool,
}

fn default_duration() -> f32 {
    0.5
}

fn default_time_scale() -> f32 {
    1.0
}

fn default_frame_rate() -> u32 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_direction() -> FadeDirection {
    FadeDirection::In
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            default_duration: default_duration(),
            time_scale: default_time_scale(),
            frame_rate: default_frame_rate(),
            log_level: default_log_level(),
            demo: DemoConfig::default(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            target: TargetKind::default(),
            direction: default_direction(),
            unscaled: false,
        }
    }
}

impl HostConfig {
    /// 加载配置文件
    ///
    /// 如果文件不存在或解析失败，返回默认配置并输出警告。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            warn!(path = ?path, "配置文件不存在，使用默认配置");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => {
                    info!(path = ?path, "配置文件加载成功");
                    config
                }
                Err(e) => {
                    warn!(error = %e, "配置文件解析失败，使用默认配置");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(error = %e, "配置文件读取失败，使用默认配置");
                Self::default()
            }
        }
    }

    /// 保存配置到文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// 日志级别
    pub fn tracing_level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::ValidationFailed(format!("未知的日志级别: {}", self.log_level)))
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.default_duration > 0.0 && self.default_duration.is_finite()) {
            return Err(ConfigError::ValidationFailed(format!(
                "default_duration 必须大于 0，当前为 {}",
                self.default_duration
            )));
        }

        if !(self.time_scale >= 0.0 && self.time_scale.is_finite()) {
            return Err(ConfigError::ValidationFailed(format!(
                "time_scale 不能为负数，当前为 {}",
                self.time_scale
            )));
        }

        if self.frame_rate == 0 {
            return Err(ConfigError::ValidationFailed(
                "frame_rate 必须大于 0".to_string(),
            ));
        }

        self.tracing_level()?;
        Ok(())
    }
}

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 序列化失败
    #[error("配置序列化失败: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    /// IO 错误
    #[error("配置 IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 验证失败
    #[error("配置验证失败: {0}")]
    ValidationFailed(String),
}
