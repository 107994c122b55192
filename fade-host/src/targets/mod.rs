//! # Targets 模块
//!
//! 常见对象的 `FadeTarget` 适配器。
//!
//! 每个适配器都用 `Rc<RefCell<T>>` 包装内部数据：
//! 注册到 `FadeStepper` 的副本和宿主持有的副本共享同一份状态。
//!
//! | 适配器 | 被驱动的属性 |
//! |--------|--------------|
//! | [`CanvasGroup`] | UI 组透明度 |
//! | [`AudioChannel`] | 音量 |
//! | [`Sprite`] | 颜色的 alpha 通道 |
//! | [`TextLabel`] | 文本透明度 |

mod audio_channel;
mod canvas_group;
mod sprite;
mod text;

pub use audio_channel::{AudioChannel, AudioChannelData};
pub use canvas_group::CanvasGroup;
pub use sprite::{Color, Sprite};
pub use text::TextLabel;

use serde::{Deserialize, Serialize};

/// 演示用的目标种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// UI 组
    #[default]
    Canvas,
    /// 音频通道
    Audio,
    /// 精灵
    Sprite,
    /// 文本
    Text,
}
