//! # Audio Channel 模块
//!
//! 音量适配器。实际的音频后端从 [`AudioChannel::effective_volume`] 读取最终音量。

use std::cell::RefCell;
use std::rc::Rc;

use fade_runtime::FadeTarget;

/// 音频通道内部数据
#[derive(Debug, Clone)]
pub struct AudioChannelData {
    /// 通道名称（bgm / sfx / voice ...）
    pub name: String,
    /// 淡入淡出驱动的音量 (0.0 - 1.0)
    pub volume: f32,
    /// 主音量 (0.0 - 1.0)
    pub master_volume: f32,
    /// 是否静音
    pub muted: bool,
}

/// 音频通道
#[derive(Debug, Clone)]
pub struct AudioChannel {
    data: Rc<RefCell<AudioChannelData>>,
}

impl AudioChannel {
    pub fn new(name: impl Into<String>, master_volume: f32) -> Self {
        Self {
            data: Rc::new(RefCell::new(AudioChannelData {
                name: name.into(),
                volume: 1.0,
                master_volume: master_volume.clamp(0.0, 1.0),
                muted: false,
            })),
        }
    }

    pub fn volume(&self) -> f32 {
        self.data.borrow().volume
    }

    pub fn set_muted(&self, muted: bool) {
        self.data.borrow_mut().muted = muted;
    }

    /// 输出到后端的音量
    pub fn effective_volume(&self) -> f32 {
        let data = self.data.borrow();
        if data.muted {
            0.0
        } else {
            data.volume * data.master_volume
        }
    }

    /// 内部数据副本
    pub fn snapshot(&self) -> AudioChannelData {
        self.data.borrow().clone()
    }
}

impl FadeTarget for AudioChannel {
    fn value(&self) -> f32 {
        self.volume()
    }

    fn set_value(&self, value: f32) {
        self.data.borrow_mut().volume = value.clamp(0.0, 1.0);
    }

    fn describe(&self) -> String {
        format!("AudioChannel({})", self.data.borrow().name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_volume() {
        let channel = AudioChannel::new("bgm", 0.5);
        channel.set_value(0.5);
        assert_eq!(channel.effective_volume(), 0.25);

        channel.set_muted(true);
        assert_eq!(channel.effective_volume(), 0.0);
        // 静音不影响被驱动的音量
        assert_eq!(channel.value(), 0.5);
    }

    #[test]
    fn test_snapshot() {
        let channel = AudioChannel::new("voice", 1.0);
        let data = channel.snapshot();
        assert_eq!(data.name, "voice");
        assert_eq!(data.volume, 1.0);
        assert!(!data.muted);
    }
}
