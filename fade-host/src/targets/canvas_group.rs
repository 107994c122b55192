//! UI 组透明度适配器

use std::cell::Cell;
use std::rc::Rc;

use fade_runtime::FadeTarget;

/// UI 组
///
/// 只暴露一个 `opacity`（0.0 - 1.0），子元素由宿主按此透明度绘制。
#[derive(Debug, Clone)]
pub struct CanvasGroup {
    name: String,
    opacity: Rc<Cell<f32>>,
}

impl CanvasGroup {
    pub fn new(name: impl Into<String>, opacity: f32) -> Self {
        Self {
            name: name.into(),
            opacity: Rc::new(Cell::new(opacity.clamp(0.0, 1.0))),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.get()
    }

    /// 是否完全透明（宿主可据此跳过绘制）
    pub fn is_hidden(&self) -> bool {
        self.opacity.get() <= 0.0
    }
}

impl FadeTarget for CanvasGroup {
    fn value(&self) -> f32 {
        self.opacity()
    }

    fn set_value(&self, value: f32) {
        self.opacity.set(value.clamp(0.0, 1.0));
    }

    fn describe(&self) -> String {
        format!("CanvasGroup({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_group_shares_state() {
        let group = CanvasGroup::new("menu", 1.0);
        let registered = group.clone();

        registered.set_value(0.0);
        assert!(group.is_hidden());
        assert_eq!(group.describe(), "CanvasGroup(menu)");
    }

    #[test]
    fn test_canvas_group_clamps() {
        let group = CanvasGroup::new("hud", 3.0);
        assert_eq!(group.opacity(), 1.0);

        group.set_value(-0.5);
        assert_eq!(group.value(), 0.0);
    }
}
