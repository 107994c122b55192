//! 精灵颜色 alpha 通道适配器

use std::cell::Cell;
use std::rc::Rc;

use fade_runtime::FadeTarget;

/// RGBA 颜色
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// 只替换 alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// 精灵
///
/// 淡入淡出只改写颜色的 alpha，RGB 保持不变。
#[derive(Debug, Clone)]
pub struct Sprite {
    name: String,
    color: Rc<Cell<Color>>,
}

impl Sprite {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color: Rc::new(Cell::new(color)),
        }
    }

    pub fn color(&self) -> Color {
        self.color.get()
    }

    pub fn set_color(&self, color: Color) {
        self.color.set(color);
    }
}

impl FadeTarget for Sprite {
    fn value(&self) -> f32 {
        self.color.get().a
    }

    fn set_value(&self, value: f32) {
        let color = self.color.get();
        self.color.set(color.with_alpha(value.clamp(0.0, 1.0)));
    }

    fn describe(&self) -> String {
        format!("Sprite({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_keeps_rgb() {
        let sprite = Sprite::new("alice", Color::rgba(0.2, 0.4, 0.6, 1.0));
        sprite.set_value(0.5);

        assert_eq!(sprite.color(), Color::rgba(0.2, 0.4, 0.6, 0.5));
        assert_eq!(sprite.value(), 0.5);
    }
}
