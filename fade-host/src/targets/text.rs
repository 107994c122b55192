//! 文本透明度适配器

use std::cell::RefCell;
use std::rc::Rc;

use fade_runtime::FadeTarget;

#[derive(Debug, Clone)]
struct TextData {
    content: String,
    alpha: f32,
}

/// 文本元素
#[derive(Debug, Clone)]
pub struct TextLabel {
    data: Rc<RefCell<TextData>>,
}

impl TextLabel {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            data: Rc::new(RefCell::new(TextData {
                content: content.into(),
                alpha: 1.0,
            })),
        }
    }

    pub fn content(&self) -> String {
        self.data.borrow().content.clone()
    }

    pub fn set_content(&self, content: impl Into<String>) {
        self.data.borrow_mut().content = content.into();
    }

    pub fn alpha(&self) -> f32 {
        self.data.borrow().alpha
    }
}

impl FadeTarget for TextLabel {
    fn value(&self) -> f32 {
        self.alpha()
    }

    fn set_value(&self, value: f32) {
        self.data.borrow_mut().alpha = value.clamp(0.0, 1.0);
    }

    fn describe(&self) -> String {
        format!("TextLabel({:?})", self.data.borrow().content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_label() {
        let label = TextLabel::new("第一章");
        label.set_value(0.25);
        label.set_content("第二章");

        assert_eq!(label.alpha(), 0.25);
        assert_eq!(label.content(), "第二章");
    }
}
