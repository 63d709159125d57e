//! 模态框视图模型
//!
//! 查看器通过 [`Display`] 把当前照片投射到这里，view 层只读取这些字段进行绘制

use crate::models::PhotoRecord;
use crate::viewer::{Display, Position, SlideshowControl};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalView {
    pub visible: bool,
    pub image: String,
    pub alt: String,
    pub caption: String,
    pub label: String,
    pub counter: String,
    pub control: SlideshowControl,
}

impl Display for ModalView {
    fn show(&mut self, photo: &PhotoRecord, position: Position) {
        self.visible = true;
        self.image = photo.source.clone();
        self.alt = photo.alt_text.clone();
        self.caption = photo.caption.clone();
        self.label = photo.label.clone();
        self.counter = position.to_string();
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn slideshow_control(&mut self, control: SlideshowControl) {
        self.control = control;
    }
}
