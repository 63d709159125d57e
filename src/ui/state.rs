//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use super::modal::ModalView;
use crate::config::{Config, Theme};
use crate::models::{Gallery, GalleryMeta};
use crate::viewer::PhotoViewer;

/// 应用状态
pub struct App {
    pub meta: GalleryMeta,
    pub viewer: PhotoViewer<ModalView>,
    pub section: Section,
    pub selected_index: usize,
    pub theme: Theme,
    /// 关闭状态下按幻灯片键：先打开第一张，延迟后再开始播放
    pub deferred_start: Option<Instant>,
    pub start_delay: Duration,
    /// 上一帧模态框的位置，用于点击外部关闭
    pub modal_area: Option<Rect>,
}

/// 页面分区
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Gallery,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Home, Section::Gallery];

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Gallery => "Gallery",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::Gallery => 1,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// 按键映射所依据的模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing(Section),
    Viewing,
}

impl App {
    /// 创建新的应用实例
    pub fn new(meta: GalleryMeta, gallery: Gallery, config: &Config) -> Self {
        let viewer = PhotoViewer::new(gallery, ModalView::default())
            .with_interval(config.slideshow_interval());
        Self {
            meta,
            viewer,
            section: Section::Home,
            selected_index: 0,
            theme: config.theme,
            deferred_start: None,
            start_delay: config.slideshow_start_delay(),
            modal_area: None,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.viewer.is_open() {
            Mode::Viewing
        } else {
            Mode::Browsing(self.section)
        }
    }

    /// 事件循环需要醒来的最早时间
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.deferred_start, self.viewer.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
