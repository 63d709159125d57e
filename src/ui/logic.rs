//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和定时器推进

use std::time::Instant;

use log::debug;
use ratatui::layout::Position;

use super::actions::Action;
use super::state::{App, Section};
use crate::viewer::Step;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Quit => return true,
            Action::NextSection => self.go_to_section(self.section.next()),
            Action::GoToSection(section) => self.go_to_section(section),
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                debug!("Theme switched to {:?}", self.theme);
            }

            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),
            Action::OpenSelected => self.viewer.open(self.selected_index),

            Action::PlaySlideshow => self.play_slideshow(now),
            Action::ToggleSlideshow => self.viewer.toggle_slideshow(now),
            Action::NextPhoto => self.viewer.advance(Step::Forward),
            Action::PrevPhoto => self.viewer.advance(Step::Backward),
            Action::ClosePhoto => self.close_photo(),

            Action::Click { column, row } => self.click(column, row),
        }
        false
    }

    /// 推进延迟启动和幻灯片定时器
    pub fn tick(&mut self, now: Instant) {
        if let Some(due) = self.deferred_start {
            if now >= due {
                self.deferred_start = None;
                if self.viewer.is_open() && !self.viewer.is_slideshow_active() {
                    self.viewer.toggle_slideshow(now);
                }
            }
        }
        self.viewer.tick(now);
    }

    // ============ 导航相关 ============

    fn go_to_section(&mut self, section: Section) {
        if self.section != section {
            debug!("Section {:?} -> {:?}", self.section, section);
        }
        self.section = section;
    }

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.viewer.gallery().len() {
            self.selected_index += 1;
        }
    }

    // ============ 查看器相关 ============

    /// 查看器已打开时直接切换，否则从第一张开始并延迟播放
    fn play_slideshow(&mut self, now: Instant) {
        if self.viewer.is_open() {
            self.viewer.toggle_slideshow(now);
        } else {
            self.viewer.open(0);
            self.deferred_start = Some(now + self.start_delay);
        }
    }

    /// 关闭查看器，列表光标停在最后查看的照片上
    fn close_photo(&mut self) {
        if let Some(index) = self.viewer.current_index() {
            self.selected_index = index;
        }
        self.deferred_start = None;
        self.viewer.close();
        self.modal_area = None;
    }

    /// 点击模态框外部时关闭
    fn click(&mut self, column: u16, row: u16) {
        if !self.viewer.is_open() {
            return;
        }
        let inside = self
            .modal_area
            .is_some_and(|area| area.contains(Position::new(column, row)));
        if !inside {
            self.close_photo();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Theme};
    use crate::models::{Gallery, GalleryData};
    use ratatui::layout::Rect;
    use std::time::Duration;

    fn app() -> App {
        let data = GalleryData::default();
        let gallery = Gallery::from_data(&data).unwrap();
        App::new(data.meta, gallery, &Config::default())
    }

    #[test]
    fn test_open_selected() {
        let now = Instant::now();
        let mut app = app();
        app.dispatch(Action::GoToSection(Section::Gallery), now);
        app.dispatch(Action::MoveSelectionDown, now);
        app.dispatch(Action::MoveSelectionDown, now);
        app.dispatch(Action::OpenSelected, now);

        assert_eq!(app.viewer.current_index(), Some(2));
        let modal = app.viewer.display();
        assert!(modal.visible);
        assert_eq!(modal.label, "Movie Night");
        assert_eq!(modal.counter, "3 of 5");
    }

    #[test]
    fn test_selection_is_clamped() {
        let now = Instant::now();
        let mut app = app();
        app.dispatch(Action::MoveSelectionUp, now);
        assert_eq!(app.selected_index, 0);
        for _ in 0..10 {
            app.dispatch(Action::MoveSelectionDown, now);
        }
        assert_eq!(app.selected_index, 4);
    }

    #[test]
    fn test_close_keeps_last_viewed_selected() {
        let now = Instant::now();
        let mut app = app();
        app.dispatch(Action::OpenSelected, now);
        app.dispatch(Action::PrevPhoto, now);
        app.dispatch(Action::ClosePhoto, now);
        assert_eq!(app.selected_index, 4);
    }

    #[test]
    fn test_navigation_wraps() {
        let now = Instant::now();
        let mut app = app();
        app.dispatch(Action::OpenSelected, now);
        app.dispatch(Action::PrevPhoto, now);
        assert_eq!(app.viewer.display().counter, "5 of 5");
        app.dispatch(Action::NextPhoto, now);
        assert_eq!(app.viewer.display().counter, "1 of 5");
    }

    #[test]
    fn test_play_from_closed_starts_after_delay() {
        let now = Instant::now();
        let mut app = app();
        app.dispatch(Action::PlaySlideshow, now);

        assert_eq!(app.viewer.current_index(), Some(0));
        assert!(!app.viewer.is_slideshow_active());
        assert_eq!(app.next_deadline(), Some(now + Duration::from_millis(500)));

        app.tick(now + Duration::from_millis(499));
        assert!(!app.viewer.is_slideshow_active());

        let started = now + Duration::from_millis(500);
        app.tick(started);
        assert!(app.viewer.is_slideshow_active());
        assert!(app.deferred_start.is_none());
        assert_eq!(app.viewer.current_index(), Some(0));

        app.tick(started + Duration::from_millis(3_000));
        assert_eq!(app.viewer.current_index(), Some(1));
    }

    #[test]
    fn test_close_cancels_deferred_start() {
        let now = Instant::now();
        let mut app = app();
        app.dispatch(Action::PlaySlideshow, now);
        app.dispatch(Action::ClosePhoto, now);

        assert!(app.deferred_start.is_none());
        assert_eq!(app.next_deadline(), None);
        app.tick(now + Duration::from_secs(10));
        assert!(!app.viewer.is_open());
        assert!(!app.viewer.is_slideshow_active());
    }

    #[test]
    fn test_toggle_while_open() {
        let now = Instant::now();
        let mut app = app();
        app.dispatch(Action::OpenSelected, now);
        app.dispatch(Action::ToggleSlideshow, now);
        assert!(app.viewer.is_slideshow_active());
        assert_eq!(app.next_deadline(), Some(now + Duration::from_millis(3_000)));

        app.dispatch(Action::ClosePhoto, now);
        assert!(!app.viewer.is_slideshow_active());
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn test_click_outside_modal_closes() {
        let now = Instant::now();
        let mut app = app();
        app.dispatch(Action::OpenSelected, now);
        app.modal_area = Some(Rect::new(10, 5, 40, 12));

        app.dispatch(Action::Click { column: 20, row: 10 }, now);
        assert!(app.viewer.is_open());

        app.dispatch(Action::Click { column: 2, row: 2 }, now);
        assert!(!app.viewer.is_open());
        assert!(app.modal_area.is_none());
    }

    #[test]
    fn test_theme_and_sections() {
        let now = Instant::now();
        let mut app = app();
        assert_eq!(app.theme, Theme::Light);
        app.dispatch(Action::ToggleTheme, now);
        assert_eq!(app.theme, Theme::Dark);

        assert_eq!(app.section, Section::Home);
        app.dispatch(Action::NextSection, now);
        assert_eq!(app.section, Section::Gallery);
        app.dispatch(Action::NextSection, now);
        assert_eq!(app.section, Section::Home);

        assert!(app.dispatch(Action::Quit, now));
    }
}
