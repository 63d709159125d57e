//! 通用 UI 组件
//!
//! 配色、弹窗框架等

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
};

use crate::config::Theme;

/// 主题配色
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
    pub muted: Color,
    pub highlight: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                accent: Color::Magenta,
                muted: Color::DarkGray,
                highlight: Color::LightMagenta,
            },
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                accent: Color::LightRed,
                muted: Color::Gray,
                highlight: Color::Red,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    palette: &Palette,
) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(palette.base())
        .border_style(Style::default().fg(palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
