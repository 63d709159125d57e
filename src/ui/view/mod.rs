//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use super::state::{App, Mode, Section};
use components::{Palette, render_dialog_framework};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.theme);
    let screen = frame.area();
    frame.render_widget(Block::default().style(palette.base()), screen);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 分区
            Constraint::Min(6),    // 内容
            Constraint::Length(3), // 帮助
        ])
        .split(screen);

    render_title(frame, app, &palette, chunks[0]);
    render_sections(frame, app, &palette, chunks[1]);
    match app.section {
        Section::Home => render_home(frame, app, &palette, chunks[2]),
        Section::Gallery => render_gallery(frame, app, &palette, chunks[2]),
    }
    render_help(frame, app, &palette, chunks[3]);

    // 渲染模态框
    if app.viewer.display().visible {
        let area = centered_rect(70, 60, screen);
        render_modal(frame, app, &palette, area);
        app.modal_area = Some(area);
    } else {
        app.modal_area = None;
    }
}

fn render_title(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("❤️ {}", app.meta.title),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(app.theme.icon(), Style::default().fg(palette.muted)),
    ]))
    .style(palette.base())
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_sections(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let tabs = Tabs::new(Section::ALL.iter().map(|s| s.title()))
        .select(app.section.index())
        .style(palette.base())
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(tabs, area);
}

fn render_home(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            app.meta.title.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(app.meta.subtitle.clone()).centered(),
        Line::default(),
    ];

    if let (Some(since), Some(days)) = (app.meta.since, app.meta.days_since()) {
        lines.push(
            Line::from(format!("{} days since {}", days, since.format("%B %-d, %Y"))).centered(),
        );
    }
    lines.push(
        Line::from(format!(
            "{} memories in the gallery",
            app.viewer.gallery().len()
        ))
        .centered(),
    );
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "Press Enter to view the gallery or s to start the slideshow",
            Style::default().fg(palette.muted),
        ))
        .centered(),
    );

    let home = Paragraph::new(lines)
        .style(palette.base())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(home, area);
}

fn render_gallery(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let items: Vec<ListItem> = app
        .viewer
        .gallery()
        .photos()
        .iter()
        .enumerate()
        .map(|(i, photo)| {
            let style = if i == app.selected_index {
                Style::default()
                    .fg(palette.highlight)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(palette.fg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}. {}", i + 1, photo.label), style),
                Span::styled(
                    format!("  {}", photo.caption),
                    Style::default().fg(palette.muted),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .style(palette.base())
        .block(Block::default().title("Our Memories").borders(Borders::ALL));

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_help(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let help_text = match app.mode() {
        Mode::Viewing => "[←/→] Prev/Next  [Space] Slideshow  [t] Theme  [Esc] Close",
        Mode::Browsing(Section::Home) => {
            "[Enter] Gallery  [Tab/1/2] Sections  [s] Slideshow  [t] Theme  [q] Quit"
        }
        Mode::Browsing(Section::Gallery) => {
            "[j/k] Select  [Enter] Open  [Tab/1/2] Sections  [s] Slideshow  [t] Theme  [q] Quit"
        }
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(palette.muted).bg(palette.bg))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_modal(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let modal = app.viewer.display();
    let inner = render_dialog_framework(frame, area, &format!(" {} ", modal.label), palette);

    let lines = vec![
        Line::from(format!("🖼  {}", modal.image)),
        Line::from(Span::styled(
            modal.alt.clone(),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(Span::styled(
            modal.caption.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::default(),
        Line::from(modal.counter.clone()).centered(),
        Line::default(),
        Line::from(Span::styled(
            modal.control.label(),
            Style::default().fg(palette.accent),
        ))
        .centered(),
    ];

    let body = Paragraph::new(lines)
        .style(palette.base())
        .wrap(Wrap { trim: false });
    frame.render_widget(body, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{Gallery, GalleryData};
    use crate::ui::actions::Action;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use std::time::Instant;

    fn app() -> App {
        let data = GalleryData::default();
        let gallery = Gallery::from_data(&data).unwrap();
        App::new(data.meta, gallery, &Config::default())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_gallery_lists_photos() {
        let mut app = app();
        app.dispatch(Action::GoToSection(Section::Gallery), Instant::now());
        let text = draw(&mut app);
        assert!(text.contains("Our Memories"));
        assert!(text.contains("First Date"));
        assert!(text.contains("Special Memory"));
        assert!(app.modal_area.is_none());
    }

    #[test]
    fn test_modal_shows_current_photo() {
        let now = Instant::now();
        let mut app = app();
        app.dispatch(Action::GoToSection(Section::Gallery), now);
        app.dispatch(Action::MoveSelectionDown, now);
        app.dispatch(Action::OpenSelected, now);
        app.dispatch(Action::ToggleSlideshow, now);

        let text = draw(&mut app);
        assert!(text.contains("Our 2nd date in SM Dasma"));
        assert!(text.contains("2 of 5"));
        assert!(text.contains("Stop Slideshow"));
        assert!(app.modal_area.is_some());
    }

    #[test]
    fn test_modal_cleared_after_close() {
        let now = Instant::now();
        let mut app = app();
        app.dispatch(Action::OpenSelected, now);
        draw(&mut app);
        app.dispatch(Action::ClosePhoto, now);

        let text = draw(&mut app);
        assert!(!text.contains("1 of 5"));
        assert!(app.modal_area.is_none());
    }
}
