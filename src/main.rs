mod config;
mod error;
mod models;
mod storage;
mod ui;
mod viewer;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::prelude::*;

use crate::error::{AppError, Result};
use crate::models::{Gallery, GalleryData};
use crate::storage::{load_config, load_gallery};
use crate::ui::{App, render};

const APP_NAME: &str = "keepsake";

/// 无定时器时的轮询间隔
const IDLE_POLL: Duration = Duration::from_millis(250);

/// 获取数据目录路径 (~/.local/share/keepsake/)
fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or(AppError::MissingDirectory("data"))?
        .join(APP_NAME);

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 配置文件路径 (~/.config/keepsake/config.toml)
fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or(AppError::MissingDirectory("config"))?;
    Ok(config_dir.join(APP_NAME).join("config.toml"))
}

/// 终端被 TUI 占用，日志写入文件
fn init_logging(data_dir: &Path) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("keepsake.log"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let data_dir = get_data_dir()?;
    init_logging(&data_dir)?;

    let config = load_config(&get_config_path()?)?;
    let data = match &config.gallery_file {
        Some(path) => load_gallery(path)?,
        None => GalleryData::default(),
    };
    let gallery = Gallery::from_data(&data)?;

    info!("❤️ Welcome to {} ❤️", data.meta.title);

    // 创建应用状态
    let mut app = App::new(data.meta, gallery, &config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("Event loop failed: {}", e);
    }
    info!("Goodbye");

    result?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        // 睡到下一个定时器到期或有输入为止
        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if ui::handle_key_event(app, key.code, Instant::now())? {
                        break;
                    }
                }
                Event::Mouse(mouse) => ui::handle_mouse_event(app, mouse, Instant::now()),
                Event::Resize(_, _) => app.viewer.refresh(),
                _ => {}
            }
        }

        app.tick(Instant::now());
    }
    Ok(())
}
