//! 照片查看器
//!
//! 模态框 + 幻灯片的状态与导航逻辑。显示通过 [`Display`] 回调完成，
//! 不依赖任何终端或窗口，方便单独测试。
//!
//! 单线程模型：定时器只是一个截止时间，由事件循环调用 [`PhotoViewer::tick`] 触发，
//! 与按键事件交替执行，不会并发。

use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::models::{Gallery, PhotoRecord};

/// 幻灯片默认间隔
pub const SLIDESHOW_INTERVAL: Duration = Duration::from_millis(3_000);

/// 位置指示（从 1 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.current, self.total)
    }
}

/// 导航方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

impl Step {
    /// 循环取模
    fn apply(self, index: usize, len: usize) -> usize {
        match self {
            Step::Forward => (index + 1) % len,
            Step::Backward => (index + len - 1) % len,
        }
    }
}

/// 幻灯片按钮当前应显示的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideshowControl {
    #[default]
    Start,
    Stop,
}

impl SlideshowControl {
    pub fn label(self) -> &'static str {
        match self {
            SlideshowControl::Start => "▶️ Start Slideshow",
            SlideshowControl::Stop => "⏸️ Stop Slideshow",
        }
    }
}

/// 显示层回调
pub trait Display {
    /// 显示照片及其位置
    fn show(&mut self, photo: &PhotoRecord, position: Position);
    /// 关闭模态框
    fn hide(&mut self);
    /// 更新幻灯片按钮
    fn slideshow_control(&mut self, control: SlideshowControl);
}

/// 周期定时器句柄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideshowTimer {
    period: Duration,
    next_due: Instant,
}

impl SlideshowTimer {
    fn start(now: Instant, period: Duration) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// 到期则重新排期并返回 true。每次调用最多触发一次，落后太多时不补发。
    fn fire(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.period;
        if self.next_due <= now {
            self.next_due = now + self.period;
        }
        true
    }
}

/// 查看器状态
#[derive(Debug, Default)]
pub struct ViewerState {
    current_index: usize,
    is_open: bool,
    // Some 当且仅当幻灯片正在播放
    slideshow: Option<SlideshowTimer>,
}

pub struct PhotoViewer<D: Display> {
    gallery: Gallery,
    state: ViewerState,
    display: D,
    interval: Duration,
}

impl<D: Display> PhotoViewer<D> {
    pub fn new(gallery: Gallery, display: D) -> Self {
        Self {
            gallery,
            state: ViewerState::default(),
            display,
            interval: SLIDESHOW_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    // ============ 查询 ============

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// 关闭时返回 None
    pub fn current_index(&self) -> Option<usize> {
        self.state.is_open.then_some(self.state.current_index)
    }

    pub fn is_slideshow_active(&self) -> bool {
        self.state.slideshow.is_some()
    }

    pub fn slideshow_timer(&self) -> Option<&SlideshowTimer> {
        self.state.slideshow.as_ref()
    }

    /// 下一次定时器触发时间
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slideshow_timer().map(SlideshowTimer::next_due)
    }

    // ============ 操作 ============

    /// 打开指定照片。越界索引被忽略。
    pub fn open(&mut self, index: usize) {
        if index >= self.gallery.len() {
            warn!(
                "Ignoring open({}) on a gallery of {} photos",
                index,
                self.gallery.len()
            );
            return;
        }
        self.state.current_index = index;
        self.state.is_open = true;
        self.render();
    }

    /// 关闭查看器并停止幻灯片。已关闭时无操作。
    pub fn close(&mut self) {
        if !self.state.is_open {
            return;
        }
        self.stop_slideshow();
        self.state.is_open = false;
        self.display.hide();
    }

    /// 前进或后退一张，首尾循环。关闭时无操作。
    pub fn advance(&mut self, step: Step) {
        if !self.state.is_open {
            debug!("Ignoring {:?} while the viewer is closed", step);
            return;
        }
        self.state.current_index = step.apply(self.state.current_index, self.gallery.len());
        self.render();
    }

    /// 开始/停止幻灯片
    pub fn toggle_slideshow(&mut self, now: Instant) {
        if self.state.slideshow.is_some() {
            self.stop_slideshow();
            return;
        }
        if !self.state.is_open {
            warn!("Ignoring slideshow start while the viewer is closed");
            return;
        }
        self.state.slideshow = Some(SlideshowTimer::start(now, self.interval));
        self.display.slideshow_control(SlideshowControl::Stop);
        info!("Slideshow started");
    }

    /// 定时器到期时前进一张，返回是否触发
    pub fn tick(&mut self, now: Instant) -> bool {
        let fired = match self.state.slideshow.as_mut() {
            Some(timer) => timer.fire(now),
            None => false,
        };
        if fired {
            self.advance(Step::Forward);
        }
        fired
    }

    /// 重新投射当前照片（如终端尺寸变化）
    pub fn refresh(&mut self) {
        if self.state.is_open {
            self.render();
        }
    }

    fn stop_slideshow(&mut self) {
        if self.state.slideshow.take().is_some() {
            self.display.slideshow_control(SlideshowControl::Start);
            info!("Slideshow stopped");
        }
    }

    fn render(&mut self) {
        let index = self.state.current_index;
        let position = Position {
            current: index + 1,
            total: self.gallery.len(),
        };
        if let Some(photo) = self.gallery.get(index) {
            self.display.show(photo, position);
        }
    }
}
