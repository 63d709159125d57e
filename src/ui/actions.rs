//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use super::state::Section;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    NextSection,
    GoToSection(Section),
    ToggleTheme,

    // 相册列表
    MoveSelectionUp,
    MoveSelectionDown,
    OpenSelected,

    // 查看器
    PlaySlideshow, // 关闭状态下：打开第一张并延迟播放
    ToggleSlideshow,
    NextPhoto,
    PrevPhoto,
    ClosePhoto,

    Click { column: u16, row: u16 },
}
