//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs, modal.rs): App 结构体及查看器投射出的模态框数据
//! - View (view/): 将 State 映射为 UI
//! - Intent (actions.rs): 用户交互转化为明确的语义化 Action

pub mod actions;
pub mod input;
pub mod logic;
pub mod modal;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::{handle_key_event, handle_mouse_event};
pub use state::App;
pub use view::render;
