//! 终端界面
//!
//! - `render` - 把页面状态渲染为文本
//! - `input` - 命令和表单输入解析、终端确认
//! - `app` - 命令循环

pub mod app;
pub mod input;
pub mod render;

pub use app::App;
pub use input::StdinConfirm;
