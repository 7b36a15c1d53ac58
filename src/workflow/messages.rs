//! 通知文案

pub const CREATED: &str = "Question created successfully";
pub const UPDATED: &str = "Question updated successfully";
pub const DELETED: &str = "Question deleted successfully";
pub const SUBMIT_FAILED: &str = "Operation failed";
pub const DELETE_FAILED: &str = "Failed to delete question";
pub const FETCH_FAILED: &str = "Failed to fetch questions";

/// 删除前的确认提示
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this question?";
