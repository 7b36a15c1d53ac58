//! 页面渲染
//!
//! 只把 `ViewState` 变成文本，不做任何输入输出。

use std::fmt::Write as _;

use crate::models::{Notification, Question, QuestionDraft, Severity};
use crate::state::ViewState;
use crate::utils::logging::truncate_text;

pub const PAGE_TITLE: &str = "Questionnaire Management";

const TEXT_WIDTH: usize = 40;
const TYPE_WIDTH: usize = 16;
const CATEGORY_WIDTH: usize = 16;

/// 渲染整页：标题、表格、通知
pub fn render_page(state: &ViewState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(60));
    let _ = writeln!(out, "{}", PAGE_TITLE);
    let _ = writeln!(out, "{}", "=".repeat(60));
    out.push_str(&render_table(&state.questions));
    if let Some(line) = render_notification(&state.notification) {
        let _ = writeln!(out, "\n{}", line);
    }
    out
}

/// 渲染题目表格，行号从 1 开始
pub fn render_table(questions: &[Question]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<tw$}  {:<yw$}  {:<cw$}  {:<8}  Actions",
        "#",
        "Question",
        "Type",
        "Category",
        "Required",
        tw = TEXT_WIDTH,
        yw = TYPE_WIDTH,
        cw = CATEGORY_WIDTH,
    );
    let _ = writeln!(out, "{}", "─".repeat(3 + 2 + TEXT_WIDTH + 2 + TYPE_WIDTH + 2 + CATEGORY_WIDTH + 2 + 8 + 2 + 13));

    if questions.is_empty() {
        let _ = writeln!(out, "     (no questions)");
    }

    for (i, question) in questions.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<tw$}  {:<yw$}  {:<cw$}  {:<8}  edit / delete",
            i + 1,
            truncate_text(&question.question_text, TEXT_WIDTH - 3),
            question.question_type.as_str(),
            truncate_text(&question.category, CATEGORY_WIDTH - 3),
            yes_no(question.required),
            tw = TEXT_WIDTH,
            yw = TYPE_WIDTH,
            cw = CATEGORY_WIDTH,
        );
    }
    out
}

/// 渲染对话框标题和当前草稿
pub fn render_dialog(state: &ViewState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "─".repeat(60));
    let _ = writeln!(out, "{}", state.dialog_title());
    let _ = writeln!(out, "{}", "─".repeat(60));
    out.push_str(&render_draft(&state.draft));
    out
}

pub fn render_draft(draft: &QuestionDraft) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Question Text: {}", draft.question_text);
    let _ = writeln!(out, "Question Type: {}", draft.question_type.label());
    let _ = writeln!(out, "Options:       {}", draft.options.join(", "));
    let _ = writeln!(out, "Category:      {}", draft.category);
    let _ = writeln!(out, "Required:      {}", yes_no(draft.required));
    out
}

/// 可见时返回一行通知
pub fn render_notification(notification: &Notification) -> Option<String> {
    if !notification.visible {
        return None;
    }
    let marker = match notification.severity {
        Severity::Success => "✅",
        Severity::Error => "❌",
    };
    Some(format!("{} {}", marker, notification.message))
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
