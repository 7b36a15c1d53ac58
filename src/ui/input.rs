//! 终端输入解析
//!
//! 命令行和表单字段的解析都是纯函数，读写终端在 `app` 里。

use std::io::{self, BufRead, Write};

use crate::models::{DraftField, QuestionDraft, QuestionType};
use crate::workflow::Confirm;

/// 页面命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    /// 行号已转换为从 0 开始
    Edit(usize),
    Delete(usize),
    Refresh,
    CloseNotification,
    Help,
    Quit,
}

pub const HELP: &str = "commands: add | edit <row> | delete <row> | refresh | close | help | quit";

/// 解析一行命令，行号按表格显示从 1 开始
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Err("empty command".to_string());
    };
    let arg = parts.next();

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" | "a" => Command::Add,
        "edit" | "e" => Command::Edit(parse_row(arg)?),
        "delete" | "d" => Command::Delete(parse_row(arg)?),
        "refresh" | "r" => Command::Refresh,
        "close" | "c" => Command::CloseNotification,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(format!("unknown command: {}", other)),
    };
    Ok(command)
}

fn parse_row(arg: Option<&str>) -> Result<usize, String> {
    let raw = arg.ok_or_else(|| "missing row number".to_string())?;
    match raw.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row - 1),
        _ => Err(format!("invalid row number: {}", raw)),
    }
}

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    QuestionText,
    QuestionType,
    Options,
    Category,
    Required,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::QuestionText,
        FormField::QuestionType,
        FormField::Options,
        FormField::Category,
        FormField::Required,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::QuestionText => "Question Text",
            FormField::QuestionType => "Question Type",
            FormField::Options => "Options (comma separated)",
            FormField::Category => "Category",
            FormField::Required => "Required (y/n)",
        }
    }

    /// 提示中显示的当前值
    pub fn current(&self, draft: &QuestionDraft) -> String {
        match self {
            FormField::QuestionText => draft.question_text.clone(),
            FormField::QuestionType => draft.question_type.label().to_string(),
            FormField::Options => draft.options.join(", "),
            FormField::Category => draft.category.clone(),
            FormField::Required => (if draft.required { "y" } else { "n" }).to_string(),
        }
    }

    /// 把输入转换为字段修改
    ///
    /// 空输入保留原值（返回 `Ok(None)`）；`-` 清空文本类字段。
    pub fn parse(&self, input: &str) -> Result<Option<DraftField>, String> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }
        let clear = input == "-";

        let field = match self {
            FormField::QuestionText if clear => return Err("Question Text is required".to_string()),
            FormField::QuestionText => DraftField::QuestionText(input.to_string()),
            FormField::QuestionType => DraftField::QuestionType(
                parse_question_type(input).ok_or_else(|| format!("unknown question type: {}", input))?,
            ),
            FormField::Options if clear => DraftField::Options(Vec::new()),
            FormField::Options => DraftField::Options(parse_options(input)),
            FormField::Category if clear => DraftField::Category(String::new()),
            FormField::Category => DraftField::Category(input.to_string()),
            FormField::Required => DraftField::Required(
                parse_yes_no(input).ok_or_else(|| format!("expected y or n: {}", input))?,
            ),
        };
        Ok(Some(field))
    }
}

/// 题型选择：序号（1-4）、接口值或显示名称
pub fn parse_question_type(input: &str) -> Option<QuestionType> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| QuestionType::ALL.get(i).copied());
    }
    QuestionType::from_value(&input.to_ascii_lowercase())
        .or_else(|| QuestionType::ALL.into_iter().find(|t| t.label().eq_ignore_ascii_case(input)))
}

/// 逗号分隔的选项，去掉空白项
pub fn parse_options(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    }
}

/// 题型选项提示，例如 `1) Multiple Choice  2) Text ...`
pub fn question_type_menu() -> String {
    QuestionType::ALL
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}) {}", i + 1, t.label()))
        .collect::<Vec<_>>()
        .join("  ")
}

/// 从标准输入读取 y/N 的确认
///
/// 阻塞读取；读取失败或 EOF 视为拒绝。
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        ask_yes_no(&mut stdin.lock(), &mut stdout, message)
    }
}

/// 提示并读取一次 y/N，默认 No
pub fn ask_yes_no<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> bool {
    let _ = write!(output, "{} [y/N] ", message);
    let _ = output.flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => false,
        Ok(_) => parse_yes_no(&line).unwrap_or(false),
    }
}
