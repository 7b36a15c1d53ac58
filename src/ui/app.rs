use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::orchestrator::QuestionManager;
use crate::ui::input::{parse_command, question_type_menu, Command, FormField, StdinConfirm, HELP};
use crate::ui::render::{render_dialog, render_draft, render_notification, render_page};
use crate::workflow::SubmitOutcome;

/// 终端应用
pub struct App {
    manager: QuestionManager,
}

/// 对话框结束的方式
enum DialogExit {
    Closed,
    /// 输入结束，整个程序退出
    Eof,
}

impl App {
    /// 初始化应用：构建客户端并加载一次列表
    pub async fn initialize(config: &Config) -> Result<Self> {
        let mut manager = QuestionManager::from_config(config, Box::new(StdinConfirm));
        if !manager.mount().await {
            info!("⚠️ 首次加载题目失败，可以稍后使用 refresh 重试");
        }
        Ok(Self { manager })
    }

    /// 运行命令循环，直到 quit 或输入结束
    pub async fn run(&mut self) -> Result<()> {
        println!("{}", HELP);

        loop {
            self.manager.tick(Instant::now());
            print!("\n{}", render_page(self.manager.state()));

            let Some(line) = read_line("> ")? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(message) => {
                    println!("{}\n{}", message, HELP);
                    continue;
                }
            };
            debug!("命令: {:?}", command);

            match command {
                Command::Add => {
                    self.manager.open_add();
                    if let DialogExit::Eof = self.run_dialog().await? {
                        break;
                    }
                }
                Command::Edit(row) => {
                    if !self.manager.open_edit_row(row) {
                        println!("no question at row {}", row + 1);
                        continue;
                    }
                    if let DialogExit::Eof = self.run_dialog().await? {
                        break;
                    }
                }
                Command::Delete(row) => {
                    if self.manager.delete_row(row).await.is_none() {
                        println!("no question at row {}", row + 1);
                    }
                }
                Command::Refresh => {
                    self.manager.refresh().await;
                }
                Command::CloseNotification => self.manager.close_notification(),
                Command::Help => println!("{}", HELP),
                Command::Quit => break,
            }
        }

        info!("👋 退出");
        Ok(())
    }

    /// 对话框：逐项填写 → 提交或取消；提交失败时保留草稿重新填写
    async fn run_dialog(&mut self) -> Result<DialogExit> {
        loop {
            print!("\n{}", render_dialog(self.manager.state()));
            println!("(Enter keeps the current value, '-' clears it)");

            for field in FormField::ALL {
                if !self.prompt_field(field)? {
                    self.manager.close_dialog();
                    return Ok(DialogExit::Eof);
                }
            }

            let state = self.manager.state();
            print!("\n{}", render_draft(&state.draft));
            let prompt = format!("[s] {} / [c] Cancel: ", state.submit_label());

            let Some(choice) = read_line(&prompt)? else {
                self.manager.close_dialog();
                return Ok(DialogExit::Eof);
            };

            match choice.trim().to_ascii_lowercase().as_str() {
                "s" | "submit" | "create" | "update" => match self.manager.submit().await {
                    SubmitOutcome::Saved(_) => return Ok(DialogExit::Closed),
                    SubmitOutcome::Failed => {
                        if let Some(line) = render_notification(&self.manager.state().notification) {
                            println!("{}", line);
                        }
                    }
                },
                _ => {
                    self.manager.close_dialog();
                    return Ok(DialogExit::Closed);
                }
            }
        }
    }

    /// 读取一个字段，直到输入合法。返回 false 表示输入结束
    fn prompt_field(&mut self, field: FormField) -> Result<bool> {
        if field == FormField::QuestionType {
            println!("  {}", question_type_menu());
        }

        loop {
            let current = field.current(&self.manager.state().draft);
            let Some(input) = read_line(&format!("{} [{}]: ", field.label(), current))? else {
                return Ok(false);
            };

            match field.parse(&input) {
                Ok(Some(change)) => self.manager.change_field(change),
                Ok(None) => {}
                Err(message) => {
                    println!("  {}", message);
                    continue;
                }
            }

            // 题干为必填
            if field == FormField::QuestionText && self.manager.state().draft.question_text.trim().is_empty() {
                println!("  Question Text is required");
                continue;
            }
            return Ok(true);
        }
    }
}

/// 打印提示并读取一行，EOF 返回 None
fn read_line(prompt: &str) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt).context("写入终端失败")?;
    stdout.flush().context("写入终端失败")?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("读取终端输入失败")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
