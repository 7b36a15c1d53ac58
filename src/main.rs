use std::path::PathBuf;

use anyhow::{Context, Result};
use question_manager::ui::App;
use question_manager::utils::logging;
use question_manager::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置：QUESTION_CONFIG 指定的文件（必须存在），否则当前目录的 question_manager.toml
    let explicit = std::env::var_os("QUESTION_CONFIG").map(PathBuf::from);
    let config = Config::resolve(explicit).context("加载配置失败")?;

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup(&config);

    // 初始化并运行应用
    App::initialize(&config).await?.run().await?;

    Ok(())
}
