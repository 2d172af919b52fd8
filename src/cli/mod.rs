// ============================================================================
// FlowCLI - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含颜色映射定义
//
// ============================================================================

pub mod init;
pub mod palette;
pub mod style;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::config::{Config, RuntimeArgs};
use crate::utils::constants::CONFIG_FILE;
use crate::utils::logger::{init_tracing, set_tracing_verbose};
use init::{handle_init, InitArgs};
use palette::{handle_palette, PaletteArgs};
use style::{handle_style, StyleArgs};

/// FlowCLI - Command-line task and project tracker
#[derive(Debug, Parser)]
#[command(name = "flowcli")]
#[command(about = "Command-line task and project tracker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show every semantic role in its color
    Palette(PaletteArgs),
    /// Print text styled with a semantic role
    Style(StyleArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // 先处理 --no-color，保证配置加载失败时的输出也不带颜色
    if cli.no_color {
        crate::utils::colors::set_colors_enabled(false);
    }
    init_tracing(cli.verbose);

    // init 不读取现有配置，--force 才能覆盖损坏的文件
    if !matches!(cli.command, Commands::Init(_)) {
        Config::initialize(&cli.config)?;
        Config::merge_runtime_args(build_runtime_args(&cli))?;
        Config::apply();
        set_tracing_verbose(Config::get_verbose());
    }

    tracing::debug!("Dispatching {:?}", cli.command);

    match cli.command {
        Commands::Palette(args) => handle_palette(args),
        Commands::Style(args) => handle_style(args),
        Commands::Init(args) => handle_init(args, &cli.config),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        colored: if cli.no_color { Some(false) } else { None },
        verbose: if cli.verbose { Some(true) } else { None },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_flag_overrides_colored() {
        let cli = Cli::parse_from(["flowcli", "--no-color", "palette"]);
        let args = build_runtime_args(&cli);
        assert_eq!(args.colored, Some(false));
        assert_eq!(args.verbose, None);
    }

    #[test]
    fn absent_flags_leave_config_untouched() {
        let cli = Cli::parse_from(["flowcli", "style", "command", "add"]);
        let args = build_runtime_args(&cli);
        assert_eq!(args.colored, None);
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
    }

    #[test]
    fn global_flags_are_accepted_after_subcommand() {
        let cli = Cli::parse_from(["flowcli", "palette", "-v", "--no-color"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
    }
}
