// ============================================================================
// FlowCLI - 调色板命令处理
// ============================================================================
//
// 文件: src/cli/palette.rs
// 职责: 展示所有语义角色及其颜色
// 边界:
//   - ✅ 调色板命令参数定义
//   - ✅ 调色板文本渲染
//   - ❌ 不应包含颜色代码定义
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::utils::colors::{ColorScheme, Role};
use crate::utils::constants::icons;

/// 调色板命令参数
#[derive(Debug, Args)]
pub struct PaletteArgs {
    /// 示例文本（默认使用角色名）
    #[arg(short, long)]
    pub sample: Option<String>,
}

/// 处理调色板命令
pub fn handle_palette(args: PaletteArgs) -> Result<()> {
    print!("{}", render_palette(&ColorScheme::current(), args.sample.as_deref()));
    Ok(())
}

/// 渲染调色板，每个角色一行
pub fn render_palette(scheme: &ColorScheme, sample: Option<&str>) -> String {
    let width = Role::ALL.iter().map(|role| role.as_str().len()).max().unwrap_or(0);

    Role::ALL
        .iter()
        .enumerate()
        .map(|(i, role)| {
            let name = format!("{:<width$}", role.as_str(), width = width);
            format!(
                "{} {} {} {}\n",
                scheme.index(&format!("{:>2}.", i + 1)),
                scheme.parameter(&name),
                icons::ARROW,
                scheme.format(*role, sample.unwrap_or(role.as_str())),
            )
        })
        .collect()
}
