// ============================================================================
// FlowCLI - 样式命令处理
// ============================================================================
//
// 文件: src/cli/style.rs
// 职责: 按语义角色为给定文本着色并输出
// 边界:
//   - ✅ 样式命令参数定义
//   - ✅ 缺少参数校验
//   - ❌ 不应包含颜色代码定义
//   - ❌ 不应包含错误打印逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::errors::{FlowCliError, MissingArgument};
use crate::utils::colors::{ColorScheme, Role};
use crate::utils::constants::messages;

/// 样式命令参数
#[derive(Debug, Args)]
pub struct StyleArgs {
    /// 语义角色 (project, task, command, parameter, flag, index, separator,
    /// error, success, warning, info, personality, dim)
    pub role: Option<String>,

    /// 要着色的文本
    pub text: Vec<String>,
}

/// 处理样式命令
pub fn handle_style(args: StyleArgs) -> Result<()> {
    println!("{}", render_style(&ColorScheme::current(), &args)?);
    Ok(())
}

/// 校验参数并渲染文本
pub fn render_style(scheme: &ColorScheme, args: &StyleArgs) -> Result<String, FlowCliError> {
    let role: Role = args.role.as_deref().ok_or_else(MissingArgument::new)?.parse()?;

    if args.text.is_empty() {
        return Err(MissingArgument::with_detail(messages::MISSING_STYLE_TEXT).into());
    }

    tracing::debug!("Styling {} word(s) as {}", args.text.len(), role);
    Ok(scheme.format(role, &args.text.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(role: Option<&str>, text: &[&str]) -> StyleArgs {
        StyleArgs {
            role: role.map(str::to_string),
            text: text.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn styles_joined_words() {
        let output = render_style(&ColorScheme::new(true), &args(Some("task"), &["buy", "milk"]));
        assert_eq!(output.unwrap(), "\x1b[96mbuy milk\x1b[0m");
    }

    #[test]
    fn plain_scheme_prints_text_as_is() {
        let output = render_style(&ColorScheme::plain(), &args(Some("error"), &["bad", "input"]));
        assert_eq!(output.unwrap(), "bad input");
    }

    #[test]
    fn missing_role_uses_default_message() {
        let err = render_style(&ColorScheme::plain(), &args(None, &[])).unwrap_err();
        match err {
            FlowCliError::MissingArgument(missing) => assert_eq!(missing.detail(), None),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_text_explains_what_to_pass() {
        let err = render_style(&ColorScheme::plain(), &args(Some("flag"), &[])).unwrap_err();
        match err {
            FlowCliError::MissingArgument(missing) => {
                assert_eq!(missing.detail(), Some(messages::MISSING_STYLE_TEXT))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_role_is_reported() {
        let err = render_style(&ColorScheme::plain(), &args(Some("teal"), &["x"])).unwrap_err();
        assert!(matches!(err, FlowCliError::UnknownRole(ref name) if name == "teal"));
    }
}
