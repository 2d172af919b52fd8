// ============================================================================
// FlowCLI - 错误类型
// ============================================================================
//
// 文件: src/errors.rs
// 职责: 面向用户的错误类型定义
// 边界:
//   - ✅ 错误种类枚举
//   - ✅ 缺少参数错误及其消息渲染
//   - ❌ 不应包含错误打印逻辑
//   - ❌ 不应包含重试或恢复逻辑
//
// ============================================================================

use std::fmt;

use thiserror::Error;

use crate::utils::colors::ColorScheme;
use crate::utils::constants::messages;

/// FlowCLI 错误
#[derive(Debug, Error)]
pub enum FlowCliError {
    /// 命令缺少必需参数
    #[error(transparent)]
    MissingArgument(#[from] MissingArgument),

    /// 未知的语义角色名
    #[error("Unknown role '{0}'")]
    UnknownRole(String),
}

/// 命令缺少必需参数
///
/// 只保存结构化数据，样式在渲染时才应用。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MissingArgument {
    detail: Option<String>,
}

impl MissingArgument {
    /// 使用通用提示
    pub fn new() -> Self {
        Self { detail: None }
    }

    /// 使用调用方提供的说明
    pub fn with_detail(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
        }
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// 渲染消息：只有固定前缀着色，说明文本保持原样
    pub fn render(&self, scheme: &ColorScheme) -> String {
        let detail = self
            .detail
            .as_deref()
            .unwrap_or(messages::MISSING_ARGUMENT_DEFAULT);
        format!(
            "{}{}",
            scheme.error(messages::MISSING_ARGUMENT_PREFIX),
            detail
        )
    }

    /// 按当前全局颜色开关渲染
    pub fn message(&self) -> String {
        self.render(&ColorScheme::current())
    }
}

impl fmt::Display for MissingArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MissingArgument {}
