// ============================================================================
// FlowCLI - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 固定提示文本定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含颜色代码
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "FLOWCLI";

/// 默认配置文件名
pub const CONFIG_FILE: &str = "flowcli.toml";

/// 固定提示文本
pub mod messages {
    /// 缺少参数时的前缀（着色显示）
    pub const MISSING_ARGUMENT_PREFIX: &str = "Hmm, looks like you forgot something! ";

    /// 缺少参数时的通用说明
    pub const MISSING_ARGUMENT_DEFAULT: &str = "Missing argument for the command.";

    /// `style` 缺少文本时的说明
    pub const MISSING_STYLE_TEXT: &str =
        "Tell me which text to style, e.g. flowcli style command add";
}

/// 图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 箭头图标
    pub const ARROW: &str = "→";
}
