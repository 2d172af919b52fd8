// ============================================================================
// FlowCLI - 颜色工具
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 语义角色到终端颜色的映射与格式化
// 边界:
//   - ✅ ANSI 颜色代码定义
//   - ✅ 语义角色调色板（固定映射）
//   - ✅ 全局颜色开关
//   - ✅ 颜色输出格式化
//   - ❌ 不应包含终端能力检测
//   - ❌ 不应包含主题配置文件
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::FlowCliError;

/// ANSI 颜色代码
pub mod ansi {
    /// 重置所有样式
    pub const RESET: &str = "\x1b[0m";

    /// 暗淡
    pub const DIM: &str = "\x1b[2m";

    /// 前景色
    pub const MAGENTA: &str = "\x1b[35m";
    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_BLUE: &str = "\x1b[94m";
    pub const BRIGHT_MAGENTA: &str = "\x1b[95m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

/// 语义角色颜色主题
///
/// 修改这里即可调整整个应用的配色。
pub mod palette {
    use super::ansi;

    pub const PROJECT: &str = ansi::BRIGHT_CYAN;
    pub const TASK: &str = ansi::BRIGHT_CYAN;
    pub const COMMAND: &str = ansi::BRIGHT_CYAN;
    pub const PARAMETER: &str = ansi::BRIGHT_YELLOW;
    pub const FLAG: &str = ansi::BRIGHT_BLUE;

    /// 预组合代码: 暗淡 + 亮青色，中间自带重置
    pub const INDEX: &str = "\x1b[2m\x1b[96m\x1b[0m";

    /// 预组合代码: 暗淡 + 品红，中间自带重置
    pub const SEPARATOR: &str = "\x1b[2m\x1b[35m\x1b[0m";

    pub const ERROR: &str = ansi::BRIGHT_RED;
    pub const SUCCESS: &str = ansi::BRIGHT_GREEN;
    pub const WARNING: &str = ansi::BRIGHT_YELLOW;
    pub const INFO: &str = ansi::BRIGHT_BLUE;
    pub const PERSONALITY: &str = ansi::BRIGHT_MAGENTA;
    pub const DIM: &str = ansi::DIM;
}

/// 进程级颜色开关，默认开启
static COLORS_ENABLED: AtomicBool = AtomicBool::new(true);

/// 全局启用或禁用颜色（测试和 `--no-color` 使用）
pub fn set_colors_enabled(enabled: bool) {
    COLORS_ENABLED.store(enabled, Ordering::SeqCst);
}

/// 当前是否启用颜色
pub fn colors_enabled() -> bool {
    COLORS_ENABLED.load(Ordering::SeqCst)
}

/// 文本的语义角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Project,
    Task,
    Command,
    Parameter,
    Flag,
    Index,
    Separator,
    Error,
    Success,
    Warning,
    Info,
    Personality,
    Dim,
}

impl Role {
    /// 全部角色，按调色板顺序
    pub const ALL: [Role; 13] = [
        Role::Project,
        Role::Task,
        Role::Command,
        Role::Parameter,
        Role::Flag,
        Role::Index,
        Role::Separator,
        Role::Error,
        Role::Success,
        Role::Warning,
        Role::Info,
        Role::Personality,
        Role::Dim,
    ];

    /// 角色名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Project => "project",
            Role::Task => "task",
            Role::Command => "command",
            Role::Parameter => "parameter",
            Role::Flag => "flag",
            Role::Index => "index",
            Role::Separator => "separator",
            Role::Error => "error",
            Role::Success => "success",
            Role::Warning => "warning",
            Role::Info => "info",
            Role::Personality => "personality",
            Role::Dim => "dim",
        }
    }

    /// 角色对应的样式代码
    pub fn code(&self) -> &'static str {
        match self {
            Role::Project => palette::PROJECT,
            Role::Task => palette::TASK,
            Role::Command => palette::COMMAND,
            Role::Parameter => palette::PARAMETER,
            Role::Flag => palette::FLAG,
            Role::Index => palette::INDEX,
            Role::Separator => palette::SEPARATOR,
            Role::Error => palette::ERROR,
            Role::Success => palette::SUCCESS,
            Role::Warning => palette::WARNING,
            Role::Info => palette::INFO,
            Role::Personality => palette::PERSONALITY,
            Role::Dim => palette::DIM,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = FlowCliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == name)
            .ok_or_else(|| FlowCliError::UnknownRole(s.to_string()))
    }
}

/// 显式的格式化上下文
///
/// 格式化结果只取决于 (上下文, 角色, 文本)，不读取全局状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// 不输出任何转义码的上下文
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// 当前全局开关的快照
    pub fn current() -> Self {
        Self::new(colors_enabled())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// 按角色为文本着色
    ///
    /// 颜色关闭或文本为空时原样返回，避免输出悬空的转义码。
    pub fn format(&self, role: Role, text: &str) -> String {
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", role.code(), text, ansi::RESET)
    }

    /// 可缺省文本的版本，缺省时仍为缺省
    pub fn format_opt(&self, role: Role, text: Option<&str>) -> Option<String> {
        text.map(|text| self.format(role, text))
    }

    pub fn project(&self, text: &str) -> String {
        self.format(Role::Project, text)
    }

    pub fn task(&self, text: &str) -> String {
        self.format(Role::Task, text)
    }

    pub fn command(&self, text: &str) -> String {
        self.format(Role::Command, text)
    }

    pub fn parameter(&self, text: &str) -> String {
        self.format(Role::Parameter, text)
    }

    pub fn flag(&self, text: &str) -> String {
        self.format(Role::Flag, text)
    }

    pub fn index(&self, text: &str) -> String {
        self.format(Role::Index, text)
    }

    pub fn separator(&self, text: &str) -> String {
        self.format(Role::Separator, text)
    }

    pub fn error(&self, text: &str) -> String {
        self.format(Role::Error, text)
    }

    pub fn success(&self, text: &str) -> String {
        self.format(Role::Success, text)
    }

    pub fn warning(&self, text: &str) -> String {
        self.format(Role::Warning, text)
    }

    pub fn info(&self, text: &str) -> String {
        self.format(Role::Info, text)
    }

    pub fn personality(&self, text: &str) -> String {
        self.format(Role::Personality, text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.format(Role::Dim, text)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::new(true)
    }
}

/// 颜色工具函数，读取全局开关
pub struct Colors;

impl Colors {
    /// 为文本添加颜色
    pub fn colorize(text: &str, role: Role) -> String {
        ColorScheme::current().format(role, text)
    }

    /// 项目名
    pub fn project(text: &str) -> String {
        Self::colorize(text, Role::Project)
    }

    /// 任务描述
    pub fn task(text: &str) -> String {
        Self::colorize(text, Role::Task)
    }

    /// 命令名
    pub fn command(text: &str) -> String {
        Self::colorize(text, Role::Command)
    }

    /// 参数（必选或可选）
    pub fn parameter(text: &str) -> String {
        Self::colorize(text, Role::Parameter)
    }

    /// 标志，如 --priority
    pub fn flag(text: &str) -> String {
        Self::colorize(text, Role::Flag)
    }

    /// 序号
    pub fn index(text: &str) -> String {
        Self::colorize(text, Role::Index)
    }

    /// 分隔线
    pub fn separator(text: &str) -> String {
        Self::colorize(text, Role::Separator)
    }

    /// 错误颜色
    pub fn error(text: &str) -> String {
        Self::colorize(text, Role::Error)
    }

    /// 成功颜色
    pub fn success(text: &str) -> String {
        Self::colorize(text, Role::Success)
    }

    /// 警告颜色
    pub fn warning(text: &str) -> String {
        Self::colorize(text, Role::Warning)
    }

    /// 信息颜色
    pub fn info(text: &str) -> String {
        Self::colorize(text, Role::Info)
    }

    /// 个性化强调
    pub fn personality(text: &str) -> String {
        Self::colorize(text, Role::Personality)
    }

    /// 弱化文本
    pub fn dim(text: &str) -> String {
        Self::colorize(text, Role::Dim)
    }
}
