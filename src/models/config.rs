// ============================================================================
// FlowCLI - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 配置文件读写操作
//   - ✅ CLI 运行时参数合并
//   - ❌ 不应包含主题/调色板配置
//   - ❌ 不应包含 CLI 参数解析
//
// ============================================================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, OnceLock, RwLock};

use crate::utils::colors::set_colors_enabled;

/// 全局配置管理器
static GLOBAL_CONFIG: OnceLock<Arc<RwLock<Config>>> = OnceLock::new();

/// FlowCLI 配置文件结构
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
}

/// 输出配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
    /// 是否详细输出
    #[serde(default = "Config::default_verbose")]
    pub verbose: bool,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub colored: Option<bool>,
    pub verbose: Option<bool>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 获取默认是否彩色输出
    fn default_colored() -> bool {
        true
    }

    /// 获取默认是否详细输出
    fn default_verbose() -> bool {
        false
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize(config_path: &Path) -> anyhow::Result<()> {
        let config = Self::load_from_file(config_path)?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件，不存在时使用默认配置
    pub fn load_from_file(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;
        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        config.merge(args);
        Ok(())
    }

    /// 将运行时参数合并到当前配置
    pub fn merge(&mut self, args: RuntimeArgs) {
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
    }

    /// 把配置同步到进程级颜色开关
    pub fn apply() {
        set_colors_enabled(Self::get_colored());
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file {}", config_path.display()))?;
        Ok(())
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::default().save_to_file(config_path)
    }

    /// 获取是否彩色输出（带默认值）
    pub fn get_colored() -> bool {
        Self::read(|config| config.output.colored).unwrap_or_else(|_| Self::default_colored())
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        Self::read(|config| config.output.verbose).unwrap_or_else(|_| Self::default_verbose())
    }

    fn read<T>(f: impl FnOnce(&Config) -> T) -> anyhow::Result<T> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(f(&config))
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            colored: Config::default_colored(),
            verbose: Config::default_verbose(),
        }
    }
}
