use crate::quadtree::{QuadTree, QuadTreeError, Rectangle};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 演示程序配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// 四叉树配置
    pub tree: TreeConfig,

    /// 导出配置
    pub output: OutputConfig,

    /// 日志配置
    pub logging: LoggingConfig,
}

/// 四叉树配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// 每个节点分裂前最多持有的条目数
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// 根节点的初始区域
    #[serde(default = "default_region")]
    pub region: Rectangle,
}

/// 导出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON 文档输出路径
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志输出：stdout, file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志文件路径（当 output = file 时）
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_capacity() -> usize {
    2
}

fn default_region() -> Rectangle {
    QuadTree::<Rectangle>::DEFAULT_REGION
}

fn default_output_path() -> PathBuf {
    PathBuf::from("./quad-tree.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_output() -> String {
    "stdout".to_string()
}

// ============================================================================
// 实现
// ============================================================================

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            region: default_region(),
        }
    }
}

impl TreeConfig {
    /// 使用 `{capacity, region}` 创建根节点
    pub fn build<T>(&self) -> Result<QuadTree<T>, QuadTreeError> {
        QuadTree::root(self.region, self.capacity)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tree: TreeConfig::default(),
            output: OutputConfig {
                path: default_output_path(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                output: default_log_output(),
                log_file: None,
            },
        }
    }
}

impl DemoConfig {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（可选）
    /// 3. 环境变量（QUADTREE__ 前缀，使用双下划线分隔嵌套）
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use quadtree::config::DemoConfig;
    ///
    /// // 加载配置（如果文件不存在，使用默认配置）
    /// let config = DemoConfig::from_file("quadtree.toml").unwrap();
    /// ```
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            // 1. 加载默认配置（内嵌）
            .add_source(config::File::from_str(
                include_str!("default.toml"),
                config::FileFormat::Toml,
            ))
            // 2. 加载用户配置（可选，不存在不报错）
            .add_source(config::File::with_name(path).required(false))
            // 3. 加载环境变量（QUADTREE__ 前缀，双下划线分隔嵌套）
            .add_source(config::Environment::with_prefix("QUADTREE").separator("__"))
            .build()
            .map_err(|e| format!("Failed to load config: {}", e))?;

        Ok(settings
            .try_deserialize()
            .map_err(|e| format!("Failed to parse config: {}", e))?)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &str) -> crate::Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, toml_string)
            .map_err(|e| format!("Failed to write config file: {}", e))?;
        Ok(())
    }

    /// 验证配置
    ///
    /// 检查配置的合法性，包括：
    /// - 节点容量与初始区域
    /// - 日志级别
    /// - 日志文件
    pub fn validate(&self) -> Result<(), String> {
        // 容量和区域的校验规则与 QuadTree::new 一致
        self.tree
            .build::<Rectangle>()
            .map_err(|e| format!("Invalid tree settings: {}", e))?;

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(format!(
                    "Invalid log level: '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ))
            }
        }

        match self.logging.output.as_str() {
            "stdout" | "file" => {}
            _ => {
                return Err(format!(
                    "Invalid log output: '{}'. Must be one of: stdout, file",
                    self.logging.output
                ))
            }
        }

        if self.logging.output == "file" && self.logging.log_file.is_none() {
            return Err("Log output is 'file' but log_file path is not specified".to_string());
        }

        Ok(())
    }

    /// 打印配置摘要
    pub fn print_summary(&self) {
        println!("{}", "📋 QuadTree Demo Configuration:".bold());
        println!("   Capacity:    {}", self.tree.capacity.to_string().cyan());
        println!("   Region:      {}", self.tree.region.to_string().cyan());
        println!("   Output:      {}", self.output.path.display());
        println!();
        println!("   Log Level:   {}", self.logging.level);
        println!("   Log Output:  {}", self.logging.output);
        if let Some(ref log_file) = self.logging.log_file {
            println!("   Log File:    {}", log_file.display());
        }
        println!();
    }
}
