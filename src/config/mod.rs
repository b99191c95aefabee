// ==========================================
// 采购明细汇总 - 配置层
// ==========================================
// 职责: 输入/输出目录、编码、列名、排除规则、语言
// ==========================================

pub mod pipeline_config;

// 重导出核心配置
pub use pipeline_config::{default_config_path, env_keys, ConfigError, ConfigResult, PipelineConfig};
