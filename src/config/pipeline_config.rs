// ==========================================
// 采购明细汇总 - 配置
// ==========================================
// 职责: 配置加载、默认值、环境变量覆写、校验
// 存储: JSON 文件（缺省时全部使用默认值）
// 优先级: 环境变量 > 配置文件 > 默认值
// ==========================================

use crate::domain::types::ColumnMapping;
use crate::engine::cleaner::{ExclusionRules, DEFAULT_EXCLUDED_SUPPLIERS, DEFAULT_FREIGHT_MARKER};
use crate::i18n;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

// ==========================================
// 环境变量键
// ==========================================
pub mod env_keys {
    /// 配置文件路径
    pub const CONFIG_PATH: &str = "PROCUREMENT_SUMMARY_CONFIG";
    /// 输出目录覆写
    pub const OUTPUT_DIR: &str = "PROCUREMENT_SUMMARY_OUTPUT_DIR";
    /// 输入编码覆写
    pub const ENCODING: &str = "PROCUREMENT_SUMMARY_ENCODING";
}

/// 用户配置目录下的默认配置文件名
const CONFIG_FILE_NAME: &str = "config.json";
const APP_DIR_NAME: &str = "procurement-summary";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置格式错误 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("配置值错误 (key: {key}): {message}")]
    InvalidValue { key: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// PipelineConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// 输入 CSV 所在目录（未显式指定文件时在此定位）
    pub input_dir: PathBuf,
    /// Excel 导出目录
    pub output_dir: PathBuf,
    /// CSV 字符编码
    pub encoding: String,
    /// 源文件列名
    pub columns: ColumnMapping,
    /// 始终排除的购入先
    pub excluded_suppliers: BTreeSet<String>,
    /// 运费行标记（品目说明包含即排除）
    pub freight_marker: String,
    /// 输出语言
    pub locale: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("./data"),
            output_dir: PathBuf::from("./output"),
            encoding: "cp932".to_string(),
            columns: ColumnMapping::default(),
            excluded_suppliers: DEFAULT_EXCLUDED_SUPPLIERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            freight_marker: DEFAULT_FREIGHT_MARKER.to_string(),
            locale: i18n::DEFAULT_LOCALE.to_string(),
        }
    }
}

impl PipelineConfig {
    /// 从 JSON 文件加载
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: PipelineConfig =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        debug!(path = %path.display(), "配置文件已加载");
        Ok(config)
    }

    /// 加载配置
    ///
    /// # 参数
    /// - explicit: 显式指定的配置文件（必须存在）
    ///
    /// # 逻辑
    /// 1. explicit 或环境变量 PROCUREMENT_SUMMARY_CONFIG 指定的文件（必须存在）
    /// 2. 否则用户配置目录下的 procurement-summary/config.json（存在才读取）
    /// 3. 否则默认值
    /// 4. 应用环境变量覆写并校验
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        let env_path = std::env::var(env_keys::CONFIG_PATH)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let mut config = match explicit.map(Path::to_path_buf).or(env_path) {
            Some(path) => Self::from_file(&path)?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        info!(
            input_dir = %config.input_dir.display(),
            output_dir = %config.output_dir.display(),
            encoding = %config.encoding,
            locale = %config.locale,
            "配置加载完成"
        );
        Ok(config)
    }

    /// 应用环境变量覆写
    pub fn apply_env_overrides(&mut self) {
        if let Some(dir) = non_empty_env(env_keys::OUTPUT_DIR) {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(encoding) = non_empty_env(env_keys::ENCODING) {
            self.encoding = encoding;
        }
    }

    /// 校验配置值
    pub fn validate(&self) -> ConfigResult<()> {
        if self.encoding.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "encoding".to_string(),
                message: "不能为空".to_string(),
            });
        }

        let columns = self.columns.required();
        if columns.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                key: "columns".to_string(),
                message: "列名不能为空".to_string(),
            });
        }
        let unique: BTreeSet<&str> = columns.iter().copied().collect();
        if unique.len() != columns.len() {
            return Err(ConfigError::InvalidValue {
                key: "columns".to_string(),
                message: "列名不能重复".to_string(),
            });
        }

        if !i18n::is_supported(&self.locale) {
            return Err(ConfigError::InvalidValue {
                key: "locale".to_string(),
                message: format!("不支持的语言: {}", self.locale),
            });
        }

        Ok(())
    }

    /// 排除规则
    pub fn exclusion_rules(&self) -> ExclusionRules {
        ExclusionRules {
            excluded_suppliers: self.excluded_suppliers.clone(),
            freight_marker: self.freight_marker.clone(),
        }
    }
}

/// 用户配置目录下的默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
