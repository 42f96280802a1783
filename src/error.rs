//! # 统一错误处理模块
//!
//! 定义 nanocarbon 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 配置错误：结构参数非法（nx/ny/a/键长非正、容差为负、路径点不足等），
//!   在任何计算开始之前返回
//! - 定义域错误：物理量在数学上无定义（n = m = 0 的直径/带隙）
//! - 输出错误：CSV/图表写入失败
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// nanocarbon 统一错误类型
#[derive(Error, Debug)]
pub enum NanoError {
    // ─────────────────────────────────────────────────────────────
    // 计算参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid configuration: {parameter} {reason}")]
    ConfigurationError { parameter: String, reason: String },

    #[error("Array length mismatch: kx has {left} samples, ky has {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Undefined physical quantity: {0}")]
    DomainError(String),

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot rendering failed: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 命令行参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl NanoError {
    /// 构造配置错误
    pub fn config(parameter: &str, reason: impl Into<String>) -> Self {
        NanoError::ConfigurationError {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }

    /// 包装 plotters 绘图错误
    pub fn plot(err: impl std::fmt::Debug) -> Self {
        NanoError::PlotError(format!("{:?}", err))
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, NanoError>;

/// 校验严格为正的有限实数
pub fn ensure_positive(parameter: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(NanoError::config(
            parameter,
            format!("must be a positive finite number (got {})", value),
        ))
    }
}

/// 校验非负的有限实数
pub fn ensure_non_negative(parameter: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(NanoError::config(
            parameter,
            format!("must be a non-negative finite number (got {})", value),
        ))
    }
}
