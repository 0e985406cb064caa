//! # 统一错误处理模块
//!
//! 定义 edstool 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// edstool 统一错误类型
#[derive(Error, Debug)]
pub enum EdsError {
    // ─────────────────────────────────────────────────────────────
    // 形状与索引错误
    // ─────────────────────────────────────────────────────────────
    #[error("Shape error: {0}")]
    ShapeError(String),

    #[error("Index {index} out of range for axis {axis} (size {size})")]
    IndexOutOfRange {
        axis: usize,
        index: usize,
        size: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // 标定错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid calibration: {0}")]
    CalibrationError(String),

    // ─────────────────────────────────────────────────────────────
    // 数据库查询错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown element: {0}")]
    UnknownElement(String),

    #[error("Unknown X-ray line: {0}")]
    UnknownLine(String),

    #[error("Invalid X-ray line '{0}' (expected '<Element>_<Line>', e.g. 'Fe_Ka')")]
    InvalidLineFormat(String),

    // ─────────────────────────────────────────────────────────────
    // 信号类型错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unsupported signal type: {0} (supported: EDS_SEM, EDS_TEM)")]
    UnsupportedSignalType(String),

    // ─────────────────────────────────────────────────────────────
    // 强度积分错误
    // ─────────────────────────────────────────────────────────────
    #[error("Line {line} at {energy:.4} keV is outside the energy axis [{low:.4}, {high:.4}] keV")]
    LineOutOfRange {
        line: String,
        energy: f64,
        low: f64,
        high: f64,
    },

    #[error("No X-ray lines to process: set elements or lines first")]
    NoLines,

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, EdsError>;
