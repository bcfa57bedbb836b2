// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 分析流程错误类型
///
/// 所有错误立即上抛给调用方：不重试、不做部分恢复，
/// 批处理中任一输入失败都会中止剩余输入。
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// 配置错误（端点URL非法、配置加载失败等）
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 传输错误（HTTP调用失败或超时）
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 服务返回非成功状态码
    #[error("Service returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// 响应体不是合法JSON
    #[error("Response is not valid JSON: {0}")]
    ResponseParse(#[from] serde_json::Error),

    /// 结果不是复合值，无法扁平化
    #[error("Result is not a composite value: {0}")]
    RecordShape(String),

    /// 结果网格写出失败
    #[error("Failed to write result grid: {0}")]
    Sink(#[from] csv::Error),

    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
