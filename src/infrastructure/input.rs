// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::input::AnalysisInput;
use crate::utils::errors::AnalyzeError;
use std::path::Path;

/// 从文本文件读取分析输入
///
/// 每行一条输入，去除首尾空白，跳过空行。
pub fn read_inputs(path: &Path) -> Result<Vec<AnalysisInput>, AnalyzeError> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(AnalysisInput::new)
        .collect())
}
