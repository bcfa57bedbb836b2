// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;
use std::collections::BTreeMap;

/// 单条分析结果
///
/// 把原始输入的显示键与服务返回的原始嵌套JSON配对。
/// 每个输入产生一条，按提交顺序收集。
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// 行标签（完整URL或截断后的文本）
    pub key: String,
    /// 服务返回的原始JSON响应
    pub response: Value,
}

/// 扁平化记录：点路径 → 标量叶子值
///
/// 源JSON中每个可达的非复合叶子恰好对应一个条目，
/// 键为各段用"."连接的遍历路径。BTreeMap保证键有序。
pub type FlattenedRecord = BTreeMap<String, Value>;

/// 结果网格
///
/// 行的有序序列；第0行是表头。构造后不再修改，
/// 交给输出槽后即被丢弃。
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGrid {
    pub rows: Vec<Vec<Value>>,
}

impl ResultGrid {
    /// 网格总行数（含表头）
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// 网格列数（取表头行的长度）
    pub fn num_columns(&self) -> usize {
        self.rows.first().map(|row| row.len()).unwrap_or(0)
    }
}
