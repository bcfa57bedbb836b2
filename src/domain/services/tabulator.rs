// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::grid::{AnalysisResult, FlattenedRecord, ResultGrid};
use crate::utils::errors::AnalyzeError;
use serde_json::Value;

/// 表头行首的固定标签
pub const ROW_LABEL: &str = "URL or Text Input";

/// 把一个复合JSON值扁平化为点路径记录
///
/// 对象按键递归，数组按下标递归，下标补零到3位宽
/// （"000"、"001"……，因此纯字符串排序即为数值序；
/// 下标≥1000时排序不再正确，属已知限制）。只有数组下标
/// 才补零，对象里恰好形如数字的键保持原样。
///
/// 空对象和空数组不产生任何条目，会从记录和表头中消失。
/// 根值不是复合值时返回RecordShape错误，中止整批处理。
pub fn flatten(value: &Value) -> Result<FlattenedRecord, AnalyzeError> {
    match value {
        Value::Object(_) | Value::Array(_) => Ok(flatten_at(value, "")),
        other => Err(AnalyzeError::RecordShape(other.to_string())),
    }
}

/// 递归扁平化：每层返回新的记录，由调用方合并
fn flatten_at(value: &Value, path: &str) -> FlattenedRecord {
    match value {
        Value::Object(map) => map
            .iter()
            .flat_map(|(key, child)| flatten_at(child, &join_path(path, key)))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .flat_map(|(index, child)| flatten_at(child, &join_path(path, &format!("{:03}", index))))
            .collect(),
        leaf => std::iter::once((path.to_string(), leaf.clone())).collect(),
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

/// 提取所有记录键的有序并集作为表头
///
/// 按码点升序排序，与记录的输入顺序无关。
pub fn extract_header<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a FlattenedRecord>,
{
    let keys: std::collections::BTreeSet<String> = records
        .into_iter()
        .flat_map(|record| record.keys().cloned())
        .collect();
    keys.into_iter().collect()
}

/// 组装结果网格
///
/// 第0行为 `[label] + header`；每条记录一行，行首是该记录的
/// 行标签，其后按表头顺序取值，缺失的键渲染为空字符串。
/// 这使"字段缺失"与"字段为空字符串"在输出中不可区分。
pub fn build_grid(
    records: &[(String, FlattenedRecord)],
    header: &[String],
    label: &str,
) -> ResultGrid {
    let mut rows = Vec::with_capacity(records.len() + 1);

    let mut head = Vec::with_capacity(header.len() + 1);
    head.push(Value::String(label.to_string()));
    head.extend(header.iter().map(|key| Value::String(key.clone())));
    rows.push(head);

    for (key, record) in records {
        let mut row = Vec::with_capacity(header.len() + 1);
        row.push(Value::String(key.clone()));
        for column in header {
            row.push(
                record
                    .get(column)
                    .cloned()
                    .unwrap_or_else(|| Value::String(String::new())),
            );
        }
        rows.push(row);
    }

    ResultGrid { rows }
}

/// 把收集到的分析结果整批制表
///
/// 任一结果的根不是复合值时立即报错，不产出网格。
pub fn tabulate(results: &[AnalysisResult]) -> Result<ResultGrid, AnalyzeError> {
    let mut records = Vec::with_capacity(results.len());
    for result in results {
        records.push((result.key.clone(), flatten(&result.response)?));
    }
    let header = extract_header(records.iter().map(|(_, record)| record));
    Ok(build_grid(&records, &header, ROW_LABEL))
}

#[cfg(test)]
#[path = "tabulator_test.rs"]
mod tests;
