// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::grid::ResultGrid;
use crate::utils::errors::AnalyzeError;
use chrono::Utc;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

/// 网格输出槽特质
///
/// 接受一个结果网格并一次性持久化。整批处理只写一次，
/// 失败的运行不留下任何输出。
pub trait GridSink {
    /// 写出网格
    ///
    /// # 返回值
    ///
    /// * `Ok(PathBuf)` - 实际写出的文件路径
    /// * `Err(AnalyzeError)` - 写出失败
    fn write_grid(&self, grid: &ResultGrid) -> Result<PathBuf, AnalyzeError>;
}

/// CSV输出槽
///
/// 目标是目录时生成带UTC时间戳的文件名
/// （"Results <时间戳>.csv"），否则按给定路径写出。
pub struct CsvSink {
    target: PathBuf,
}

impl CsvSink {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    fn output_path(&self) -> PathBuf {
        if self.target.is_dir() {
            let stamp = Utc::now().format("%Y-%m-%dT%H-%M-%SZ");
            self.target.join(format!("Results {}.csv", stamp))
        } else {
            self.target.clone()
        }
    }
}

impl GridSink for CsvSink {
    fn write_grid(&self, grid: &ResultGrid) -> Result<PathBuf, AnalyzeError> {
        let path = self.output_path();
        info!("Writing results to {}", path.display());

        let mut writer = csv::Writer::from_path(&path)?;
        for row in &grid.rows {
            writer.write_record(row.iter().map(cell_text))?;
        }
        writer.flush()?;

        Ok(path)
    }
}

/// 把单元格值渲染为文本
///
/// 字符串不带引号输出，null渲染为空，其余标量用JSON文本
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// 校验CSV目标路径
///
/// 目标为文件时其父目录必须已存在
pub fn validate_target(target: &Path) -> Result<(), AnalyzeError> {
    if target.is_dir() {
        return Ok(());
    }
    match target.parent() {
        Some(parent) if parent.as_os_str().is_empty() || parent.exists() => Ok(()),
        _ => Err(AnalyzeError::Configuration(format!(
            "output directory for '{}' does not exist",
            target.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_grid() -> ResultGrid {
        ResultGrid {
            rows: vec![
                vec![json!("URL or Text Input"), json!("a"), json!("b")],
                vec![json!("http://example.com"), json!(1), json!("")],
                vec![json!("short text"), json!(""), json!("x,y")],
            ],
        }
    }

    #[test]
    fn test_write_grid_to_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let sink = CsvSink::new(&path);

        let written = sink.write_grid(&sample_grid()).unwrap();
        assert_eq!(written, path);

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "URL or Text Input,a,b");
        assert_eq!(lines.next().unwrap(), "http://example.com,1,");
        // Cells containing commas get quoted by the CSV writer
        assert_eq!(lines.next().unwrap(), "short text,,\"x,y\"");
    }

    #[test]
    fn test_write_grid_to_directory_generates_timestamped_name() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path());

        let written = sink.write_grid(&sample_grid()).unwrap();
        let name = written.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("Results "));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn test_cell_text_rendering() {
        assert_eq!(cell_text(&json!("plain")), "plain");
        assert_eq!(cell_text(&json!(0.5)), "0.5");
        assert_eq!(cell_text(&json!(false)), "false");
        assert_eq!(cell_text(&Value::Null), "");
    }

    #[test]
    fn test_validate_target_rejects_missing_parent() {
        let result = validate_target(Path::new("/nonexistent/dir/out.csv"));
        assert!(matches!(result, Err(AnalyzeError::Configuration(_))));
    }

    #[test]
    fn test_validate_target_accepts_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_target(dir.path()).is_ok());
        assert!(validate_target(&dir.path().join("out.csv")).is_ok());
    }
}
