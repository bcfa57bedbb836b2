// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{
    backends::traits::AnalysisBackend,
    config::settings::Settings,
    domain::{
        models::{grid::AnalysisResult, input::AnalysisInput},
        services::{request_shaper, tabulator},
    },
    infrastructure::sink::GridSink,
    utils::errors::AnalyzeError,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// 批量分析用例
///
/// 按顺序驱动整个流程：整形请求、调用后端、收集响应、
/// 制表并一次性写出。严格串行：每条输入完全解析后才处理
/// 下一条；任一输入失败立即中止整批，之前的结果不会写出。
pub struct AnalyzeUseCase<B> {
    backend: Arc<B>,
    settings: Arc<Settings>,
}

impl<B> AnalyzeUseCase<B>
where
    B: AnalysisBackend + 'static,
{
    pub fn new(backend: Arc<B>, settings: Arc<Settings>) -> Self {
        Self { backend, settings }
    }

    /// 逐条提交输入并按顺序收集分析结果
    pub async fn collect_results(
        &self,
        inputs: &[AnalysisInput],
    ) -> Result<Vec<AnalysisResult>, AnalyzeError> {
        info!("Found {} inputs to analyze...", inputs.len());

        let features = request_shaper::build_feature_config(&self.settings.features);

        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let key = input.display_key();
            info!("Sending '{}' to {} for analysis...", key, self.backend.name());

            let body = request_shaper::build_request_body(input, features.clone());
            let response = self.backend.analyze(&body).await?;
            results.push(AnalysisResult { key, response });
        }

        Ok(results)
    }

    /// 运行整批分析并把结果网格写入输出槽
    ///
    /// # 返回值
    ///
    /// * `Ok(PathBuf)` - 写出的文件路径
    /// * `Err(AnalyzeError)` - 流程中任何一步的错误
    pub async fn run(
        &self,
        inputs: &[AnalysisInput],
        sink: &dyn GridSink,
    ) -> Result<PathBuf, AnalyzeError> {
        let results = self.collect_results(inputs).await?;
        let grid = tabulator::tabulate(&results)?;

        info!(
            "Writing {} rows / {} columns to output (including header)",
            grid.num_rows(),
            grid.num_columns()
        );
        sink.write_grid(&grid)
    }
}
