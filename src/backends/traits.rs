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

use crate::domain::models::request::AnalyzeRequestBody;
use crate::utils::errors::AnalyzeError;
use async_trait::async_trait;
use serde_json::Value;

/// 分析后端特质
///
/// 对外部NLU服务的抽象：接受一个请求体，返回解析后的JSON响应。
/// 实现方负责序列化、认证和传输层错误的归类。
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// 提交一次分析请求
    ///
    /// # 返回值
    ///
    /// * `Ok(Value)` - 解析后的JSON响应
    /// * `Err(AnalyzeError)` - 传输失败、非成功状态或响应体非法
    async fn analyze(&self, body: &AnalyzeRequestBody) -> Result<Value, AnalyzeError>;

    /// 后端名称
    fn name(&self) -> &'static str;
}
