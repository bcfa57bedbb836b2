// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::backends::traits::AnalysisBackend;
use crate::config::settings::ApiSettings;
use crate::domain::models::request::AnalyzeRequestBody;
use crate::domain::services::request_shaper;
use crate::utils::errors::AnalyzeError;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Watson NLU客户端
///
/// 基于reqwest实现的分析后端。每次运行构造一次，
/// 端点URL和认证头在构造时确定。不暴露超时配置，
/// 使用HTTP客户端的默认超时。
pub struct WatsonNluClient {
    client: reqwest::Client,
    endpoint: String,
    auth_header: String,
}

impl WatsonNluClient {
    /// 创建新的客户端
    ///
    /// # 返回值
    ///
    /// * `Ok(WatsonNluClient)` - 可用的客户端
    /// * `Err(AnalyzeError)` - 端点URL非法或HTTP客户端构建失败
    pub fn new(api: &ApiSettings) -> Result<Self, AnalyzeError> {
        let endpoint = request_shaper::analyze_url(api);
        Url::parse(&endpoint).map_err(|e| {
            AnalyzeError::Configuration(format!("invalid endpoint URL '{}': {}", endpoint, e))
        })?;

        let client = reqwest::Client::builder()
            .user_agent("nlutab/0.1 (+https://github.com/Kirky-X)")
            .build()?;

        Ok(Self {
            client,
            endpoint,
            auth_header: request_shaper::build_auth_header(&api.key),
        })
    }
}

#[async_trait]
impl AnalysisBackend for WatsonNluClient {
    /// 提交分析请求
    ///
    /// POST JSON请求体到分析端点，携带Basic认证头。
    /// 非2xx状态码携带响应体文本报错，响应体解析失败归为解析错误。
    async fn analyze(&self, body: &AnalyzeRequestBody) -> Result<Value, AnalyzeError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, &self.auth_header)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(AnalyzeError::UnexpectedStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let value: Value = serde_json::from_str(&text)?;
        Ok(value)
    }

    /// 获取后端名称
    fn name(&self) -> &'static str {
        "watson-nlu"
    }
}

#[cfg(test)]
#[path = "watson_test.rs"]
mod tests;
