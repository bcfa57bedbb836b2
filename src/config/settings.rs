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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含NLU服务凭证和各分析特性的开关与上限。
/// 每次运行构造一次，此后只读。
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// API配置
    pub api: ApiSettings,
    /// 分析特性配置
    pub features: FeatureSettings,
}

/// API配置设置
///
/// 不校验key和endpoint_url是否为空：缺失的凭证只会在
/// 下游HTTP调用失败时暴露。
#[derive(Debug, Deserialize)]
pub struct ApiSettings {
    /// API密钥
    pub key: String,
    /// 服务端点URL（不含/v1/analyze路径）
    pub endpoint_url: String,
    /// API版本（查询参数version的值）
    pub version: String,
}

/// 分析特性配置设置
#[derive(Debug, Deserialize)]
pub struct FeatureSettings {
    /// 是否启用分类分析
    pub categories: bool,
    /// 分类结果数量上限
    pub categories_limit: u32,
    /// 是否启用概念分析
    pub concepts: bool,
    /// 概念结果数量上限
    pub concepts_limit: u32,
    /// 是否启用情感分析
    pub sentiment: bool,
    /// 是否分析整篇文档的情感
    pub sentiment_document: bool,
    /// 情感分析目标，逗号分隔
    pub sentiment_targets: String,
    /// 是否启用实体分析
    pub entities: bool,
    /// 实体结果数量上限
    pub entities_limit: u32,
    /// 是否对实体做情感分析
    pub entities_sentiment: bool,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("api.key", "")?
            .set_default("api.endpoint_url", "")?
            .set_default("api.version", "2019-07-12")?
            // Default feature settings: everything off, limits well below caps
            .set_default("features.categories", false)?
            .set_default("features.categories_limit", 10)?
            .set_default("features.concepts", false)?
            .set_default("features.concepts_limit", 8)?
            .set_default("features.sentiment", false)?
            .set_default("features.sentiment_document", true)?
            .set_default("features.sentiment_targets", "")?
            .set_default("features.entities", false)?
            .set_default("features.entities_limit", 50)?
            .set_default("features.entities_sentiment", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("NLUTAB").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
