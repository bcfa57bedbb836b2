// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{ApiSettings, FeatureSettings};
use crate::domain::models::input::AnalysisInput;
use crate::domain::models::request::{
    AnalyzeRequestBody, CategoriesOptions, ConceptsOptions, EntitiesOptions, FeatureConfig,
    SentimentOptions,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// 服务允许的分类结果上限
pub const CATEGORIES_MAX: u32 = 10;
/// 服务允许的概念结果上限
pub const CONCEPTS_MAX: u32 = 50;
/// 服务允许的实体结果上限
pub const ENTITIES_MAX: u32 = 250;

/// 根据特性设置构造特性配置
///
/// 只有开关打开的特性才会出现；配置的上限超出服务上限时
/// 静默截断到上限，不报错也不告警。
///
/// 注意：拆分空的sentiment_targets会得到单个空字符串目标，
/// 与上游服务的历史行为保持一致。
pub fn build_feature_config(features: &FeatureSettings) -> FeatureConfig {
    let mut config = FeatureConfig::default();

    if features.categories {
        config.categories = Some(CategoriesOptions {
            limit: features.categories_limit.min(CATEGORIES_MAX),
        });
    }
    if features.concepts {
        config.concepts = Some(ConceptsOptions {
            limit: features.concepts_limit.min(CONCEPTS_MAX),
        });
    }
    if features.sentiment {
        config.sentiment = Some(SentimentOptions {
            document: features.sentiment_document,
            targets: features
                .sentiment_targets
                .split(',')
                .map(str::to_string)
                .collect(),
        });
    }
    if features.entities {
        config.entities = Some(EntitiesOptions {
            limit: features.entities_limit.min(ENTITIES_MAX),
            sentiment: features.entities_sentiment,
        });
    }

    config
}

/// 组装单个输入的完整请求体
///
/// URL输入填充url字段，其余输入填充text字段。
/// 本地不限制文本长度，超长内容由服务端拒绝。
pub fn build_request_body(input: &AnalysisInput, features: FeatureConfig) -> AnalyzeRequestBody {
    if input.is_url() {
        AnalyzeRequestBody {
            features,
            url: Some(input.as_str().to_string()),
            text: None,
        }
    } else {
        AnalyzeRequestBody {
            features,
            url: None,
            text: Some(input.as_str().to_string()),
        }
    }
}

/// 构造Basic认证头的值
///
/// 格式为 `Basic base64("apikey:" + api_key)`。不校验密钥是否为空。
pub fn build_auth_header(api_key: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("apikey:{}", api_key)))
}

/// 构造带版本查询参数的分析端点URL
pub fn analyze_url(api: &ApiSettings) -> String {
    format!("{}/v1/analyze?version={}", api.endpoint_url, api.version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_features_off() -> FeatureSettings {
        FeatureSettings {
            categories: false,
            categories_limit: 5,
            concepts: false,
            concepts_limit: 8,
            sentiment: false,
            sentiment_document: true,
            sentiment_targets: String::new(),
            entities: false,
            entities_limit: 50,
            entities_sentiment: false,
        }
    }

    #[test]
    fn test_disabled_features_are_omitted() {
        let config = build_feature_config(&all_features_off());
        assert_eq!(config, FeatureConfig::default());

        let body = serde_json::to_value(&config).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }

    #[test]
    fn test_limits_within_caps_pass_through() {
        let mut features = all_features_off();
        features.categories = true;
        features.categories_limit = 5;
        features.concepts = true;
        features.concepts_limit = 8;
        features.entities = true;
        features.entities_limit = 50;

        let config = build_feature_config(&features);
        assert_eq!(config.categories.unwrap().limit, 5);
        assert_eq!(config.concepts.unwrap().limit, 8);
        assert_eq!(config.entities.unwrap().limit, 50);
    }

    #[test]
    fn test_oversized_limits_are_clamped_silently() {
        let mut features = all_features_off();
        features.categories = true;
        features.categories_limit = 999;
        features.concepts = true;
        features.concepts_limit = 999;
        features.entities = true;
        features.entities_limit = 999;

        let config = build_feature_config(&features);
        assert_eq!(config.categories.unwrap().limit, CATEGORIES_MAX);
        assert_eq!(config.concepts.unwrap().limit, CONCEPTS_MAX);
        assert_eq!(config.entities.unwrap().limit, ENTITIES_MAX);
    }

    #[test]
    fn test_sentiment_carries_document_flag_and_targets() {
        let mut features = all_features_off();
        features.sentiment = true;
        features.sentiment_document = false;
        features.sentiment_targets = "rust,go, zig".to_string();

        let sentiment = build_feature_config(&features).sentiment.unwrap();
        assert!(!sentiment.document);
        // Targets are split verbatim, whitespace included
        assert_eq!(sentiment.targets, vec!["rust", "go", " zig"]);
    }

    #[test]
    fn test_empty_targets_split_to_single_empty_string() {
        let mut features = all_features_off();
        features.sentiment = true;

        let sentiment = build_feature_config(&features).sentiment.unwrap();
        assert_eq!(sentiment.targets, vec![String::new()]);
    }

    #[test]
    fn test_entities_carry_sentiment_flag() {
        let mut features = all_features_off();
        features.entities = true;
        features.entities_sentiment = true;

        let entities = build_feature_config(&features).entities.unwrap();
        assert!(entities.sentiment);
    }

    #[test]
    fn test_url_input_produces_url_body() {
        let input = AnalysisInput::new("http://example.com");
        let body = build_request_body(&input, FeatureConfig::default());
        assert_eq!(body.url.as_deref(), Some("http://example.com"));
        assert!(body.text.is_none());
    }

    #[test]
    fn test_text_input_produces_text_body() {
        let input = AnalysisInput::new("just some words");
        let body = build_request_body(&input, FeatureConfig::default());
        assert_eq!(body.text.as_deref(), Some("just some words"));
        assert!(body.url.is_none());
    }

    #[test]
    fn test_unused_target_field_is_not_serialized() {
        let input = AnalysisInput::new("http://example.com");
        let body = build_request_body(&input, FeatureConfig::default());
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("text").is_none());
        assert_eq!(value["url"], "http://example.com");
    }

    #[test]
    fn test_auth_header_value() {
        assert_eq!(
            build_auth_header("abc123"),
            "Basic YXBpa2V5OmFiYzEyMw=="
        );
    }

    #[test]
    fn test_auth_header_accepts_empty_key() {
        assert_eq!(build_auth_header(""), "Basic YXBpa2V5Og==");
    }

    #[test]
    fn test_analyze_url_appends_versioned_path() {
        let api = ApiSettings {
            key: "k".to_string(),
            endpoint_url: "https://api.example.com/instances/42".to_string(),
            version: "2019-07-12".to_string(),
        };
        assert_eq!(
            analyze_url(&api),
            "https://api.example.com/instances/42/v1/analyze?version=2019-07-12"
        );
    }
}
