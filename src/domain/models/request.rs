// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 特性配置
///
/// 发送给NLU服务的features载荷。只有被启用的特性才会出现，
/// 未启用的特性在序列化时被整体省略。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// 分类分析选项
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoriesOptions>,
    /// 概念分析选项
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concepts: Option<ConceptsOptions>,
    /// 情感分析选项
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentOptions>,
    /// 实体分析选项
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<EntitiesOptions>,
}

/// 分类分析选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriesOptions {
    /// 返回分类数量上限
    pub limit: u32,
}

/// 概念分析选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptsOptions {
    /// 返回概念数量上限
    pub limit: u32,
}

/// 情感分析选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentOptions {
    /// 是否返回整篇文档的情感
    pub document: bool,
    /// 情感分析目标列表
    pub targets: Vec<String>,
}

/// 实体分析选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitiesOptions {
    /// 返回实体数量上限
    pub limit: u32,
    /// 是否对每个实体做情感分析
    pub sentiment: bool,
}

/// 分析请求体
///
/// url与text互斥：输入按字面前缀"http"分类后，
/// 只有对应的一个字段被填充并序列化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequestBody {
    /// 请求的特性配置
    pub features: FeatureConfig,
    /// 待分析URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// 待分析文本
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
