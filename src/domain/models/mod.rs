// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 分析输入（input）：用户提供的URL或文本
/// - 请求体（request）：发送给NLU服务的特性配置与请求载荷
/// - 网格（grid）：分析结果、扁平化记录和结果网格
pub mod grid;
pub mod input;
pub mod request;
