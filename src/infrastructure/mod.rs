// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 提供外部集成：
/// - 输入（input）：从文本文件读取待分析的URL或文本
/// - 输出槽（sink）：把结果网格写成CSV文件
pub mod input;
pub mod sink;
