// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 后端模块
///
/// 定义分析后端特质（traits）并提供Watson NLU的HTTP实现（watson）
pub mod traits;
pub mod watson;
