// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：分析输入、请求体、结果网格等数据结构
/// - 服务（services）：请求整形和制表两个纯函数服务
///
/// 领域层不做任何I/O，纯粹体现业务规则。
pub mod models;
pub mod services;
