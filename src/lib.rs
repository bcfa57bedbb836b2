// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含批量分析的用例编排逻辑
pub mod application;

/// 后端模块
///
/// 定义分析后端特质并实现对NLU服务的HTTP调用
pub mod backends;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务模型与纯函数服务（请求整形、制表）
pub mod domain;

/// 基础设施模块
///
/// 提供外部集成，如输入文件读取和网格输出
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型和遥测等通用功能
pub mod utils;
