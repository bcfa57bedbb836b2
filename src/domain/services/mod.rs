// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 两个纯函数服务，不做任何I/O：
/// - 请求整形（request_shaper）：把特性开关翻译成合法的请求载荷
/// - 制表（tabulator）：把嵌套JSON扁平化并组装成矩形网格
pub mod request_shaper;
pub mod tabulator;
