// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 显示键截断阈值：不超过该长度的文本原样展示
const DISPLAY_KEY_MAX: usize = 30;
/// 截断后保留的前缀长度
const DISPLAY_KEY_PREFIX: usize = 27;

/// 分析输入
///
/// 用户提供的一条待分析内容。以字面前缀"http"开头的输入
/// 被视为URL（区分大小写，不做进一步的scheme校验），
/// 其余一律视为原始文本。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisInput {
    raw: String,
}

impl AnalysisInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// 判断输入是否为URL
    ///
    /// 仅检查前四个字符是否恰好为"http"
    pub fn is_url(&self) -> bool {
        self.raw.starts_with("http")
    }

    /// 输入的显示键，用作结果行的行标签
    ///
    /// URL和短文本原样返回；长文本截断为前27个字符加"..."
    pub fn display_key(&self) -> String {
        if self.is_url() || self.raw.chars().count() <= DISPLAY_KEY_MAX {
            return self.raw.clone();
        }
        let prefix: String = self.raw.chars().take(DISPLAY_KEY_PREFIX).collect();
        format!("{}...", prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_prefix_is_url() {
        assert!(AnalysisInput::new("http://example.com").is_url());
        assert!(AnalysisInput::new("https://example.com").is_url());
        // The check is a literal prefix match, so this counts as a URL too
        assert!(AnalysisInput::new("httpx is not a scheme").is_url());
    }

    #[test]
    fn test_other_inputs_are_text() {
        assert!(!AnalysisInput::new("HTTP://EXAMPLE.COM").is_url());
        assert!(!AnalysisInput::new("ftp://example.com").is_url());
        assert!(!AnalysisInput::new("some plain text").is_url());
    }

    #[test]
    fn test_display_key_keeps_urls_whole() {
        let long_url = format!("http://example.com/{}", "a".repeat(100));
        let input = AnalysisInput::new(long_url.clone());
        assert_eq!(input.display_key(), long_url);
    }

    #[test]
    fn test_display_key_keeps_short_text_whole() {
        let input = AnalysisInput::new("short text");
        assert_eq!(input.display_key(), "short text");
    }

    #[test]
    fn test_display_key_truncates_long_text() {
        let input = AnalysisInput::new("a very long piece of text that keeps going");
        let key = input.display_key();
        assert_eq!(key, "a very long piece of text t...");
        assert_eq!(key.chars().count(), 30);
    }

    #[test]
    fn test_display_key_truncates_on_char_boundary() {
        let input = AnalysisInput::new("字".repeat(40));
        let key = input.display_key();
        assert_eq!(key.chars().count(), 30);
        assert!(key.ends_with("..."));
    }
}
