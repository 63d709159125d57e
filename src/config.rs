//! 配置 (~/.config/keepsake/config.toml)

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 配色主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// 切换到另一个主题
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// 标题栏上的切换图标
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub slideshow_interval_ms: u64,
    pub slideshow_start_delay_ms: u64,
    /// 为空时使用内置相册
    pub gallery_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            slideshow_interval_ms: 3_000,
            slideshow_start_delay_ms: 500,
            gallery_file: None,
        }
    }
}

impl Config {
    pub fn slideshow_interval(&self) -> Duration {
        Duration::from_millis(self.slideshow_interval_ms)
    }

    pub fn slideshow_start_delay(&self) -> Duration {
        Duration::from_millis(self.slideshow_start_delay_ms)
    }

    /// 检查取值范围，返回第一处错误
    pub fn validate(&self) -> Result<(), String> {
        if self.slideshow_interval_ms == 0 {
            return Err("slideshow_interval_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.slideshow_interval(), Duration::from_millis(3_000));
        assert_eq!(config.slideshow_start_delay(), Duration::from_millis(500));
        assert!(config.gallery_file.is_none());
    }

    #[test]
    fn test_zero_interval_is_invalid() {
        assert!(Config::default().validate().is_ok());

        let config = Config {
            slideshow_interval_ms: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        // 延迟为 0 只是立即开始播放
        let config = Config {
            slideshow_start_delay_ms: 0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
