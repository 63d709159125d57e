use std::fs;
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::GalleryData;

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| AppError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// 加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let config: Config = read_toml(path)?;
    config
        .validate()
        .map_err(|reason| AppError::InvalidConfig {
            path: path.to_path_buf(),
            reason,
        })?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// 从TOML文件加载相册
pub fn load_gallery(path: &Path) -> Result<GalleryData> {
    let data: GalleryData = read_toml(path)?;
    info!(
        "Loaded gallery \"{}\" with {} photos from {}",
        data.meta.title,
        data.photos.len(),
        path.display()
    );
    Ok(data)
}
