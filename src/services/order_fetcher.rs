//! 订单文件下载服务 - 业务能力层
//!
//! 只负责"把远程订单文件落到本地"，无重试、无校验

use std::path::Path;

use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// 订单文件下载服务
pub struct OrderFetcher {
    client: reqwest::Client,
}

impl OrderFetcher {
    /// 创建新的下载服务
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// 下载文件并覆盖写入 `dest`
    ///
    /// # 返回
    /// 返回写入的字节数
    pub async fn fetch(&self, url: &str, dest: &Path) -> AppResult<usize> {
        info!("📥 正在下载订单文件: {}", url);

        let network = |source| AppError::Network {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(network)?;
        let bytes = response.bytes().await.map_err(network)?;

        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::io(parent, e))?;
        }
        // 直接覆盖已有文件
        tokio::fs::write(dest, &bytes)
            .await
            .map_err(|e| AppError::io(dest, e))?;

        debug!("已写入 {} 字节到 {}", bytes.len(), dest.display());
        info!("✓ 订单文件已保存: {}", dest.display());
        Ok(bytes.len())
    }
}

impl Default for OrderFetcher {
    fn default() -> Self {
        Self::new()
    }
}
