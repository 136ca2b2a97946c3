use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "robot_order.toml";

/// 订单文件保存名
pub const ORDERS_FILE_NAME: &str = "orders.csv";
/// 回执 PDF 所在子目录
pub const RECEIPTS_DIR_NAME: &str = "receipts";
/// 归档文件名
pub const ARCHIVE_FILE_NAME: &str = "receipts.zip";

/// 程序配置
///
/// 重试次数、超时和页面选择器是固定常量，不在此处配置。
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 订单 CSV 下载地址
    pub orders_url: String,
    /// 下单页面地址
    pub target_url: String,
    /// 输出目录（订单文件、回执、归档）
    pub output_dir: PathBuf,
    /// 浏览器调试端口；设置后连接已有浏览器，否则启动无头浏览器
    pub browser_debug_port: Option<u16>,
    /// Chromium 可执行文件路径（仅启动模式）
    pub chrome_executable: Option<PathBuf>,
    /// 每次页面操作后的放慢时间（毫秒），0 表示不放慢
    pub slowmo_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orders_url: "https://robotsparebinindustries.com/orders.csv".to_string(),
            target_url: "https://robotsparebinindustries.com/#/robot-order".to_string(),
            output_dir: PathBuf::from("output"),
            browser_debug_port: None,
            chrome_executable: None,
            slowmo_ms: 500,
        }
    }
}

impl Config {
    /// 加载配置：先读 TOML 文件（若存在），再用环境变量覆盖
    pub fn load() -> AppResult<Self> {
        let path = std::env::var("ROBOT_ORDER_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let base = if path.exists() {
            info!("📄 读取配置文件: {}", path.display());
            Self::from_toml_file(&path)?
        } else {
            debug!("未找到配置文件 {}，使用默认配置", path.display());
            Self::default()
        };

        Ok(base.with_env_overrides())
    }

    /// 只使用默认值和环境变量
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件解析配置，缺省字段取默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        Self::from_toml_str(&content).map_err(|message| AppError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    fn with_env_overrides(self) -> Self {
        Self {
            orders_url: std::env::var("ORDERS_URL").unwrap_or(self.orders_url),
            target_url: std::env::var("TARGET_URL").unwrap_or(self.target_url),
            output_dir: std::env::var("OUTPUT_DIR").map(PathBuf::from).unwrap_or(self.output_dir),
            browser_debug_port: std::env::var("BROWSER_DEBUG_PORT").ok().and_then(|v| v.parse().ok()).or(self.browser_debug_port),
            chrome_executable: std::env::var("CHROME_EXECUTABLE").ok().map(PathBuf::from).or(self.chrome_executable),
            slowmo_ms: std::env::var("SLOWMO_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.slowmo_ms),
        }
    }

    /// 本地订单文件路径
    pub fn orders_path(&self) -> PathBuf {
        self.output_dir.join(ORDERS_FILE_NAME)
    }

    /// 回执目录
    pub fn receipts_dir(&self) -> PathBuf {
        self.output_dir.join(RECEIPTS_DIR_NAME)
    }

    /// 归档文件路径（位于回执目录之外）
    pub fn archive_path(&self) -> PathBuf {
        self.output_dir.join(ARCHIVE_FILE_NAME)
    }
}
