//! 批量订单处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责资源管理和整条流水线的调度。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动或连接浏览器，创建 PageSession
//! 2. **准备目录**：创建输出目录，清理上次运行遗留的回执
//! 3. **下载与读取**：下载订单 CSV 并解析为 `Vec<OrderRow>`
//! 4. **逐单处理**：按文件顺序串行处理，任一订单失败即终止整批
//! 5. **归档**：把回执目录打包为 zip
//! 6. **全局统计**：输出本次运行的结果

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chromiumoxide::Browser;
use tracing::{info, warn};

use crate::browser;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::{OrderPage, PageSession};
use crate::services::{archive_receipts, read_orders, remove_stale_receipts, ArchiveReport, OrderFetcher};
use crate::workflow::{open_order_page, OrderCtx, OrderFlow};

/// 应用主结构
pub struct App {
    config: Config,
    browser: Browser,
    session: PageSession,
    /// 浏览器是否由本程序启动（连接模式下不关闭用户的浏览器）
    launched: bool,
}

/// 一次运行的结果
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// 订单总数
    pub orders: usize,
    /// 按处理顺序排列的回执路径
    pub receipts: Vec<PathBuf>,
    /// 归档结果
    pub archive: ArchiveReport,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let (browser, page, launched) = match config.browser_debug_port {
            Some(port) => {
                let (browser, page) =
                    browser::connect_to_browser_and_page(port, &config.target_url).await?;
                (browser, page, false)
            }
            None => {
                let (browser, page) =
                    browser::launch_headless_browser(config.chrome_executable.as_deref()).await?;
                (browser, page, true)
            }
        };

        let session = PageSession::new(page).with_slowmo(Duration::from_millis(config.slowmo_ms));

        Ok(Self {
            config,
            browser,
            session,
            launched,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunSummary> {
        let summary = run_workflow(&self.session, &self.config)
            .await
            .context("订单处理中止")?;
        Ok(summary)
    }

    /// 关闭由本程序启动的浏览器
    pub async fn shutdown(mut self) {
        if !self.launched {
            return;
        }
        if let Err(e) = self.browser.close().await {
            warn!("⚠️ 关闭浏览器失败: {}", e);
            return;
        }
        if let Err(e) = self.browser.wait().await {
            warn!("⚠️ 等待浏览器退出失败: {}", e);
        }
    }
}

/// 执行完整流水线：下载 → 读取 → 打开页面 → 逐单处理 → 归档
///
/// 页面以引用方式传入，便于在没有浏览器的情况下测试。
pub async fn run_workflow<P: OrderPage + ?Sized>(page: &P, config: &Config) -> AppResult<RunSummary> {
    let started = chrono::Local::now();

    prepare_output_dirs(config)?;

    let orders_path = config.orders_path();
    OrderFetcher::new()
        .fetch(&config.orders_url, &orders_path)
        .await?;
    let orders = read_orders(&orders_path)?;

    if orders.is_empty() {
        warn!("⚠️ 订单文件中没有订单");
    }
    log_orders_loaded(orders.len());

    open_order_page(page, &config.target_url).await?;

    let flow = OrderFlow::new(config.receipts_dir());
    let total = orders.len();
    let mut receipts = Vec::with_capacity(total);

    for (index, order) in orders.iter().enumerate() {
        let ctx = OrderCtx::new(order.order_number.as_str(), index + 1, total);
        log_order_start(&ctx);

        // 没有逐单隔离：任何错误都终止剩余订单
        let receipt = flow.run(page, order, &ctx).await?;
        receipts.push(receipt);
    }

    let archive = archive_receipts(&config.receipts_dir(), &config.archive_path())?;

    let summary = RunSummary {
        orders: total,
        receipts,
        archive,
    };
    print_final_stats(&summary, started);

    Ok(summary)
}

/// 创建输出目录，删除上次运行遗留的回执和归档
///
/// 中途失败的运行不应留下归档。
fn prepare_output_dirs(config: &Config) -> AppResult<()> {
    let receipts_dir = config.receipts_dir();
    std::fs::create_dir_all(&receipts_dir).map_err(|e| AppError::io(&receipts_dir, e))?;

    let removed = remove_stale_receipts(&receipts_dir)?;
    if removed > 0 {
        info!("🗑️ 已清理 {} 个遗留回执", removed);
    }

    let archive_path = config.archive_path();
    match std::fs::remove_file(&archive_path) {
        Ok(()) => info!("🗑️ 已删除上次的归档: {}", archive_path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(AppError::io(&archive_path, e)),
    }
    Ok(())
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 机器人订单自动提交");
    info!("📥 订单来源: {}", config.orders_url);
    info!("🌐 下单页面: {}", config.target_url);
    info!("📁 输出目录: {}", config.output_dir.display());
    info!("{}", "=".repeat(60));
}

fn log_orders_loaded(total: usize) {
    info!("✓ 找到 {} 个待处理的订单", total);
    info!("📋 将按文件顺序逐个处理\n");
}

fn log_order_start(ctx: &OrderCtx) {
    info!("\n{}", "─".repeat(60));
    info!("{} 开始处理", ctx);
}

fn print_final_stats(summary: &RunSummary, started: chrono::DateTime<chrono::Local>) {
    let finished = chrono::Local::now();
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!("完成时间: {}", finished.format("%Y-%m-%d %H:%M:%S"));
    info!("耗时: {} 秒", (finished - started).num_seconds());
    info!("{}", "=".repeat(60));
    info!("✅ 订单: {}", summary.orders);
    info!("📄 回执: {}", summary.receipts.len());
    info!(
        "🗜️ 归档: {} ({} 个文件)",
        summary.archive.path.display(),
        summary.archive.entries.len()
    );
    info!("{}", "=".repeat(60));
}
