//! 订单填写流程 - 流程层
//!
//! 核心职责：定义"一个订单"的完整处理流程
//!
//! 流程顺序：
//! 1. 等待表单 → 选择头部 → 点击身体 → 填写腿部和地址
//! 2. 预览 → 提交（带重试）
//! 3. 导出回执 PDF
//! 4. 点击"再下一单"并确认弹窗，回到空白表单

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::AppResult;
use crate::infrastructure::page_session::DEFAULT_WAIT_TIMEOUT;
use crate::infrastructure::{OrderPage, WaitState};
use crate::models::OrderRow;
use crate::selectors;
use crate::services::{ReceiptExporter, SubmissionRetrier};
use crate::utils::logging::truncate_text;
use crate::workflow::order_ctx::OrderCtx;

/// 点击"再下一单"后等待页面刷新的时间
pub const RESET_PAUSE: Duration = Duration::from_millis(100);

/// 订单填写流程
///
/// - 编排单个订单的表单操作
/// - 不持有页面，页面由调用方传入
/// - 任何一步出错都直接返回，由上层终止整批处理
pub struct OrderFlow {
    retrier: SubmissionRetrier,
    exporter: ReceiptExporter,
}

impl OrderFlow {
    /// 创建新的订单流程，回执写入 `receipts_dir`
    pub fn new(receipts_dir: impl Into<PathBuf>) -> Self {
        Self {
            retrier: SubmissionRetrier::new(),
            exporter: ReceiptExporter::new(receipts_dir),
        }
    }

    /// 处理一个订单
    ///
    /// # 返回
    /// 返回回执 PDF 路径
    pub async fn run<P: OrderPage + ?Sized>(
        &self,
        page: &P,
        order: &OrderRow,
        ctx: &OrderCtx,
    ) -> AppResult<PathBuf> {
        info!("{} 📝 开始填写表单", ctx);
        debug!(
            "{} 头部 {} | 身体 {} | 腿部 {} | 地址 {}",
            ctx,
            order.head,
            order.body,
            order.legs,
            truncate_text(&order.address, 40)
        );
        self.fill_form(page, order).await?;

        page.click(selectors::PREVIEW_BUTTON).await?;
        page.wait_for(selectors::PREVIEW_IMAGE, WaitState::Visible, DEFAULT_WAIT_TIMEOUT)
            .await?;
        debug!("{} 预览图已生成", ctx);

        info!("{} 📤 正在提交订单...", ctx);
        let attempts = self.retrier.submit(page).await?;
        if attempts > 1 {
            info!("{} 经过 {} 次尝试后提交成功", ctx, attempts);
        }

        let receipt = self.exporter.export(page, &order.order_number).await?;

        reset_form(page).await?;
        info!("{} ✅ 订单处理完成", ctx);

        Ok(receipt)
    }

    async fn fill_form<P: OrderPage + ?Sized>(&self, page: &P, order: &OrderRow) -> AppResult<()> {
        page.wait_for(selectors::HEAD_SELECT, WaitState::Attached, DEFAULT_WAIT_TIMEOUT)
            .await?;
        page.select_option(selectors::HEAD_SELECT, &order.head).await?;
        page.click(&selectors::body_radio(&order.body)).await?;
        page.fill(selectors::LEGS_INPUT, &order.legs).await?;
        page.fill(selectors::ADDRESS_INPUT, &order.address).await?;
        Ok(())
    }
}

/// 打开下单页面并关闭首次进入时的提示弹窗
pub async fn open_order_page<P: OrderPage + ?Sized>(page: &P, url: &str) -> AppResult<()> {
    info!("🌐 打开下单页面: {}", url);
    page.goto(url).await?;
    page.click_button_with_text(selectors::CONFIRM_BUTTON_TEXT)
        .await?;
    Ok(())
}

/// 点击"再下一单"并确认弹窗，让页面回到可填写状态
pub async fn reset_form<P: OrderPage + ?Sized>(page: &P) -> AppResult<()> {
    page.click(selectors::ORDER_ANOTHER_BUTTON).await?;
    page.pause(RESET_PAUSE).await;
    page.click_button_with_text(selectors::CONFIRM_BUTTON_TEXT)
        .await?;
    Ok(())
}
