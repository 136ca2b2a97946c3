//! 回执导出服务 - 业务能力层

use std::path::PathBuf;

use tracing::info;

use crate::error::AppResult;
use crate::infrastructure::page_session::DEFAULT_WAIT_TIMEOUT;
use crate::infrastructure::{OrderPage, WaitState};
use crate::models::receipt_file_name;
use crate::selectors;

/// 回执导出服务
///
/// 把提交后的确认页面渲染为 `receipt-<订单号>.pdf`
pub struct ReceiptExporter {
    receipts_dir: PathBuf,
}

impl ReceiptExporter {
    /// 创建导出服务，回执写入 `receipts_dir`
    pub fn new(receipts_dir: impl Into<PathBuf>) -> Self {
        Self {
            receipts_dir: receipts_dir.into(),
        }
    }

    /// 导出回执
    ///
    /// # 返回
    /// 返回写入的 PDF 路径
    pub async fn export<P: OrderPage + ?Sized>(&self, page: &P, order_number: &str) -> AppResult<PathBuf> {
        page.click(selectors::RECEIPT).await?;
        page.wait_for(selectors::RECEIPT, WaitState::Visible, DEFAULT_WAIT_TIMEOUT)
            .await?;

        let path = self.receipts_dir.join(receipt_file_name(order_number));
        page.save_pdf(&path).await?;

        info!("📄 回执已保存: {}", path.display());
        Ok(path)
    }
}
