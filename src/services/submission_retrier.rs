//! 订单提交重试 - 业务能力层
//!
//! 点击提交并等待回执出现，失败时固定间隔重试，最多 3 次。
//!
//! 状态流转：
//! ```text
//! Attempting(1) --成功--> Succeeded
//!      |失败且 n < 3
//!      v
//! 暂停 100ms --> Attempting(n + 1)
//!      |失败且 n == 3
//!      v
//! ExhaustedFailure（携带最后一次错误）
//! ```

use std::time::Duration;

use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::infrastructure::{OrderPage, WaitState};
use crate::selectors;

/// 最大尝试次数
pub const MAX_SUBMIT_ATTEMPTS: u32 = 3;
/// 等待回执出现的超时时间
pub const SUBMIT_WAIT_TIMEOUT: Duration = Duration::from_millis(5000);
/// 两次尝试之间的固定间隔
pub const RETRY_DELAY: Duration = Duration::from_millis(100);

/// 单次提交尝试的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptResult {
    /// 回执已出现
    Success,
    /// 本次失败，仍可重试
    Retryable { cause: String },
    /// 本次失败且已达到上限
    Exhausted { cause: String },
}

/// 提交重试器
pub struct SubmissionRetrier {
    max_attempts: u32,
}

impl SubmissionRetrier {
    /// 创建新的重试器
    pub fn new() -> Self {
        Self {
            max_attempts: MAX_SUBMIT_ATTEMPTS,
        }
    }

    /// 提交订单，直到回执出现或次数用尽
    ///
    /// # 返回
    /// 成功时返回实际尝试次数
    pub async fn submit<P: OrderPage + ?Sized>(&self, page: &P) -> AppResult<u32> {
        let mut attempt = 1;
        loop {
            match self.attempt(page, attempt).await {
                AttemptResult::Success => {
                    info!("✓ 订单提交成功 (第 {} 次尝试)", attempt);
                    return Ok(attempt);
                }
                AttemptResult::Retryable { cause } => {
                    warn!(
                        "⚠️ 订单提交失败 (尝试 {}/{}): {}，稍后重试",
                        attempt, self.max_attempts, cause
                    );
                    page.pause(RETRY_DELAY).await;
                    attempt += 1;
                }
                AttemptResult::Exhausted { cause } => {
                    return Err(AppError::SubmissionExhausted {
                        attempts: self.max_attempts,
                        cause,
                    });
                }
            }
        }
    }

    /// 执行一次"点击提交 + 等待回执"，并把失败归类为可重试或已用尽
    pub async fn attempt<P: OrderPage + ?Sized>(&self, page: &P, attempt: u32) -> AttemptResult {
        let outcome = match page.click(selectors::ORDER_BUTTON).await {
            Ok(()) => {
                page.wait_for(selectors::RECEIPT, WaitState::Visible, SUBMIT_WAIT_TIMEOUT)
                    .await
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => AttemptResult::Success,
            Err(e) if attempt < self.max_attempts => AttemptResult::Retryable {
                cause: e.to_string(),
            },
            Err(e) => AttemptResult::Exhausted {
                cause: e.to_string(),
            },
        }
    }
}

impl Default for SubmissionRetrier {
    fn default() -> Self {
        Self::new()
    }
}
