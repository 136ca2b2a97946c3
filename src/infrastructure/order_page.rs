//! 下单页面能力接口
//!
//! 流程层和服务层只依赖这个 trait，不直接接触 chromiumoxide。
//! 同一个页面会话在整个运行期间以引用方式传给每个组件。

use std::fmt;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::AppResult;

/// 等待元素达到的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitState {
    /// 元素已挂载到 DOM
    Attached,
    /// 元素已挂载且可见
    Visible,
}

impl fmt::Display for WaitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitState::Attached => write!(f, "attached"),
            WaitState::Visible => write!(f, "visible"),
        }
    }
}

/// 页面操作能力
///
/// 每个操作在目标元素出现/可见之前阻塞，超时后返回 `AppError::Ui`。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderPage: Send + Sync {
    /// 导航到指定地址
    async fn goto(&self, url: &str) -> AppResult<()>;

    /// 等待元素达到指定状态
    async fn wait_for(&self, selector: &str, state: WaitState, timeout: Duration) -> AppResult<()>;

    /// 点击元素
    async fn click(&self, selector: &str) -> AppResult<()>;

    /// 点击文本完全匹配的按钮
    async fn click_button_with_text(&self, text: &str) -> AppResult<()>;

    /// 在下拉框中选择值（按 value 或显示文本匹配）
    async fn select_option(&self, selector: &str, value: &str) -> AppResult<()>;

    /// 清空输入框并输入文本
    async fn fill(&self, selector: &str, value: &str) -> AppResult<()>;

    /// 固定时长的暂停
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// 将当前页面渲染为 PDF 并写入文件
    async fn save_pdf(&self, path: &Path) -> AppResult<()>;
}
