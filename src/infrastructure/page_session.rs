//! 页面会话 - 基础设施层
//!
//! 持有唯一的 Page 资源，对外只暴露 `OrderPage` 能力

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::infrastructure::order_page::{OrderPage, WaitState};

/// 元素默认等待时间
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(30);

/// 轮询元素状态的间隔
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 页面会话
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 实现 OrderPage（等待、点击、填写、导出 PDF）
/// - 不认识订单和回执
pub struct PageSession {
    page: Page,
    slowmo: Duration,
}

#[derive(Debug, Deserialize)]
struct ElementState {
    attached: bool,
    visible: bool,
}

impl ElementState {
    fn satisfies(&self, state: WaitState) -> bool {
        match state {
            WaitState::Attached => self.attached,
            WaitState::Visible => self.attached && self.visible,
        }
    }
}

impl PageSession {
    /// 创建新的页面会话
    pub fn new(page: Page) -> Self {
        Self {
            page,
            slowmo: Duration::ZERO,
        }
    }

    /// 每次页面操作后额外等待一段时间
    pub fn with_slowmo(mut self, slowmo: Duration) -> Self {
        self.slowmo = slowmo;
        self
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> AppResult<T> {
        let result = self.page.evaluate(js_code.into()).await?;
        result
            .into_value()
            .map_err(|e| AppError::Browser(format!("unexpected script result: {}", e)))
    }

    async fn element_state(&self, selector: &str) -> AppResult<ElementState> {
        let js_code = format!(
            r#"
            (() => {{
                const el = document.querySelector({});
                if (!el) return {{ attached: false, visible: false }};
                const style = window.getComputedStyle(el);
                const rect = el.getBoundingClientRect();
                const visible = style.visibility !== 'hidden'
                    && style.display !== 'none'
                    && rect.width > 0
                    && rect.height > 0;
                return {{ attached: true, visible }};
            }})()
            "#,
            js_string(selector)
        );
        self.eval_as(js_code).await
    }

    async fn slow_down(&self) {
        if !self.slowmo.is_zero() {
            sleep(self.slowmo).await;
        }
    }
}

#[async_trait]
impl OrderPage for PageSession {
    async fn goto(&self, url: &str) -> AppResult<()> {
        debug!("导航到: {}", url);
        self.page
            .goto(url)
            .await
            .map_err(|e| AppError::ui("goto", url, e))?;
        self.slow_down().await;
        Ok(())
    }

    async fn wait_for(&self, selector: &str, state: WaitState, timeout: Duration) -> AppResult<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.element_state(selector).await?.satisfies(state) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(AppError::ui(
                    "wait_for",
                    selector,
                    format!("not {} within {} ms", state, timeout.as_millis()),
                ));
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn click(&self, selector: &str) -> AppResult<()> {
        self.wait_for(selector, WaitState::Visible, DEFAULT_WAIT_TIMEOUT)
            .await?;
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|e| AppError::ui("click", selector, e))?;
        element
            .click()
            .await
            .map_err(|e| AppError::ui("click", selector, e))?;
        self.slow_down().await;
        Ok(())
    }

    async fn click_button_with_text(&self, text: &str) -> AppResult<()> {
        let label = format!("button:text('{}')", text);
        let js_code = format!(
            r#"
            (() => {{
                const button = Array.from(document.querySelectorAll('button'))
                    .find(b => b.textContent.trim() === {} && b.offsetParent !== null);
                if (!button) return false;
                button.click();
                return true;
            }})()
            "#,
            js_string(text)
        );

        let deadline = Instant::now() + DEFAULT_WAIT_TIMEOUT;
        loop {
            let clicked: bool = self.eval_as(js_code.as_str()).await?;
            if clicked {
                self.slow_down().await;
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(AppError::ui(
                    "click",
                    label,
                    format!("not visible within {} ms", DEFAULT_WAIT_TIMEOUT.as_millis()),
                ));
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn select_option(&self, selector: &str, value: &str) -> AppResult<()> {
        self.wait_for(selector, WaitState::Visible, DEFAULT_WAIT_TIMEOUT)
            .await?;

        // React 受控组件需要通过原生 setter 赋值再派发 change
        let js_code = format!(
            r#"
            (() => {{
                const el = document.querySelector({selector});
                if (!el) return false;
                const wanted = {value};
                const option = Array.from(el.options)
                    .find(o => o.value === wanted || o.label.trim() === wanted);
                if (!option) return false;
                const setter = Object.getOwnPropertyDescriptor(HTMLSelectElement.prototype, 'value').set;
                setter.call(el, option.value);
                el.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return true;
            }})()
            "#,
            selector = js_string(selector),
            value = js_string(value)
        );

        let selected: bool = self.eval_as(js_code).await?;
        if !selected {
            return Err(AppError::ui(
                "select_option",
                selector,
                format!("no option matching '{}'", value),
            ));
        }
        self.slow_down().await;
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> AppResult<()> {
        self.wait_for(selector, WaitState::Visible, DEFAULT_WAIT_TIMEOUT)
            .await?;

        let clear_js = format!(
            r#"
            (() => {{
                const el = document.querySelector({});
                if (!el) return false;
                const setter = Object.getOwnPropertyDescriptor(HTMLInputElement.prototype, 'value').set;
                setter.call(el, '');
                el.dispatchEvent(new Event('input', {{ bubbles: true }}));
                return true;
            }})()
            "#,
            js_string(selector)
        );
        let cleared: bool = self.eval_as(clear_js).await?;
        if !cleared {
            return Err(AppError::ui("fill", selector, "element disappeared"));
        }

        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|e| AppError::ui("fill", selector, e))?;
        element
            .click()
            .await
            .map_err(|e| AppError::ui("fill", selector, e))?
            .type_str(value)
            .await
            .map_err(|e| AppError::ui("fill", selector, e))?;
        self.slow_down().await;
        Ok(())
    }

    async fn save_pdf(&self, path: &Path) -> AppResult<()> {
        // printToPDF 只在无头模式下可用
        let bytes = self.page.pdf(PrintToPdfParams::default()).await?;
        tokio::fs::write(path, &bytes)
            .await
            .map_err(|e| AppError::io(path, e))?;
        debug!("PDF 已写入: {} ({} 字节)", path.display(), bytes.len());
        Ok(())
    }
}

/// 将文本编码为 JS 字符串字面量
fn js_string(text: &str) -> String {
    JsonValue::String(text.to_string()).to_string()
}
