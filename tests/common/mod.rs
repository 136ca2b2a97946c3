//! 测试公共工具：记录操作的假页面、订单 CSV 构造

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use robot_order_submit::{AppError, AppResult, Config, OrderPage, WaitState};

pub const CSV_HEADER: &str = "Order number,Head,Body,Legs,Address\n";

/// 假页面：记录每个操作，导出 PDF 时写入一个小文件
#[derive(Default)]
pub struct FakeOrderPage {
    actions: Mutex<Vec<String>>,
    /// 剩余需要失败的"等待回执"次数
    receipt_failures: AtomicU32,
}

impl FakeOrderPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 前 `n` 次提交后等待回执都失败
    pub fn failing_submits(n: u32) -> Self {
        Self {
            receipt_failures: AtomicU32::new(n),
            ..Self::default()
        }
    }

    pub fn actions(&self) -> Vec<String> {
        self.actions.lock().unwrap().clone()
    }

    pub fn count(&self, action: &str) -> usize {
        self.actions().iter().filter(|a| a.as_str() == action).count()
    }

    fn record(&self, action: String) {
        self.actions.lock().unwrap().push(action);
    }
}

#[async_trait]
impl OrderPage for FakeOrderPage {
    async fn goto(&self, url: &str) -> AppResult<()> {
        self.record(format!("goto {}", url));
        Ok(())
    }

    async fn wait_for(&self, selector: &str, state: WaitState, timeout: Duration) -> AppResult<()> {
        self.record(format!("wait_for {} {}", selector, state));
        let submit_wait = selector == "#receipt" && timeout == Duration::from_millis(5000);
        if submit_wait {
            let remaining = self.receipt_failures.load(Ordering::SeqCst);
            if remaining > 0 {
                self.receipt_failures.store(remaining - 1, Ordering::SeqCst);
                return Err(AppError::ui("wait_for", selector, "not visible within 5000 ms"));
            }
        }
        Ok(())
    }

    async fn click(&self, selector: &str) -> AppResult<()> {
        self.record(format!("click {}", selector));
        Ok(())
    }

    async fn click_button_with_text(&self, text: &str) -> AppResult<()> {
        self.record(format!("click_text {}", text));
        Ok(())
    }

    async fn select_option(&self, selector: &str, value: &str) -> AppResult<()> {
        self.record(format!("select {} {}", selector, value));
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> AppResult<()> {
        self.record(format!("fill {} {}", selector, value));
        Ok(())
    }

    async fn pause(&self, duration: Duration) {
        self.record(format!("pause {}", duration.as_millis()));
    }

    async fn save_pdf(&self, path: &Path) -> AppResult<()> {
        self.record(format!("save_pdf {}", path.display()));
        std::fs::write(path, b"%PDF-1.4 fake receipt").map_err(|e| AppError::io(path, e))
    }
}

/// 构造订单 CSV 内容
pub fn orders_csv(order_numbers: &[&str]) -> String {
    let mut csv = CSV_HEADER.to_string();
    for (i, number) in order_numbers.iter().enumerate() {
        csv.push_str(&format!("{},{},{},{},Address {}\n", number, i % 6 + 1, i % 6 + 1, 3, number));
    }
    csv
}

/// 指向测试目录和假服务器的配置
pub fn test_config(output_dir: &Path, orders_url: String) -> Config {
    Config {
        orders_url,
        target_url: "https://robotsparebinindustries.com/#/robot-order".to_string(),
        output_dir: output_dir.to_path_buf(),
        browser_debug_port: None,
        chrome_executable: None,
        slowmo_ms: 0,
    }
}

/// zip 中的条目名（排序后）
pub fn zip_entries(path: &Path) -> Vec<String> {
    let file = std::fs::File::open(path).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

pub fn receipt_path(config: &Config, number: &str) -> PathBuf {
    config.receipts_dir().join(format!("receipt-{}.pdf", number))
}
