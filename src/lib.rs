//! # Robot Order Submit
//!
//! 一个用于自动化机器人下单的 Rust 应用程序：下载订单 CSV，
//! 逐行填写网页表单下单，把每个订单的回执保存为 PDF，最后打包为 zip。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `OrderPage` - 页面操作能力接口（等待、点击、填写、导出 PDF）
//! - `PageSession` - 唯一的 page owner，基于 chromiumoxide 实现 `OrderPage`
//!
//! ### ② 业务能力层（Services）
//! - `OrderFetcher` - 下载订单文件
//! - `read_orders` - 解析订单 CSV
//! - `SubmissionRetrier` - 提交订单（固定间隔，最多 3 次）
//! - `ReceiptExporter` - 导出回执 PDF
//! - `archive_receipts` - 归档回执
//!
//! ### ③ 流程层（Workflow）
//! - `OrderFlow` - 单个订单的完整流程（填写 → 预览 → 提交 → 导出 → 重置）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 资源管理与整条流水线

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod selectors;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{OrderPage, PageSession, WaitState};
pub use models::OrderRow;
pub use orchestrator::{run_workflow, App, RunSummary};
pub use workflow::{OrderCtx, OrderFlow};
