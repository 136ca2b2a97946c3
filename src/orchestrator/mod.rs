//! 编排层（Orchestration Layer）
//!
//! ```text
//! batch_processor (下载、读取、逐单处理、归档)
//!     ↓
//! workflow::OrderFlow (处理单个订单)
//!     ↓
//! services (能力层：fetch / read / submit / export / archive)
//!     ↓
//! infrastructure (基础设施：OrderPage / PageSession)
//! ```

pub mod batch_processor;

pub use batch_processor::{run_workflow, App, RunSummary};
