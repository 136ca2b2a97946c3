//! 订单处理上下文
//!
//! 封装"我正在处理第几个订单"这一信息，只用于日志

use std::fmt::Display;

/// 订单处理上下文
#[derive(Debug, Clone)]
pub struct OrderCtx {
    /// 订单号
    pub order_number: String,

    /// 在本次批量中的序号（从1开始）
    pub index: usize,

    /// 本次批量的订单总数
    pub total: usize,
}

impl OrderCtx {
    /// 创建新的订单上下文
    pub fn new(order_number: impl Into<String>, index: usize, total: usize) -> Self {
        Self {
            order_number: order_number.into(),
            index,
            total,
        }
    }
}

impl Display for OrderCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[订单 {}/{} 订单号#{}]",
            self.index, self.total, self.order_number
        )
    }
}
