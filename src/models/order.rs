use serde::Deserialize;

/// 一行订单数据
///
/// 数字列（腿部编号、订单号）也按文本读取，表单只需要文本。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderRow {
    #[serde(rename = "Order number")]
    pub order_number: String,
    #[serde(rename = "Head")]
    pub head: String,
    #[serde(rename = "Body")]
    pub body: String,
    #[serde(rename = "Legs")]
    pub legs: String,
    #[serde(rename = "Address")]
    pub address: String,
}
