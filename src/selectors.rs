//! 下单页面的元素选择器
//!
//! 与目标站点的页面结构一一对应，必须保持原样。

/// 头部下拉框，也作为表单根元素
pub const HEAD_SELECT: &str = "#head";
/// 腿部编号输入框
pub const LEGS_INPUT: &str = "input[placeholder='Enter the part number for the legs']";
/// 地址输入框
pub const ADDRESS_INPUT: &str = "#address";
/// 预览按钮
pub const PREVIEW_BUTTON: &str = "#preview";
/// 预览图片
pub const PREVIEW_IMAGE: &str = "#robot-preview-image";
/// 提交按钮
pub const ORDER_BUTTON: &str = "#order";
/// 回执区域
pub const RECEIPT: &str = "#receipt";
/// "再下一单"按钮
pub const ORDER_ANOTHER_BUTTON: &str = "#order-another";
/// 弹窗确认按钮的文本
pub const CONFIRM_BUTTON_TEXT: &str = "OK";

/// 身体部件单选框，如 `#id-body-3`
pub fn body_radio(body: &str) -> String {
    format!("#id-body-{}", body)
}
