//! 回执文件命名规则
//!
//! 导出和归档共用同一套前缀/后缀，归档只收集符合规则的文件。

/// 回执文件名前缀
pub const RECEIPT_PREFIX: &str = "receipt-";
/// 回执文件名后缀
pub const RECEIPT_SUFFIX: &str = ".pdf";

/// 根据订单号生成回执文件名，如 `receipt-7.pdf`
pub fn receipt_file_name(order_number: &str) -> String {
    format!("{}{}{}", RECEIPT_PREFIX, order_number, RECEIPT_SUFFIX)
}

/// 订单号能否直接拼进回执文件名（不含路径分隔符）
pub fn is_safe_order_number(order_number: &str) -> bool {
    !order_number.contains(['/', '\\'])
}

/// 文件名是否符合回执命名规则
pub fn is_receipt_file_name(name: &str) -> bool {
    name.starts_with(RECEIPT_PREFIX) && name.ends_with(RECEIPT_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_file_name() {
        assert_eq!(receipt_file_name("1"), "receipt-1.pdf");
        assert_eq!(receipt_file_name("20"), "receipt-20.pdf");
    }

    #[test]
    fn test_is_safe_order_number() {
        assert!(is_safe_order_number("42"));
        assert!(is_safe_order_number("A-7"));
        assert!(!is_safe_order_number("a/b"));
        assert!(!is_safe_order_number("../x"));
        assert!(!is_safe_order_number("..\\x"));
    }

    #[test]
    fn test_is_receipt_file_name() {
        assert!(is_receipt_file_name("receipt-1.pdf"));
        assert!(!is_receipt_file_name("notes.txt"));
        assert!(!is_receipt_file_name("receipt-1.png"));
        assert!(!is_receipt_file_name("receipts.zip"));
    }
}
