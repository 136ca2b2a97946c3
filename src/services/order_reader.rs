//! 订单表格读取服务 - 业务能力层

use std::path::Path;

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{is_safe_order_number, OrderRow};

/// 读取带表头的订单 CSV，保持文件中的行顺序
///
/// 按表头名匹配列，多余的列会被忽略；缺少必需列或行格式错误时返回 `AppError::Parse`。
pub fn read_orders(path: &Path) -> AppResult<Vec<OrderRow>> {
    let parse = |source| AppError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(parse)?;

    let orders = reader
        .deserialize::<OrderRow>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(parse)?;

    // 订单号会拼进回执文件名
    if let Some(order) = orders.iter().find(|o| !is_safe_order_number(&o.order_number)) {
        return Err(AppError::InvalidOrderNumber {
            path: path.to_path_buf(),
            order_number: order.order_number.clone(),
        });
    }

    info!("✓ 读取到 {} 个订单", orders.len());
    Ok(orders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("orders.csv");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_orders_preserves_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "Order number,Head,Body,Legs,Address\n\
             3,1,2,3,Address 123\n\
             1,2,6,1,\"Street 5, Apt 2\"\n\
             2,4,1,6,Road 9\n",
        );

        let orders = read_orders(&path).unwrap();
        let numbers: Vec<&str> = orders.iter().map(|o| o.order_number.as_str()).collect();
        assert_eq!(numbers, vec!["3", "1", "2"]);
        assert_eq!(
            orders[1],
            OrderRow {
                order_number: "1".to_string(),
                head: "2".to_string(),
                body: "6".to_string(),
                legs: "1".to_string(),
                address: "Street 5, Apt 2".to_string(),
            }
        );
    }

    #[test]
    fn test_read_orders_ignores_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "Order number,Head,Body,Legs,Address,Note\n7, 1 ,2,3,Somewhere,rush\n",
        );

        let orders = read_orders(&path).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].head, "1");
    }

    #[test]
    fn test_read_orders_header_only_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "Order number,Head,Body,Legs,Address\n");

        assert!(read_orders(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_orders_missing_column_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "Order number,Head,Body,Legs\n1,1,2,3\n");

        let err = read_orders(&path).unwrap_err();
        assert!(matches!(err, AppError::Parse { .. }));
    }

    #[test]
    fn test_read_orders_rejects_order_number_with_path_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "Order number,Head,Body,Legs,Address\n1,1,2,3,A\n../x,1,2,3,B\n",
        );

        let err = read_orders(&path).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidOrderNumber { ref order_number, .. } if order_number == "../x"
        ));
    }

    #[test]
    fn test_read_orders_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_orders(&dir.path().join("absent.csv")).is_err());
    }
}
