pub mod order;
pub mod receipt;

pub use order::OrderRow;
pub use receipt::{
    is_receipt_file_name, is_safe_order_number, receipt_file_name, RECEIPT_PREFIX, RECEIPT_SUFFIX,
};
