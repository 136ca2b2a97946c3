//! 错误类型
//!
//! 按失败来源划分：网络、文件、解析、页面交互、提交重试、归档、配置、浏览器。
//! 只有提交失败会在本地重试，其余错误一律向上传播并终止本次运行。

use std::path::PathBuf;

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 下载订单文件失败（连接失败或非 2xx 状态码）
    #[error("failed to download {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// 文件读写失败
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 订单表格解析失败
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// 订单号不能安全地用作文件名
    #[error("invalid order number {order_number:?} in {}: must not contain a path separator", .path.display())]
    InvalidOrderNumber { path: PathBuf, order_number: String },

    /// 页面元素未出现或页面操作失败
    #[error("ui action `{action}` on `{selector}` failed: {message}")]
    Ui {
        action: &'static str,
        selector: String,
        message: String,
    },

    /// 提交订单在用尽全部重试次数后仍然失败
    #[error("failed to submit order after {attempts} attempts: {cause}")]
    SubmissionExhausted { attempts: u32, cause: String },

    /// 写入 zip 归档失败
    #[error("failed to write archive {}: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// 配置文件无法解析
    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// 浏览器启动或连接失败
    #[error("browser error: {0}")]
    Browser(String),
}

impl AppError {
    /// 创建文件读写错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// 创建页面交互错误
    pub fn ui(action: &'static str, selector: impl Into<String>, message: impl ToString) -> Self {
        AppError::Ui {
            action,
            selector: selector.into(),
            message: message.to_string(),
        }
    }
}

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Browser(err.to_string())
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_exhausted_message_names_attempts() {
        let err = AppError::SubmissionExhausted {
            attempts: 3,
            cause: "timeout waiting for #receipt".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("3 attempts"));
        assert!(msg.contains("timeout waiting for #receipt"));
    }

    #[test]
    fn test_ui_error_names_selector() {
        let err = AppError::ui("click", "#preview", "element not visible");
        assert_eq!(
            err.to_string(),
            "ui action `click` on `#preview` failed: element not visible"
        );
    }
}
