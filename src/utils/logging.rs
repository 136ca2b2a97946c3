/// 日志工具模块
///
/// 默认输出 info 级别，可通过 `RUST_LOG` 覆盖，例如 `RUST_LOG=robot_order_submit=debug`
use tracing_subscriber::EnvFilter;

/// 默认日志过滤规则
pub const DEFAULT_FILTER: &str = "info";

/// 初始化日志
///
/// 重复调用不会报错（测试中可能被多次调用）。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
