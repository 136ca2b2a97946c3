pub mod archiver;
pub mod order_fetcher;
pub mod order_reader;
pub mod receipt_exporter;
pub mod submission_retrier;

pub use archiver::{archive_receipts, list_receipts, remove_stale_receipts, ArchiveReport};
pub use order_fetcher::OrderFetcher;
pub use order_reader::read_orders;
pub use receipt_exporter::ReceiptExporter;
pub use submission_retrier::{AttemptResult, SubmissionRetrier};
