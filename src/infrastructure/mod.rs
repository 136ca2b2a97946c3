pub mod order_page;
pub mod page_session;

pub use order_page::{OrderPage, WaitState};
pub use page_session::PageSession;

#[cfg(test)]
pub use order_page::MockOrderPage;
