pub mod order_handler;
pub mod page_handler;
