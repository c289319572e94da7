pub mod order_router;
pub mod page_router;
