pub mod order_dto;
