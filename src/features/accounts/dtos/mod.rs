mod account_dto;

pub use account_dto::*;
