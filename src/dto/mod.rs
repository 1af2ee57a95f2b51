pub mod client_dto;
pub mod dashboard_dto;
pub mod deal_dto;
pub mod user_dto;
pub mod view_dto;
