pub mod client_service;
pub mod dashboard_service;
pub mod deal_service;
pub mod lookup_service;
pub mod store;
pub mod user_service;
