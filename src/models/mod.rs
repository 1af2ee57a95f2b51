pub mod client;
pub mod deal;
pub mod lookup;
pub mod user;
