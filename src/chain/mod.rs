pub mod lottery;
pub mod providers;
