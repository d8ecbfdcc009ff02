pub mod billing;
pub mod card;
pub mod gateway;
pub mod payment;
