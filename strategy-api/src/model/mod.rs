pub mod allocation;
pub mod asset;
pub mod catalog;
pub mod ids;
pub mod pool;
pub mod strategy;
