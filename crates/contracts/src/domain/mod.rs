pub mod a001_customer;
pub mod a002_item;
pub mod common;
