pub mod activity_log;
pub mod asset;
pub mod common;
pub mod contact;
pub mod customer;
pub mod employee;
pub mod job;
pub mod site;
pub mod team;
