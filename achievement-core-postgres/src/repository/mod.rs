pub mod account;
pub mod achievement;
pub mod db_init;
pub mod profile;
