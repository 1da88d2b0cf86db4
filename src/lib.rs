pub mod command;
pub mod config;
pub mod error;
pub mod expiry;
pub mod openssl;
pub mod snakeoil_date;
pub mod source;
