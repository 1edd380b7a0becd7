pub mod error;
pub mod response;
pub mod staging;
pub mod storage_key;
