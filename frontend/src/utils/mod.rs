pub mod dom;
pub mod message;
pub mod storage;
pub mod task;
pub mod time;
