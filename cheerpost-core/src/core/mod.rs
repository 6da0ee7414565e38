// export all modules
pub mod conf;
pub mod post;
pub mod posting;
pub mod inspiration;
pub mod storage;
pub mod navigation;
pub mod counter;
