//! 核心层：错误处理、提取器、响应结构、中间件

pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
