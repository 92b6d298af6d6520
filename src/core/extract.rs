//! 请求提取器
//!
//! 把 axum 默认的纯文本拒绝响应统一转换为 [`AppError::Validation`]。

use axum::extract::{FromRequest, FromRequestParts};

use super::error::AppError;

/// 路径参数提取器，解析失败时返回 400
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

/// JSON 请求体提取器，缺字段、类型错误或非 JSON 请求体时返回 400
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
