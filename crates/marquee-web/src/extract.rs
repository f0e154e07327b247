//! Extractors that reject with the API's JSON error body instead of axum's
//! plain-text defaults

use axum::extract::{FromRequest, FromRequestParts};

use crate::WebError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(WebError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(WebError))]
pub struct ApiPath<T>(pub T);
