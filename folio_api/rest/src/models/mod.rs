use serde::Serialize;

pub mod contact;

#[derive(Debug, Serialize)]
pub struct ApiSuccess {
    pub success: bool,
}
