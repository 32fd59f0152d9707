//! Chat endpoint DTOs

use serde::{Deserialize, Serialize};

/// Request body for POST /chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
}

/// Response body for POST /chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}
