use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequestBody {
    pub user: String,
    pub pass: String,
}
