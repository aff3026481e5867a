use serde::{Deserialize, Serialize};

/// Admin decision. Both flags are always written together.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    pub id: i32,
    pub is_approved: bool,
    pub is_pending: bool,
}
