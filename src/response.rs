//! Response bodies shared by the resource handlers.

use serde::Serialize;

/// Body of a successful create: `{"id": n}`.
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: i32,
}

/// Body of a successful delete: `{"status": "deleted"}`.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub status: &'static str,
}

impl Deleted {
    pub fn new() -> Self {
        Deleted { status: "deleted" }
    }
}

impl Default for Deleted {
    fn default() -> Self {
        Self::new()
    }
}

pub fn error_body(message: String) -> serde_json::Value {
    serde_json::json!({ "error": message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodies_match_wire_shape() {
        assert_eq!(
            serde_json::to_value(Created { id: 7 }).unwrap(),
            serde_json::json!({ "id": 7 })
        );
        assert_eq!(
            serde_json::to_value(Deleted::new()).unwrap(),
            serde_json::json!({ "status": "deleted" })
        );
    }
}
