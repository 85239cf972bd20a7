pub mod env;
pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn status_serializes_to_ok() {
        let json = serde_json::to_value(types::Status::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "ok"}));
    }
}
