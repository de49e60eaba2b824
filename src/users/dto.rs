use serde::Deserialize;

/// Request body for create and update. Both carry the full record; fields are
/// optional here so presence is checked by validation, not by deserialization.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_accepts_missing_optional_fields() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"name":"Ann Lee","email":"ann@example.com"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Ann Lee"));
        assert_eq!(payload.email.as_deref(), Some("ann@example.com"));
        assert!(payload.phone.is_none());
        assert!(payload.message.is_none());
    }

    #[test]
    fn delete_response_serialization() {
        let json = serde_json::to_string(&DeleteResponse { deleted: true }).unwrap();
        assert_eq!(json, r#"{"deleted":true}"#);
    }
}
