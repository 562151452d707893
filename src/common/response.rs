// Success response envelope: `{ "message": "OK", "data": ... }`

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            message: "OK".to_string(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let value = serde_json::to_value(Envelope::ok(serde_json::json!({ "id": "U_1" }))).unwrap();
        assert_eq!(value["message"], "OK");
        assert_eq!(value["data"]["id"], "U_1");
    }
}
