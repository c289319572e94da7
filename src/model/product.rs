use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One product record from the catalog file.
///
/// The catalog is edited by hand, so anything beyond the core fields is
/// collected in `extra` and passed through to the pages untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub unit: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Product {
    /// Extra descriptive field by key, rendered as plain text when present.
    pub fn extra_text(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_core_fields() {
        let p: Product = serde_json::from_str(
            r#"{"id": "p1", "name": "Vase", "price": 500, "unit": "each"}"#,
        )
        .unwrap();
        assert_eq!(p.id, "p1");
        assert_eq!(p.name, "Vase");
        assert_eq!(p.price, 500.0);
        assert_eq!(p.unit, "each");
        assert!(p.extra.is_empty());
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let p: Product = serde_json::from_str(
            r#"{"id": "p1", "name": "Vase", "price": 500, "unit": "each",
                "description": "Hand painted", "image": "/img/vase.jpg"}"#,
        )
        .unwrap();
        assert_eq!(p.extra_text("description"), Some("Hand painted"));
        assert_eq!(p.extra_text("image"), Some("/img/vase.jpg"));
        assert_eq!(p.extra_text("missing"), None);
    }
}
