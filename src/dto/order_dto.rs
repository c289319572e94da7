/// One uploaded design file, held in memory for the lifetime of the
/// request. Nothing is written to disk.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

/// Customer fields extracted from the multipart order form.
///
/// Every field is trimmed on extraction; absent fields come through as the
/// empty string, except `quantity` which defaults to "1".
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub product_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
    pub locality: String,
    pub city: String,
    pub pincode: String,
    pub delivery_method: String,
    pub quantity: String,
    pub notes: String,
    pub files: Vec<UploadedFile>,
}

impl OrderForm {
    /// Build an OrderForm from collected multipart text fields and files.
    pub fn from_fields(
        mut fields: std::collections::HashMap<String, String>,
        files: Vec<UploadedFile>,
    ) -> Self {
        let quantity = fields.remove("quantity").unwrap_or_else(|| "1".to_string());
        let mut take = |key: &str| fields.remove(key).unwrap_or_default();
        OrderForm {
            product_id: take("product_id"),
            name: take("name"),
            email: take("email"),
            phone: take("phone"),
            address_line1: take("address_line1"),
            address_line2: take("address_line2"),
            locality: take("locality"),
            city: take("city"),
            pincode: take("pincode"),
            delivery_method: take("delivery_method"),
            quantity,
            notes: take("notes"),
            files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_absent_fields_default_to_empty() {
        let form = OrderForm::from_fields(HashMap::new(), Vec::new());
        assert_eq!(form.name, "");
        assert_eq!(form.city, "");
        assert_eq!(form.quantity, "1");
        assert!(form.files.is_empty());
    }

    #[test]
    fn test_present_quantity_kept_verbatim() {
        let mut fields = HashMap::new();
        fields.insert("quantity".to_string(), "two dozen".to_string());
        let form = OrderForm::from_fields(fields, Vec::new());
        assert_eq!(form.quantity, "two dozen");
    }
}
