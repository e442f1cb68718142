use super::{Resource, scalar};
use crate::browse::{Browsable, Column, FieldValue, RecordId};
use serde::{Deserialize, Serialize};

/// Loyalty customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(
        rename = "CusID",
        alias = "cusId",
        alias = "customerId",
        deserialize_with = "scalar::deserialize_id"
    )]
    pub customer_id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "scalar::deserialize_opt_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "scalar::deserialize_opt_text")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub point: i64,
    #[serde(default)]
    pub gender: Option<String>,
}

const COLUMNS: &[Column] = &[
    Column::new("customerId", "ID"),
    Column::new("name", "Name"),
    Column::new("address", "Address"),
    Column::new("phoneNumber", "Phone Number"),
    Column::new("point", "Point"),
    Column::new("gender", "Gender"),
];

impl Browsable for Customer {
    const RESOURCE: Resource = Resource::Customers;

    fn record_id(&self) -> RecordId {
        self.customer_id.into()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "customerId" => Some(self.customer_id.into()),
            "name" => Some(self.name.as_str().into()),
            "address" => self.address.as_deref().map(FieldValue::text),
            "phoneNumber" => self.phone_number.as_deref().map(FieldValue::text),
            "point" => Some(self.point.into()),
            "gender" => self.gender.as_deref().map(FieldValue::text),
            _ => None,
        }
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "CusID": 7,
            "name": "Nguyen Van A",
            "address": "12 Hang Bac",
            "phoneNumber": "0901234567",
            "point": 120,
            "gender": "Male"
        }"#;

        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.customer_id, 7);
        assert_eq!(customer.record_id(), RecordId::from(7));
        assert_eq!(customer.field("point"), Some(FieldValue::Number(120.0)));
        assert_eq!(customer.field("phoneNumber"), Some(FieldValue::text("0901234567")));
    }

    #[test]
    fn test_numeric_contact_fields_and_string_id() {
        let customer: Customer = serde_json::from_str(
            r#"{"CusID": "12", "name": "A", "address": 221, "phoneNumber": 901234567, "point": 5}"#,
        )
        .unwrap();
        assert_eq!(customer.record_id(), RecordId::from(12));
        assert_eq!(customer.field("phoneNumber"), Some(FieldValue::text("901234567")));
        assert_eq!(customer.field("address"), Some(FieldValue::text("221")));
    }

    #[test]
    fn test_missing_optional_fields() {
        let customer: Customer = serde_json::from_str(r#"{"CusID": 1, "name": "B"}"#).unwrap();
        assert_eq!(customer.field("address"), None);
        assert_eq!(customer.field("nonexistent"), None);
        assert_eq!(customer.point, 0);
    }
}
