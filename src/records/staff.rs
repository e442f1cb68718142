use super::{Resource, scalar};
use crate::browse::{Browsable, Column, FieldValue, RecordId};
use serde::{Deserialize, Serialize};

/// Shop employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub staff_id: i64,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar::deserialize_opt_text")]
    pub phone_number: Option<String>,
}

const COLUMNS: &[Column] = &[
    Column::new("staffId", "ID"),
    Column::new("name", "Name"),
    Column::new("role", "Role"),
    Column::new("email", "Email"),
    Column::new("phoneNumber", "Phone Number"),
];

impl Browsable for Staff {
    const RESOURCE: Resource = Resource::Staff;

    fn record_id(&self) -> RecordId {
        self.staff_id.into()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "staffId" => Some(self.staff_id.into()),
            "name" => Some(self.name.as_str().into()),
            "role" => self.role.as_deref().map(FieldValue::text),
            "email" => self.email.as_deref().map(FieldValue::text),
            "phoneNumber" => self.phone_number.as_deref().map(FieldValue::text),
            _ => None,
        }
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }
}
