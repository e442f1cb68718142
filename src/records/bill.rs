use super::{Resource, dates};
use crate::browse::{Browsable, Column, FieldValue, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sales receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub bill_id: i64,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub staff_name: Option<String>,
    pub total_amount: f64,
    #[serde(default, deserialize_with = "dates::deserialize_opt")]
    pub sale_date: Option<DateTime<Utc>>,
}

const COLUMNS: &[Column] = &[
    Column::new("billId", "ID"),
    Column::new("customerName", "Customer"),
    Column::new("staffName", "Staff"),
    Column::new("totalAmount", "Total"),
    Column::new("saleDate", "Sale Date"),
];

impl Browsable for Bill {
    const RESOURCE: Resource = Resource::Bills;

    fn record_id(&self) -> RecordId {
        self.bill_id.into()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "billId" => Some(self.bill_id.into()),
            "customerName" => self.customer_name.as_deref().map(FieldValue::text),
            "staffName" => self.staff_name.as_deref().map(FieldValue::text),
            "totalAmount" => Some(self.total_amount.into()),
            "saleDate" => self.sale_date.map(FieldValue::Date),
            _ => None,
        }
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }
}
