use super::{Resource, dates};
use crate::browse::{Browsable, Column, FieldValue, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discount campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub promotion_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    /// Percentage, e.g. `15` for 15%
    pub discount_rate: f64,
    #[serde(default, deserialize_with = "dates::deserialize_opt")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "dates::deserialize_opt")]
    pub end_date: Option<DateTime<Utc>>,
}

const COLUMNS: &[Column] = &[
    Column::new("promotionId", "ID"),
    Column::new("type", "Type"),
    Column::new("description", "Description"),
    Column::new("discountRate", "Discount Rate"),
    Column::new("startDate", "Start Date"),
    Column::new("endDate", "End Date"),
];

impl Browsable for Promotion {
    const RESOURCE: Resource = Resource::Promotions;

    fn record_id(&self) -> RecordId {
        self.promotion_id.into()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "promotionId" => Some(self.promotion_id.into()),
            "type" => Some(self.kind.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "discountRate" => Some(self.discount_rate.into()),
            "startDate" => self.start_date.map(FieldValue::Date),
            "endDate" => self.end_date.map(FieldValue::Date),
            _ => None,
        }
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }
}
