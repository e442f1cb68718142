use super::{Resource, dates};
use crate::browse::{Browsable, Column, FieldValue, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Buy/sell listing for one gold type in one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldPrice {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub city: String,
    pub buy_price: f64,
    pub sell_price: f64,
    #[serde(deserialize_with = "dates::deserialize")]
    pub last_updated: DateTime<Utc>,
}

const COLUMNS: &[Column] = &[
    Column::new("type", "Type"),
    Column::new("city", "City"),
    Column::new("buyPrice", "Buy Price"),
    Column::new("sellPrice", "Sell Price"),
    Column::new("lastUpdated", "Last Updated"),
];

impl Browsable for GoldPrice {
    const RESOURCE: Resource = Resource::GoldPrices;

    fn record_id(&self) -> RecordId {
        self.id.into()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.into()),
            "type" => Some(self.kind.as_str().into()),
            "city" => Some(self.city.as_str().into()),
            "buyPrice" => Some(self.buy_price.into()),
            "sellPrice" => Some(self.sell_price.into()),
            "lastUpdated" => Some(self.last_updated.into()),
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
    fn test_deserialize_and_fields() {
        let price: GoldPrice = serde_json::from_str(
            r#"{
                "id": 1,
                "type": "SJC",
                "city": "Hanoi",
                "buyPrice": 70.5,
                "sellPrice": 72,
                "lastUpdated": "2024-06-01T08:00:00"
            }"#,
        )
        .unwrap();

        assert_eq!(price.record_id(), RecordId::from(1));
        assert_eq!(price.field("city"), Some(FieldValue::text("Hanoi")));
        assert_eq!(price.field("sellPrice"), Some(FieldValue::Number(72.0)));
        assert!(matches!(price.field("lastUpdated"), Some(FieldValue::Date(_))));
    }

    #[test]
    fn test_rejects_bad_timestamp() {
        let result: Result<GoldPrice, _> = serde_json::from_str(
            r#"{"id": 1, "type": "SJC", "city": "Hue", "buyPrice": 1, "sellPrice": 2, "lastUpdated": "soon"}"#,
        );
        assert!(result.is_err());
    }
}
