//! Domain records for the back-office list screens
//!
//! Each list screen browses one [`Resource`]. The typed records here mirror
//! the JSON served by the shop's back-office API and implement
//! [`Browsable`](crate::browse::Browsable) so the engine can work on them.
//!
//! # Resources
//!
//! - **customers**: loyalty customers, filtered by name
//! - **staff**: shop employees, filtered by name
//! - **promotions**: discount campaigns, filtered by type
//! - **bills**: sales receipts, filtered by customer name
//! - **gold-prices**: daily buy/sell prices per city, filtered by city

mod bill;
mod customer;
mod dates;
mod gold_price;
mod promotion;
mod scalar;
mod staff;

pub use bill::Bill;
pub use customer::Customer;
pub use gold_price::GoldPrice;
pub use promotion::Promotion;
pub use staff::Staff;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A browsable resource type, one per list screen
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    Customers,
    Staff,
    Promotions,
    Bills,
    GoldPrices,
}

impl Resource {
    /// Every resource, in menu order
    pub const ALL: [Self; 5] = [
        Self::Customers,
        Self::Staff,
        Self::Promotions,
        Self::Bills,
        Self::GoldPrices,
    ];

    /// Stable machine name (also the snapshot file stem)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Staff => "staff",
            Self::Promotions => "promotions",
            Self::Bills => "bills",
            Self::GoldPrices => "gold-prices",
        }
    }

    /// Screen title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Customers => "Customers",
            Self::Staff => "Staff",
            Self::Promotions => "Promotions",
            Self::Bills => "Bills",
            Self::GoldPrices => "Gold Price",
        }
    }

    /// Field the screen's search box matches against
    #[must_use]
    pub const fn default_filter_field(self) -> &'static str {
        match self {
            Self::Customers | Self::Staff => "name",
            Self::Promotions => "type",
            Self::Bills => "customerName",
            Self::GoldPrices => "city",
        }
    }

    /// Sort key a fresh screen starts with (empty means unsorted)
    #[must_use]
    pub const fn default_sort_key(self) -> &'static str {
        match self {
            Self::Customers | Self::Staff => "name",
            Self::Promotions => "promotionId",
            Self::Bills => "billId",
            Self::GoldPrices => "",
        }
    }

    /// Snapshot file name inside a data directory
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|r| r.name() == wanted)
            .ok_or_else(|| format!("unknown resource '{s}'"))
    }
}
