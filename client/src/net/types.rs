//! REST DTOs for the business API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON the business API returns so serde round-trips
//! stay lossless; display helpers live next to the data they format.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Runtime configuration published by the host at `/api/client-config`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the business REST API, without a trailing slash.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: "/api".to_owned() }
    }
}

/// Authenticated account as returned by the business API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    /// `"admin"`, `"staff"` or `"customer"`.
    #[serde(default)]
    pub role: String,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Fulfilment state of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Orders can be cancelled until they leave the warehouse.
    #[must_use]
    pub fn can_cancel(self) -> bool {
        matches!(self, Self::Pending | Self::Paid)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_email: String,
    pub status: OrderStatus,
    /// Order total in minor currency units.
    pub total_cents: i64,
    #[serde(default)]
    pub item_count: u32,
    pub created_at: String,
}

/// A discount code managed from the admin dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountCode {
    pub id: String,
    pub code: String,
    pub percent_off: u8,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub usage_count: u32,
    pub expires_at: Option<String>,
}

/// Payload for creating a discount code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewDiscountCode {
    pub code: String,
    pub percent_off: u8,
    pub expires_at: Option<String>,
}

impl NewDiscountCode {
    /// Validate raw form input into a payload.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the code is blank or the percentage
    /// is not an integer between 1 and 100.
    pub fn from_form(code: &str, percent_off: &str, expires_at: &str) -> Result<Self, String> {
        let code = code.trim().to_ascii_uppercase();
        if code.is_empty() {
            return Err("Enter a code.".to_owned());
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err("Codes may only contain letters, digits, '-' and '_'.".to_owned());
        }
        let percent_off = match percent_off.trim().parse::<u8>() {
            Ok(p) if (1..=100).contains(&p) => p,
            _ => return Err("Percent off must be between 1 and 100.".to_owned()),
        };
        let expires_at = Some(expires_at.trim()).filter(|s| !s.is_empty()).map(str::to_owned);
        Ok(Self { code, percent_off, expires_at })
    }
}

/// Format minor units as a dollar amount, e.g. `1999` -> `"$19.99"`.
#[must_use]
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}
