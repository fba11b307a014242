use chrono::NaiveDateTime;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Purchase,
    Refund,
    Adjustment,
    Payment,
    Transfer,
}

#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
    Cancelled,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Paypal,
    BankTransfer,
}

/// One synthesized transaction, the atomic unit of output.
///
/// Field names serialize in lower camel case; downstream consumers treat
/// the names as a contract, not a style choice.
#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: Uuid,
    #[serde(with = "micros")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: Currency,
    pub status: TransactionStatus,
    pub merchant: String,
    pub customer_id: Uuid,
    pub payment_method: PaymentMethod,
    pub metadata: Metadata,
}

/// Synthetic context attached to every transaction. None of it carries
/// geographic or network meaning.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// `"lat,lon"` with integer degrees.
    pub location: String,
    pub device_id: Uuid,
    /// `"a.b.c.d"` with octets in `1..=255`, not validated as routable.
    pub ip_address: String,
}

impl Distribution<TransactionType> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TransactionType {
        match rng.gen_range(0..5) {
            0 => TransactionType::Purchase,
            1 => TransactionType::Refund,
            2 => TransactionType::Adjustment,
            3 => TransactionType::Payment,
            _ => TransactionType::Transfer,
        }
    }
}

impl Distribution<TransactionStatus> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TransactionStatus {
        match rng.gen_range(0..4) {
            0 => TransactionStatus::Completed,
            1 => TransactionStatus::Pending,
            2 => TransactionStatus::Failed,
            _ => TransactionStatus::Cancelled,
        }
    }
}

impl Distribution<Currency> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Currency {
        match rng.gen_range(0..5) {
            0 => Currency::Usd,
            1 => Currency::Eur,
            2 => Currency::Gbp,
            3 => Currency::Jpy,
            _ => Currency::Cad,
        }
    }
}

impl Distribution<PaymentMethod> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PaymentMethod {
        match rng.gen_range(0..4) {
            0 => PaymentMethod::CreditCard,
            1 => PaymentMethod::DebitCard,
            2 => PaymentMethod::Paypal,
            _ => PaymentMethod::BankTransfer,
        }
    }
}

/// Timestamps serialize with exactly six fractional digits and no offset,
/// e.g. `2024-03-01T12:30:45.000123`.
pub(crate) mod micros {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&timestamp.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
