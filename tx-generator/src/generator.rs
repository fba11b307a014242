use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::transaction::{Metadata, Transaction, TransactionType};

/// Fixed merchant catalog; every record carries one of these verbatim.
pub const MERCHANTS: [&str; 10] = [
    "Etsy",
    "Patreon",
    "Skillshare",
    "Masterclass",
    "Udemy",
    "Khan Academy",
    "Codecademy",
    "Duolingo",
    "Coursera",
    "edX",
];

const CENTS: i64 = 100;

/// Synthesizes one transaction from the given random source.
///
/// Timestamps land uniformly within the 365 days before `now`. Amounts are
/// drawn on the 2-decimal grid of `[1.00, 1000.00]`, then negated for
/// refunds or re-drawn from `[-100.00, 100.00]` for adjustments. All other
/// fields sample independently and uniformly from their domains; `status`
/// in particular does not correlate with `type`.
pub fn generate_transaction<R: Rng>(rng: &mut R, now: NaiveDateTime) -> Transaction {
    let base_amount = Decimal::new(rng.gen_range(CENTS..=1000 * CENTS), 2);
    let transaction_type: TransactionType = rng.gen();

    let amount = match transaction_type {
        TransactionType::Refund => -base_amount,
        TransactionType::Adjustment => {
            Decimal::new(rng.gen_range(-100 * CENTS..=100 * CENTS), 2)
        }
        _ => base_amount,
    };

    let timestamp = now
        - Duration::days(rng.gen_range(0..=365))
        - Duration::hours(rng.gen_range(0..=23))
        - Duration::minutes(rng.gen_range(0..=59))
        - Duration::seconds(rng.gen_range(0..=59))
        - Duration::microseconds(rng.gen_range(0..=999_999));

    Transaction {
        transaction_id: random_uuid(rng),
        timestamp,
        transaction_type,
        amount,
        currency: rng.gen(),
        status: rng.gen(),
        merchant: MERCHANTS[rng.gen_range(0..MERCHANTS.len())].to_string(),
        customer_id: random_uuid(rng),
        payment_method: rng.gen(),
        metadata: generate_metadata(rng),
    }
}

fn generate_metadata<R: Rng>(rng: &mut R) -> Metadata {
    Metadata {
        location: format!(
            "{},{}",
            rng.gen_range(-90..=90),
            rng.gen_range(-180..=180)
        ),
        device_id: random_uuid(rng),
        ip_address: format!(
            "{}.{}.{}.{}",
            rng.gen_range(1..=255),
            rng.gen_range(1..=255),
            rng.gen_range(1..=255),
            rng.gen_range(1..=255)
        ),
    }
}

/// Version-4 UUID drawn from the caller's rng rather than the process-wide
/// one, so a seeded run reproduces its identifiers.
fn random_uuid<R: Rng>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}
