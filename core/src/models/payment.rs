//! Payment confirmation records

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Confirmation of a completed payment, as returned by the payment backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSuccess {
    pub status: String,
    pub id: String,
    pub version: String,
    /// The backend spells this field `requestdAt`
    #[serde(rename = "requestdAt", alias = "requestedAt")]
    pub requested_at: String,
    pub status_changed_at: String,
    pub order_name: String,
    pub amount: PaymentAmount,
    pub currency: String,
    pub paid_at: String,
    pub receipt_url: String,
    /// Hardware address of the device the payment was made for
    pub mac_address: String,
}

impl PaymentSuccess {
    pub fn requested_at_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.requested_at)
    }

    pub fn status_changed_at_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.status_changed_at)
    }

    pub fn paid_at_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.paid_at)
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}

/// Monetary breakdown of a payment
///
/// `total` is expected to equal `supply + vat + tax_free`. Nothing enforces
/// that on deserialization; use [`PaymentAmount::check_consistency`].
/// Derived sums are computed in `i128` so extreme backend values cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAmount {
    pub total: i64,
    pub tax_free: i64,
    pub vat: i64,
    pub supply: i64,
    pub discount: i64,
    pub cancelled: i64,
    pub cancelled_tax_free: i64,
}

/// A payment amount whose components do not add up to its total
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("amount components sum to {expected} but total is {total}")]
pub struct AmountMismatch {
    pub total: i64,
    pub expected: i128,
}

impl PaymentAmount {
    /// Sum of the components that make up the charged total
    pub fn expected_total(&self) -> i128 {
        i128::from(self.supply) + i128::from(self.vat) + i128::from(self.tax_free)
    }

    /// Amount still charged after cancellations
    pub fn net(&self) -> i128 {
        i128::from(self.total) - i128::from(self.cancelled)
    }

    pub fn check_consistency(&self) -> Result<(), AmountMismatch> {
        let expected = self.expected_total();
        if expected == i128::from(self.total) {
            Ok(())
        } else {
            Err(AmountMismatch {
                total: self.total,
                expected,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "status": "DONE",
        "id": "tgen_20240101",
        "version": "2022-11-16",
        "requestdAt": "2024-01-01T12:00:00+09:00",
        "statusChangedAt": "2024-01-01T12:00:05+09:00",
        "orderName": "Position 3F-12",
        "amount": {
            "total": 11000,
            "taxFree": 0,
            "vat": 1000,
            "supply": 10000,
            "discount": 0,
            "cancelled": 0,
            "cancelledTaxFree": 0
        },
        "currency": "KRW",
        "paidAt": "2024-01-01T12:00:04+09:00",
        "receiptUrl": "https://receipts.example/r/1",
        "macAddress": "AA:BB:CC:DD:EE:FF"
    }"#;

    #[test]
    fn test_deserialize_payment_success() {
        let payment: PaymentSuccess = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(payment.order_name, "Position 3F-12");
        assert_eq!(payment.mac_address, "AA:BB:CC:DD:EE:FF");
        assert_eq!(payment.amount.total, 11000);
        assert!(payment.amount.check_consistency().is_ok());

        let paid = payment.paid_at_time().unwrap();
        assert_eq!(paid.offset().local_minus_utc(), 9 * 3600);
        assert!(payment.requested_at_time().unwrap() < paid);
    }

    #[test]
    fn test_serializes_backend_field_spelling() {
        let payment: PaymentSuccess = serde_json::from_str(SAMPLE).unwrap();
        let value = serde_json::to_value(&payment).unwrap();
        assert!(value.get("requestdAt").is_some());
        assert!(value.get("requestedAt").is_none());
        assert_eq!(value["amount"]["cancelledTaxFree"], 0);
    }

    #[test]
    fn test_accepts_corrected_spelling() {
        let fixed = SAMPLE.replace("requestdAt", "requestedAt");
        let payment: PaymentSuccess = serde_json::from_str(&fixed).unwrap();
        assert_eq!(payment.requested_at, "2024-01-01T12:00:00+09:00");
    }

    #[test]
    fn test_unparseable_timestamp_is_none() {
        let mut payment: PaymentSuccess = serde_json::from_str(SAMPLE).unwrap();
        payment.paid_at = "yesterday".to_string();
        assert!(payment.paid_at_time().is_none());
    }

    #[test]
    fn test_amount_mismatch_is_reported_not_rejected() {
        let amount = PaymentAmount {
            total: 12000,
            vat: 1000,
            supply: 10000,
            ..Default::default()
        };
        assert_eq!(
            amount.check_consistency(),
            Err(AmountMismatch {
                total: 12000,
                expected: 11000
            })
        );
    }

    #[test]
    fn test_extreme_amounts_do_not_overflow() {
        let amount: PaymentAmount = serde_json::from_value(serde_json::json!({
            "total": i64::MAX,
            "taxFree": 0,
            "vat": 1,
            "supply": i64::MAX,
            "discount": 0,
            "cancelled": 0,
            "cancelledTaxFree": 0
        }))
        .unwrap();
        assert_eq!(
            amount.check_consistency(),
            Err(AmountMismatch {
                total: i64::MAX,
                expected: i128::from(i64::MAX) + 1
            })
        );

        let cancelled = PaymentAmount {
            total: i64::MIN,
            cancelled: 1,
            ..Default::default()
        };
        assert_eq!(cancelled.net(), i128::from(i64::MIN) - 1);
    }

    #[test]
    fn test_net_after_cancellation() {
        let amount = PaymentAmount {
            total: 11000,
            vat: 1000,
            supply: 10000,
            cancelled: 5000,
            ..Default::default()
        };
        assert_eq!(amount.net(), 6000);
    }
}
