//! Payment confirmation display command

use super::read_json;
use anyhow::Result;
use floorpay_core::models::PaymentSuccess;
use std::path::PathBuf;
use tracing::warn;

/// Show a payment confirmation record
pub async fn payment_command(file: PathBuf) -> Result<()> {
    let payment: PaymentSuccess = read_json(&file).await?;

    println!("🧾 {} [{}]", payment.order_name, payment.status);
    println!("   id:        {}", payment.id);
    println!("   device:    {}", payment.mac_address);
    println!(
        "   total:     {} {}",
        payment.amount.total, payment.currency
    );
    println!(
        "   supply:    {}  vat: {}  tax free: {}",
        payment.amount.supply, payment.amount.vat, payment.amount.tax_free
    );
    if payment.amount.cancelled > 0 {
        println!(
            "   cancelled: {} (tax free {}), net {}",
            payment.amount.cancelled,
            payment.amount.cancelled_tax_free,
            payment.amount.net()
        );
    }

    match payment.paid_at_time() {
        Some(paid_at) => println!("   paid at:   {}", paid_at.to_rfc2822()),
        None => println!("   paid at:   {}", payment.paid_at),
    }
    println!("   receipt:   {}", payment.receipt_url);

    if let Err(mismatch) = payment.amount.check_consistency() {
        warn!(id = %payment.id, %mismatch, "Payment amount does not add up");
        println!("⚠️  {}", mismatch);
    }

    Ok(())
}
