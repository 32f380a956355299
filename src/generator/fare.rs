//! Synthetic fare generation.

use rand::Rng;

use crate::config::GenerationConfig;
use crate::generator::types::Fare;

/// Advance income tax reported on every fare.
pub const AIT: i64 = 3;

/// Draw a fare. `total_fare = base_fare + tax_amount - discount_amount`;
/// config validation keeps the discount below the smallest base plus tax.
/// `passenger_count` is echoed as given.
pub fn generate_fare<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GenerationConfig,
    passenger_count: Option<serde_json::Value>,
) -> Fare {
    let base_fare = draw(rng, config.base_fare.min, config.base_fare.max);
    let tax_amount = draw(rng, config.tax.min, config.tax.max);
    let discount_amount = draw(rng, config.discount.min, config.discount.max);

    Fare {
        discount_amount,
        markup_fee: 0,
        service_fee: 0,
        passenger_type: "ADT".to_string(),
        total_fare: base_fare + tax_amount - discount_amount,
        passenger_count,
        base_fare,
        tax_amount,
        ait: AIT,
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> i64 {
    rng.gen_range(min..=max) as i64
}
