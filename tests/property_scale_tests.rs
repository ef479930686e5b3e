use chrono::{TimeZone, Utc};
use price_chart::core::{PriceScale, PriceScaleTuning, Sample, TimeScale};
use proptest::prelude::*;

fn ascending_samples(steps: &[(i64, f64)]) -> Vec<Sample> {
    let mut seconds = 1_600_000_000_i64;
    steps
        .iter()
        .map(|(gap, price)| {
            seconds += gap;
            let timestamp = Utc.timestamp_opt(seconds, 0).single().expect("valid timestamp");
            Sample::new(timestamp, *price, 1.0)
        })
        .collect()
}

proptest! {
    #[test]
    fn time_scale_domain_matches_series_extent_and_is_monotonic(
        steps in prop::collection::vec((0_i64..86_400, 1.0f64..1_000.0), 1..64),
        width in 1.0f64..4_000.0
    ) {
        let samples = ascending_samples(&steps);
        let scale = TimeScale::from_samples(&samples, width).expect("time scale");

        let first = samples.first().expect("first").time_key();
        let last = samples.last().expect("last").time_key();
        prop_assert_eq!(scale.domain(), (first, last));

        let pixels: Vec<f64> = samples
            .iter()
            .map(|s| scale.time_to_pixel(s.time_key()).expect("to pixel"))
            .collect();
        for pair in pixels.windows(2) {
            prop_assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn padded_price_extent_maps_to_band_edges(
        steps in prop::collection::vec((1_i64..3_600, 0.01f64..1_000_000.0), 2..64),
        band in 10.0f64..2_000.0
    ) {
        let samples = ascending_samples(&steps);
        let scale = PriceScale::from_samples(&samples, band, PriceScaleTuning::default())
            .expect("price scale");

        let min = samples.iter().map(|s| s.price).fold(f64::INFINITY, f64::min);
        let max = samples.iter().map(|s| s.price).fold(f64::NEG_INFINITY, f64::max);
        prop_assume!(max > min);

        let bottom = scale.price_to_pixel(min * 0.99).expect("bottom");
        let top = scale.price_to_pixel(max * 1.01).expect("top");
        prop_assert!((bottom - band).abs() <= 1e-6 * band);
        prop_assert!(top.abs() <= 1e-6 * band);
    }

    #[test]
    fn price_scale_round_trip_property(
        price_min in -1_000_000.0f64..1_000_000.0,
        price_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let price_max = price_min + price_span;
        let value = price_min + value_factor * price_span;

        let scale = PriceScale::new(price_min, price_max, 1024.0).expect("valid scale");
        let px = scale.price_to_pixel(value).expect("to pixel");
        let recovered = scale.pixel_to_price(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-6);
    }
}
