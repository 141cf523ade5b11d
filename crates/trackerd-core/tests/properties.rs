use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use trackerd_core::fields::{BatteryStatus, battery_percentage, format_date_time, to_hex};
use trackerd_core::{DecodeError, UplinkInput, decode, decode_uplink};

const KNOWN_FPORTS: [i64; 8] = [2, 3, 4, 5, 6, 7, 8, 10];

fn pack_battery(status: BatteryStatus) -> [u8; 2] {
    let [hi, lo] = status.millivolts.to_be_bytes();
    let alarm = if status.alarm { 0x40 } else { 0x00 };
    [(hi & 0x3F) | alarm, lo]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn decode_is_deterministic(
        fport in prop::sample::select(KNOWN_FPORTS.to_vec()),
        payload in proptest::collection::vec(any::<u8>(), 0..40)
    ) {
        let first = decode(fport, &payload);
        let second = decode(fport, &payload);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn arbitrary_payloads_never_panic(
        fport in -5i64..300,
        payload in proptest::collection::vec(any::<u8>(), 0..64)
    ) {
        let output = decode_uplink(&UplinkInput::new(fport, payload));
        prop_assert!(output.errors.len() <= 1);
    }

    #[test]
    fn short_payloads_are_rejected(
        fport in prop::sample::select(KNOWN_FPORTS.to_vec()),
        payload in proptest::collection::vec(any::<u8>(), 0..3)
    ) {
        let is_too_short = matches!(decode(fport, &payload), Err(DecodeError::TooShort { .. }));
        prop_assert!(is_too_short);
    }

    #[test]
    fn battery_word_round_trips(hi in any::<u8>(), lo in any::<u8>()) {
        let status = BatteryStatus::from_packed(hi, lo);
        prop_assert_eq!(pack_battery(status), [hi & 0x7F, lo]);
        prop_assert_eq!(status.alarm, hi & 0x40 != 0);
        prop_assert!(status.millivolts < 1 << 14);
    }

    #[test]
    fn percentage_is_monotonic_and_clamped(a in -10.0f64..20.0, b in -10.0f64..20.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let p_low = battery_percentage(low);
        let p_high = battery_percentage(high);
        prop_assert!(p_low <= p_high);
        prop_assert!((0..=100).contains(&p_low));
        prop_assert!((0..=100).contains(&p_high));
    }

    #[test]
    fn hex_length_is_twice_input(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let hex = to_hex(&bytes);
        prop_assert_eq!(hex.len(), bytes.len() * 2);
        prop_assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn date_time_has_fixed_separators(bytes in any::<[u8; 7]>()) {
        let (date, time) = format_date_time(bytes);
        prop_assert_eq!(date.matches('-').count(), 2);
        prop_assert_eq!(time.matches(':').count(), 2);
    }
}

#[test]
fn percentage_reference_points() {
    assert_eq!(battery_percentage(2.8), 0);
    assert_eq!(battery_percentage(1.0), 0);
    assert_eq!(battery_percentage(4.002), 100);
    assert_eq!(battery_percentage(5.0), 100);
    assert!((49..=51).contains(&battery_percentage(3.401)));
}

#[test]
fn hex_reference() {
    assert_eq!(to_hex(&[0x00, 0xFF, 0x1A]), "00ff1a");
}

#[test]
fn parallel_decodes_match() {
    let inputs: Arc<Vec<UplinkInput>> = Arc::new(vec![
        UplinkInput::new(7, vec![0x0C, 0x80, 0x40]),
        UplinkInput::new(5, vec![0x13, 0x01, 0x47, 0x01, 0xFF, 0x0E, 0x11]),
        UplinkInput::new(10, vec![0xAB; 24]),
        UplinkInput::new(99, vec![0x01]),
    ]);
    let expected: Vec<_> = inputs.iter().map(decode_uplink).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let inputs = Arc::clone(&inputs);
            thread::spawn(move || {
                (0..50)
                    .map(|_| inputs.iter().map(decode_uplink).collect::<Vec<_>>())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for run in handle.join().expect("decoder thread") {
            assert_eq!(run, expected);
        }
    }
}
