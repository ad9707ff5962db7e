use kurs_types::{DailyBar, TradingDate};
use proptest::prelude::*;

/// Generiert valide Tagesbalken-Sequenzen für Property-Tests
pub fn valid_bar_sequence(len: usize) -> impl Strategy<Value = Vec<DailyBar>> {
    prop::collection::vec(valid_bar(), len..=len).prop_map(|mut bars| {
        // Datumsachse: lückenlose Handelstage ab 2024-01-01 (ein Montag)
        let mut d = TradingDate::new(2024, 1, 1).unwrap();
        for bar in &mut bars {
            bar.date = d;
            d = d.next_business_day();
        }
        bars
    })
}

fn valid_bar() -> impl Strategy<Value = DailyBar> {
    (
        13_000.0f64..16_000.0, // Close-Bereich (IDR je USD)
        1.0f64..150.0,         // Tagesspanne
    )
        .prop_map(|(close, spread)| DailyBar {
            date: TradingDate::new(2024, 1, 1).unwrap(), // wird in valid_bar_sequence überschrieben
            open: Some(close - spread * 0.25),
            high: Some(close + spread),
            low: Some(close - spread),
            close,
        })
}
