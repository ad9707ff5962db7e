use crate::date::TradingDate;

/// Repräsentiert einen Tagesbalken der Kursreihe.
/// `close` ist immer vorhanden; Open/High/Low sind optional, da nicht
/// jede Quelle sie liefert.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DailyBar {
    /// Trading day
    pub date: TradingDate,
    /// Open price, if the source provides it
    pub open: Option<f64>,
    /// Daily high, if the source provides it
    pub high: Option<f64>,
    /// Daily low, if the source provides it
    pub low: Option<f64>,
    /// Close price
    pub close: f64,
}

impl DailyBar {
    /// Bar carrying only a close price.
    #[must_use]
    pub fn close_only(date: TradingDate, close: f64) -> Self {
        Self {
            date,
            open: None,
            high: None,
            low: None,
            close,
        }
    }
}

/// Ordered daily price series, strictly ascending by date.
///
/// The type itself does not enforce ordering or completeness; series
/// preparation and validation live in the data crate. Consumers may rely
/// on prepared input being business-day-complete with no duplicate dates.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct PriceSeries {
    bars: Vec<DailyBar>,
}

impl PriceSeries {
    /// Wraps an already-ordered bar sequence.
    #[must_use]
    pub fn from_bars(bars: Vec<DailyBar>) -> Self {
        Self { bars }
    }

    /// Series without any bars.
    #[must_use]
    pub fn empty() -> Self {
        Self { bars: Vec::new() }
    }

    /// Number of bars
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True when the series holds no bars
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// All bars in date order
    #[must_use]
    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    /// Last bar, if any
    #[must_use]
    pub fn last(&self) -> Option<&DailyBar> {
        self.bars.last()
    }

    /// Close column as a dense vector.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// True when every bar carries both a high and a low.
    /// An empty series has no high/low information.
    #[must_use]
    pub fn has_high_low(&self) -> bool {
        !self.bars.is_empty()
            && self
                .bars
                .iter()
                .all(|b| b.high.is_some() && b.low.is_some())
    }
}
