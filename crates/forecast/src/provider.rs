//! Collaborator seam for the upstream data layer.

use kurs_types::PriceSeries;

use crate::error::ForecastError;

/// Liefert die aufbereitete Kursreihe für den Pipeline-Lauf.
///
/// Implementierungen leben außerhalb des Kerns (Datei, Marktdaten-API)
/// und setzen typischerweise auf die Aufbereitung aus `kurs-data` auf.
/// Der Vertrag: datumsaufsteigend, handelstäglich lückenlos, Close
/// floor-validiert, High/Low optional. "Keine Daten" ist eine leere
/// Reihe, kein Fehler.
pub trait SeriesProvider: Send + Sync {
    /// The current prepared series.
    ///
    /// # Errors
    /// - [`ForecastError::Provider`] for failures that are not simply
    ///   "no data yet".
    fn series(&self) -> Result<PriceSeries, ForecastError>;
}

impl<P: SeriesProvider> SeriesProvider for &P {
    fn series(&self) -> Result<PriceSeries, ForecastError> {
        (*self).series()
    }
}
