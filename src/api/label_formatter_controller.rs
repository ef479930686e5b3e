use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Installs the price formatter used by the reference label, the
    /// last-price badge and the tooltip. Takes effect on the next draw.
    pub fn set_currency_formatter<F>(&mut self, formatter: F)
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.formatters.currency = Arc::new(formatter);
    }

    /// Installs the date formatter used by time-axis labels and the optional
    /// tooltip date line, replacing the interval-aware default. Takes effect
    /// on the next draw.
    pub fn set_date_formatter<F>(&mut self, formatter: F)
    where
        F: Fn(DateTime<Utc>) -> String + Send + Sync + 'static,
    {
        self.formatters.date = Some(Arc::new(formatter));
    }

    pub fn clear_label_formatters(&mut self) {
        self.formatters = Default::default();
    }
}
