//! Application state for the withholding calculator UI.

use retencion_core::{TaxBreakdown, TaxRegimeConfig};

/// Application-wide state stored in Cursive's user data.
///
/// Holds the fixed regime rates and the breakdown currently on screen.
/// The breakdown is overwritten on every input event; nothing older is
/// retained.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Regime rates used for every calculation in this session.
    pub regime: TaxRegimeConfig,

    /// Breakdown shown in the results panel, or `None` while it is hidden.
    pub current: Option<TaxBreakdown>,
}

impl AppState {
    /// Create a new application state for the given regime.
    pub fn new(regime: TaxRegimeConfig) -> Self {
        Self {
            regime,
            current: None,
        }
    }

    /// Check whether a breakdown is currently displayed.
    pub fn has_results(&self) -> bool {
        self.current.is_some()
    }

    /// Drop the displayed breakdown.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
