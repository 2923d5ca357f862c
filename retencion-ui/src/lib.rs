pub mod state;
pub mod views;

use cursive::event::Event;
use retencion_core::TaxRegimeConfig;
use tracing::info;

use state::AppState;

/// Build the Cursive root, install global shortcuts, and run the event
/// loop until the user quits.
///
/// Validates the regime once up front; the calculator assumes valid rates
/// afterwards.
pub fn run_app(regime: TaxRegimeConfig) -> anyhow::Result<()> {
    regime.validate()?;

    let mut siv = cursive::default();
    siv.set_user_data(AppState::new(regime));
    siv.add_global_callback(Event::CtrlChar('q'), |s| s.quit());

    views::show_calculator(&mut siv);

    info!("starting interactive session");
    siv.run();
    Ok(())
}
