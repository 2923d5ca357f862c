//! Interactive withholding calculator view.
//!
//! One input field for the invoiced total and six bound result fields.
//! Every edit runs the full cycle: sanitize the field content, parse it,
//! calculate the breakdown, format the amounts, and render them. The
//! results panel is hidden whenever there is nothing to display.
//!
//! Two layers keep the field well formed: an event filter consumes any
//! keystroke that is not a digit or decimal point before it reaches the
//! field, and the sanitized text is written back on every edit so pasted
//! content cannot leave illegal characters behind.

use cursive::Cursive;
use cursive::align::HAlign;
use cursive::event::{Event, EventResult, EventTrigger};
use cursive::view::{Nameable, Resizable};
use cursive::views::{
    Dialog, DummyView, EditView, HideableView, LinearLayout, OnEventView, Panel, TextView,
};
use retencion_core::format::format_currency;
use retencion_core::input::{is_allowed_char, parse_total, sanitize};
use retencion_core::{TaxBreakdown, TaxRegimeConfig, WithholdingCalculator};

use super::status_bar::{build_status_bar, hints};
use crate::state::AppState;

// View name for the input field
const TOTAL_FIELD: &str = "total";

/// Names of the views a breakdown is rendered into.
///
/// Passed explicitly to [`render_breakdown`] so the render step receives
/// its display handles as arguments instead of reaching for ambient
/// bindings.
pub struct ResultTargets {
    pub container: &'static str,
    pub subtotal: &'static str,
    pub vat_amount: &'static str,
    pub income_withholding: &'static str,
    pub vat_withholding: &'static str,
    pub total_withholdings: &'static str,
    pub net_payable: &'static str,
}

const RESULT_TARGETS: ResultTargets = ResultTargets {
    container: "results",
    subtotal: "subtotal",
    vat_amount: "vat_amount",
    income_withholding: "income_withholding",
    vat_withholding: "vat_withholding",
    total_withholdings: "total_withholdings",
    net_payable: "net_payable",
};

/// Display the calculator as the root view.
pub fn show_calculator(siv: &mut Cursive) {
    let total_field = OnEventView::new(
        EditView::new()
            .on_edit(|s, content, _| on_total_edited(s, content))
            .with_name(TOTAL_FIELD),
    )
    .on_pre_event_inner(EventTrigger::any(), |_, event| match event {
        // Reject disallowed keystrokes before they reach the field
        Event::Char(c) if !is_allowed_char(*c) => Some(EventResult::Consumed(None)),
        _ => None,
    });

    let input_row = LinearLayout::horizontal()
        .child(TextView::new(format!("{:32} $ ", "Total factura (IVA incluido):")))
        .child(total_field.fixed_width(14));

    let results = LinearLayout::vertical()
        .child(result_row("Subtotal (base imponible):", RESULT_TARGETS.subtotal))
        .child(result_row("IVA (15%):", RESULT_TARGETS.vat_amount))
        .child(result_row(
            "Retención en la fuente (1.75%):",
            RESULT_TARGETS.income_withholding,
        ))
        .child(result_row("Retención de IVA (30%):", RESULT_TARGETS.vat_withholding))
        .child(TextView::new("─".repeat(50)))
        .child(result_row("Total retenciones:", RESULT_TARGETS.total_withholdings))
        .child(result_row("Monto neto a pagar:", RESULT_TARGETS.net_payable));

    let results_panel = HideableView::new(Panel::new(results).title("Desglose"))
        .with_name(RESULT_TARGETS.container);

    let status = build_status_bar(&[hints::TAB, hints::ENTER, hints::CTRL_Q]);

    let layout = LinearLayout::vertical()
        .child(input_row)
        .child(DummyView.fixed_height(1))
        .child(results_panel)
        .child(DummyView.fixed_height(1))
        .child(status);

    let dialog = Dialog::around(layout)
        .title("Calculadora de Retenciones")
        .button("Limpiar", on_clear)
        .padding_lrtb(1, 1, 0, 0);

    siv.add_layer(dialog);

    // Nothing to display until a total is typed
    render_breakdown(siv, &RESULT_TARGETS, None);
    let _ = siv.focus_name(TOTAL_FIELD);
}

/// Create a labeled result row with a right-aligned amount.
fn result_row(label: &str, target: &'static str) -> LinearLayout {
    LinearLayout::horizontal()
        .child(TextView::new(format!("{label:32}")))
        .child(
            TextView::new("")
                .h_align(HAlign::Right)
                .with_name(target)
                .fixed_width(16),
        )
}

/// Run one complete input cycle: sanitize, parse, calculate, render.
fn on_total_edited(siv: &mut Cursive, raw: &str) {
    let cleaned = sanitize(raw);
    if cleaned != raw {
        // keep the displayed text free of illegal characters
        siv.call_on_name(TOTAL_FIELD, |field: &mut EditView| {
            let _ = field.set_content(cleaned.as_str());
        });
    }

    let calculator = WithholdingCalculator::new(get_regime(siv));
    let breakdown = parse_total(&cleaned).and_then(|total| calculator.calculate(total));

    render_breakdown(siv, &RESULT_TARGETS, breakdown.as_ref());
    siv.with_user_data(|state: &mut AppState| state.current = breakdown);
}

/// Get the regime rates for this session.
fn get_regime(siv: &mut Cursive) -> TaxRegimeConfig {
    siv.with_user_data(|state: &mut AppState| state.regime)
        .unwrap_or_default()
}

/// Render a breakdown into the given display targets, or hide them.
///
/// The single side-effecting stage of the input cycle: writes the six
/// formatted amounts and toggles the visibility of the results panel.
fn render_breakdown(
    siv: &mut Cursive,
    targets: &ResultTargets,
    breakdown: Option<&TaxBreakdown>,
) {
    if let Some(b) = breakdown {
        set_amount(siv, targets.subtotal, b.subtotal);
        set_amount(siv, targets.vat_amount, b.vat_amount);
        set_amount(siv, targets.income_withholding, b.income_withholding);
        set_amount(siv, targets.vat_withholding, b.vat_withholding);
        set_amount(siv, targets.total_withholdings, b.total_withholdings);
        set_amount(siv, targets.net_payable, b.net_payable);
    }

    let visible = breakdown.is_some();
    siv.call_on_name(
        targets.container,
        |panel: &mut HideableView<Panel<LinearLayout>>| {
            panel.set_visible(visible);
        },
    );
}

/// Write one formatted amount into a named text view.
fn set_amount(siv: &mut Cursive, target: &str, amount: f64) {
    siv.call_on_name(target, |view: &mut TextView| {
        view.set_content(format_currency(amount));
    });
}

/// Handle the clear button: empty the field, hide results, refocus.
fn on_clear(siv: &mut Cursive) {
    siv.call_on_name(TOTAL_FIELD, |field: &mut EditView| {
        let _ = field.set_content("");
    });
    render_breakdown(siv, &RESULT_TARGETS, None);
    siv.with_user_data(|state: &mut AppState| state.clear());
    let _ = siv.focus_name(TOTAL_FIELD);
}
