//! Shared class strings so pages and components stay visually consistent.

use crate::domain::FieldState;

// ============================================
// BUTTON STYLES
// ============================================

pub const BTN_PRIMARY: &str = "rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400 disabled:cursor-not-allowed disabled:opacity-50";

pub const BTN_SECONDARY: &str = "rounded-lg border border-emerald-500/50 bg-emerald-500/10 px-4 py-2 text-sm font-semibold text-emerald-200 hover:bg-emerald-500/20";

pub fn btn_toggle(active: bool) -> &'static str {
    if active {
        "rounded-lg px-5 py-2.5 text-sm font-semibold bg-sky-500/20 text-sky-300 border border-sky-500/40"
    } else {
        "rounded-lg px-5 py-2.5 text-sm text-slate-400 border border-slate-700 hover:border-sky-600 hover:text-sky-300"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(state: FieldState) -> &'static str {
    match state {
        FieldState::Empty => "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-4 py-2.5 text-sm text-slate-100 focus:border-sky-500 focus:outline-none",
        FieldState::Valid => "mt-1 w-full rounded-lg border bg-slate-950 px-4 py-2.5 text-sm text-slate-100 focus:outline-none field-valid",
        FieldState::Invalid => "mt-1 w-full rounded-lg border bg-slate-950 px-4 py-2.5 text-sm text-rose-200 focus:outline-none field-invalid",
    }
}

pub const INPUT_TEXT: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-4 py-2.5 text-sm text-slate-100 focus:border-sky-500 focus:outline-none";

// ============================================
// PANEL / TEXT STYLES
// ============================================

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40";

pub fn result_panel(highlight: bool) -> &'static str {
    if highlight {
        "rounded-xl border border-emerald-500/50 bg-emerald-500/10 result-reveal"
    } else {
        "rounded-xl border border-slate-800 bg-slate-900/40 result-reveal"
    }
}

pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";
pub const TEXT_SECONDARY: &str = "text-slate-300";
pub const TEXT_MUTED: &str = "text-slate-500";
pub const ACCENT_TEXT: &str = "text-emerald-400";
