#![doc(test(attr(deny(warnings))))]

//! Compensation Core decomposes an annual CTC figure into the fixed
//! Indian-payroll pay heads and deductions that populate an offer letter.

pub mod breakup;
pub mod currency;
pub mod errors;
pub mod offer;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Compensation Core tracing initialized.");
    });
}
