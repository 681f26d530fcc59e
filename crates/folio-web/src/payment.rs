use folio_core::section::PAYMENTS;
use leptos::prelude::*;

/// Host for the third-party payment widget.
///
/// Only the anchor and mount node belong to this app; the widget script finds
/// `#payment-widget` and renders into it.
#[component]
pub fn PaymentSection() -> impl IntoView {
    view! {
        <section id=PAYMENTS class="section payments">
            <h2 class="section-title">"Payments"</h2>
            <div id="payment-widget" class="payment-widget"></div>
        </section>
    }
}
