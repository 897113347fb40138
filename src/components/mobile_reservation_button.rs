use yew::prelude::*;

use crate::components::reservation_button::BOOKING_URL;

/// Booking shortcut pinned inside the hero on narrow viewports, where the
/// header (and its call-to-action) is hidden.
#[function_component(MobileReservationButton)]
pub fn mobile_reservation_button() -> Html {
    html! {
        <a
            class="mobile-reservation-button"
            href={BOOKING_URL}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Réservez votre séjour"
        >
            {"Réserver"}
        </a>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn links_to_the_booking_page() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<MobileReservationButton>::with_root(root.clone()).render();
        gloo_timers::future::TimeoutFuture::new(20).await;

        let anchor = root
            .query_selector(".mobile-reservation-button")
            .unwrap()
            .unwrap();
        assert_eq!(anchor.get_attribute("href").unwrap(), BOOKING_URL);
        assert!(anchor.text_content().unwrap().contains("Réserver"));
        root.remove();
    }
}
