use yew::prelude::*;

pub const BOOKING_URL: &str = "https://www.airbnb.com/l/iMnOLylu";

/// Black call-to-action linking to the Airbnb listing.
#[function_component(ReservationButton)]
pub fn reservation_button() -> Html {
    html! {
        <div aria-label="Réservez votre séjour" class="call-to-action-black">
            <h2>
                <a href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                    {"Réservez "}<span class="call-to-action-span">{"votre séjour"}</span>
                </a>
            </h2>
        </div>
    }
}
