use yew::prelude::*;

use crate::components::down_arrow::DownArrow;
use crate::components::mobile_reservation_button::MobileReservationButton;
use crate::components::mobile_video_button::MobileVideoButton;
use crate::components::video::Video;
use crate::components::video_button::VideoButton;
use crate::hooks::overlay::OverlayHandle;
use crate::hooks::visible::{use_on_screen, ViewportConfig};

/// Title and subtitle reveal once they scroll into view, see
/// [`use_on_screen`].
fn reveal_settings() -> ViewportConfig {
    ViewportConfig {
        threshold: 0.4,
        root_margin: "100px 0px 0px 0px",
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Video overlay owned by the page; the hero only carries triggers.
    pub video_overlay: OverlayHandle,
}

/// Full-bleed hero: looping background video, titles with a scroll-gated
/// reveal, and play buttons for the presentation video.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    // Reveal only once the background media has its first frame, otherwise
    // the titles fade in over a black rectangle.
    let media_ready = use_state(|| false);
    let on_media_ready = {
        let media_ready = media_ready.clone();
        Callback::from(move |_| media_ready.set(true))
    };

    let title_ref = use_node_ref();
    let subtitle_ref = use_node_ref();
    let title_visible = use_on_screen(title_ref.clone(), reveal_settings());
    let subtitle_visible = use_on_screen(subtitle_ref.clone(), reveal_settings());

    let reveal_class = |visible: bool| {
        if visible && *media_ready {
            "show-apparition"
        } else {
            "hidden-apparition"
        }
    };

    html! {
        <section class="hero" id="hero">
            <MobileReservationButton />
            <div class="background-video-container">
                <Video on_ready={on_media_ready} />
            </div>
            <div class="hero-titles-container">
                <div class="hero-title-container">
                    <h1
                        ref={title_ref}
                        class={classes!("hero-title", reveal_class(title_visible))}
                    >
                        {"Villa des K'ribean"}
                    </h1>
                </div>
                <div class="hero-subtitle-container">
                    <h2
                        ref={subtitle_ref}
                        class={classes!("hero-subtitle", reveal_class(subtitle_visible))}
                    >
                        {"Location de vacances au Moule"}
                    </h2>
                    <VideoButton overlay={props.video_overlay.clone()} />
                    <MobileVideoButton overlay={props.video_overlay.clone()} />
                </div>
                <div class="hero-arrow">
                    <a href="#autour" aria-label="Découvrir les environs">
                        <DownArrow color="#ffffff" />
                    </a>
                </div>
            </div>
        </section>
    }
}
