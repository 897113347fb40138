use web_sys::EventTarget;
use yew::prelude::*;

use crate::config;
use crate::hooks::overlay::OverlayHandle;

const EMBED_URL: &str = "https://www.youtube.com/embed/lK-MzNsLOxU?autoplay=1";

#[derive(Properties, PartialEq)]
pub struct VideoScreenProps {
    pub overlay: OverlayHandle,
}

/// Full-screen overlay playing the presentation video. Closes on the close
/// button or on a click landing on the backdrop itself; clicks inside the
/// content area are ignored.
#[function_component(VideoScreen)]
pub fn video_screen(props: &VideoScreenProps) -> Html {
    let backdrop = use_node_ref();

    let on_backdrop_click = {
        let backdrop = backdrop.clone();
        let close = props.overlay.close();
        Callback::from(move |event: MouseEvent| {
            // Only the backdrop node itself, never a descendant.
            let hit_backdrop = match (event.target(), backdrop.get()) {
                (Some(target), Some(node)) => target == EventTarget::from(node),
                _ => false,
            };
            if hit_backdrop {
                close.emit(event);
            }
        })
    };

    html! {
        <div class="video-screen" ref={backdrop} onclick={on_backdrop_click}>
            <div class="video-screen-content">
                <div class="screen-close">
                    <button onclick={props.overlay.close()} aria-label="Fermer">
                        <img src={config::asset_url("images/close.svg")} alt="Fermer" />
                    </button>
                </div>
                <iframe
                    src={EMBED_URL}
                    title="YouTube video player"
                    frameborder="0"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                    allowfullscreen=true
                    class="video-screen-frame"
                />
            </div>
        </div>
    }
}
