use yew::prelude::*;

use crate::components::video_button::VideoButton;
use crate::hooks::overlay::OverlayHandle;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Video overlay owned by the page; the header only triggers it.
    pub video_overlay: OverlayHandle,
}

/// Top navigation strip. Hidden below 480px, where the hero carries its own
/// mobile play button instead.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="site-header">
            <nav class="nav-container">
                <div class="nav-logo hidden-480">
                    <VideoButton overlay={props.video_overlay.clone()} />
                </div>
            </nav>
        </header>
    }
}
