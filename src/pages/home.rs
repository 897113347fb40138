use yew::prelude::*;

use crate::components::around_card::AroundCard;
use crate::components::fullscreen_image::FullScreenImage;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::reservation_button::ReservationButton;
use crate::components::video_screen::VideoScreen;
use crate::config;
use crate::hooks::overlay::use_overlay;

const GALLERY: [&str; 6] = [
    "images/gallery/facade.jpg",
    "images/gallery/piscine.jpg",
    "images/gallery/terrasse.jpg",
    "images/gallery/salon.jpg",
    "images/gallery/chambre.jpg",
    "images/gallery/jardin.jpg",
];

#[function_component(Home)]
pub fn home() -> Html {
    // All ephemeral state of the page lives here and flows down. The
    // overlays receive intent handles, never raw setters.
    let video_overlay = use_overlay();
    let image_overlay = use_overlay();
    let current_image = use_state(|| 0usize);

    let on_prev = {
        let current_image = current_image.clone();
        Callback::from(move |_| {
            current_image.set((*current_image + GALLERY.len() - 1) % GALLERY.len());
        })
    };
    let on_next = {
        let current_image = current_image.clone();
        Callback::from(move |_| {
            current_image.set((*current_image + 1) % GALLERY.len());
        })
    };

    let open_gallery_at = |index: usize| {
        let current_image = current_image.clone();
        let open = image_overlay.open();
        Callback::from(move |event: MouseEvent| {
            current_image.set(index);
            open.emit(event);
        })
    };

    html! {
        <div class="home">
            if video_overlay.is_open() {
                <VideoScreen overlay={video_overlay.clone()} />
            }
            if image_overlay.is_open() {
                <FullScreenImage
                    overlay={image_overlay.clone()}
                    image={config::asset_url(GALLERY[*current_image])}
                    on_prev={on_prev}
                    on_next={on_next}
                />
            }

            <Header video_overlay={video_overlay.clone()} />
            <Hero video_overlay={video_overlay.clone()} />

            <section class="gallery" id="galerie">
                <h3>{"La villa en images"}</h3>
                <div class="gallery-grid">
                    { for GALLERY.iter().enumerate().map(|(index, image)| html! {
                        <button
                            key={*image}
                            class="gallery-thumb"
                            onclick={open_gallery_at(index)}
                            aria-label="Agrandir la photo"
                        >
                            <img src={config::asset_url(image)} alt="Photo de la villa" loading="lazy" />
                        </button>
                    }) }
                </div>
            </section>

            <section class="around" id="autour">
                <h3>{"À proximité"}</h3>
                <div class="around-grid">
                    <AroundCard
                        link="https://www.guadeloupe-tourisme.com/plage-de-lautre-bord/"
                        image={config::asset_url("images/around/autre-bord.jpg")}
                        title="Plage de l'Autre Bord"
                        text="Longue plage de sable doré bordée de raisiniers, idéale pour la baignade en famille."
                        distance="à 5 minutes"
                    />
                    <AroundCard
                        link="https://www.damoiseau.fr"
                        image={config::asset_url("images/around/damoiseau.jpg")}
                        title="Distillerie Damoiseau"
                        text="La dernière distillerie de Grande-Terre, visite libre et dégustation de rhum agricole."
                        distance="à 10 minutes"
                    />
                    <AroundCard
                        link="https://www.guadeloupe-tourisme.com/pointe-des-chateaux/"
                        image={config::asset_url("images/around/pointe-chateaux.jpg")}
                        title="Pointe des Châteaux"
                        text="Panorama spectaculaire sur l'Atlantique et les îles voisines depuis la croix."
                        distance="à 30 minutes"
                    />
                </div>
            </section>

            <section class="reservation">
                <ReservationButton />
            </section>

            <footer class="site-footer">
                <p>{"Villa des K'ribean — Le Moule, Guadeloupe"}</p>
            </footer>

            <style>
                {r#"
                    .home {
                        margin: 0;
                        color: #1a1a1a;
                        font-family: 'Helvetica Neue', Arial, sans-serif;
                    }

                    /* Hero */
                    .hero {
                        position: relative;
                        height: 100vh;
                        overflow: hidden;
                    }
                    .background-video-container {
                        position: absolute;
                        inset: 0;
                    }
                    .background-video {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-titles-container {
                        position: relative;
                        z-index: 1;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        text-align: center;
                        color: #fff;
                        text-shadow: 0 2px 12px rgba(0, 0, 0, 0.45);
                    }
                    .hero-title {
                        font-family: 'Playfair Display', serif;
                        font-size: 4rem;
                        letter-spacing: 0.12em;
                        text-transform: uppercase;
                        margin: 0;
                    }
                    .hero-subtitle {
                        font-size: 1.4rem;
                        font-weight: 300;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        margin: 1rem 0 0;
                    }
                    .hidden-apparition {
                        opacity: 0;
                        transform: translateY(24px);
                    }
                    .show-apparition {
                        opacity: 1;
                        transform: translateY(0);
                        transition: opacity 1.2s ease, transform 1.2s ease;
                    }
                    .hero-arrow {
                        position: absolute;
                        bottom: 2rem;
                        animation: bounce 2s infinite;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(10px); }
                    }

                    /* Header */
                    .site-header {
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 2;
                    }
                    .nav-container {
                        display: flex;
                        justify-content: flex-end;
                        padding: 1.5rem 2rem;
                    }
                    .video-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: rgba(255, 255, 255, 0.15);
                        border: 1px solid rgba(255, 255, 255, 0.6);
                        border-radius: 999px;
                        color: #fff;
                        padding: 0.6rem 1.4rem;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .video-button:hover {
                        background: rgba(255, 255, 255, 0.35);
                    }
                    .mobile-video-button {
                        display: none;
                        color: #fff;
                        cursor: pointer;
                        margin-top: 1.5rem;
                    }
                    .mobile-reservation-button {
                        display: none;
                        position: absolute;
                        top: 1.25rem;
                        right: 1.25rem;
                        z-index: 2;
                        background: #1a1a1a;
                        color: #fff;
                        text-decoration: none;
                        border-radius: 999px;
                        padding: 0.6rem 1.4rem;
                        font-size: 0.95rem;
                        letter-spacing: 0.05em;
                    }
                    @media (max-width: 480px) {
                        .hidden-480 { display: none; }
                        .video-button { display: none; }
                        .mobile-video-button { display: block; }
                        .mobile-reservation-button { display: block; }
                        .hero-title { font-size: 2.2rem; }
                    }

                    /* Overlays */
                    .video-screen,
                    .full-screen-image {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.92);
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .video-screen-content,
                    .full-screen-image-content {
                        position: relative;
                        width: min(90vw, 1100px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .video-screen-frame {
                        width: 100%;
                        aspect-ratio: 16 / 9;
                        border: 0;
                    }
                    .full-screen-image-img {
                        max-width: 90vw;
                        max-height: 85vh;
                        cursor: pointer;
                    }
                    .screen-close {
                        position: absolute;
                        top: -3rem;
                        right: 0;
                    }
                    .screen-close button {
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .screen-close img {
                        width: 32px;
                        height: 32px;
                    }
                    .arrow-btn {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        background: rgba(0, 0, 0, 0.4);
                        border: none;
                        border-radius: 50%;
                        color: #fff;
                        width: 48px;
                        height: 48px;
                        cursor: pointer;
                        z-index: 1;
                    }
                    .arrow-left { left: 0; }
                    .arrow-right { right: 0; }

                    /* Gallery */
                    .gallery, .around, .reservation {
                        padding: 4rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .gallery h3, .around h3 {
                        font-family: 'Playfair Display', serif;
                        font-size: 2rem;
                        text-align: center;
                        margin-bottom: 2rem;
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                        gap: 1rem;
                    }
                    .gallery-thumb {
                        padding: 0;
                        border: none;
                        background: none;
                        cursor: pointer;
                    }
                    .gallery-thumb img {
                        width: 100%;
                        height: 220px;
                        object-fit: cover;
                        border-radius: 8px;
                        transition: transform 0.3s ease;
                    }
                    .gallery-thumb img:hover {
                        transform: scale(1.03);
                    }

                    /* Around cards */
                    .around-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 1.5rem;
                    }
                    .around-grid a {
                        text-decoration: none;
                        color: inherit;
                    }
                    .around-card {
                        border-radius: 12px;
                        overflow: hidden;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
                        transition: transform 0.3s ease;
                    }
                    .around-card:hover {
                        transform: translateY(-4px);
                    }
                    .around-card-image img {
                        width: 100%;
                        height: 200px;
                        object-fit: cover;
                    }
                    .around-card-content {
                        padding: 1.25rem;
                    }
                    .around-card-title h4 {
                        margin: 0 0 0.5rem;
                        font-size: 1.2rem;
                    }
                    .around-text p {
                        margin: 0 0 0.75rem;
                        color: #555;
                        line-height: 1.5;
                    }
                    .around-distance p {
                        margin: 0;
                        font-size: 0.9rem;
                        font-style: italic;
                        color: #888;
                    }

                    /* Reservation */
                    .call-to-action-black {
                        background: #1a1a1a;
                        border-radius: 12px;
                        text-align: center;
                        padding: 2.5rem 1rem;
                    }
                    .call-to-action-black a {
                        color: #fff;
                        text-decoration: none;
                        font-family: 'Playfair Display', serif;
                        font-size: 1.6rem;
                        letter-spacing: 0.05em;
                    }
                    .call-to-action-span {
                        font-style: italic;
                    }

                    .site-footer {
                        text-align: center;
                        padding: 2rem;
                        color: #888;
                        font-size: 0.9rem;
                    }
                "#}
            </style>
        </div>
    }
}
