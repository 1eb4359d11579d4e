use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Sponsor {
    pub name: &'static str,
    pub logo_src: &'static str,
}

const fn sponsor(name: &'static str, logo_src: &'static str) -> Option<Sponsor> {
    Some(Sponsor { name, logo_src })
}

/// Logo wall in reading order; `None` leaves an empty tile.
pub const SPONSORS: [Option<Sponsor>; 55] = [
    sponsor("Allianz", "/sponsors/logo-01.svg"),
    sponsor("MSC", "/sponsors/logo-02.svg"),
    sponsor("B", "/sponsors/logo-03.svg"),
    sponsor("Doreca", "/sponsors/logo-04.svg"),
    sponsor("Accademia", "/sponsors/logo-05.svg"),
    None,
    sponsor("Aosta", "/sponsors/logo-09.svg"),
    sponsor("Valle", "/sponsors/logo-10.svg"),
    sponsor("Brondi", "/sponsors/logo-11.svg"),
    sponsor("Valdier", "/sponsors/logo-12.svg"),
    sponsor("Forever", "/sponsors/logo-01.svg"),
    None,
    sponsor("Manfrotto", "/sponsors/logo-06.svg"),
    None,
    sponsor("Kemon", "/sponsors/logo-07.svg"),
    sponsor("Marchesi", "/sponsors/logo-08.svg"),
    sponsor("Corte", "/sponsors/logo-01.svg"),
    sponsor("TISG", "/sponsors/logo-02.svg"),
    None,
    sponsor("Forged", "/sponsors/logo-03.svg"),
    sponsor("AVBN", "/sponsors/logo-04.svg"),
    sponsor("JBL", "/sponsors/logo-05.svg"),
    sponsor("Intel", "/sponsors/logo-09.svg"),
    sponsor("Charles Philip", "/sponsors/logo-10.svg"),
    sponsor("Scarpa Mondo", "/sponsors/logo-11.svg"),
    sponsor("BKFC", "/sponsors/logo-12.svg"),
    sponsor("Shinto", "/sponsors/logo-01.svg"),
    None,
    sponsor("Nespresso", "/sponsors/logo-06.svg"),
    sponsor("Logitech", "/sponsors/logo-07.svg"),
    sponsor("Philips", "/sponsors/logo-08.svg"),
    None,
    sponsor("Mont Blanc", "/sponsors/logo-01.svg"),
    sponsor("GoPro", "/sponsors/logo-02.svg"),
    sponsor("Pro", "/sponsors/logo-03.svg"),
    None,
    sponsor("Yamamoto", "/sponsors/logo-04.svg"),
    sponsor("Lexar", "/sponsors/logo-05.svg"),
    sponsor("Pablo", "/sponsors/logo-09.svg"),
    sponsor("Nabla", "/sponsors/logo-10.svg"),
    sponsor("Asus", "/sponsors/logo-11.svg"),
    sponsor("Profoto", "/sponsors/logo-12.svg"),
    sponsor("Lavazza", "/sponsors/logo-01.svg"),
    sponsor("C", "/sponsors/logo-02.svg"),
    sponsor("Pandora", "/sponsors/logo-06.svg"),
    None,
    sponsor("Enerfin", "/sponsors/logo-07.svg"),
    sponsor("Leiiia", "/sponsors/logo-08.svg"),
    None,
    sponsor("Palazzo", "/sponsors/logo-02.svg"),
    None,
    sponsor("Miele", "/sponsors/logo-03.svg"),
    sponsor("Wacom", "/sponsors/logo-04.svg"),
    sponsor("Punta", "/sponsors/logo-05.svg"),
    None,
];

#[derive(Properties, PartialEq)]
struct SponsorTileProps {
    sponsor: Option<Sponsor>,
}

#[function_component(SponsorTile)]
fn sponsor_tile(props: &SponsorTileProps) -> Html {
    html! {
        <div class="sponsor-tile">
            if let Some(sponsor) = &props.sponsor {
                <div class="sponsor-logo">
                    <img src={sponsor.logo_src} alt={sponsor.name} width="140" height="64" loading="lazy" />
                </div>
            }
        </div>
    }
}

#[function_component(Sponsors)]
pub fn sponsors() -> Html {
    use_title("Sponsors · IRH '25".to_string());

    html! {
        <main class="sponsors-page">
            <div class="sponsors-head">
                <p class="eyebrow">{"Our Partners"}</p>
                <h1>{"Sponsors"}</h1>
                <p class="sponsors-lead">
                    {"Powering the next generation of innovation. We are proud to be supported by these industry leaders."}
                </p>
            </div>
            <div class="sponsor-grid">
                { for SPONSORS.iter().map(|sponsor| html! { <SponsorTile sponsor={sponsor.clone()} /> }) }
            </div>
            <div class="sponsors-cta">
                <p>{"Interested in sponsoring?"}</p>
                <a href="mailto:sponsor@hackathon.com" class="sponsor-button">{"Become a Sponsor"}</a>
            </div>
            <style>
                {r#"
                .sponsors-page {
                    min-height: 100vh;
                    padding: 8rem 1.5rem 5rem;
                    background: black;
                    color: white;
                }
                .sponsors-head {
                    max-width: 80rem;
                    margin: 0 auto 4rem;
                    text-align: center;
                }
                .sponsors-head .eyebrow {
                    font-family: monospace;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    color: rgba(255, 255, 255, 0.5);
                }
                .sponsors-head h1 {
                    font-family: serif;
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    margin: 1rem 0 1.5rem;
                }
                .sponsors-lead {
                    max-width: 42rem;
                    margin: 0 auto;
                    color: rgba(255, 255, 255, 0.4);
                    line-height: 1.6;
                }
                .sponsor-grid {
                    max-width: 1400px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(11, 1fr);
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    border-left: 1px solid rgba(255, 255, 255, 0.2);
                }
                .sponsor-tile {
                    height: 8rem;
                    border-right: 1px dashed rgba(255, 255, 255, 0.2);
                    border-bottom: 1px dashed rgba(255, 255, 255, 0.2);
                }
                .sponsor-logo {
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    transition: transform 0.3s ease, background 0.3s ease;
                }
                .sponsor-logo:hover {
                    background: rgba(255, 255, 255, 0.05);
                    transform: translateY(-4px) scale(1.1);
                }
                .sponsor-logo img {
                    height: 3rem;
                    width: auto;
                    object-fit: contain;
                }
                .sponsors-cta {
                    margin-top: 5rem;
                    text-align: center;
                    color: rgba(255, 255, 255, 0.3);
                    font-size: 0.9rem;
                }
                .sponsor-button {
                    display: inline-block;
                    margin-top: 1.5rem;
                    padding: 0.75rem 2rem;
                    border-radius: 999px;
                    background: white;
                    color: black;
                    text-decoration: none;
                    font-weight: 500;
                }
                .sponsor-button:hover { background: #e5e5e5; }
                @media (max-width: 1200px) { .sponsor-grid { grid-template-columns: repeat(6, 1fr); } }
                @media (max-width: 768px) { .sponsor-grid { grid-template-columns: repeat(4, 1fr); } }
                @media (max-width: 480px) {
                    .sponsor-grid { grid-template-columns: repeat(2, 1fr); }
                    .sponsor-tile { height: 6rem; }
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_keeps_its_gaps() {
        assert_eq!(SPONSORS.iter().filter(|s| s.is_none()).count(), 11);
        assert!(SPONSORS[5].is_none());
        assert_eq!(SPONSORS[0].as_ref().map(|s| s.name), Some("Allianz"));
    }

    #[test]
    fn every_logo_is_served_from_the_sponsors_folder() {
        for sponsor in SPONSORS.iter().flatten() {
            assert!(sponsor.logo_src.starts_with("/sponsors/"), "{}", sponsor.name);
        }
    }
}
