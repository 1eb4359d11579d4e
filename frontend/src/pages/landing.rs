use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;
use web_sys::Element;
use crate::Route;

const MANIFESTO: &str = "We are building a bridge not of steel, but of silicon. The Indo-Russia \
Hackathon is a convergence of two great nations, uniting minds to solve global challenges \
through AI, Blockchain, and Space Technology. This is not just a competition; it is a \
declaration of the future.";

const MAPS_LINK: &str = "https://www.google.com/maps/place/Rajiv+Gandhi+Institute+of+Petroleum+Technology+(RGIPT)/@26.2649092,81.5071294,893m/data=!3m1!1e3!4m10!1m2!2m1!1srgipt!3m6!1s0x399ba1580bf13c33:0x32df0c8e914ab52e!8m2!3d26.2655958!4d81.5093391!15sCgVyZ2lwdJIBF2VkdWNhdGlvbmFsX2luc3RpdHV0aW9u4AEA!16s%2Fm%2F03d7rbq";
const MAPS_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3502.2127798272896!2d81.5071294!3d26.2649092!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x399ba1580bf13c33:0x32df0c8e914ab52e!2sRajiv+Gandhi+Institute+of+Petroleum+Technology+(RGIPT)!5e0!3m2!1sen!2sin!4v1234567890123!5m2!1sen!2sin";

/// Expression of Interest letter, copied into the bundle from `public/docs/`.
pub const BROCHURE_PATH: &str = "/docs/russia.pdf";
const BROCHURE_DOWNLOAD_NAME: &str = "Expression_of_Interest_Go_BRICS_Hackathon.pdf";

const EVALUATION: [(&str, u8); 4] = [
    ("Problem Clarity", 30),
    ("Solution Logic", 25),
    ("Practical Relevance", 25),
    ("Innovation", 20),
];

const BENEFITS: [&str; 4] = [
    "Global academic & industry exposure",
    "Internships & placement prospects",
    "Student exchange opportunities",
    "Certificates & recognition",
];

/// How far the manifesto has been read, 0.0 to 1.0. Starts when the section top
/// reaches 80% of the viewport and completes when its bottom passes the middle.
pub fn reveal_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let start = viewport_height * 0.8;
    let span = section_height + viewport_height * 0.3;
    if span <= 0.0 {
        return 1.0;
    }
    ((start - section_top) / span).clamp(0.0, 1.0)
}

/// Number of manifesto words lit at `progress`.
pub fn words_lit(progress: f64, word_count: usize) -> usize {
    ((progress * word_count as f64).ceil() as usize).min(word_count)
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-backdrop">
                <div class="hero-glow hero-glow--saffron"></div>
                <div class="hero-glow hero-glow--blue"></div>
            </div>
            <h1 class="hero-title">
                <span class="hero-line hero-line--first">{"Energy"}</span>
                <span class="hero-line hero-line--second">{"O-Thon"}</span>
            </h1>
            <p class="hero-subtitle">
                {"Indo-Russian Bilateral Energy Hackathon"}
                <br/>
                <strong>{"Hackathon 2025"}</strong>
            </p>
            <div class="hero-scroll">{"Scroll to Explore"}</div>
        </section>
    }
}

#[function_component(Manifesto)]
fn manifesto() -> Html {
    let section_ref = use_node_ref();
    // re-render on scroll; the position itself is read from the layout below
    let _ = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    let words: Vec<&str> = MANIFESTO.split_whitespace().collect();

    let lit = section_ref
        .cast::<Element>()
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            words_lit(reveal_progress(rect.top(), rect.height(), viewport_height), words.len())
        })
        .unwrap_or(0);

    html! {
        <section id="manifesto" class="manifesto" ref={section_ref}>
            <p class="manifesto-text">
                { for words.iter().enumerate().map(|(i, word)| html! {
                    <span class={classes!("word", (i < lit).then_some("lit"))}>{*word}</span>
                }) }
            </p>
        </section>
    }
}

/// Viewer link for the brochure; `#view=FitH` fits the page width.
pub fn brochure_embed_src(path: &str) -> String {
    format!("{}#view=FitH", path)
}

#[function_component(Brochure)]
fn brochure() -> Html {
    let expanded = use_state(|| false);
    let section_ref = use_node_ref();

    let toggle = {
        let expanded = expanded.clone();
        let section_ref = section_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let expanding = !*expanded;
            expanded.set(expanding);
            if expanding {
                if let Some(el) = section_ref.cast::<Element>() {
                    el.scroll_into_view();
                }
            }
        })
    };

    html! {
        <section class="brochure" ref={section_ref}>
            <p class="eyebrow eyebrow--accent">{"Official Document"}</p>
            <h2>{"Expression of Interest"}</h2>
            <p class="muted">
                {"Go-BRICS University Hackathons - Participation from Almetyevsk State Technological University \"Higher School of Oil\""}
            </p>
            <div class="brochure-stats">
                <div class="card"><p class="eyebrow">{"Participants"}</p><p class="stat">{"100"}</p><p class="muted">{"Students"}</p></div>
                <div class="card"><p class="eyebrow">{"Faculty"}</p><p class="stat">{"20"}</p><p class="muted">{"Scientific Supervisors"}</p></div>
                <div class="card"><p class="eyebrow">{"Institution"}</p><p class="stat">{"AGTU"}</p><p class="muted">{"Higher School of Oil"}</p></div>
            </div>
            <div class="card brochure-viewer">
                <div class="brochure-viewer__head">
                    <div>
                        <p class="eyebrow">{"Official Letter"}</p>
                        <p>{"To: Mr. Viktor Sergeevich Kokushkin, Vice President Go-BRICS Business Forum"}</p>
                    </div>
                    <button type="button" class="outline-button" onclick={toggle}>
                        { if *expanded { "Minimize" } else { "Expand" } }
                    </button>
                </div>
                <iframe
                    class={classes!("brochure-frame", expanded.then_some("expanded"))}
                    src={brochure_embed_src(BROCHURE_PATH)}
                    title="Expression of Interest - Go-BRICS University Hackathons"
                    loading="lazy"
                />
                <div class="brochure-viewer__foot">
                    <a href={BROCHURE_PATH} download={BROCHURE_DOWNLOAD_NAME}>{"Download PDF"}</a>
                    <a href={BROCHURE_PATH} target="_blank" rel="noopener noreferrer">{"Open in New Tab"}</a>
                </div>
            </div>
            <div class="details-columns brochure-context">
                <div>
                    <h3>{"Specialization Areas"}</h3>
                    <ul>
                        <li>{"Oil and Gas Engineering"}</li>
                        <li>{"Software Engineering"}</li>
                        <li>{"Mechatronics and Robotics"}</li>
                        <li>{"Energy Systems"}</li>
                        <li>{"Economics"}</li>
                    </ul>
                </div>
                <div>
                    <h3>{"University Leadership"}</h3>
                    <p><strong>{"Rector:"}</strong>{" A.A. Dyakonov"}</p>
                    <p><strong>{"Institution:"}</strong>{" Almetyevsk State Technological University \"Higher School of Oil\""}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(EventDetails)]
fn event_details() -> Html {
    html! {
        <section id="details" class="details">
            <p class="eyebrow">{"About The Event"}</p>
            <h2>{"General Information"}</h2>
            <div class="details-columns">
                <div>
                    <p><strong>{"Nature of Event:"}</strong>{" ENERGY-O-THON is a bilateral Indo-Russian energy hackathon."}</p>
                    <p><strong>{"Initiator & Organizer:"}</strong>{" The event is organized by the GO-BRICS Business Forum, which unites universities across BRICS nations."}</p>
                    <p><strong>{"Visionary Leadership:"}</strong>{" Initiated by Ms. Purnima Anand, President of the BRICS International Forum and GO-BRICS Business Forum."}</p>
                </div>
                <div>
                    <p><strong>{"Global Ambition:"}</strong>{" This is the world’s first BRICS nations hackathon, with plans to scale to a global magnitude of 50,000 participants."}</p>
                    <p><strong>{"Indian Coordinator:"}</strong>{" The Rajiv Gandhi Institute of Petroleum Technology (RGIPT) serves as the key coordinator from the Indian side."}</p>
                </div>
            </div>

            <div class="phase-grid">
                <div class="card">
                    <h3>{"Phase 1: Pilot"}</h3>
                    <p>{"A collaborative session between Indian and Russian Universities."}</p>
                    <ul>
                        <li><strong>{"Indian:"}</strong>{" Dept of CSE, RGIPT"}</li>
                        <li><strong>{"Russian:"}</strong>{" Higher School of Petroleum (Almetyevsk), Moscow Polytechnic University, Peter the Great St. Petersburg Polytechnic University, Gazprom-Polytech University"}</li>
                    </ul>
                </div>
                <div class="card">
                    <h3>{"Phase 2: Full-Scale"}</h3>
                    <p>{"March 2026"}</p>
                    <p class="muted">{"A major event between Russia and India involving approximately 7,000 participants. Pathway to the Phase 2 Pan-India Round."}</p>
                </div>
                <div class="card">
                    <h3>{"Participation"}</h3>
                    <ul>
                        <li><strong>{"Team:"}</strong>{" 3–5 students. Interdisciplinary & mixed Indo-Russian teams encouraged."}</li>
                        <li><strong>{"Eligibility:"}</strong>{" UG/PG students from Engineering, Technology, Energy, AI, and Management."}</li>
                        <li><strong>{"Theme:"}</strong>{" Digital Advancements in the Energy Sector."}</li>
                    </ul>
                </div>
            </div>

            <div class="details-columns">
                <div>
                    <h3>{"Solution Requirements"}</h3>
                    <ul class="requirements">
                        <li><strong>{"Feasibility:"}</strong>{" Only conceptual and realistic solutions will be accepted."}</li>
                        <li><strong>{"Technology:"}</strong>{" Solutions must utilize Low Code or No Code platforms."}</li>
                        <li><strong>{"Practicality:"}</strong>{" Proposals must be financially and practically viable within the scope of the assigned task."}</li>
                    </ul>
                    <p class="fine-print">{"* Overly vague or impractical ideas will be penalized."}</p>
                </div>
                <div>
                    <h3>{"Evaluation Criteria"}</h3>
                    { for EVALUATION.iter().map(|(label, weight)| html! {
                        <div class="criterion">
                            <div class="criterion-row">
                                <span>{*label}</span>
                                <span class="mono">{format!("{}%", weight)}</span>
                            </div>
                            <div class="criterion-track">
                                <div class="criterion-bar" style={format!("width: {}%;", weight)}></div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="details-columns details-columns--ruled">
                <div>
                    <h3>{"Submission Format"}</h3>
                    <ul>
                        <li><strong>{"Pitch Deck:"}</strong>{" Maximum of 5 slides."}</li>
                        <li><strong>{"Video Presentation:"}</strong>{" 5–10 minute recorded video uploaded to Dion/GO-BRICS platform."}</li>
                        <li><strong>{"Live/Recorded Pitch:"}</strong>{" 3 minutes for pitch, 2 minutes for Q&A."}</li>
                    </ul>
                </div>
                <div>
                    <h3>{"Benefits"}</h3>
                    <ul class="benefits">
                        { for BENEFITS.iter().map(|benefit| html! { <li>{"✓ "}{*benefit}</li> }) }
                    </ul>
                </div>
            </div>

            <div class="contact">
                <p class="muted">{"Contact Person"}</p>
                <p class="contact-name">{"Dr. Akash Yadav | +91 8630179867"}</p>
            </div>
        </section>
    }
}

#[function_component(Tracks)]
fn tracks() -> Html {
    html! {
        <section id="tracks" class="tracks">
            <p class="eyebrow">{"Hackathon Tracks"}</p>
            <h2>{"Problem Statements"}</h2>
            <div class="coming-soon">
                <span class="pulse-dot"></span>
                {"Problem statements coming soon"}
            </div>
        </section>
    }
}

#[function_component(Venue)]
fn venue() -> Html {
    html! {
        <section class="venue">
            <p class="eyebrow">{"Location"}</p>
            <h2>{"Venue & Access"}</h2>
            <p class="muted">{"Join us at the intersection of innovation. Here's where the magic happens."}</p>
            <div class="venue-grid">
                <div class="card venue-map">
                    <div class="venue-map__head">
                        <span>{"Hackathon Venue"}</span>
                        <a href={MAPS_LINK} target="_blank" rel="noreferrer">{"Open in Maps"}</a>
                    </div>
                    <iframe
                        title="Hackathon venue map"
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                        src={MAPS_EMBED}
                    />
                </div>
                <div class="card">
                    <p class="eyebrow">{"Address"}</p>
                    <h3>{"Rajiv Gandhi Institute of Petroleum Technology"}</h3>
                    <p>{"Amethi, Uttar Pradesh 229416"}</p>
                    <p>{"India"}</p>
                    <div class="times">
                        <div><p class="eyebrow">{"Check-in"}</p><p>{"09:00 AM"}</p></div>
                        <div><p class="eyebrow">{"Event Start"}</p><p>{"10:00 AM"}</p></div>
                    </div>
                    <a class="outline-button" href={MAPS_LINK} target="_blank" rel="noreferrer">{"Directions"}</a>
                    <p class="fine-print">{"Free parking available · Public transport accessible · Refreshments provided"}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_title("IRH '25 · Energy O-Thon".to_string());

    html! {
        <div class="landing-page">
            <Hero />
            <Manifesto />
            <Brochure />
            <EventDetails />
            <Tracks />
            <Venue />
            <section class="footer-cta">
                <Link<Route> to={Route::Register} classes="outline-button">
                    {"Register Now"}
                </Link<Route>>
            </section>
            <style>
                {r#"
                .landing-page {
                    background: #050505;
                    color: white;
                    font-family: sans-serif;
                }
                .eyebrow {
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 0.28em;
                    color: rgba(255, 255, 255, 0.5);
                }
                .muted { color: rgba(255, 255, 255, 0.6); }
                .fine-print {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.4);
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .mono { font-family: monospace; }
                .hero {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    overflow: hidden;
                }
                .hero-glow {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(128px);
                    animation: pulse 4s ease-in-out infinite;
                }
                .hero-glow--saffron { top: 25%; left: 25%; background: rgba(249, 115, 22, 0.2); }
                .hero-glow--blue { bottom: 25%; right: 25%; background: rgba(59, 130, 246, 0.2); animation-delay: 1s; }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                .hero-title {
                    position: relative;
                    font-family: serif;
                    font-size: 12vw;
                    line-height: 0.85;
                    text-transform: uppercase;
                    text-align: center;
                    margin: 0;
                }
                .hero-line {
                    display: block;
                    animation: rise 1.5s cubic-bezier(0.16, 1, 0.3, 1) both;
                }
                .hero-line--second { animation-delay: 0.2s; }
                @keyframes rise {
                    from { opacity: 0; transform: translateY(100px) skewY(10deg); }
                    to { opacity: 1; transform: none; }
                }
                .hero-subtitle {
                    position: absolute;
                    bottom: 3rem;
                    left: 3rem;
                    padding-left: 1rem;
                    border-left: 1px solid rgba(255, 255, 255, 0.3);
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: rgba(255, 255, 255, 0.8);
                }
                .hero-scroll {
                    position: absolute;
                    bottom: 3rem;
                    right: 3rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: rgba(255, 255, 255, 0.5);
                }
                .manifesto {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 6rem 1.5rem;
                    background: #0a0a0a;
                }
                .manifesto-text {
                    max-width: 72rem;
                    font-family: serif;
                    font-size: clamp(1.8rem, 4vw, 3.75rem);
                    line-height: 1.2;
                }
                .manifesto-text .word {
                    display: inline-block;
                    margin-right: 0.5rem;
                    opacity: 0.2;
                    transition: opacity 0.3s ease;
                }
                .manifesto-text .word.lit { opacity: 1; }
                .eyebrow--accent { color: #f97316; font-weight: bold; }
                .brochure h2 {
                    font-family: serif;
                    font-size: clamp(2.25rem, 5vw, 4rem);
                    margin: 0.5rem 0 1.5rem;
                }
                .brochure-stats {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                    gap: 1rem;
                    margin: 2rem 0;
                }
                .brochure-stats .card { padding: 1rem; }
                .brochure-stats .stat { font-size: 1.5rem; font-weight: bold; margin: 0.25rem 0; }
                .brochure-viewer { padding: 0; overflow: hidden; }
                .brochure-viewer__head, .brochure-viewer__foot {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem;
                }
                .brochure-viewer__head { border-bottom: 1px solid rgba(255, 255, 255, 0.1); }
                .brochure-viewer__foot { border-top: 1px solid rgba(255, 255, 255, 0.1); font-size: 0.8rem; }
                .brochure-viewer__foot a { color: rgba(255, 255, 255, 0.7); }
                .brochure-frame {
                    display: block;
                    width: 100%;
                    height: 500px;
                    border: 0;
                    background: #f8f9fa;
                    transition: height 0.5s ease-in-out;
                }
                .brochure-frame.expanded { height: 1000px; }
                .brochure-context { margin-top: 2rem; }
                .details, .tracks, .venue, .brochure {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .details h2, .tracks h2, .venue h2 {
                    font-family: serif;
                    font-size: clamp(2.25rem, 5vw, 4rem);
                    margin: 0.5rem 0 1.5rem;
                }
                .details h3 { font-family: serif; font-size: 1.5rem; }
                .details strong { color: white; }
                .details-columns {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                    gap: 3rem;
                    margin-bottom: 4rem;
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.6;
                }
                .details-columns--ruled {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding-top: 4rem;
                }
                .phase-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }
                .card {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    transition: border-color 0.3s ease, transform 0.3s ease;
                }
                .card:hover {
                    border-color: rgba(255, 255, 255, 0.2);
                    transform: translateY(-4px);
                }
                .card ul { padding-left: 1rem; color: rgba(255, 255, 255, 0.5); }
                .criterion { margin-bottom: 1rem; }
                .criterion-row {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.9rem;
                    margin-bottom: 0.25rem;
                }
                .criterion-track {
                    height: 4px;
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 2px;
                    overflow: hidden;
                }
                .criterion-bar { height: 100%; background: rgba(255, 255, 255, 0.8); }
                .benefits { list-style: none; padding: 0; }
                .benefits li { margin-bottom: 0.75rem; }
                .contact {
                    padding: 1.5rem;
                    text-align: center;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                }
                .contact-name { font-family: serif; font-size: 1.25rem; }
                .tracks {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .coming-soon {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 1.1rem;
                }
                .pulse-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #f97316;
                    animation: pulse 2s ease-in-out infinite;
                }
                .venue-grid {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                .venue-map { padding: 0; overflow: hidden; }
                .venue-map__head {
                    display: flex;
                    justify-content: space-between;
                    padding: 1.25rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .venue-map__head a { color: rgba(255, 255, 255, 0.7); }
                .venue-map iframe {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    border: 0;
                }
                .times {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                    margin: 2rem 0;
                }
                .outline-button {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 999px;
                    color: white;
                    text-decoration: none;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    font-size: 0.85rem;
                    transition: all 0.3s ease;
                }
                .outline-button:hover { background: white; color: black; }
                .footer-cta {
                    display: flex;
                    justify-content: center;
                    padding: 4rem 1.5rem 8rem;
                }
                @media (max-width: 900px) {
                    .venue-grid { grid-template-columns: 1fr; }
                    .hero-subtitle { left: 1.5rem; }
                    .hero-scroll { display: none; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_starts_at_eighty_percent() {
        assert_eq!(reveal_progress(900.0, 1000.0, 1000.0), 0.0);
        assert_eq!(reveal_progress(800.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn reveal_completes_when_bottom_passes_the_middle() {
        // bottom at 500 means top at -500 for a 1000px tall section
        assert_eq!(reveal_progress(-500.0, 1000.0, 1000.0), 1.0);
        assert_eq!(reveal_progress(-2000.0, 1000.0, 1000.0), 1.0);
    }

    #[test]
    fn reveal_is_linear_in_between() {
        let halfway = reveal_progress(150.0, 1000.0, 1000.0);
        assert!((halfway - 0.5).abs() < 1e-9);
    }

    #[test]
    fn brochure_viewer_fits_page_width() {
        assert_eq!(brochure_embed_src(BROCHURE_PATH), "/docs/russia.pdf#view=FitH");
    }

    #[test]
    fn words_light_up_in_order() {
        assert_eq!(words_lit(0.0, 40), 0);
        assert_eq!(words_lit(0.5, 40), 20);
        assert_eq!(words_lit(0.51, 40), 21);
        assert_eq!(words_lit(1.0, 40), 40);
    }
}
