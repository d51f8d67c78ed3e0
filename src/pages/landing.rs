use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::config;
use crate::viewport::dom::scroll_to_top;
use crate::viewport::reveal::RevealSection;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "⚡",
        title: "Fast by default",
        description: "Pages load in a blink, even on a slow connection.",
    },
    Feature {
        icon: "🔒",
        title: "Private",
        description: "No tracking cookies and no selling of your data. Ever.",
    },
    Feature {
        icon: "🧩",
        title: "Works with your tools",
        description: "Connect the services you already use in a couple of clicks.",
    },
    Feature {
        icon: "🌍",
        title: "Everywhere",
        description: "Use it from your laptop, your phone or any browser.",
    },
];

const STEPS: &[(&str, &str)] = &[
    ("Sign up", "Create an account with just your email address."),
    ("Connect", "Link the services you want to bring together."),
    ("Relax", "Let it run in the background while you get on with your day."),
];

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <RevealSection class="hero" threshold={config::HERO_REVEAL_THRESHOLD}>
            <h1>{"Less noise. More life."}</h1>
            <p class="hero-subtitle">
                {"Everything you need from your digital life, without the parts that eat your day."}
            </p>
            <Link<Route> to={Route::Login} classes="hero-cta">
                {"Get started"}
            </Link<Route>>
        </RevealSection>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <RevealSection id="features" class="features-section" threshold={config::SECTION_REVEAL_THRESHOLD}>
            <h2>{"Why people switch"}</h2>
            <div class="features-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <div class="feature-card" key={feature.title}>
                        <span class="feature-icon">{feature.icon}</span>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                    </div>
                }) }
            </div>
        </RevealSection>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    html! {
        <RevealSection id="how-it-works" class="steps-section" threshold={config::SECTION_REVEAL_THRESHOLD}>
            <h2>{"How it works"}</h2>
            <ol class="steps">
                { for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                    <li class="step" key={*title}>
                        <span class="step-number">{i + 1}</span>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </li>
                }) }
            </ol>
        </RevealSection>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    html! {
        <RevealSection class="cta-section" threshold={config::SECTION_REVEAL_THRESHOLD}>
            <h2>{"Ready when you are"}</h2>
            <p>{"It takes two minutes to set up. You can leave whenever you like."}</p>
            <Link<Route> to={Route::Login} classes="hero-cta">
                {"Log in"}
            </Link<Route>>
        </RevealSection>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="legal-links">
                <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                scroll_to_top();
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Hero />
            <Features />
            <HowItWorks />
            <CallToAction />
            <Footer />
            <style>
                {r#"
                .landing-page {
                    color: #fff;
                    background: #1a1a1a;
                    min-height: 100vh;
                }
                .reveal-hidden {
                    opacity: 0;
                    transform: translateY(40px);
                }
                .revealed {
                    opacity: 1;
                    transform: translateY(0);
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }
                .hero {
                    min-height: 90vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 2rem;
                }
                .hero h1 {
                    font-size: 3.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    color: #999;
                    font-size: 1.25rem;
                    max-width: 600px;
                    margin-bottom: 2.5rem;
                }
                .hero-cta {
                    display: inline-block;
                    background: #1E90FF;
                    color: #fff;
                    padding: 1rem 2.5rem;
                    border-radius: 8px;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }
                .hero-cta:hover {
                    background: #1a7fd6;
                }
                .features-section, .steps-section, .cta-section {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                    text-align: center;
                }
                .features-section h2, .steps-section h2, .cta-section h2 {
                    font-size: 2.25rem;
                    margin-bottom: 3rem;
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 2rem;
                }
                .feature-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 2rem;
                }
                .feature-icon {
                    font-size: 2rem;
                }
                .feature-card h3 {
                    color: #7EB2FF;
                    margin: 1rem 0 0.5rem;
                }
                .feature-card p, .step p, .cta-section p {
                    color: #999;
                    line-height: 1.6;
                }
                .steps {
                    list-style: none;
                    display: flex;
                    gap: 2rem;
                    padding: 0;
                }
                .step {
                    flex: 1;
                }
                .step-number {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: 2px solid #1E90FF;
                    color: #1E90FF;
                    font-weight: bold;
                }
                .cta-section p {
                    margin-bottom: 2rem;
                }
                .footer {
                    padding: 2rem;
                    text-align: center;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .legal-links a {
                    color: #1E90FF;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .legal-links a:hover {
                    color: #7EB2FF;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.25rem;
                    }
                    .steps {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
