use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::config;
use crate::viewport::dom::scroll_to_top;
use crate::viewport::section_tracker::use_active_section;

#[derive(Debug, Clone, PartialEq)]
pub struct LegalSection {
    pub id: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
}

#[derive(Properties, PartialEq)]
pub struct LegalDocumentProps {
    pub title: AttrValue,
    pub last_updated: AttrValue,
    pub sections: &'static [LegalSection],
}

/// Long-form legal page with a sidebar that follows the reader.
#[function_component(LegalDocument)]
pub fn legal_document(props: &LegalDocumentProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    let section_ids: Vec<String> = props.sections.iter().map(|s| s.id.to_string()).collect();
    let active = use_active_section(section_ids, config::SECTION_SCROLL_OFFSET_PX);

    html! {
        <div class="legal-page">
            <style>
                {r#"
                .legal-page {
                    display: flex;
                    gap: 3rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 8rem 2rem 4rem;
                    color: #fff;
                }
                .legal-sidebar {
                    position: sticky;
                    top: 100px;
                    align-self: flex-start;
                    min-width: 220px;
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }
                .legal-sidebar button {
                    background: none;
                    border: none;
                    border-left: 2px solid rgba(255, 255, 255, 0.1);
                    color: #999;
                    text-align: left;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                    transition: color 0.2s ease, border-color 0.2s ease;
                }
                .legal-sidebar button.active {
                    color: #7EB2FF;
                    border-left-color: #1E90FF;
                }
                .legal-body h1 {
                    font-size: 2rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin-bottom: 0.5rem;
                }
                .legal-updated {
                    color: #666;
                    margin-bottom: 2.5rem;
                }
                .legal-body section {
                    background: rgba(0, 0, 0, 0.2);
                    border-radius: 12px;
                    padding: 2rem;
                    margin-bottom: 1.5rem;
                }
                .legal-body h2 {
                    color: #7EB2FF;
                    font-size: 1.4rem;
                    margin-bottom: 1rem;
                }
                .legal-body p {
                    color: #999;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }
                .legal-links a {
                    color: #1E90FF;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .legal-page {
                        flex-direction: column;
                        padding-top: 6rem;
                    }
                    .legal-sidebar {
                        display: none;
                    }
                }
                "#}
            </style>
            <nav class="legal-sidebar">
                {
                    props.sections.iter().enumerate().map(|(index, section)| {
                        let onclick = {
                            let scroll_to = active.scroll_to.clone();
                            let id = section.id.to_string();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                scroll_to.emit(id.clone());
                            })
                        };
                        html! {
                            <button
                                key={section.id}
                                class={classes!((index == active.index).then(|| "active"))}
                                {onclick}
                            >
                                {section.title}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </nav>
            <div class="legal-body">
                <h1>{props.title.clone()}</h1>
                <p class="legal-updated">{format!("Last updated: {}", props.last_updated)}</p>
                {
                    props.sections.iter().map(|section| html! {
                        <section id={section.id} key={section.id}>
                            <h2>{section.title}</h2>
                            { for section.paragraphs.iter().map(|p| html! { <p>{*p}</p> }) }
                        </section>
                    }).collect::<Html>()
                }
                <div class="legal-links">
                    <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
