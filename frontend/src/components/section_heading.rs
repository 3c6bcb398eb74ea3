use yew::prelude::*;

use crate::components::text_reveal::{RevealUnit, TextReveal};

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: String,
    #[prop_or_default]
    pub description: Option<String>,
    /// Small "01"-style counter shown above the title.
    #[prop_or_default]
    pub number: Option<String>,
    #[prop_or_default]
    pub id: Option<String>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <header class="section-heading">
            <style>
                {r#"
                .section-heading {
                    display: grid;
                    gap: 1rem;
                    margin-bottom: 3rem;
                    max-width: 56rem;
                }
                .section-heading .sh-number {
                    font-size: 0.8rem;
                    letter-spacing: 0.4em;
                    text-transform: uppercase;
                    color: #7A1CAC;
                }
                .section-heading h2 {
                    font-size: clamp(2rem, 4.5vw, 3.75rem);
                    line-height: 1.05;
                    margin: 0;
                }
                .section-heading p {
                    color: rgba(26, 26, 29, 0.6);
                    font-size: 1.05rem;
                    max-width: 40rem;
                    margin: 0;
                }
                "#}
            </style>
            {
                if let Some(number) = &props.number {
                    html! { <span class="sh-number">{format!("({})", number)}</span> }
                } else {
                    html! {}
                }
            }
            <h2 id={props.id.clone()}>
                <TextReveal text={props.title.clone()} unit={RevealUnit::Words} />
            </h2>
            {
                if let Some(description) = &props.description {
                    html! { <p>{description}</p> }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
