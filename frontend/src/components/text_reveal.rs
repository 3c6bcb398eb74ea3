use yew::prelude::*;

use crate::hooks::use_in_view_once;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RevealUnit {
    /// Words blur in one after another.
    Words,
    /// Characters slide up one after another.
    Chars,
}

/// One animated piece of the text and when it starts, in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealPiece {
    pub text: String,
    pub delay: f64,
    pub highlighted: bool,
}

pub fn reveal_pieces(text: &str, unit: RevealUnit, delay: f64, stagger: f64, highlight: &[char]) -> Vec<RevealPiece> {
    match unit {
        RevealUnit::Words => text
            .split_whitespace()
            .enumerate()
            .map(|(i, word)| RevealPiece {
                text: word.to_string(),
                delay: delay + i as f64 * stagger,
                highlighted: false,
            })
            .collect(),
        RevealUnit::Chars => text
            .chars()
            .enumerate()
            .map(|(i, c)| RevealPiece {
                text: c.to_string(),
                delay: delay + i as f64 * stagger,
                highlighted: highlight.contains(&c),
            })
            .collect(),
    }
}

#[derive(Properties, PartialEq)]
pub struct TextRevealProps {
    pub text: String,
    #[prop_or(RevealUnit::Words)]
    pub unit: RevealUnit,
    #[prop_or(0.0)]
    pub delay: f64,
    /// Defaults to 50ms for words and 30ms for characters.
    #[prop_or_default]
    pub stagger: Option<f64>,
    #[prop_or_default]
    pub highlight: Vec<char>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TextReveal)]
pub fn text_reveal(props: &TextRevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view_once(node.clone(), 50.0);

    let stagger = props.stagger.unwrap_or(match props.unit {
        RevealUnit::Words => 0.05,
        RevealUnit::Chars => 0.03,
    });
    let pieces = reveal_pieces(&props.text, props.unit, props.delay, stagger, &props.highlight);
    let unit_class = match props.unit {
        RevealUnit::Words => "reveal-words",
        RevealUnit::Chars => "reveal-chars",
    };

    html! {
        <span
            ref={node}
            class={classes!("text-reveal", unit_class, visible.then(|| "visible"), props.class.clone())}
            aria-label={props.text.clone()}
        >
            <style>
                {r#"
                .text-reveal { display: inline-flex; flex-wrap: wrap; }
                .reveal-words { column-gap: 0.5rem; }
                .text-reveal > span {
                    display: inline-block;
                    opacity: 0;
                    white-space: pre;
                }
                .reveal-words > span { filter: blur(10px); transform: translateY(10px); }
                .reveal-chars > span { transform: translateY(0.6em); }
                .text-reveal.visible > span {
                    animation: revealIn 0.5s cubic-bezier(0.22, 1, 0.36, 1) forwards;
                }
                .text-reveal .highlight { color: var(--color-primary, #7A1CAC); }
                @keyframes revealIn {
                    to { opacity: 1; filter: blur(0); transform: translateY(0); }
                }
                @media (prefers-reduced-motion: reduce) {
                    .text-reveal > span { opacity: 1; filter: none; transform: none; animation: none !important; }
                }
                "#}
            </style>
            { for pieces.into_iter().map(|piece| html! {
                <span
                    aria-hidden="true"
                    class={classes!(piece.highlighted.then(|| "highlight"))}
                    style={format!("animation-delay: {:.3}s;", piece.delay)}
                >
                    {piece.text}
                </span>
            }) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_staggered() {
        let pieces = reveal_pieces("Design  develop dominate", RevealUnit::Words, 0.2, 0.05, &[]);
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0].delay, 0.2);
        assert!((pieces[2].delay - 0.3).abs() < 1e-9);
        assert_eq!(pieces[1].text, "develop");
    }

    #[test]
    fn chars_keep_spaces_and_highlight() {
        let pieces = reveal_pieces("DO D", RevealUnit::Chars, 0.0, 0.03, &['D']);
        let texts: Vec<_> = pieces.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["D", "O", " ", "D"]);
        assert!(pieces[0].highlighted && !pieces[1].highlighted && pieces[3].highlighted);
        assert!((pieces[3].delay - 0.09).abs() < 1e-9);
    }
}
