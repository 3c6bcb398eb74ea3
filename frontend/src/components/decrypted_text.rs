use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::hooks::use_in_view_once;

pub const DEFAULT_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@#$%^&*()_+";

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RevealDirection {
    Start,
    End,
    Center,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AnimateOn {
    Hover,
    View,
    Both,
}

/// Scramble state for one run of the effect.
pub struct Scrambler {
    text: Vec<char>,
    revealed: Vec<bool>,
    revealed_count: usize,
    direction: RevealDirection,
    sequential: bool,
    max_iterations: u32,
    iteration: u32,
    original_only: bool,
    charset: Vec<char>,
}

impl Scrambler {
    pub fn new(
        text: &str,
        direction: RevealDirection,
        sequential: bool,
        max_iterations: u32,
        original_only: bool,
        characters: &str,
    ) -> Self {
        let text: Vec<char> = text.chars().collect();
        let charset: Vec<char> = if original_only {
            let mut unique = Vec::new();
            for c in text.iter().copied().filter(|c| *c != ' ') {
                if !unique.contains(&c) {
                    unique.push(c);
                }
            }
            unique
        } else {
            characters.chars().collect()
        };
        Self {
            revealed: vec![false; text.len()],
            text,
            revealed_count: 0,
            direction,
            sequential,
            max_iterations,
            iteration: 0,
            original_only,
            charset,
        }
    }

    pub fn original(&self) -> String {
        self.text.iter().collect()
    }

    fn next_index(&self) -> Option<usize> {
        let len = self.text.len();
        if self.revealed_count >= len {
            return None;
        }
        let size = self.revealed_count;
        let candidate = match self.direction {
            RevealDirection::Start => Some(size),
            RevealDirection::End => len.checked_sub(1 + size),
            RevealDirection::Center => {
                let middle = len / 2;
                let offset = size / 2;
                if size % 2 == 0 {
                    Some(middle + offset)
                } else {
                    middle.checked_sub(offset + 1)
                }
            }
        };
        match candidate {
            Some(i) if i < len && !self.revealed[i] => Some(i),
            _ => self.revealed.iter().position(|r| !r),
        }
    }

    fn render(&self, random: &mut dyn FnMut() -> f64) -> String {
        let pick = |random: &mut dyn FnMut() -> f64, n: usize| -> usize {
            ((random() * n as f64).floor() as usize).min(n.saturating_sub(1))
        };

        if self.original_only {
            let mut pool: Vec<char> = self
                .text
                .iter()
                .zip(&self.revealed)
                .filter(|(c, r)| **c != ' ' && !**r)
                .map(|(c, _)| *c)
                .collect();
            for i in (1..pool.len()).rev() {
                let j = pick(random, i + 1);
                pool.swap(i, j);
            }
            let mut pool = pool.into_iter();
            self.text
                .iter()
                .zip(&self.revealed)
                .map(|(c, r)| {
                    if *c == ' ' || *r {
                        *c
                    } else {
                        pool.next().unwrap_or(*c)
                    }
                })
                .collect()
        } else {
            self.text
                .iter()
                .zip(&self.revealed)
                .map(|(c, r)| {
                    if *c == ' ' || *r || self.charset.is_empty() {
                        *c
                    } else {
                        self.charset[pick(random, self.charset.len())]
                    }
                })
                .collect()
        }
    }

    /// Advances one frame. Returns the text to show and whether the run is over.
    pub fn tick(&mut self, random: &mut dyn FnMut() -> f64) -> (String, bool) {
        if self.sequential {
            if let Some(i) = self.next_index() {
                self.revealed[i] = true;
                self.revealed_count += 1;
            }
            let done = self.revealed_count >= self.text.len();
            (self.render(random), done)
        } else {
            self.iteration += 1;
            if self.iteration >= self.max_iterations {
                (self.original(), true)
            } else {
                (self.render(random), false)
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DecryptedTextProps {
    pub text: String,
    #[prop_or(50)]
    pub speed: u32,
    #[prop_or(10)]
    pub max_iterations: u32,
    #[prop_or(false)]
    pub sequential: bool,
    #[prop_or(RevealDirection::Start)]
    pub reveal_direction: RevealDirection,
    #[prop_or(false)]
    pub use_original_chars_only: bool,
    #[prop_or(DEFAULT_CHARSET.to_string())]
    pub characters: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub encrypted_class: Classes,
    #[prop_or(AnimateOn::Hover)]
    pub animate_on: AnimateOn,
}

#[function_component(DecryptedText)]
pub fn decrypted_text(props: &DecryptedTextProps) -> Html {
    let node = use_node_ref();
    let display = use_state(|| props.text.clone());
    let hovering = use_state_eq(|| false);
    let by_view = matches!(props.animate_on, AnimateOn::View | AnimateOn::Both);
    let by_hover = matches!(props.animate_on, AnimateOn::Hover | AnimateOn::Both);
    let seen = use_in_view_once(node.clone(), 0.0);
    let view_done = use_state_eq(|| false);

    let active = *hovering || (by_view && seen && !*view_done);

    {
        let display = display.clone();
        let view_done = view_done.clone();
        let text = props.text.clone();
        let speed = props.speed.max(1);
        let direction = props.reveal_direction;
        let sequential = props.sequential;
        let max_iterations = props.max_iterations;
        let original_only = props.use_original_chars_only;
        let characters = props.characters.clone();
        use_effect_with_deps(
            move |(active, text): &(bool, String)| {
                let interval = if *active {
                    let mut scrambler = Scrambler::new(text, direction, sequential, max_iterations, original_only, &characters);
                    let mut finished = false;
                    Some(Interval::new(speed, move || {
                        if finished {
                            return;
                        }
                        let mut random = || web_sys::js_sys::Math::random();
                        let (next, done) = scrambler.tick(&mut random);
                        display.set(next);
                        if done {
                            finished = true;
                            view_done.set(true);
                        }
                    }))
                } else {
                    display.set(text.clone());
                    None
                };
                move || drop(interval)
            },
            (active, text),
        );
    }

    let onmouseenter = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| {
            if by_hover {
                hovering.set(true);
            }
        })
    };
    let onmouseleave = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(false))
    };

    let original: Vec<char> = props.text.chars().collect();
    html! {
        <span
            ref={node}
            class={classes!("decrypted-text", props.class.clone())}
            style="display: inline-block; white-space: pre-wrap;"
            {onmouseenter}
            {onmouseleave}
        >
            <span class="sr-only">{props.text.clone()}</span>
            <span aria-hidden="true">
                { for display.chars().enumerate().map(|(i, c)| {
                    let encrypted = original.get(i) != Some(&c);
                    html! {
                        <span class={if encrypted { props.encrypted_class.clone() } else { props.class.clone() }}>{c}</span>
                    }
                }) }
            </span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(v: f64) -> impl FnMut() -> f64 {
        move || v
    }

    fn reveal_order(text: &str, direction: RevealDirection) -> Vec<usize> {
        let mut s = Scrambler::new(text, direction, true, 10, false, "#");
        let mut order = Vec::new();
        let mut random = fixed(0.0);
        loop {
            let before = s.revealed.clone();
            let (_, done) = s.tick(&mut random);
            let i = s.revealed.iter().zip(&before).position(|(now, was)| *now && !*was);
            order.extend(i);
            if done {
                break;
            }
        }
        order
    }

    #[test]
    fn sequential_directions() {
        assert_eq!(reveal_order("abcde", RevealDirection::Start), vec![0, 1, 2, 3, 4]);
        assert_eq!(reveal_order("abcde", RevealDirection::End), vec![4, 3, 2, 1, 0]);
        assert_eq!(reveal_order("abcde", RevealDirection::Center), vec![2, 1, 3, 0, 4]);
    }

    #[test]
    fn sequential_ends_on_original() {
        let mut s = Scrambler::new("hi there", RevealDirection::Start, true, 10, false, "#");
        let mut random = fixed(0.5);
        let (first, _) = s.tick(&mut random);
        assert_eq!(first, "h# #####");
        let mut last = (String::new(), false);
        for _ in 0..20 {
            last = s.tick(&mut random);
            if last.1 {
                break;
            }
        }
        assert_eq!(last, ("hi there".to_string(), true));
    }

    #[test]
    fn iterative_mode_stops_after_max_iterations() {
        let mut s = Scrambler::new("abc", RevealDirection::Start, false, 3, false, "XYZ");
        let mut random = fixed(0.99);
        assert_eq!(s.tick(&mut random), ("ZZZ".to_string(), false));
        assert_eq!(s.tick(&mut random).1, false);
        assert_eq!(s.tick(&mut random), ("abc".to_string(), true));
    }

    #[test]
    fn original_chars_only_is_a_permutation() {
        let mut s = Scrambler::new("abc d", RevealDirection::Start, false, 5, true, DEFAULT_CHARSET);
        let mut random = fixed(0.0);
        let (out, _) = s.tick(&mut random);
        assert_eq!(out.chars().nth(3), Some(' '));
        let mut got: Vec<char> = out.chars().filter(|c| *c != ' ').collect();
        got.sort();
        assert_eq!(got, vec!['a', 'b', 'c', 'd']);
    }
}
