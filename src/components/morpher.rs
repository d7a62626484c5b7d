use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

// "Ethereum" as written in a handful of the site's languages
pub const WORDS: [&str; 10] = [
    "Ethereum",
    "イーサリアム",
    "Etereum",
    "이더리움",
    "Эфириум",
    "Ξthereum",
    "以太坊",
    "Eterium",
    "إثيريوم",
    "Ethereo",
];

pub fn next_word(current: usize) -> usize {
    (current + 1) % WORDS.len()
}

#[function_component(Morpher)]
pub fn morpher() -> Html {
    let index = use_state(|| 0usize);

    {
        let index_setter = index.setter();
        use_effect_with_deps(
            move |_| {
                // Captured state handles go stale, so the interval keeps its own count
                let mut current = 0;
                let interval = Interval::new(config::MORPHER_INTERVAL_MS, move || {
                    current = next_word(current);
                    index_setter.set(current);
                });

                // Dropping the interval cancels it
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="morpher" aria-hidden="true">
            <span class="morpher-word">{WORDS[*index % WORDS.len()]}</span>
        </div>
    }
}
