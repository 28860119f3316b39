use yew::prelude::*;
use web_sys::MouseEvent;

use crate::catalog::FaqEntry;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("bg-slate-50", "p-6", "rounded-xl", "border", "border-slate-100", "hover:border-postgres-200", "transition-colors", (*is_open).then(|| "open"))}>
            <button class="w-full text-left text-lg font-bold text-slate-900 flex items-start" onclick={toggle}>
                <span class="text-postgres-600 mr-2">{"?"}</span>
                <span class="flex-grow">{&props.question}</span>
                <span class="text-slate-400 ml-4">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <p class="text-slate-600 pl-6 mt-2">{&props.answer}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub faqs: Vec<FaqEntry>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    html! {
        <section class="py-24 bg-white relative">
            <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center text-slate-900 mb-12">{"Frequently Asked Questions"}</h2>
                <div class="space-y-6">
                    { for props.faqs.iter().map(|entry| html! {
                        <FaqItem question={entry.question.clone()} answer={entry.answer.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}
