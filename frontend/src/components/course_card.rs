use yew::prelude::*;

use crate::catalog::{format_inr, Course};

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub course: Course,
    pub on_view_syllabus: Callback<String>,
}

#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let course = &props.course;
    let onclick = {
        let on_view_syllabus = props.on_view_syllabus.clone();
        let level = course.level.clone();
        Callback::from(move |_: MouseEvent| on_view_syllabus.emit(level.clone()))
    };

    html! {
        <div class="flex flex-col bg-white rounded-2xl shadow-xl overflow-hidden hover:shadow-2xl transition-all duration-300 transform hover:-translate-y-2 border border-slate-100">
            <div class={classes!(course.color.clone(), "p-6", "text-white", "relative", "overflow-hidden")}>
                <span class="inline-block px-3 py-1 bg-white/20 rounded-full text-xs font-semibold mb-3 tracking-wide backdrop-blur-sm">
                    {format!("{} COURSE", course.level)}
                </span>
                <h3 class="text-2xl font-bold mb-1">{&course.title}</h3>
                <p class="text-white/90 text-sm">{&course.target_audience}</p>
            </div>

            <div class="p-6 flex-grow flex flex-col">
                <div class="flex items-center mb-6">
                    <span class="text-3xl font-bold text-slate-800">{format!("₹{}", format_inr(course.price))}</span>
                    <span class="text-xs ml-2 font-medium bg-green-100 text-green-700 px-2 py-0.5 rounded">{"Great Value"}</span>
                </div>

                <p class="text-slate-600 text-sm mb-6 min-h-[40px]">{&course.description}</p>

                <div class="flex items-center text-slate-500 text-sm mb-6 bg-slate-50 p-3 rounded-lg">
                    <span class="mr-2">{"🕒"}</span>
                    <span>{&course.duration}</span>
                </div>

                <div class="mb-6">
                    <h4 class="text-xs font-bold text-slate-400 uppercase tracking-wider mb-3">{"What you'll learn"}</h4>
                    <ul class="space-y-2">
                        { for course.skills.iter().take(3).map(|skill| html! {
                            <li class="flex items-start text-sm text-slate-700">
                                <span class="mr-2 text-green-500">{"✓"}</span>
                                {skill}
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="flex flex-wrap gap-2 mb-6">
                    { for course.features.iter().map(|feature| html! {
                        <span class="text-xs bg-slate-100 text-slate-600 px-2 py-1 rounded">{feature}</span>
                    }) }
                </div>

                <div class="mt-auto">
                    <button
                        {onclick}
                        class={classes!("w-full", "py-3", "rounded-xl", "font-bold", "text-white", "transition-colors", "flex", "items-center", "justify-center", button_color(&course.color), "hover:opacity-90", "shadow-md")}
                    >
                        {"📖 View Syllabus Book"}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Darker shade of the course theme for the call to action.
fn button_color(theme: &str) -> String {
    theme.replace("600", "700")
}
