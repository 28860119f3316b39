use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod catalog;
mod config;
mod scroll;
mod book {
    pub mod controller;
    pub mod hook;
    pub mod sheet;
}
mod components {
    pub mod book_syllabus;
    pub mod course_card;
}
mod pages {
    pub mod faq;
    pub mod landing;
    pub mod not_found;
}

use catalog::Catalog;
use config::BookTiming;
use pages::{landing::Landing, not_found::NotFound};
use scroll::{scroll_to_section, scroll_to_top};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/syllabus/:level")]
    Syllabus { level: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, catalog: Rc<Catalog>, timing: BookTiming) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing key="home" {catalog} {timing} /> }
        },
        Route::Syllabus { level } if catalog.has_level(&level) => {
            info!("Rendering syllabus for {}", level);
            let key = level.clone();
            html! { <Landing key={key} {catalog} {timing} initial_level={Some(level)} /> }
        },
        Route::Syllabus { level } => {
            log::warn!("No syllabus for level {}", level);
            html! { <NotFound /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

const NAV_SECTIONS: &[(&str, &str)] = &[
    ("courses", "Courses"),
    ("syllabus", "Syllabus"),
    ("reviews", "Reviews"),
    ("about", "About"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                Some(window) => {
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        if let Some(window) = web_sys::window() {
                            let scroll_y = window.scroll_y().unwrap_or(0.0);
                            is_scrolled.set(scroll_y > 10.0);
                        }
                    }) as Box<dyn FnMut()>);

                    if let Err(err) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        log::warn!("could not watch scrolling: {:?}", err);
                    }

                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    })
                }
                None => Box::new(|| ()),
            };
            move || destructor()
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_top = Callback::from(|_: MouseEvent| scroll_to_top());

    let section_link = |id: &'static str, label: &'static str, class: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id);
            menu_open.set(false);
        });
        html! {
            <a href={format!("#{}", id)} {onclick} {class}>{label}</a>
        }
    };

    html! {
        <nav class={classes!("sticky", "top-0", "z-50", "bg-white/90", "backdrop-blur-md", "border-b", "border-slate-200", "transition-all", "duration-300", (*is_scrolled).then(|| "shadow-sm"))}>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center cursor-pointer group" onclick={go_top}>
                        <div class="bg-postgres-50 p-2 rounded-lg group-hover:bg-postgres-100 transition-colors">{"🐘"}</div>
                        <span class="ml-3 text-xl font-bold text-slate-900 tracking-tight">
                            {"Postgres"}<span class="text-postgres-600">{"Mastery"}</span>
                        </span>
                    </div>
                    <div class="hidden md:flex space-x-8">
                        { for NAV_SECTIONS.iter().map(|&(id, label)| {
                            section_link(id, label, "text-slate-600 hover:text-postgres-600 font-medium transition-colors text-sm uppercase tracking-wide")
                        }) }
                    </div>
                    <div class="md:hidden">
                        <button onclick={toggle_menu} class="text-slate-600 hover:text-postgres-600 transition-colors text-2xl">
                            { if *menu_open { "✕" } else { "☰" } }
                        </button>
                    </div>
                </div>
            </div>
            if *menu_open {
                <div class="md:hidden bg-white border-t border-slate-100 p-4 space-y-4 shadow-lg absolute w-full z-50">
                    { for NAV_SECTIONS.iter().map(|&(id, label)| {
                        section_link(id, label, "block text-slate-600 font-medium py-2")
                    }) }
                </div>
            }
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let catalog = use_state(|| {
        Catalog::load().map(Rc::new).map_err(|err| {
            log::error!("Failed to load course catalog: {}", err);
            err
        })
    });
    let timing = use_state(BookTiming::detect);

    let content = match &*catalog {
        Ok(catalog) => {
            let catalog = catalog.clone();
            let timing = *timing;
            html! {
                <Switch<Route> render={Callback::from(move |routes| switch(routes, catalog.clone(), timing))} />
            }
        }
        Err(_) => html! {
            <div class="max-w-xl mx-auto py-24 text-center text-slate-600">
                {"Our course list could not be loaded. Please refresh the page or write to support@postgresmastery.in."}
            </div>
        },
    };

    html! {
        <BrowserRouter>
            <Nav />
            {content}
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
