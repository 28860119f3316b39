use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::catalog::{Catalog, Testimonial};
use crate::components::book_syllabus::BookSyllabus;
use crate::components::course_card::CourseCard;
use crate::config::BookTiming;
use crate::pages::faq::Faq;
use crate::scroll::{jump_to, scroll_to_section};

const SQL_SNIPPETS: &[&str] = &[
    "SELECT * FROM career_growth WHERE speed = 'FAST';",
    "UPDATE skills SET mastery = true;",
    "CREATE INDEX idx_success ON students(salary);",
    "INSERT INTO companies (name) VALUES ('Google'), ('Amazon');",
    "VACUUM FULL ANALYZE confidence_boost;",
    "GRANT ALL PRIVILEGES TO hard_work;",
    "COMMIT; -- Career upgrade complete",
    "SELECT name, salary_hike FROM placements ORDER BY hike DESC;",
    "ALTER TABLE lifestyle ADD COLUMN remote_work BOOLEAN;",
    "DROP TABLE financial_worries;",
    "BEGIN TRANSACTION; -- Start Learning",
    "EXPLAIN ANALYZE SELECT future FROM dreams;",
    "checkpoint_completion_target = 0.9;",
];

const PAYMENT_METHODS: &[&str] = &["UPI", "PhonePe", "GPay", "Paytm", "Cards"];

const LANDING_CSS: &str = r#"
    @keyframes beam {
        0% { transform: translateX(-100%); opacity: 0; }
        50% { opacity: 1; }
        100% { transform: translateX(100%); opacity: 0; }
    }
    .data-beam {
        position: absolute;
        height: 1px;
        width: 100%;
        background: linear-gradient(90deg, transparent, rgba(51, 103, 145, 0.4), transparent);
        animation-name: beam;
        animation-iteration-count: infinite;
    }
    @keyframes marquee-vertical {
        from { transform: translateY(0); }
        to { transform: translateY(-50%); }
    }
    .animate-marquee-vertical {
        animation: marquee-vertical 40s linear infinite;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub catalog: Rc<Catalog>,
    pub timing: BookTiming,
    /// Level whose book should already be open, from a `/syllabus/:level` link.
    #[prop_or_default]
    pub initial_level: Option<String>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let selected_level = use_state(|| props.initial_level.clone());

    // Scroll once on mount: to the open book for syllabus links, else to the top
    {
        let linked = props.initial_level.is_some();
        use_effect_with_deps(
            move |_| {
                if linked {
                    scroll_to_section("syllabus");
                } else if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let handle_open_course = {
        let selected_level = selected_level.clone();
        Callback::from(move |level: String| {
            log::info!("Opening syllabus book {}", level);
            selected_level.set(Some(level));
            scroll_to_section("syllabus");
        })
    };

    let handle_close_book = {
        let selected_level = selected_level.clone();
        Callback::from(move |_: ()| {
            selected_level.set(None);
        })
    };

    html! {
        <div class="min-h-screen flex flex-col font-sans bg-slate-50">
            <style>{LANDING_CSS}</style>
            <Hero />

            <section id="courses" class="py-24 bg-slate-50 relative scroll-mt-24">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                    <div class="text-center mb-16">
                        <span class="text-postgres-600 font-semibold tracking-wider uppercase text-sm">{"Career Paths"}</span>
                        <h2 class="text-3xl font-bold text-slate-900 sm:text-4xl lg:text-5xl">{"Choose Your Level"}</h2>
                        <p class="mt-4 text-xl text-slate-600 max-w-2xl mx-auto">
                            {"Structured learning paths tailored for every stage of your database engineering career."}
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                        { for props.catalog.courses.iter().map(|course| html! {
                            <div key={course.id.clone()} class="h-full">
                                <CourseCard course={course.clone()} on_view_syllabus={handle_open_course.clone()} />
                            </div>
                        }) }
                    </div>
                    <div class="mt-16 text-center">
                        <div class="inline-flex flex-wrap items-center justify-center gap-2 text-slate-500 bg-white px-6 py-3 rounded-full shadow-sm border border-slate-200">
                            <span class="font-semibold text-slate-700">{"Secure Payment via:"}</span>
                            { for PAYMENT_METHODS.iter().enumerate().map(|(idx, method)| html! {
                                <>
                                    if idx > 0 {
                                        <span class="w-1 h-1 bg-slate-300 rounded-full"></span>
                                    }
                                    <span>{*method}</span>
                                </>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section id="syllabus" class="bg-white border-y border-slate-100 scroll-mt-24 relative overflow-hidden">
                <BookSyllabus
                    catalog={props.catalog.clone()}
                    timing={props.timing}
                    selected_level={(*selected_level).clone()}
                    on_close={handle_close_book}
                    on_select_level={handle_open_course.clone()}
                />
            </section>

            <About />
            <Reviews testimonials={props.catalog.testimonials.clone()} />
            <Faq faqs={props.catalog.faqs.clone()} />
            <Instructor />
            <Footer />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="relative pt-20 pb-20 lg:pt-32 lg:pb-32 bg-white overflow-hidden">
            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute inset-0 bg-[linear-gradient(to_right,#f1f5f9_1px,transparent_1px),linear-gradient(to_bottom,#f1f5f9_1px,transparent_1px)] bg-[size:4rem_4rem]"></div>
                <div class="data-beam top-1/4" style="animation-duration: 4s; animation-timing-function: ease-in-out;"></div>
                <div class="data-beam top-1/2" style="animation-duration: 7s; animation-delay: 1s;"></div>
                <div class="data-beam top-2/3" style="animation-duration: 5s; animation-delay: 2s;"></div>
                <div class="data-beam top-3/4" style="animation-duration: 6s; animation-delay: 0.5s;"></div>
            </div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10 text-center">
                <div class="inline-flex items-center px-4 py-2 rounded-full bg-postgres-50 border border-postgres-100 text-postgres-700 text-sm font-semibold mb-8">
                    <span class="w-2 h-2 bg-postgres-500 rounded-full mr-2 animate-pulse"></span>
                    {"India's #1 PostgreSQL Learning Platform"}
                </div>
                <h1 class="text-4xl md:text-6xl lg:text-7xl font-extrabold text-slate-900 leading-tight mb-8 tracking-tight">
                    {"Master the World's Most"}<br />
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-postgres-600 to-indigo-600">{"Advanced Database"}</span>
                </h1>
                <p class="text-xl text-slate-600 max-w-3xl mx-auto mb-12 leading-relaxed">
                    {"From \"SELECT *\" to High Availability Architecture. Structured courses designed for Indian developers, priced for maximum value."}
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-4 mb-16">
                    <a href="#courses" onclick={jump_to("courses")} class="px-8 py-4 bg-postgres-600 text-white rounded-full font-bold text-lg shadow-xl hover:bg-postgres-700 transition-all hover:-translate-y-1 flex items-center justify-center">
                        {"View Courses"}
                    </a>
                    <a href="#syllabus" onclick={jump_to("syllabus")} class="px-8 py-4 bg-white text-slate-700 border border-slate-200 rounded-full font-bold text-lg hover:bg-slate-50 transition-colors flex items-center justify-center shadow-sm">
                        {"📖 See Syllabus"}
                    </a>
                </div>
                <div class="flex flex-wrap justify-center gap-8 text-slate-500 text-sm font-medium">
                    <div class="flex items-center">{"🛡 Trusted by 5,000+ Students"}</div>
                    <div class="flex items-center">{"★ 4.9/5 Average Rating"}</div>
                </div>
            </div>
        </section>
    }
}

const WHY_US: &[(&str, &str, &str)] = &[
    (
        "🗄",
        "Production-Grade Curriculum",
        "Most courses teach you \"how\". We teach you \"why\". Learn the internals that actually matter in production environments.",
    ),
    (
        "✓",
        "Hinglish Mentorship",
        "Complex topics like MVCC and WAL are hard. Our localized explanation style ensures you actually understand them.",
    ),
    (
        "→",
        "Job-Ready Skills",
        "We focus on query tuning and architecture, the exact skills that crack interviews at top product companies.",
    ),
];

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="py-24 bg-slate-50 scroll-mt-24 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div>
                        <span class="text-postgres-600 font-semibold tracking-wider uppercase text-sm">{"The PostgresMastery Difference"}</span>
                        <h2 class="text-3xl lg:text-4xl font-bold text-slate-900 mb-8">{"Why 5,000+ developers choose us"}</h2>
                        <div class="space-y-8">
                            { for WHY_US.iter().map(|(icon, title, text)| html! {
                                <div class="flex">
                                    <div class="flex-shrink-0">
                                        <div class="flex items-center justify-center h-12 w-12 rounded-xl bg-postgres-600 text-white shadow-lg">{*icon}</div>
                                    </div>
                                    <div class="ml-6">
                                        <h4 class="text-xl font-bold text-slate-900">{*title}</h4>
                                        <p class="mt-2 text-slate-600 leading-relaxed">{*text}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="relative">
                        <img
                            src="https://images.unsplash.com/photo-1522202176988-66273c2fd55f?ixlib=rb-4.0.3&auto=format&fit=crop&w=1471&q=80"
                            alt="Students learning"
                            loading="lazy"
                            class="relative rounded-2xl shadow-2xl w-full object-cover"
                        />
                        <div class="absolute -bottom-6 -left-6 bg-white p-6 rounded-xl shadow-xl border border-slate-100 max-w-xs">
                            <div class="text-yellow-400 mb-2">{"★★★★★"}</div>
                            <p class="text-slate-800 font-medium italic">{"\"The simplified approach to complex topics is unmatched.\""}</p>
                            <p class="text-slate-500 text-sm mt-2">{"Amit, Senior DBA"}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ReviewsProps {
    testimonials: Vec<Testimonial>,
}

#[function_component(Reviews)]
fn reviews(props: &ReviewsProps) -> Html {
    html! {
        <section id="reviews" class="py-24 relative overflow-hidden bg-slate-900 scroll-mt-24">
            <div class="absolute inset-0 pointer-events-none opacity-20 overflow-hidden">
                <div class="animate-marquee-vertical font-mono text-sm text-postgres-300 space-y-4 px-8">
                    { for SQL_SNIPPETS.iter().cycle().take(SQL_SNIPPETS.len() * 4).enumerate().map(|(idx, snippet)| html! {
                        <div class="whitespace-nowrap">
                            <span class="text-slate-600 mr-4">{(idx + 1) * 10}</span>
                            <span>{*snippet}</span>
                        </div>
                    }) }
                </div>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center mb-16">
                    <div class="inline-flex items-center px-4 py-2 rounded-lg bg-slate-800 border border-slate-700 font-mono text-sm text-green-400 mb-6">
                        {"postgres_mastery=# SELECT * FROM reviews;"}
                    </div>
                    <h2 class="text-4xl md:text-5xl font-extrabold text-white mb-6 tracking-tight">
                        {"Student "}<span class="text-postgres-400">{"Success Stories"}</span>
                    </h2>
                    <p class="text-xl text-slate-400 max-w-2xl mx-auto">
                        {"Don't just take our word for it. See how our curriculum is executing career upgrades across India."}
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    { for props.testimonials.iter().map(|item| html! {
                        <div key={item.id.to_string()} class="bg-slate-800/80 backdrop-blur p-8 rounded-2xl border border-slate-700 relative overflow-hidden">
                            <div class="text-yellow-400 mb-6">{"★★★★★"}</div>
                            <p class="text-slate-300 mb-8 leading-relaxed italic">{format!("\"{}\"", item.content)}</p>
                            <div class="flex items-center">
                                <img src={item.image.clone()} alt={item.name.clone()} class="w-12 h-12 rounded-full border-2 border-postgres-500" />
                                <div class="ml-4">
                                    <h4 class="font-bold text-white">{&item.name}</h4>
                                    <div class="text-sm text-slate-400">{&item.role}</div>
                                    <div class="text-xs text-postgres-400">{&item.company}</div>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Instructor)]
fn instructor() -> Html {
    html! {
        <section class="py-24 bg-slate-900 text-white relative overflow-hidden">
            <div class="max-w-4xl mx-auto px-4 text-center relative z-10">
                <h2 class="text-3xl font-bold mb-10">{"Meet Your Instructor"}</h2>
                <img
                    src="https://images.unsplash.com/photo-1556157382-97eda2d62296?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80"
                    alt="Instructor"
                    loading="lazy"
                    class="w-40 h-40 rounded-full mx-auto mb-6 object-cover border-4 border-postgres-500"
                />
                <h3 class="text-2xl font-bold">{"Vikram Malhotra"}</h3>
                <p class="text-postgres-400 mb-6">{"Principal Database Engineer (15+ Years Exp)"}</p>
                <blockquote class="text-lg text-slate-300 italic leading-relaxed">
                    {"\"I've scaled databases for some of India's largest startups. My mission is to bridge the gap between college theory and production reality. I don't just teach syntax; I teach you how to think like a database architect.\""}
                </blockquote>
            </div>
        </section>
    }
}

const FOOTER_COURSES: &[&str] = &[
    "Foundation (L1)",
    "Intermediate (L2)",
    "Advanced (L3)",
    "Expert (L4)",
];

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="bg-slate-950 text-slate-400 py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-4 gap-12 mb-12">
                    <div>
                        <div class="flex items-center text-white text-xl font-bold mb-4">{"🐘 PostgresMastery"}</div>
                        <p class="text-sm leading-relaxed mb-6">
                            {"Empowering Indian developers with world-class database education. Master the stack, upgrade your career."}
                        </p>
                        <div class="flex space-x-4 text-sm">
                            <a href="#" class="hover:text-white">{"Twitter"}</a>
                            <a href="#" class="hover:text-white">{"LinkedIn"}</a>
                            <a href="#" class="hover:text-white">{"Facebook"}</a>
                        </div>
                    </div>
                    <div>
                        <h4 class="text-white font-bold mb-4">{"Our Courses"}</h4>
                        <ul class="space-y-2 text-sm">
                            { for FOOTER_COURSES.iter().map(|label| html! {
                                <li><a href="#courses" onclick={jump_to("courses")} class="hover:text-postgres-400">{format!("→ {}", label)}</a></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-white font-bold mb-4">{"Platform"}</h4>
                        <ul class="space-y-2 text-sm">
                            <li><a href="#syllabus" onclick={jump_to("syllabus")} class="hover:text-postgres-400">{"Interactive Syllabus"}</a></li>
                            <li><a href="#reviews" onclick={jump_to("reviews")} class="hover:text-postgres-400">{"Success Stories"}</a></li>
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-white font-bold mb-4">{"Contact & Legal"}</h4>
                        <ul class="space-y-3 text-sm">
                            <li>{"HSR Layout, Sector 4,"}<br />{"Bangalore, KA 560102"}</li>
                            <li><a href="mailto:support@postgresmastery.in" class="hover:text-postgres-400">{"support@postgresmastery.in"}</a></li>
                        </ul>
                    </div>
                </div>
                <div class="border-t border-slate-800 pt-8 flex flex-col md:flex-row justify-between text-sm">
                    <p>{format!("© {} PostgresMastery India. All rights reserved.", year)}</p>
                    <p class="mt-2 md:mt-0">{"Made with ❤️ in Bangalore"}</p>
                </div>
            </div>
        </footer>
    }
}
