use std::rc::Rc;

use yew::prelude::*;

use crate::book::controller::BookController;
use crate::book::hook::{use_book, BookAction};
use crate::book::sheet::{page_number, SheetStyle};
use crate::catalog::{Catalog, Course, Topic};
use crate::config::BookTiming;

const BOOK_CSS: &str = r#"
    .perspective-2000 { perspective: 2000px; }
    .preserve-3d { transform-style: preserve-3d; }
    .backface-hidden { backface-visibility: hidden; -webkit-backface-visibility: hidden; }
    .origin-left { transform-origin: left center; }
    .paper { background-color: #fdfbf7; }
    .shelf-book:hover .shelf-book-body { transform: rotateY(-15deg); }
"#;

#[derive(Properties, PartialEq)]
pub struct BookSyllabusProps {
    pub catalog: Rc<Catalog>,
    pub timing: BookTiming,
    pub selected_level: Option<String>,
    pub on_close: Callback<()>,
    pub on_select_level: Callback<String>,
}

#[function_component(BookSyllabus)]
pub fn book_syllabus(props: &BookSyllabusProps) -> Html {
    let book = use_book(
        props.catalog.clone(),
        props.timing,
        props.selected_level.clone(),
        props.on_close.clone(),
    );

    let shelf = html! { <Shelf courses={props.catalog.courses.clone()} on_select_level={props.on_select_level.clone()} /> };
    // An unknown code has no course, so the shelf stays up
    let body = match props.selected_level.as_deref().and_then(|code| props.catalog.course(code)) {
        Some(course) => reader(&book, course.clone(), &props.on_close),
        None => shelf,
    };

    html! {
        <>
            <style>{BOOK_CSS}</style>
            {body}
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ShelfProps {
    courses: Vec<Course>,
    on_select_level: Callback<String>,
}

#[function_component(Shelf)]
fn shelf(props: &ShelfProps) -> Html {
    html! {
        <div class="w-full max-w-7xl mx-auto py-20 px-4">
            <div class="text-center mb-16 animate-fade-in-up">
                <span class="text-postgres-600 font-semibold tracking-wider uppercase text-sm">{"Interactive Syllabus"}</span>
                <h2 class="text-3xl md:text-4xl font-bold text-slate-900 mt-2">{"Explore the Curriculum Books"}</h2>
                <p class="text-slate-600 mt-4 max-w-2xl mx-auto">
                    {"Select a course book below to open it and flip through the detailed syllabus pages."}
                </p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-12 perspective-2000">
                { for props.courses.iter().enumerate().map(|(idx, course)| {
                    let onclick = {
                        let on_select_level = props.on_select_level.clone();
                        let level = course.level.clone();
                        Callback::from(move |_: MouseEvent| on_select_level.emit(level.clone()))
                    };
                    html! {
                        <div
                            key={course.id.clone()}
                            class="shelf-book group relative cursor-pointer transform transition-transform duration-500 hover:scale-105"
                            style={format!("animation-delay: {}ms;", idx * 100)}
                            {onclick}
                        >
                            <div class="shelf-book-body relative w-full aspect-[3/4] preserve-3d transition-transform duration-500 ease-out shadow-2xl">
                                <div class={classes!("absolute", "inset-0", course.color.clone(), "rounded-r-lg", "p-6", "flex", "flex-col", "justify-between", "border-l-4", "border-l-black/20", "shadow-lg", "text-white")}>
                                    <div class="absolute inset-y-0 left-0 w-4 bg-gradient-to-r from-black/30 to-transparent"></div>
                                    <div class="mt-4">
                                        <span class="text-xs font-bold tracking-widest border border-white/30 px-2 py-1 rounded inline-block mb-2">
                                            {&course.level}
                                        </span>
                                        <h3 class="text-2xl font-serif font-bold leading-tight">{&course.title}</h3>
                                    </div>
                                    <div class="space-y-2">
                                        <div class="h-0.5 w-full bg-white/20"></div>
                                        <p class="text-xs opacity-90 font-medium">{"Click to Open Syllabus"}</p>
                                    </div>
                                </div>
                                <div class="absolute top-1 right-0 w-8 h-[98%] bg-slate-100 rounded-sm" style="transform: rotateY(90deg) translateZ(15px) translateX(2px);">
                                    <div class="h-full w-full bg-gradient-to-l from-slate-300 to-white border border-slate-300"></div>
                                </div>
                                <div class="absolute top-0 right-0 w-[96%] h-8 bg-white" style="transform: rotateX(90deg) translateZ(-16px);"></div>
                            </div>
                            <div class="absolute -bottom-8 left-1/2 -translate-x-1/2 w-3/4 h-4 bg-black/20 blur-xl rounded-full group-hover:w-full transition-all duration-500"></div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

fn reader(book: &UseReducerHandle<BookController>, course: Course, on_close: &Callback<()>) -> Html {
    let total = book.topic_count();
    let page_index = book.page_index();
    let is_closed = book.is_closed();
    let is_closing = book.is_closing();
    let is_last = book.is_last_page();
    let progress = book.progress_percentage();
    let timing = book.timing();

    let on_next = {
        let book = book.clone();
        Callback::from(move |_: MouseEvent| book.dispatch(BookAction::Next))
    };
    let on_prev = {
        let book = book.clone();
        Callback::from(move |_: MouseEvent| book.dispatch(BookAction::Prev))
    };
    let on_close_book = {
        let book = book.clone();
        Callback::from(move |_: MouseEvent| book.dispatch(BookAction::Close))
    };
    // On the cover there is nothing to riffle, so go straight back to the shelf.
    let on_back = {
        let book = book.clone();
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if book.is_closed() {
                on_close.emit(());
            } else {
                book.dispatch(BookAction::Close);
            }
        })
    };
    let on_cover = {
        let book = book.clone();
        Callback::from(move |_: MouseEvent| book.dispatch(BookAction::Open))
    };

    let topics = book.topics();

    html! {
        <div class="w-full max-w-6xl mx-auto py-16 px-4">
            <div class="flex flex-col md:flex-row items-center justify-between mb-8 animate-fade-in-up">
                <button onclick={on_back} class="flex items-center text-slate-500 hover:text-postgres-600 transition-colors mb-4 md:mb-0">
                    {"← Back to Bookshelf"}
                </button>
                <div class="text-center w-full max-w-md mx-4">
                    <h2 class="text-2xl font-bold text-slate-900">
                        {&course.title}{" "}<span class="text-postgres-600">{"Syllabus"}</span>
                    </h2>
                    <div class="mt-3">
                        <div class="flex justify-between text-xs text-slate-500 font-medium mb-1">
                            <span>{book.position_label()}</span>
                            <span>{format!("{}% Completed", progress.round())}</span>
                        </div>
                        <div class="h-2 w-full bg-slate-200 rounded-full overflow-hidden">
                            <div
                                class="h-full bg-postgres-600 transition-all duration-500 ease-out rounded-full"
                                style={format!("width: {}%;", progress)}
                            ></div>
                        </div>
                    </div>
                </div>
                <div class="w-24 hidden md:block"></div>
            </div>

            <div class={classes!(
                "hidden", "md:flex", "justify-center", "items-center", "perspective-2000", "relative",
                "h-[650px]", "w-full", "select-none", "transition-transform", "duration-1000",
                if is_closed { "-translate-x-[225px]" } else { "translate-x-0" }
            )}>
                if !is_closed {
                    <>
                    <button
                        onclick={on_prev.clone()}
                        disabled={is_closing}
                        class="absolute left-0 lg:-left-12 z-50 p-4 rounded-full bg-white shadow-xl border border-slate-200 transition-all hover:scale-110 hover:text-postgres-600 text-slate-700"
                        title="Previous Page"
                    >
                        {"‹"}
                    </button>
                    <button
                        onclick={on_next.clone()}
                        disabled={is_closing}
                        class={classes!(
                            "absolute", "right-0", "lg:-right-12", "z-50", "p-4", "rounded-full", "bg-white", "shadow-xl",
                            "border", "border-slate-200", "transition-all", "hover:scale-110", "hover:text-postgres-600",
                            if is_closing { "opacity-30 cursor-not-allowed" } else { "text-slate-700" }
                        )}
                        title={if is_last { "Finish & Close" } else { "Next Topic" }}
                    >
                        { if is_last { "✓" } else { "›" } }
                    </button>
                    </>
                }

                <div class="relative w-[900px] h-[550px]">
                    <div class="absolute top-0 right-0 w-1/2 h-full paper border border-slate-200 rounded-r-lg shadow-2xl flex flex-col p-10 z-0">
                        <div class="absolute inset-y-0 left-0 w-12 bg-gradient-to-r from-black/5 to-transparent pointer-events-none"></div>
                        <div class="flex-grow ml-4">
                            <h4 class="text-sm font-bold text-slate-400 uppercase tracking-widest mb-6">{"Course Completed"}</h4>
                            <div class="flex flex-col items-center justify-center h-full text-center">
                                <div class="text-green-500 text-6xl mb-4">{"✓"}</div>
                                <h3 class="text-2xl font-serif font-bold text-slate-800">{"Ready to Enroll?"}</h3>
                                <p class="text-slate-600 mt-2 mb-6">
                                    {format!("You've reviewed the entire curriculum for Level {}.", course.level)}
                                </p>
                                <button class="px-8 py-3 bg-postgres-600 text-white rounded-full font-bold hover:bg-postgres-700 transition-colors shadow-lg">
                                    {"Get Started Now"}
                                </button>
                            </div>
                        </div>
                    </div>

                    <div
                        class="absolute top-0 left-1/2 w-1/2 h-full preserve-3d origin-left shadow-2xl"
                        style={SheetStyle::new(0, page_index, total, is_closing, &timing).css()}
                    >
                        <div
                            class={classes!("absolute", "inset-0", "backface-hidden", course.color.clone(), "rounded-r-lg", "p-10", "flex", "flex-col", "items-center", "justify-center", "text-center", "border-l-4", "border-l-black/20", "cursor-pointer")}
                            onclick={on_cover}
                        >
                            <div class="absolute inset-y-0 left-0 w-8 bg-gradient-to-r from-black/40 to-transparent pointer-events-none"></div>
                            <div class="border-4 border-white/30 p-8 rounded-lg w-full h-full flex flex-col justify-between relative overflow-hidden">
                                <div class="text-white">
                                    <div class="font-bold tracking-[0.3em] uppercase text-xs mb-4 opacity-80">{"Official Curriculum"}</div>
                                    <h1 class="text-4xl font-serif font-black mb-2">{&course.title}</h1>
                                    <p class="font-medium opacity-80">{format!("{} Certification", course.level)}</p>
                                </div>
                                <div class="mt-4">
                                    <span class="inline-block px-6 py-3 bg-white text-slate-900 font-bold rounded-full text-sm shadow-lg">
                                        { if is_closed { "Opening..." } else { "Syllabus Guide" } }
                                    </span>
                                </div>
                            </div>
                        </div>
                        <div class="absolute inset-0 backface-hidden paper border border-slate-200 rounded-l-lg p-10 flex flex-col" style="transform: rotateY(180deg);">
                            <div class="absolute inset-y-0 right-0 w-12 bg-gradient-to-l from-black/10 to-transparent pointer-events-none"></div>
                            { topics.first().map(|topic| title_page(topic, 1, total)).unwrap_or_default() }
                        </div>
                    </div>

                    { for topics.windows(2).enumerate().map(|(idx, pair)| {
                        let sheet = idx + 1;
                        let style = SheetStyle::new(sheet, page_index, total, is_closing, &timing);
                        html! {
                            <div
                                key={sheet.to_string()}
                                class="absolute top-0 left-1/2 w-1/2 h-full preserve-3d origin-left shadow-sm"
                                style={style.css()}
                            >
                                <div class="absolute inset-0 backface-hidden paper border border-slate-200 rounded-r-lg p-10 flex flex-col">
                                    <div class="absolute inset-y-0 left-0 w-12 bg-gradient-to-r from-black/5 to-transparent pointer-events-none"></div>
                                    <div class="flex-grow ml-4">
                                        <h4 class="text-sm font-bold text-slate-400 uppercase tracking-widest mb-6">{"Topic Overview"}</h4>
                                        <p class="text-xl text-slate-700 leading-relaxed font-serif">{&pair[0].description}</p>
                                        <div class="mt-8 space-y-3">
                                            <div class="flex items-center text-slate-600 text-sm">
                                                <span class="mr-3 text-postgres-500">{"▤"}</span>
                                                <span>{"Includes practical exercises"}</span>
                                            </div>
                                        </div>
                                    </div>
                                    <div class="mt-auto border-t border-slate-100 pt-6 flex justify-between items-center ml-4">
                                        <span class="text-xs text-slate-400">{"PostgresMastery"}</span>
                                        <span class="text-sm font-bold text-slate-800">{sheet}</span>
                                    </div>
                                </div>
                                <div class="absolute inset-0 backface-hidden paper border border-slate-200 rounded-l-lg p-10 flex flex-col" style="transform: rotateY(180deg);">
                                    <div class="absolute inset-y-0 right-0 w-12 bg-gradient-to-l from-black/5 to-transparent pointer-events-none"></div>
                                    { title_page(&pair[1], sheet + 1, total) }
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>

            <div class="md:hidden space-y-6">
                if is_closed {
                    <div class="text-center py-10">
                        <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-postgres-600 mx-auto"></div>
                        <p class="mt-4 text-slate-500">{"Opening Syllabus..."}</p>
                    </div>
                } else {
                    <div class="bg-white p-6 rounded-2xl shadow-xl border border-slate-100 relative overflow-hidden animate-fade-in-up">
                        <div class="flex justify-between items-center mb-6">
                            <span class="text-xs font-bold px-3 py-1 rounded-full border border-slate-200 uppercase text-slate-500">
                                { book.current_topic().map(|topic| topic.level.to_string()).unwrap_or_else(|| course.level.clone()) }
                            </span>
                            <button onclick={on_close_book} class="text-slate-400 hover:text-red-500">{"✕"}</button>
                        </div>
                        <h3 class="text-2xl font-bold text-slate-900 mb-4 font-serif">
                            { book.current_topic().map(|topic| topic.title.clone()).unwrap_or_default() }
                        </h3>
                        <div class="w-12 h-1 bg-postgres-500 mb-6"></div>
                        <p class="text-slate-600 leading-relaxed text-lg mb-8">
                            { book.current_topic().map(|topic| topic.description.clone()).unwrap_or_default() }
                        </p>
                        <div class="flex justify-between items-center pt-6 border-t border-slate-100">
                            <button
                                onclick={on_prev}
                                disabled={page_index == 0 || is_closing}
                                class={classes!(
                                    "flex", "items-center", "px-4", "py-2", "rounded-lg", "text-sm", "font-bold", "transition-colors",
                                    if page_index == 0 { "text-slate-300 cursor-not-allowed" } else { "text-postgres-600 hover:bg-postgres-50" }
                                )}
                            >
                                {"‹ Previous"}
                            </button>
                            <span class="text-xs text-slate-400 font-medium">{format!("{} / {}", page_index + 1, total)}</span>
                            <button
                                onclick={on_next}
                                disabled={is_closing}
                                class={classes!(
                                    "flex", "items-center", "px-4", "py-2", "rounded-lg", "text-sm", "font-bold", "transition-colors",
                                    if is_closing { "text-slate-300 cursor-not-allowed" } else { "text-postgres-600 hover:bg-postgres-50" }
                                )}
                            >
                                { if is_last { "Close ✓" } else { "Next ›" } }
                            </button>
                        </div>
                    </div>
                }
            </div>
        </div>
    }
}

/// Left-hand page announcing a topic.
fn title_page(topic: &Topic, module: usize, total: usize) -> Html {
    html! {
        <div class="flex-grow mr-4 flex flex-col justify-between">
            <div class="flex justify-between items-start">
                <span class="text-xs font-bold px-3 py-1 rounded-full border border-slate-200 uppercase tracking-wide text-slate-500">
                    {topic.level.as_str()}
                </span>
                <span class="text-slate-300 font-serif text-6xl font-black opacity-20">{page_number(module)}</span>
            </div>
            <div>
                <h3 class="text-4xl font-serif font-bold text-slate-800 leading-tight">{&topic.title}</h3>
                <div class="w-16 h-1 bg-postgres-500 mt-6 mb-6"></div>
            </div>
            <div class="text-slate-400 text-sm font-medium flex items-center">
                {format!("# Module {} of {}", module, total)}
            </div>
        </div>
    }
}
