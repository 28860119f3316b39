use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-[60vh] flex flex-col items-center justify-center text-center px-4">
            <p class="font-mono text-postgres-600 mb-4">{"ERROR: relation \"page\" does not exist"}</p>
            <h1 class="text-4xl font-bold text-slate-900 mb-6">{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="px-8 py-3 bg-postgres-600 text-white rounded-full font-bold hover:bg-postgres-700 transition-colors">
                {"Back to the courses"}
            </Link<Route>>
        </div>
    }
}
