use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::book::controller::{take_close_notification, BookController, PendingTimer, TimerTicket};
use crate::catalog::Catalog;
use crate::config::BookTiming;

pub enum BookAction {
    SelectLevel(String),
    Open,
    Next,
    Prev,
    Close,
    Fire(TimerTicket),
    Teardown,
}

impl Reducible for BookController {
    type Action = BookAction;

    fn reduce(self: Rc<Self>, action: BookAction) -> Rc<Self> {
        let mut book = (*self).clone();
        match action {
            BookAction::SelectLevel(code) => {
                book.select_level(&code);
            }
            BookAction::Open => book.open_book(),
            BookAction::Next => book.next_topic(),
            BookAction::Prev => book.prev_topic(),
            BookAction::Close => book.close_book(),
            BookAction::Fire(ticket) => {
                book.fire(ticket);
            }
            BookAction::Teardown => book.teardown(),
        }
        Rc::new(book)
    }
}

/// Drives a [`BookController`] from the selected level code.
///
/// Whatever timer the controller is waiting on is armed as a `Timeout` whose
/// handle lives in the effect; the effect's cleanup drops it, so a new
/// timer, a level change or unmounting cancels the old one. `on_close` is
/// emitted once for every riffle close that finishes.
#[hook]
pub fn use_book(
    catalog: Rc<Catalog>,
    timing: BookTiming,
    selected: Option<String>,
    on_close: Callback<()>,
) -> UseReducerHandle<BookController> {
    let book = use_reducer(move || BookController::new(catalog, timing));

    {
        let book = book.clone();
        use_effect_with_deps(
            move |selected: &Option<String>| {
                match selected {
                    Some(code) => book.dispatch(BookAction::SelectLevel(code.clone())),
                    None => book.dispatch(BookAction::Teardown),
                }
                || ()
            },
            selected,
        );
    }

    {
        let pending = book.pending();
        let book = book.clone();
        use_effect_with_deps(
            move |pending: &Option<PendingTimer>| {
                let handle = pending.map(|pending| {
                    Timeout::new(pending.delay_ms, move || {
                        book.dispatch(BookAction::Fire(pending.ticket));
                    })
                });
                move || drop(handle)
            },
            pending,
        );
    }

    {
        let notified = use_mut_ref(|| book.closed_notifications());
        use_effect_with_deps(
            move |count: &u32| {
                if take_close_notification(&mut notified.borrow_mut(), *count) {
                    on_close.emit(());
                }
                || ()
            },
            book.closed_notifications(),
        );
    }

    book
}
