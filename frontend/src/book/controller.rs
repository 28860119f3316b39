//! State machine behind the syllabus book.
//!
//! The controller never touches a browser timer itself. When it needs time
//! to pass (the cover reveal before opening, each step of the riffle close)
//! it records a [`PendingTimer`] and waits for the host to call
//! [`BookController::fire`] with the matching ticket. Any transition that
//! makes a waiting timer obsolete replaces or clears it, and a firing with
//! a ticket other than the current one is dropped.

use std::rc::Rc;

use log::debug;

use crate::catalog::{Catalog, Course, Topic};
use crate::config::BookTiming;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookState {
    /// Cover showing; page index -1.
    Closed,
    /// Topic `i` showing.
    Open(usize),
    /// Riffling back towards the cover, currently at page `i`.
    AutoClosing(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    OpenDelay,
    RiffleTick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTimer {
    pub ticket: TimerTicket,
    pub kind: TimerKind,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct BookController {
    catalog: Rc<Catalog>,
    timing: BookTiming,
    level: Option<String>,
    topics: Rc<[Topic]>,
    state: BookState,
    pending: Option<PendingTimer>,
    next_ticket: u64,
    closed_notifications: u32,
}

impl BookController {
    pub fn new(catalog: Rc<Catalog>, timing: BookTiming) -> Self {
        Self {
            catalog,
            timing,
            level: None,
            topics: Rc::from(Vec::new()),
            state: BookState::Closed,
            pending: None,
            next_ticket: 0,
            closed_notifications: 0,
        }
    }

    /// Loads the book for a course level code and schedules it to open.
    ///
    /// Returns `false` and leaves everything untouched when the code is not
    /// in the catalog's level map.
    pub fn select_level(&mut self, code: &str) -> bool {
        let Some(topics) = self.catalog.topics_for(code) else {
            debug!("ignoring unknown level {code}");
            return false;
        };
        debug!("book: selected {code} with {} topics", topics.len());
        self.level = Some(code.to_string());
        self.topics = topics.into();
        self.state = BookState::Closed;
        self.pending = None;
        if self.timing.open_delay_ms == 0 {
            self.open_book();
        } else {
            self.schedule(TimerKind::OpenDelay, self.timing.open_delay_ms);
        }
        self.check_invariants();
        true
    }

    pub fn open_book(&mut self) {
        if self.state != BookState::Closed || self.topics.is_empty() {
            return;
        }
        self.clear_pending(TimerKind::OpenDelay);
        self.state = BookState::Open(0);
        self.check_invariants();
    }

    pub fn next_topic(&mut self) {
        match self.state {
            BookState::AutoClosing(_) => {}
            BookState::Closed if self.topics.is_empty() => {
                // -1 is already the last page of an empty book
                self.finish_close();
            }
            BookState::Closed => self.open_book(),
            BookState::Open(i) if i + 1 < self.topics.len() => {
                self.state = BookState::Open(i + 1);
            }
            BookState::Open(i) => self.start_close(i),
        }
        self.check_invariants();
    }

    pub fn prev_topic(&mut self) {
        match self.state {
            BookState::Open(0) => self.state = BookState::Closed,
            BookState::Open(i) => self.state = BookState::Open(i - 1),
            BookState::Closed | BookState::AutoClosing(_) => {}
        }
        self.check_invariants();
    }

    pub fn close_book(&mut self) {
        if let BookState::Open(i) = self.state {
            self.start_close(i);
        }
        self.check_invariants();
    }

    /// Applies a timer that has elapsed. Returns whether it was still current.
    pub fn fire(&mut self, ticket: TimerTicket) -> bool {
        let Some(pending) = self.pending.filter(|pending| pending.ticket == ticket) else {
            debug!("book: dropping stale timer {ticket:?}");
            return false;
        };
        self.pending = None;
        match pending.kind {
            TimerKind::OpenDelay => self.open_book(),
            TimerKind::RiffleTick => self.riffle_step(),
        }
        self.check_invariants();
        true
    }

    /// Puts the book back on the shelf and forgets any waiting timer.
    pub fn teardown(&mut self) {
        self.level = None;
        self.topics = Rc::from(Vec::new());
        self.state = BookState::Closed;
        self.pending = None;
    }

    fn start_close(&mut self, page: usize) {
        debug!("book: riffle close from page {page}");
        self.state = BookState::AutoClosing(page);
        if self.timing.riffle_tick_ms == 0 {
            self.finish_close();
        } else {
            self.schedule(TimerKind::RiffleTick, self.timing.riffle_tick_ms);
        }
    }

    fn riffle_step(&mut self) {
        match self.state {
            BookState::AutoClosing(0) => self.finish_close(),
            BookState::AutoClosing(i) => {
                self.state = BookState::AutoClosing(i - 1);
                self.schedule(TimerKind::RiffleTick, self.timing.riffle_tick_ms);
            }
            BookState::Closed | BookState::Open(_) => {}
        }
    }

    fn finish_close(&mut self) {
        self.state = BookState::Closed;
        self.pending = None;
        self.closed_notifications = self.closed_notifications.wrapping_add(1);
        debug!("book: fully closed");
    }

    fn schedule(&mut self, kind: TimerKind, delay_ms: u32) {
        self.next_ticket += 1;
        self.pending = Some(PendingTimer {
            ticket: TimerTicket(self.next_ticket),
            kind,
            delay_ms,
        });
    }

    fn clear_pending(&mut self, kind: TimerKind) {
        if self.pending.map(|pending| pending.kind) == Some(kind) {
            self.pending = None;
        }
    }

    fn check_invariants(&self) {
        let n = self.topics.len();
        match self.state {
            BookState::Closed => {}
            BookState::Open(i) | BookState::AutoClosing(i) => {
                debug_assert!(i < n, "page {i} out of range for {n} topics");
            }
        }
        debug_assert!(
            matches!(self.state, BookState::AutoClosing(_))
                == matches!(self.pending, Some(PendingTimer { kind: TimerKind::RiffleTick, .. })),
            "riffle timer out of step with state {:?}",
            self.state
        );
    }

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    pub fn course(&self) -> Option<&Course> {
        self.level.as_deref().and_then(|code| self.catalog.course(code))
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn state(&self) -> BookState {
        self.state
    }

    pub fn timing(&self) -> BookTiming {
        self.timing
    }

    pub fn pending(&self) -> Option<PendingTimer> {
        self.pending
    }

    /// Number of riffle closes that have run to completion.
    pub fn closed_notifications(&self) -> u32 {
        self.closed_notifications
    }

    pub fn page_index(&self) -> isize {
        match self.state {
            BookState::Closed => -1,
            BookState::Open(i) | BookState::AutoClosing(i) => i as isize,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.state == BookState::Closed
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.state, BookState::AutoClosing(_))
    }

    pub fn is_last_page(&self) -> bool {
        self.page_index() == self.topics.len() as isize - 1
    }

    pub fn current_topic(&self) -> Option<&Topic> {
        usize::try_from(self.page_index())
            .ok()
            .and_then(|i| self.topics.get(i))
    }

    pub fn progress_percentage(&self) -> f64 {
        progress_percentage(self.page_index(), self.topics.len())
    }

    pub fn position_label(&self) -> String {
        if self.is_closed() {
            "Start".to_string()
        } else {
            format!("Module {}", self.page_index() + 1)
        }
    }
}

/// Records a closed-notification count seen by the host and reports whether
/// it is new, so each finished riffle is announced once.
pub fn take_close_notification(last: &mut u32, count: u32) -> bool {
    if *last == count {
        return false;
    }
    *last = count;
    true
}

/// Share of the book read so far, 0 on the cover and 100 on the last page.
pub fn progress_percentage(page_index: isize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((page_index + 1) as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Rc<Catalog> {
        Rc::new(Catalog::load().unwrap())
    }

    fn small_catalog(levels: &[(&str, &str, usize)]) -> Rc<Catalog> {
        let mut level_map = Vec::new();
        let mut courses = Vec::new();
        let mut topics = Vec::new();
        let mut id = 0;
        for (code, level, count) in levels {
            level_map.push(format!(r#""{code}": "{level}""#));
            courses.push(format!(
                r#"{{"id": "{code}", "level": "{code}", "title": "{level} book", "price": 100,
                    "description": "", "duration": "", "target_audience": "",
                    "skills": [], "color": "bg-slate-500", "features": []}}"#
            ));
            for _ in 0..*count {
                id += 1;
                topics.push(format!(
                    r#"{{"id": {id}, "title": "Topic {id}", "description": "", "level": "{level}"}}"#
                ));
            }
        }
        let json = format!(
            r#"{{"level_map": {{{}}}, "courses": [{}], "topics": [{}], "testimonials": [], "faqs": []}}"#,
            level_map.join(","),
            courses.join(","),
            topics.join(",")
        );
        Rc::new(Catalog::from_json(&json).unwrap())
    }

    fn fire_pending(book: &mut BookController) -> bool {
        match book.pending() {
            Some(pending) => book.fire(pending.ticket),
            None => false,
        }
    }

    /// Fires timers until none is waiting; returns how many ran.
    fn run_timers(book: &mut BookController) -> usize {
        let mut fired = 0;
        while fire_pending(book) {
            fired += 1;
        }
        fired
    }

    fn opened(catalog: Rc<Catalog>, code: &str) -> BookController {
        let mut book = BookController::new(catalog, BookTiming::default());
        assert!(book.select_level(code));
        run_timers(&mut book);
        book
    }

    #[test]
    fn every_level_opens_on_the_first_page_after_the_delay() {
        let catalog = catalog();
        for code in catalog.level_map.keys() {
            let mut book = BookController::new(catalog.clone(), BookTiming::default());
            assert!(book.select_level(code));
            assert_eq!(book.page_index(), -1);
            let pending = book.pending().unwrap();
            assert_eq!(pending.kind, TimerKind::OpenDelay);
            assert_eq!(pending.delay_ms, 600);

            assert!(book.fire(pending.ticket));
            assert_eq!(book.state(), BookState::Open(0));
            assert!(!book.is_closing());
            assert!(book.pending().is_none());
        }
    }

    #[test]
    fn zero_open_delay_opens_immediately() {
        let mut book = BookController::new(catalog(), BookTiming::instant());
        book.select_level("L3");
        assert_eq!(book.state(), BookState::Open(0));
        assert!(book.pending().is_none());
    }

    #[test]
    fn unknown_level_keeps_the_current_book() {
        let mut book = opened(catalog(), "L2");
        book.next_topic();
        assert!(!book.select_level("L9"));
        assert_eq!(book.level(), Some("L2"));
        assert_eq!(book.state(), BookState::Open(1));
        assert_eq!(book.topic_count(), 10);
    }

    #[test]
    fn next_steps_through_every_page() {
        let mut book = opened(catalog(), "L1");
        let n = book.topic_count();
        for i in 0..n - 1 {
            assert_eq!(book.state(), BookState::Open(i));
            book.next_topic();
            assert_eq!(book.state(), BookState::Open(i + 1));
        }
        assert!(book.is_last_page());
    }

    #[test]
    fn five_topic_book_finishes_with_one_notification() {
        let mut book = opened(small_catalog(&[("X", "Advanced", 5)]), "X");
        for _ in 0..4 {
            book.next_topic();
        }
        assert_eq!(book.state(), BookState::Open(4));
        assert_eq!(book.progress_percentage(), 100.0);

        book.next_topic();
        assert_eq!(book.state(), BookState::AutoClosing(4));
        assert_eq!(book.pending().map(|p| p.kind), Some(TimerKind::RiffleTick));

        let ticks = run_timers(&mut book);
        assert_eq!(ticks, 5);
        assert_eq!(book.state(), BookState::Closed);
        assert!(!book.is_closing());
        assert_eq!(book.closed_notifications(), 1);
    }

    #[test]
    fn riffle_passes_through_every_page() {
        let mut book = opened(small_catalog(&[("X", "Expert", 4)]), "X");
        book.next_topic();
        book.next_topic();
        book.close_book();
        let mut seen = vec![book.page_index()];
        while fire_pending(&mut book) {
            seen.push(book.page_index());
        }
        assert_eq!(seen, vec![2, 1, 0, -1]);
    }

    #[test]
    fn single_topic_book_closes_on_next() {
        let mut book = BookController::new(
            small_catalog(&[("S", "Beginner", 1)]),
            BookTiming::default(),
        );
        book.select_level("S");
        book.open_book();
        assert_eq!(book.state(), BookState::Open(0));
        assert!(book.is_last_page());

        book.next_topic();
        assert_eq!(book.state(), BookState::AutoClosing(0));
        run_timers(&mut book);
        assert_eq!(book.state(), BookState::Closed);
        assert_eq!(book.closed_notifications(), 1);
    }

    #[test]
    fn manual_open_makes_the_open_delay_a_no_op() {
        let mut book = BookController::new(catalog(), BookTiming::default());
        book.select_level("L1");
        let stale = book.pending().unwrap().ticket;
        book.open_book();
        book.next_topic();
        assert!(!book.fire(stale));
        assert_eq!(book.state(), BookState::Open(1));
    }

    #[test]
    fn empty_level_never_opens() {
        let mut book = BookController::new(
            small_catalog(&[("E", "Expert", 0), ("B", "Beginner", 2)]),
            BookTiming::default(),
        );
        assert!(book.select_level("E"));
        run_timers(&mut book);
        assert_eq!(book.state(), BookState::Closed);
        assert_eq!(book.progress_percentage(), 0.0);

        book.open_book();
        book.prev_topic();
        assert_eq!(book.state(), BookState::Closed);
        assert_eq!(book.closed_notifications(), 0);

        book.next_topic();
        assert_eq!(book.state(), BookState::Closed);
        assert_eq!(book.closed_notifications(), 1);
    }

    #[test]
    fn prev_from_first_page_shows_the_cover_without_notifying() {
        let mut book = opened(catalog(), "L4");
        book.prev_topic();
        assert_eq!(book.state(), BookState::Closed);
        book.prev_topic();
        assert_eq!(book.state(), BookState::Closed);
        assert_eq!(book.closed_notifications(), 0);
        assert!(book.pending().is_none());
    }

    #[test]
    fn next_from_the_cover_opens_the_first_page() {
        let mut book = opened(catalog(), "L4");
        book.prev_topic();
        book.next_topic();
        assert_eq!(book.state(), BookState::Open(0));
    }

    #[test]
    fn close_on_a_closed_book_is_a_no_op() {
        let mut book = opened(catalog(), "L1");
        book.prev_topic();
        book.close_book();
        assert_eq!(book.state(), BookState::Closed);
        assert!(book.pending().is_none());
        assert_eq!(book.closed_notifications(), 0);
    }

    #[test]
    fn navigation_is_ignored_while_closing() {
        let mut book = opened(catalog(), "L2");
        for _ in 0..3 {
            book.next_topic();
        }
        book.close_book();
        fire_pending(&mut book);
        assert_eq!(book.state(), BookState::AutoClosing(2));
        let ticket = book.pending().unwrap().ticket;

        book.next_topic();
        book.prev_topic();
        book.open_book();
        book.close_book();
        assert_eq!(book.state(), BookState::AutoClosing(2));
        assert!(book.is_closing());
        assert_eq!(book.pending().unwrap().ticket, ticket);
    }

    #[test]
    fn switching_level_mid_riffle_cancels_the_riffle() {
        let mut book = opened(catalog(), "L1");
        book.next_topic();
        book.close_book();
        let stale = book.pending().unwrap().ticket;

        book.select_level("L3");
        assert_eq!(book.page_index(), -1);
        assert!(!book.is_closing());
        run_timers(&mut book);
        assert_eq!(book.state(), BookState::Open(0));

        assert!(!book.fire(stale));
        assert_eq!(book.state(), BookState::Open(0));
        assert_eq!(book.closed_notifications(), 0);
    }

    #[test]
    fn switching_level_during_open_delay_cancels_the_old_delay() {
        let mut book = BookController::new(catalog(), BookTiming::default());
        book.select_level("L1");
        let stale = book.pending().unwrap().ticket;
        book.select_level("L2");
        let current = book.pending().unwrap().ticket;
        assert_ne!(stale, current);

        assert!(!book.fire(stale));
        assert_eq!(book.state(), BookState::Closed);
        assert!(book.fire(current));
        assert_eq!(book.state(), BookState::Open(0));
        assert_eq!(book.level(), Some("L2"));
        assert_eq!(book.current_topic().unwrap().id, 11);
    }

    #[test]
    fn teardown_forgets_pending_timers() {
        let mut book = opened(catalog(), "L1");
        book.close_book();
        let stale = book.pending().unwrap().ticket;
        book.teardown();
        assert!(book.pending().is_none());
        assert!(!book.fire(stale));
        assert_eq!(book.level(), None);
        assert_eq!(book.closed_notifications(), 0);
    }

    #[test]
    fn instant_riffle_notifies_immediately() {
        let mut book = BookController::new(catalog(), BookTiming::instant());
        book.select_level("L1");
        book.next_topic();
        book.close_book();
        assert_eq!(book.state(), BookState::Closed);
        assert_eq!(book.closed_notifications(), 1);
        assert!(book.pending().is_none());
    }

    #[test]
    fn progress_rises_from_zero_to_one_hundred() {
        for total in 1..=12 {
            let values: Vec<f64> = (-1..total as isize)
                .map(|page| progress_percentage(page, total))
                .collect();
            assert_eq!(values[0], 0.0);
            assert_eq!(*values.last().unwrap(), 100.0);
            assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        }
        assert_eq!(progress_percentage(-1, 0), 0.0);
    }

    #[test]
    fn position_label_names_the_module() {
        let mut book = opened(catalog(), "L3");
        assert_eq!(book.position_label(), "Module 1");
        book.next_topic();
        assert_eq!(book.position_label(), "Module 2");
        book.prev_topic();
        book.prev_topic();
        assert_eq!(book.position_label(), "Start");
    }

    #[test]
    fn close_notification_is_taken_once_per_finished_riffle() {
        let mut book = opened(catalog(), "L1");
        let mut last = book.closed_notifications();
        assert!(!take_close_notification(&mut last, book.closed_notifications()));

        book.close_book();
        run_timers(&mut book);
        assert!(take_close_notification(&mut last, book.closed_notifications()));
        // a re-render with the same count stays quiet
        assert!(!take_close_notification(&mut last, book.closed_notifications()));

        book.next_topic();
        book.close_book();
        run_timers(&mut book);
        assert!(take_close_notification(&mut last, book.closed_notifications()));
        assert_eq!(last, 2);
    }

    #[test]
    fn unknown_level_on_a_fresh_book_selects_no_course() {
        let mut book = BookController::new(catalog(), BookTiming::default());
        assert!(!book.select_level("L9"));
        assert!(book.course().is_none());
        assert_eq!(book.level(), None);
        assert!(book.pending().is_none());
    }

    #[test]
    fn clones_share_the_topic_list() {
        let book = opened(catalog(), "L2");
        let copy = book.clone();
        assert!(Rc::ptr_eq(&book.topics, &copy.topics));
    }

    #[test]
    fn course_follows_the_selected_level() {
        let book = opened(catalog(), "L4");
        assert_eq!(book.course().unwrap().title, "Database Architect Expert");
    }
}
