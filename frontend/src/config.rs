use log::Level;

/// Distance kept between the sticky nav bar and a section scrolled into view.
pub const HEADER_OFFSET_PX: f64 = 80.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Timings for the syllabus book, all in milliseconds.
///
/// `open_delay_ms` and `riffle_tick_ms` drive the controller's timers; the
/// remaining fields only feed CSS transitions. A zero delay makes the
/// controller apply that step immediately instead of scheduling it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BookTiming {
    pub open_delay_ms: u32,
    pub riffle_tick_ms: u32,
    pub flip_ms: u32,
    pub riffle_flip_ms: u32,
    pub z_swap_ms: u32,
    pub riffle_z_swap_ms: u32,
}

impl Default for BookTiming {
    fn default() -> Self {
        Self {
            open_delay_ms: 600, // lets the cover reveal play
            riffle_tick_ms: 20,
            flip_ms: 700,
            riffle_flip_ms: 500,
            z_swap_ms: 350,
            riffle_z_swap_ms: 250,
        }
    }
}

impl BookTiming {
    pub fn instant() -> Self {
        Self {
            open_delay_ms: 0,
            riffle_tick_ms: 0,
            flip_ms: 0,
            riffle_flip_ms: 0,
            z_swap_ms: 0,
            riffle_z_swap_ms: 0,
        }
    }

    /// Picks the animated timings unless the visitor asked for reduced motion.
    pub fn detect() -> Self {
        if prefers_reduced_motion() {
            Self::instant()
        } else {
            Self::default()
        }
    }
}

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_timing_has_no_delays() {
        let timing = BookTiming::instant();
        assert_eq!(timing.open_delay_ms, 0);
        assert_eq!(timing.riffle_tick_ms, 0);
    }

    #[test]
    fn riffle_is_faster_than_a_manual_flip() {
        let timing = BookTiming::default();
        assert!(timing.riffle_flip_ms < timing.flip_ms);
        assert!(timing.riffle_z_swap_ms < timing.z_swap_ms);
    }
}
