use crate::config::BookTiming;

const COVER_Z_INDEX: usize = 1000;

/// Placement of one physical sheet of the desktop book.
///
/// Sheet 0 is the cover; sheet `k` carries the description of topic `k - 1`
/// on its front and the title of topic `k` on its back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SheetStyle {
    pub z_index: usize,
    pub flipped: bool,
    pub duration_ms: u32,
    pub z_delay_ms: u32,
}

impl SheetStyle {
    pub fn new(sheet: usize, page_index: isize, total: usize, closing: bool, timing: &BookTiming) -> Self {
        let flipped = page_index >= sheet as isize;
        let z_index = if sheet == 0 {
            if page_index == -1 { COVER_Z_INDEX } else { 0 }
        } else if flipped {
            sheet
        } else {
            total.saturating_sub(sheet)
        };
        let (duration_ms, z_delay_ms) = if closing {
            (timing.riffle_flip_ms, timing.riffle_z_swap_ms)
        } else {
            (timing.flip_ms, timing.z_swap_ms)
        };
        Self { z_index, flipped, duration_ms, z_delay_ms }
    }

    pub fn css(&self) -> String {
        format!(
            "z-index: {}; transform: rotateY({}deg); transition: transform {}ms ease-in-out, z-index 0ms {}ms;",
            self.z_index,
            if self.flipped { -180 } else { 0 },
            self.duration_ms,
            self.z_delay_ms,
        )
    }
}

/// Two-digit page number printed in the corner of a title page.
pub fn page_number(module: usize) -> String {
    format!("{:02}", module)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_cover_sits_on_top() {
        let style = SheetStyle::new(0, -1, 10, false, &BookTiming::default());
        assert_eq!(style.z_index, 1000);
        assert!(!style.flipped);
    }

    #[test]
    fn open_cover_drops_behind_the_pages() {
        let style = SheetStyle::new(0, 0, 10, false, &BookTiming::default());
        assert_eq!(style.z_index, 0);
        assert!(style.flipped);
    }

    #[test]
    fn unflipped_sheets_stack_in_reverse_order() {
        let timing = BookTiming::default();
        let first = SheetStyle::new(1, 0, 10, false, &timing);
        let second = SheetStyle::new(2, 0, 10, false, &timing);
        assert!(!first.flipped);
        assert!(first.z_index > second.z_index);
    }

    #[test]
    fn flipped_sheets_stack_in_order() {
        let timing = BookTiming::default();
        let first = SheetStyle::new(1, 5, 10, false, &timing);
        let second = SheetStyle::new(2, 5, 10, false, &timing);
        assert!(first.flipped && second.flipped);
        assert!(first.z_index < second.z_index);
    }

    #[test]
    fn riffle_uses_faster_transitions() {
        let timing = BookTiming::default();
        let style = SheetStyle::new(3, 2, 10, true, &timing);
        assert_eq!(style.duration_ms, 500);
        assert_eq!(style.z_delay_ms, 250);
        assert_eq!(
            style.css(),
            "z-index: 7; transform: rotateY(0deg); transition: transform 500ms ease-in-out, z-index 0ms 250ms;"
        );
    }

    #[test]
    fn page_numbers_are_zero_padded() {
        assert_eq!(page_number(1), "01");
        assert_eq!(page_number(10), "10");
    }
}
