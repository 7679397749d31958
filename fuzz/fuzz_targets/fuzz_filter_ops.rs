#![no_main]

use libfuzzer_sys::fuzz_target;
use showcase::config::PaginationSettings;
use showcase::filter::{CategoryId, Filter, FilterController};

// First byte picks the card count, the rest are operations:
// even bytes select a filter, odd bytes load more.
fuzz_target!(|data: &[u8]| {
    let Some((&count, ops)) = data.split_first() else {
        return;
    };
    let tags = ["a", "b", "c"];
    let categories: Vec<&str> = (0..usize::from(count)).map(|i| tags[i % 3]).collect();
    let mut controller = FilterController::from_categories(categories.as_slice(), PaginationSettings::default());

    for &op in ops {
        if op % 2 == 0 {
            let filter = match (op / 2) % 4 {
                0 => Filter::All,
                n => Filter::Category(CategoryId::new(tags[usize::from(n) - 1])),
            };
            controller.select_filter(filter);
            assert_eq!(controller.reveal_count(), 6);
        } else {
            controller.load_more();
        }

        let state = controller.visibility();
        assert_eq!(state.visible_count(), controller.visible_count());
        assert_eq!(state.load_more_visible, controller.reveal_count() < controller.match_count());
    }
});
