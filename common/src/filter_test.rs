use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cat {
    Event,
    Announcement,
    Achievement,
}

impl fmt::Display for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Cat::Event => "event",
            Cat::Announcement => "announcement",
            Cat::Achievement => "achievement",
        };
        f.write_str(s)
    }
}

fn controller() -> FilterController<Cat> {
    FilterController::new(vec![
        Cat::Event,
        Cat::Achievement,
        Cat::Announcement,
        Cat::Event,
        Cat::Achievement,
    ])
}

// applies steps as the timers would fire them: ordered by absolute time, ties broken by
// scheduling order
fn run(controller: &mut FilterController<Cat>, timeline: Vec<(u32, Vec<FilterStep>)>) {
    let mut events: Vec<(u32, usize, FilterStep)> = Vec::new();
    let mut seq = 0;
    for (at, steps) in timeline {
        for step in steps {
            events.push((at + step.delay_ms, seq, step));
            seq += 1;
        }
    }
    events.sort_by_key(|(t, s, _)| (*t, *s));

    for (_, _, step) in events {
        controller.apply(&step);
    }
}

#[test]
fn cards_start_visible_with_all_active() {
    let c = controller();

    assert_eq!(c.active(), &Filter::All);
    assert_eq!(c.visible(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn select_fades_everything_out_immediately() {
    let mut c = controller();
    let steps = c.select(Filter::Only(Cat::Event));

    assert!(c.visible().is_empty());
    assert!(!steps.is_empty());
    assert!(steps.iter().all(|s| s.delay_ms >= FILTER_HIDE_SHOW_GAP_MS));
}

#[test]
fn filtering_leaves_exactly_the_matching_cards() {
    for filter in [
        Filter::Only(Cat::Event),
        Filter::Only(Cat::Announcement),
        Filter::Only(Cat::Achievement),
        Filter::All,
    ] {
        let mut c = controller();
        let steps = c.select(filter.clone());
        run(&mut c, vec![(0, steps)]);

        assert_eq!(c.visible(), c.matching(&filter), "filter {filter:?}");
        for i in 0..c.len() {
            let shown = c.view(i).displayed;
            assert_eq!(shown, c.matching(&filter).contains(&i));
        }
    }
}

#[test]
fn matching_cards_fade_in_with_stagger_by_rank() {
    let mut c = controller();
    let steps = c.select(Filter::Only(Cat::Achievement));

    let fade_ins: Vec<(usize, u32)> = steps
        .iter()
        .filter(|s| s.action.action == CardAction::FadeIn)
        .map(|s| (s.action.card, s.delay_ms))
        .collect();

    assert_eq!(
        fade_ins,
        vec![
            (1, FILTER_HIDE_SHOW_GAP_MS),
            (4, FILTER_HIDE_SHOW_GAP_MS + FILTER_STAGGER_MS)
        ]
    );
}

#[test]
fn empty_result_hides_everything_without_error() {
    let mut c = FilterController::new(vec![Cat::Event, Cat::Event]);
    let steps = c.select(Filter::Only(Cat::Announcement));
    run(&mut c, vec![(0, steps)]);

    assert!(c.visible().is_empty());
    assert!(!c.view(0).displayed);
}

#[test]
fn second_rapid_click_wins_once_timers_resolve() {
    let mut c = controller();
    let first = c.select(Filter::Only(Cat::Event));
    let second = c.select(Filter::Only(Cat::Achievement));

    // the second click lands 100ms after the first, before any of the first's timers fired
    run(&mut c, vec![(0, first), (100, second)]);

    assert_eq!(c.active(), &Filter::Only(Cat::Achievement));
    assert_eq!(c.visible(), vec![1, 4]);
    assert!(!c.view(0).displayed);
    assert!(!c.view(3).displayed);
}

#[test]
fn stale_steps_are_rejected() {
    let mut c = controller();
    let first = c.select(Filter::Only(Cat::Event));
    let second = c.select(Filter::All);
    run(&mut c, vec![(0, second)]);

    for step in &first {
        assert!(!c.apply(step));
    }
    assert_eq!(c.visible(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn reselecting_active_filter_reruns_transition() {
    let mut c = controller();
    let steps = c.select(Filter::All);
    run(&mut c, vec![(0, steps)]);
    let before = c.generation();

    let steps = c.select(Filter::All);
    assert!(c.generation() > before);
    assert!(c.visible().is_empty());
    run(&mut c, vec![(0, steps)]);
    assert_eq!(c.visible().len(), 5);
}

#[test]
fn filter_keys_and_announcements() {
    assert_eq!(Filter::<Cat>::All.key(), "all");
    assert_eq!(Filter::Only(Cat::Event).key(), "event");

    assert_eq!(
        Announcer::News.message(&Filter::<Cat>::All),
        "Filtered to show all news"
    );
    assert_eq!(
        Announcer::News.message(&Filter::Only(Cat::Achievement)),
        "Filtered to show achievement"
    );
    assert_eq!(
        Announcer::Staff.message(&Filter::Only("academic")),
        "Showing academic staff"
    );
    assert_eq!(Announcer::Gallery.message(&Filter::<&str>::All), "Showing all photos");
    assert_eq!(Announcer::News.clear_after_ms(), Some(1000));
    assert_eq!(Announcer::Staff.clear_after_ms(), None);
}

#[test]
fn card_styles_track_view_state() {
    assert!(CardView::SHOWN.style().contains("opacity: 1"));
    let hidden = CardView {
        displayed: false,
        opaque: false,
    };
    assert!(hidden.style().starts_with("display: none"));
}

#[test]
fn hidden_cards_leave_layout_before_reveal() {
    let mut controller = controller();
    let steps = controller.select(Filter::Only(Cat::Event));
    run(&mut controller, vec![(0, steps)]);

    let hidden = controller.view(1);
    assert!(!hidden.displayed);
    assert!(hidden.style_with_reveal(false).contains("display: none"));
    assert!(hidden.style_with_reveal(true).contains("display: none"));

    let shown = controller.view(0);
    assert_eq!(shown.style_with_reveal(false), crate::viewport::reveal_style(false));
    assert!(shown.style_with_reveal(true).contains("opacity: 1"));
}
