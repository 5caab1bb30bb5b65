//! Break search over a two-paragraph lorem ipsum chapter

use excerptor_core::{BreakingPolicy, Error, ReadDirection, TextBreaker};

const LOREM: &str = include_str!("fixtures/lorem.txt");

fn breaker(policy: BreakingPolicy, direction: ReadDirection) -> TextBreaker {
    TextBreaker::with_policy(policy, direction)
}

#[test]
fn test_fixture_shape() {
    assert_eq!(LOREM.chars().count(), 648);
    assert_eq!(LOREM.matches('\n').count(), 1);
    assert!(LOREM.ends_with('.'));
}

#[test]
fn test_forward_first_cuts_after_first_sentence() {
    let breaker = breaker(BreakingPolicy::First, ReadDirection::Forward);
    assert_eq!(
        breaker.find_closest_breaking_point(LOREM, 0, 50, Some(80)).unwrap(),
        56
    );
    assert_eq!(
        breaker.break_text(LOREM, 0, 50, Some(80)).unwrap(),
        Some("Lorem ipsum dolor sit amet, consectetur adipiscing elit.")
    );
}

#[test]
fn test_forward_first_single_breakpoint_in_range() {
    let breaker = breaker(BreakingPolicy::First, ReadDirection::Forward);
    assert_eq!(
        breaker.find_closest_breaking_point(LOREM, 20, 50, Some(90)).unwrap(),
        79
    );
}

#[test]
fn test_forward_without_breakpoint_in_range_keeps_whole_words() {
    let breaker = breaker(BreakingPolicy::First, ReadDirection::Forward);
    assert_eq!(
        breaker.find_closest_breaking_point(LOREM, 360, 20, Some(49)).unwrap(),
        401
    );
    let excerpt = breaker.break_text(LOREM, 360, 20, Some(49)).unwrap().unwrap();
    assert!(excerpt.ends_with("feugiat"));
}

#[test]
fn test_forward_unbounded_max() {
    let breaker = breaker(BreakingPolicy::First, ReadDirection::Forward);
    assert_eq!(
        breaker.find_closest_breaking_point(LOREM, 0, 50, None).unwrap(),
        56
    );
}

#[test]
fn test_forward_last_unbounded_runs_to_final_sentence() {
    let breaker = breaker(BreakingPolicy::Last, ReadDirection::Forward);
    assert_eq!(
        breaker.find_closest_breaking_point(LOREM, 0, 50, None).unwrap(),
        648
    );
}

#[test]
fn test_forward_last_bounded() {
    let breaker = breaker(BreakingPolicy::Last, ReadDirection::Forward);
    assert_eq!(
        breaker.find_closest_breaking_point(LOREM, 0, 50, Some(200)).unwrap(),
        194
    );
}

#[test]
fn test_backward_last_from_text_end() {
    let breaker = breaker(BreakingPolicy::Last, ReadDirection::Backward);
    assert_eq!(
        breaker.find_closest_breaking_point(LOREM, 647, 50, Some(80)).unwrap(),
        573
    );
    let excerpt = breaker.break_text(LOREM, 647, 50, Some(80)).unwrap().unwrap();
    assert!(excerpt.starts_with("Praesent blandit odio."));
}

#[test]
fn test_backward_first_from_text_end() {
    let breaker = breaker(BreakingPolicy::First, ReadDirection::Backward);
    assert_eq!(
        breaker.find_closest_breaking_point(LOREM, 647, 50, Some(80)).unwrap(),
        596
    );
}

#[test]
fn test_backward_finds_sentence_start() {
    let breaker = breaker(BreakingPolicy::First, ReadDirection::Backward);
    assert_eq!(
        breaker.find_closest_breaking_point(LOREM, 100, 0, Some(30)).unwrap(),
        80
    );
    assert_eq!(
        breaker.break_text(LOREM, 100, 0, Some(30)).unwrap(),
        Some("Suspendisse lectus t")
    );
}

#[test]
fn test_edge_saturation_ignores_max() {
    let forward = breaker(BreakingPolicy::First, ReadDirection::Forward);
    assert_eq!(
        forward.find_closest_breaking_point(LOREM, 640, 20, None).unwrap(),
        648
    );
    assert_eq!(
        forward.find_closest_breaking_point(LOREM, 640, 20, Some(25)).unwrap(),
        648
    );

    let backward = breaker(BreakingPolicy::First, ReadDirection::Backward);
    assert_eq!(
        backward.find_closest_breaking_point(LOREM, 30, 40, None).unwrap(),
        0
    );
}

#[test]
fn test_anchor_out_of_range() {
    for direction in ReadDirection::ALL {
        let breaker = breaker(BreakingPolicy::First, direction);
        assert_eq!(
            breaker.find_closest_breaking_point(LOREM, 648, 0, None),
            Err(Error::IndexOutOfRange {
                index: 648,
                len: 648
            })
        );
        assert!(matches!(
            breaker.break_text(LOREM, usize::MAX, 0, None),
            Err(Error::IndexOutOfRange { .. })
        ));
    }
}

#[test]
fn test_chapter_excerpts_cover_fixture() {
    let breaker = TextBreaker::new();
    let excerpts: Vec<_> = breaker.excerpts(LOREM, 50, Some(200)).collect();

    let joined: String = excerpts.iter().map(|e| e.as_str()).collect();
    assert_eq!(joined, LOREM);
    assert_eq!(excerpts[0].end(), 56);
    assert!(excerpts.iter().all(|e| !e.is_empty()));
}
