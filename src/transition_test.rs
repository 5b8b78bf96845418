use super::*;

/// Click the start button `clicks` times, then let every scheduled swap
/// elapse. Returns every action the host would have applied, in order.
fn run_clicks(t: &mut ViewTransition, clicks: usize) -> Vec<Action> {
    let mut applied = Vec::new();
    for _ in 0..clicks {
        applied.extend(t.trigger());
    }
    let swaps = applied.iter().filter(|a| matches!(a, Action::ScheduleSwap { .. })).count();
    for _ in 0..swaps {
        applied.extend(t.finish_swap());
    }
    applied
}

fn count(actions: &[Action], wanted: &Action) -> usize {
    actions.iter().filter(|a| std::mem::discriminant(*a) == std::mem::discriminant(wanted)).count()
}

#[test]
fn starts_on_landing() {
    let t = ViewTransition::default();
    assert_eq!(t.phase(), Phase::Landing);
    assert!(!t.is_gallery());
}

#[test]
fn trigger_emits_burst_audio_fade_and_swap_in_order() {
    let mut t = ViewTransition::default();
    let actions = t.trigger();
    assert_eq!(
        actions,
        vec![
            Action::Confetti(ConfettiOptions::default()),
            Action::PlayAudio,
            Action::FadeOutLanding,
            Action::ScheduleSwap { delay_ms: 1000 },
        ]
    );
    assert_eq!(t.phase(), Phase::Leaving);
}

#[test]
fn finish_swap_reveals_gallery() {
    let mut t = ViewTransition::default();
    t.trigger();
    let actions = t.finish_swap();
    assert_eq!(actions, vec![Action::HideLanding, Action::ShowGallery, Action::ObserveCards { threshold: 0.1 }]);
    assert!(t.is_gallery());
}

#[test]
fn finish_swap_before_trigger_is_noop() {
    let mut t = ViewTransition::default();
    assert!(t.finish_swap().is_empty());
    assert_eq!(t.phase(), Phase::Landing);
}

#[test]
fn retrigger_while_leaving_is_noop() {
    let mut t = ViewTransition::default();
    t.trigger();
    assert!(t.trigger().is_empty());
    assert_eq!(t.phase(), Phase::Leaving);
}

#[test]
fn gallery_is_terminal() {
    let mut t = ViewTransition::default();
    t.trigger();
    t.finish_swap();
    assert!(t.trigger().is_empty());
    assert!(t.finish_swap().is_empty());
    assert!(t.is_gallery());
}

#[test]
fn any_click_count_emits_one_full_transition() {
    let single = run_clicks(&mut ViewTransition::default(), 1);
    for clicks in 1..8 {
        let mut t = ViewTransition::default();
        let actions = run_clicks(&mut t, clicks);
        assert!(t.is_gallery(), "{clicks} clicks");
        assert_eq!(actions, single, "{clicks} clicks");
        for wanted in [Action::FadeOutLanding, Action::HideLanding, Action::ShowGallery, Action::PlayAudio] {
            assert_eq!(count(&actions, &wanted), 1, "{wanted:?} after {clicks} clicks");
        }
    }
}

#[test]
fn landing_fades_before_it_is_hidden_and_gallery_shows_last() {
    let actions = run_clicks(&mut ViewTransition::default(), 3);
    let pos = |wanted: &Action| actions.iter().position(|a| a == wanted);
    let fade = pos(&Action::FadeOutLanding);
    let hide = pos(&Action::HideLanding);
    let show = pos(&Action::ShowGallery);
    assert!(fade.is_some() && hide.is_some() && show.is_some());
    assert!(fade < hide && hide < show);
}

#[test]
fn no_clicks_emits_nothing() {
    let mut t = ViewTransition::default();
    assert!(run_clicks(&mut t, 0).is_empty());
    assert_eq!(t.phase(), Phase::Landing);
}

#[test]
fn custom_timing_is_carried_into_actions() {
    let timing = Timing { view_swap_delay_ms: 250, reveal_threshold: 0.5, ..Timing::default() };
    let mut t = ViewTransition::new(ConfettiOptions::default(), &timing);
    assert_eq!(t.trigger().last(), Some(&Action::ScheduleSwap { delay_ms: 250 }));
    assert_eq!(t.finish_swap().last(), Some(&Action::ObserveCards { threshold: 0.5 }));
}
