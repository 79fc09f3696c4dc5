use std::collections::HashSet;
use std::time::{Duration, Instant};

use collapsible::animation::HeightAnimator;
use collapsible::{
    collect_element_ids, Collapsible, ContentMeasure, Easing, Element, Event, FixedHeight, Height,
    InlineStyle, PanelCallbacks, PanelConfig, Phase, TransitionConfig,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn boxed(id: &str, height: Height, transition: Option<TransitionConfig>) -> Element {
    Element::div().id(id).style(
        InlineStyle::new()
            .height(height)
            .transition(transition),
    )
}

fn linear(duration: u64) -> Option<TransitionConfig> {
    Some(TransitionConfig::new(ms(duration), Easing::Linear))
}

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in_out() {
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    assert!(Easing::EaseInOut.apply(0.75) > 0.75);
}

#[test]
fn test_easing_boundaries_and_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Custom("cubic-bezier(0.1, 0.7, 1.0, 0.1)".into()),
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);

        let mut prev = 0.0;
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

#[test]
fn test_easing_parse_and_display() {
    for keyword in ["linear", "ease", "ease-in", "ease-out", "ease-in-out"] {
        let easing = Easing::from(keyword);
        assert!(!matches!(easing, Easing::Custom(_)), "{keyword}");
        assert_eq!(easing.to_string(), keyword);
    }

    let custom = Easing::from("steps(4, end)");
    assert_eq!(custom, Easing::Custom("steps(4, end)".into()));
    assert_eq!(custom.to_string(), "steps(4, end)");
}

#[test]
fn test_transition_css() {
    let config = TransitionConfig::new(ms(350), Easing::EaseIn);
    assert_eq!(config.css("height"), "height 350ms ease-in");
}

// =============================================================================
// HeightAnimator
// =============================================================================

#[test]
fn test_first_frame_does_not_animate() {
    let mut animator = HeightAnimator::new();
    let now = Instant::now();

    animator.update(&boxed("a", Height::Fixed(10), linear(100)), now);

    assert!(!animator.has_active_transitions());
    assert!(animator.finished(now + ms(500)).is_empty());
}

#[test]
fn test_fixed_change_animates_and_finishes() {
    let mut animator = HeightAnimator::new();
    let now = Instant::now();

    animator.update(&boxed("a", Height::Fixed(0), linear(100)), now);
    animator.update(&boxed("a", Height::Fixed(100), linear(100)), now);

    assert!(animator.has_active_transitions());
    assert_eq!(animator.height_at("a", now), Some(0));
    assert_eq!(animator.height_at("a", now + ms(50)), Some(50));
    assert_eq!(animator.next_deadline(), Some(now + ms(100)));

    assert!(animator.finished(now + ms(99)).is_empty());
    assert_eq!(
        animator.finished(now + ms(100)),
        vec![Event::transition_end("a")]
    );
    assert!(!animator.has_active_transitions());
    assert_eq!(animator.height_at("a", now + ms(100)), None);
}

#[test]
fn test_eased_interpolation() {
    let mut animator = HeightAnimator::new();
    let now = Instant::now();
    let ease_in = Some(TransitionConfig::new(ms(100), Easing::EaseIn));

    animator.update(&boxed("a", Height::Fixed(0), ease_in.clone()), now);
    animator.update(&boxed("a", Height::Fixed(100), ease_in), now);

    assert_eq!(animator.height_at("a", now + ms(50)), Some(25));
}

#[test]
fn test_auto_changes_do_not_animate() {
    let mut animator = HeightAnimator::new();
    let now = Instant::now();

    animator.update(&boxed("a", Height::Auto, linear(100)), now);
    animator.update(&boxed("a", Height::Fixed(40), linear(100)), now);
    assert!(!animator.has_active_transitions());

    animator.update(&boxed("a", Height::Auto, linear(100)), now);
    assert!(!animator.has_active_transitions());
    assert!(animator.finished(now + ms(200)).is_empty());
}

#[test]
fn test_switching_to_auto_cancels_running_transition() {
    let mut animator = HeightAnimator::new();
    let now = Instant::now();

    animator.update(&boxed("a", Height::Fixed(0), linear(100)), now);
    animator.update(&boxed("a", Height::Fixed(40), linear(100)), now);
    assert!(animator.has_active_transitions());

    animator.update(&boxed("a", Height::Auto, linear(100)), now + ms(10));
    assert!(!animator.has_active_transitions());
    assert!(animator.finished(now + ms(200)).is_empty());
}

#[test]
fn test_no_transition_config_jumps() {
    let mut animator = HeightAnimator::new();
    let now = Instant::now();

    animator.update(&boxed("a", Height::Fixed(0), None), now);
    animator.update(&boxed("a", Height::Fixed(40), None), now);

    assert!(!animator.has_active_transitions());
}

#[test]
fn test_retarget_starts_from_current_value() {
    let mut animator = HeightAnimator::new();
    let now = Instant::now();

    animator.update(&boxed("a", Height::Fixed(0), linear(100)), now);
    animator.update(&boxed("a", Height::Fixed(100), linear(100)), now);
    // Halfway up, head back down
    animator.update(&boxed("a", Height::Fixed(0), linear(100)), now + ms(50));

    assert_eq!(animator.height_at("a", now + ms(50)), Some(50));
    assert_eq!(animator.height_at("a", now + ms(100)), Some(25));
    assert!(animator.finished(now + ms(120)).is_empty());
    assert_eq!(
        animator.finished(now + ms(150)),
        vec![Event::transition_end("a")]
    );
}

#[test]
fn test_reduced_motion_finishes_immediately() {
    let mut animator = HeightAnimator::new();
    animator.set_reduced_motion(true);
    let now = Instant::now();

    animator.update(&boxed("a", Height::Fixed(0), linear(400)), now);
    animator.update(&boxed("a", Height::Fixed(30), linear(400)), now);

    assert!(animator.has_active_transitions());
    assert_eq!(animator.height_at("a", now), None);
    assert_eq!(animator.finished(now), vec![Event::transition_end("a")]);
    assert!(!animator.has_active_transitions());
}

#[test]
fn test_finished_orders_by_id() {
    let mut animator = HeightAnimator::new();
    let now = Instant::now();

    let tree = |h: u16| {
        Element::div()
            .id("root")
            .child(boxed("b", Height::Fixed(h), linear(10)))
            .child(boxed("a", Height::Fixed(h), linear(10)))
    };
    animator.update(&tree(0), now);
    animator.update(&tree(5), now);

    assert_eq!(
        animator.finished(now + ms(10)),
        vec![Event::transition_end("a"), Event::transition_end("b")]
    );
}

#[test]
fn test_cleanup_removes_stale_elements() {
    let mut animator = HeightAnimator::new();
    let now = Instant::now();

    animator.update(&boxed("a", Height::Fixed(0), linear(100)), now);
    animator.update(&boxed("a", Height::Fixed(10), linear(100)), now);
    assert!(animator.has_active_transitions());

    let keep = collect_element_ids(&Element::div().id("other"));
    animator.cleanup(&keep);
    assert!(!animator.has_active_transitions());

    let empty: HashSet<String> = HashSet::new();
    animator.cleanup(&empty);
}

// =============================================================================
// Panel + Animator
// =============================================================================

/// Minimal host: renders, animates, commits and delivers transition ends.
struct Host {
    panel: Collapsible,
    animator: HeightAnimator,
    measure: FixedHeight,
    log: std::rc::Rc<std::cell::RefCell<Vec<&'static str>>>,
}

impl Host {
    fn new(config: PanelConfig, content_height: u16) -> Self {
        let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let (a, b, c, d) = (log.clone(), log.clone(), log.clone(), log.clone());
        let callbacks = PanelCallbacks::new()
            .on_opening(move || a.borrow_mut().push("opening"))
            .on_open(move || b.borrow_mut().push("open"))
            .on_closing(move || c.borrow_mut().push("closing"))
            .on_close(move || d.borrow_mut().push("close"));
        Self {
            panel: Collapsible::with_callbacks(config.id("p"), callbacks),
            animator: HeightAnimator::new(),
            measure: FixedHeight(content_height),
            log,
        }
    }

    fn frame(&mut self, now: Instant) -> Option<u16> {
        self.panel.tick(now);
        let root = self.panel.render(vec![Element::text("body")]);
        self.animator.update(&root, now);
        let painted = self.animator.height_at("p__contentOuter", now);
        self.panel.commit(&self.measure, now);
        self.panel.clear_dirty();
        for event in self.animator.finished(now) {
            self.panel.handle_event(&event, &self.measure);
        }
        painted
    }

    fn click(&mut self) {
        let measure: &dyn ContentMeasure = &self.measure;
        self.panel.handle_event(&Event::click("p__trigger"), measure);
    }
}

#[test]
fn test_full_open_close_cycle() {
    let mut host = Host::new(PanelConfig::new("Title"), 120);
    let start = Instant::now();

    host.frame(start);
    host.click();
    host.frame(start); // commit expands to 120
    assert_eq!(host.panel.state().height, Height::Fixed(120));

    host.frame(start); // animator picks up 0 -> 120
    assert_eq!(host.frame(start + ms(200)), Some(60));
    host.frame(start + ms(400));
    assert_eq!(host.panel.phase(), Phase::Open);
    assert_eq!(host.panel.state().height, Height::Auto);

    let t = start + ms(1000);
    host.click();
    host.frame(t); // pinned at 120, collapse scheduled
    assert_eq!(host.panel.phase(), Phase::Closing);
    host.frame(t + ms(50)); // collapse to 0 starts animating
    assert!(host.panel.is_closed());
    assert_eq!(host.frame(t + ms(250)), Some(60));
    host.frame(t + ms(450));

    assert_eq!(host.panel.phase(), Phase::Closed);
    assert_eq!(*host.log.borrow(), vec!["opening", "open", "closing", "close"]);
}

#[test]
fn test_close_time_override_drives_animation() {
    let mut host = Host::new(
        PanelConfig::new("Title")
            .open(true)
            .transition_close_time(ms(200)),
        50,
    );
    let start = Instant::now();

    host.frame(start);
    host.click();
    host.frame(start);
    host.frame(start + ms(50));
    assert!(host.animator.has_active_transitions());
    assert_eq!(host.animator.next_deadline(), Some(start + ms(250)));

    host.frame(start + ms(250));
    assert_eq!(host.panel.phase(), Phase::Closed);
}

#[test]
fn test_zero_height_content_settles_without_animation() {
    let mut host = Host::new(PanelConfig::new("Title"), 0);
    let start = Instant::now();

    host.frame(start);
    host.click();
    host.frame(start);

    assert_eq!(host.panel.phase(), Phase::Open);
    assert_eq!(host.panel.state().height, Height::Auto);
    assert_eq!(*host.log.borrow(), vec!["opening", "open"]);
}

/// Run frames every 20ms for two seconds.
fn run_frames(host: &mut Host, from: Instant) {
    let mut now = from;
    for _ in 0..100 {
        now += ms(20);
        host.frame(now);
    }
}

#[test]
fn test_second_activation_while_collapse_pending_settles_closed() {
    let mut host = Host::new(PanelConfig::new("Title").open(true), 3);
    let start = Instant::now();

    host.frame(start);
    host.click();
    host.frame(start); // pinned at 3, collapse scheduled

    host.click();
    assert_eq!(host.panel.phase(), Phase::Closing);
    run_frames(&mut host, start + ms(10));

    assert_eq!(host.panel.phase(), Phase::Closed);
    assert_eq!(host.panel.state().height, Height::Fixed(0));
    assert_eq!(*host.log.borrow(), vec!["closing", "closing", "close"]);
}

#[test]
fn test_second_activation_before_commit_settles_open() {
    let mut host = Host::new(PanelConfig::new("Title"), 3);
    let start = Instant::now();

    host.frame(start);
    host.click();
    host.click();
    run_frames(&mut host, start);

    assert_eq!(host.panel.phase(), Phase::Open);
    assert_eq!(host.panel.state().height, Height::Auto);
    assert_eq!(*host.log.borrow(), vec!["opening", "opening", "open"]);
}

#[test]
fn test_reopen_during_collapse_animation_settles_open() {
    let mut host = Host::new(PanelConfig::new("Title").open(true), 40);
    let start = Instant::now();

    host.frame(start);
    host.click();
    host.frame(start);
    host.frame(start + ms(50)); // collapse to 0 starts
    host.frame(start + ms(150));
    assert!(host.panel.is_closed());

    host.click();
    run_frames(&mut host, start + ms(150));

    assert_eq!(host.panel.phase(), Phase::Open);
    assert_eq!(host.panel.state().height, Height::Auto);
    assert_eq!(*host.log.borrow(), vec!["closing", "opening", "open"]);
}

#[test]
fn test_open_flag_restored_during_collapse_window_settles_open() {
    let mut host = Host::new(PanelConfig::new("Title").open(true), 3);
    let start = Instant::now();

    host.frame(start);
    let closed = host.panel.config().clone().open(false);
    host.panel.set_config(closed, &host.measure);
    host.frame(start); // pinned at 3, collapse scheduled

    let reopened = host.panel.config().clone().open(true);
    host.panel.set_config(reopened, &host.measure);
    run_frames(&mut host, start + ms(10));

    assert_eq!(host.panel.phase(), Phase::Open);
    assert_eq!(host.panel.state().height, Height::Auto);
    assert_eq!(*host.log.borrow(), vec!["closing", "opening", "open"]);
}

#[test]
fn test_open_flag_reversed_before_commit_never_expands() {
    let mut host = Host::new(PanelConfig::new("Title"), 3);
    let start = Instant::now();

    host.frame(start);
    let opened = host.panel.config().clone().open(true);
    host.panel.set_config(opened, &host.measure);
    let closed = host.panel.config().clone().open(false);
    host.panel.set_config(closed, &host.measure);

    let mut now = start;
    for _ in 0..100 {
        now += ms(20);
        assert_eq!(host.frame(now), None);
        assert_eq!(host.panel.state().height, Height::Fixed(0));
    }

    assert_eq!(host.panel.phase(), Phase::Closed);
    assert_eq!(*host.log.borrow(), vec!["opening", "closing", "close"]);
}
