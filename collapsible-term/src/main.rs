//! Interactive terminal demo: a column of collapsible panels.
//!
//! Tab / Shift+Tab move focus between triggers, Enter or Space toggles the
//! focused one, clicking a trigger row toggles it. `r` toggles reduced
//! motion, `q` or Esc quits. Logs go to `collapsible-term.log`.

mod paint;
mod terminal;

use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

use collapsible::animation::HeightAnimator;
use collapsible::{
    collect_element_ids, find_element, Collapsible, Content, Element, Event, EventResult,
    FixedHeight, Key, Modifiers, MouseButton, Overflow, PanelCallbacks, PanelConfig,
    TriggerSibling,
};
use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::paint::{Painter, Row};
use crate::terminal::Terminal;

const FRAME: Duration = Duration::from_millis(16);

struct Demo {
    panels: Vec<(Collapsible, Vec<Element>)>,
    animator: HeightAnimator,
    focus: usize,
    /// Natural content height per panel, from the last painted frame.
    heights: Vec<u16>,
    rows: Vec<Row>,
}

fn line(text: &str) -> Element {
    Element::div().content(Content::Text(text.into()))
}

fn logged(name: &'static str) -> PanelCallbacks {
    PanelCallbacks::new()
        .on_opening(move || log::info!("{name}: opening"))
        .on_open(move || log::info!("{name}: open"))
        .on_closing(move || log::info!("{name}: closing"))
        .on_close(move || log::info!("{name}: close"))
}

/// Last painted natural height of panel `index`; zero before the first frame.
fn measure_at(heights: &[u16], index: usize) -> FixedHeight {
    FixedHeight(heights.get(index).copied().unwrap_or(0))
}

impl Demo {
    fn new() -> Self {
        let plain = Collapsible::with_callbacks(
            PanelConfig::new("What is this?").id("about"),
            logged("about"),
        );
        let body = vec![
            line("A panel whose content grows and shrinks"),
            line("by animating its height between zero and"),
            line("the measured size of what it holds."),
        ];

        let rich = Collapsible::with_callbacks(
            PanelConfig::new("▸ Show details")
                .id("details")
                .trigger_when_open("▾ Hide details")
                .trigger_sibling(TriggerSibling::builder(|| {
                    Element::text("(lazy)").class("hint")
                }))
                .lazy_render(true)
                .easing("ease-in-out")
                .transition_close_time(Duration::from_millis(200))
                .overflow_when_open(Overflow::Visible),
            logged("details"),
        );
        let details = (1..=6).map(|i| line(&format!("Detail line {i}"))).collect();

        let disabled = Collapsible::with_callbacks(
            PanelConfig::new("Locked section")
                .id("locked")
                .trigger_disabled(true),
            logged("locked"),
        );

        Self {
            panels: vec![
                (plain, body),
                (rich, details),
                (disabled, vec![line("You should not see this.")]),
            ],
            animator: HeightAnimator::new(),
            focus: 0,
            heights: Vec::new(),
            rows: Vec::new(),
        }
    }

    fn focused_trigger(&self) -> Option<String> {
        self.panels.get(self.focus).map(|(p, _)| p.trigger_id())
    }

    /// One frame: settle timers, render, animate, paint, commit, and deliver
    /// finished transitions.
    fn frame(&mut self, now: Instant) {
        for (panel, _) in &mut self.panels {
            panel.tick(now);
        }

        let root = Element::div().id("page").children(
            self.panels
                .iter()
                .map(|(panel, children)| panel.render(children.clone()))
                .collect(),
        );

        self.animator.update(&root, now);
        self.animator.cleanup(&collect_element_ids(&root));

        let painter = Painter::new(&self.animator, now);
        self.rows = painter.paint(&root);
        self.heights = self
            .panels
            .iter()
            .map(|(panel, _)| {
                find_element(&root, &panel.content_id())
                    .map(|outer| painter.natural_height(outer))
                    .unwrap_or(0)
            })
            .collect();

        for (i, (panel, _)) in self.panels.iter_mut().enumerate() {
            let measure = measure_at(&self.heights, i);
            panel.commit(&measure, now);
            panel.clear_dirty();
        }

        for event in self.animator.finished(now) {
            self.dispatch(&event);
        }
    }

    fn dispatch(&mut self, event: &Event) -> EventResult {
        for (i, (panel, _)) in self.panels.iter_mut().enumerate() {
            let measure = measure_at(&self.heights, i);
            if panel.handle_event(event, &measure).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }

    fn busy(&self) -> bool {
        self.animator.has_active_transitions() || self.panels.iter().any(|(p, _)| p.is_dirty())
    }

    /// How long to wait for input before the next frame is due.
    fn timeout(&self, now: Instant) -> Option<Duration> {
        if self.busy() {
            return Some(FRAME);
        }
        self.panels
            .iter()
            .filter_map(|(p, _)| p.next_deadline())
            .chain(self.animator.next_deadline())
            .min()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    fn move_focus(&mut self, forward: bool) {
        let len = self.panels.len();
        if len == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % len
        } else {
            (self.focus + len - 1) % len
        };
        log::debug!("focus -> {:?}", self.focused_trigger());
    }

    fn focus_target(&mut self, target: &str) {
        if let Some(i) = self.panels.iter().position(|(p, _)| p.trigger_id() == target) {
            self.focus = i;
        }
    }
}

/// Returns false when the demo should quit.
fn handle_input(demo: &mut Demo, event: CrosstermEvent, header_rows: usize) -> bool {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            let modifiers = Modifiers::from(key.modifiers);
            match Key::from(key.code) {
                Key::Char('q') | Key::Escape => return false,
                Key::Char('r') => {
                    let enabled = !demo.animator.reduced_motion();
                    demo.animator.set_reduced_motion(enabled);
                    log::info!("reduced motion: {enabled}");
                }
                Key::Tab => demo.move_focus(true),
                Key::BackTab => demo.move_focus(false),
                k => {
                    let event = Event::Key {
                        target: demo.focused_trigger(),
                        key: k,
                        modifiers,
                    };
                    demo.dispatch(&event);
                }
            }
        }
        CrosstermEvent::Mouse(mouse) => {
            if let MouseEventKind::Down(button) = mouse.kind {
                let target = (mouse.row as usize)
                    .checked_sub(header_rows)
                    .and_then(|i| demo.rows.get(i))
                    .and_then(|row| row.target.clone());
                if let Some(t) = &target {
                    demo.focus_target(t);
                }
                let event = Event::Click {
                    target,
                    x: mouse.column,
                    y: mouse.row,
                    button: MouseButton::from(button),
                };
                demo.dispatch(&event);
            }
        }
        _ => {}
    }
    true
}

fn run() -> io::Result<()> {
    let mut term = Terminal::new()?;
    let mut demo = Demo::new();
    log::info!("terminal size: {:?}", term.size());

    loop {
        let now = Instant::now();
        demo.frame(now);

        let header = vec![
            "Collapsible panels".to_string(),
            format!(
                "Tab focus · Enter/Space/click toggle · r reduced motion ({}) · q quit",
                if demo.animator.reduced_motion() { "on" } else { "off" }
            ),
            String::new(),
        ];
        term.draw(&header, &demo.rows, demo.focused_trigger().as_deref())?;

        for event in term.poll(demo.timeout(Instant::now()))? {
            if !handle_input(&mut demo, event, header.len()) {
                return Ok(());
            }
        }
    }
}

fn main() {
    let logger = File::create("collapsible-term.log").and_then(|log_file| {
        WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
            .map_err(io::Error::other)
    });
    if let Err(e) = logger {
        eprintln!("Error: failed to initialize logger: {}", e);
        return;
    }

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}
