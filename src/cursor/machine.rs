use crate::cursor::geometry::{
    element_center, euclidean_distance, map_pad_drag_to_cursor, map_tracker_drag_to_cursor,
    pad_zones, CursorMapping, ElementMetrics, Point, ScreenBounds, Side, Zone, CLICK_THRESHOLD,
};
use crate::cursor::input::{PointerPhase, PointerSample, Surface};
use crate::cursor::messages::CursorCommand;
use crate::cursor::overlay::ElementId;
use crate::cursor::state::{can_transition, GesturePhase, InteractionState};

/// Turns per-surface pointer samples into overlay commands.
///
/// The machine never touches the overlay itself; every handler returns the
/// commands to apply, in order.
#[derive(Debug, Clone)]
pub struct GestureMachine {
    screen: ScreenBounds,
    metrics: ElementMetrics,
    state: InteractionState,
    tracker: Option<Point>,
    cursor: Option<Point>,
}

impl GestureMachine {
    pub fn new(screen: ScreenBounds, metrics: ElementMetrics) -> Self {
        Self {
            screen,
            metrics,
            state: InteractionState::default(),
            tracker: None,
            cursor: None,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn phase(&self) -> GesturePhase {
        self.state.phase
    }

    pub fn overlay_visible(&self) -> bool {
        self.state.has_visible_overlay
    }

    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor
    }

    pub fn cursor_center(&self) -> Option<Point> {
        self.cursor
            .map(|cursor| element_center(cursor, self.metrics.cursor()))
    }

    /// Screen area of the tracker while it is shown.
    pub fn tracker_zone(&self) -> Option<Zone> {
        if !self.state.has_visible_overlay {
            return None;
        }
        self.tracker
            .map(|tracker| Zone::at(tracker, self.metrics.tracker()))
    }

    pub fn pad_zones(&self) -> (Zone, Zone) {
        pad_zones(self.screen, &self.metrics)
    }

    /// Commands that put both pads on screen.
    pub fn startup(&self) -> Vec<CursorCommand> {
        let (left, right) = self.pad_zones();
        vec![
            CursorCommand::Place(ElementId::LeftPad, left.origin()),
            CursorCommand::Place(ElementId::RightPad, right.origin()),
            CursorCommand::Show(ElementId::LeftPad),
            CursorCommand::Show(ElementId::RightPad),
        ]
    }

    pub fn handle(&mut self, surface: Surface, sample: PointerSample) -> Vec<CursorCommand> {
        let mut out = Vec::new();
        match (surface, sample.phase) {
            (Surface::Pad(side), PointerPhase::Down) => self.pad_down(side, &mut out),
            (Surface::Pad(side), PointerPhase::Move) => self.pad_move(side, sample, &mut out),
            (Surface::Pad(side), PointerPhase::Up | PointerPhase::Cancel) => {
                self.pad_release(side, &mut out)
            }
            (Surface::Tracker, PointerPhase::Down) => self.tracker_down(sample, &mut out),
            (Surface::Tracker, PointerPhase::Move) => self.tracker_move(sample, &mut out),
            (Surface::Tracker, PointerPhase::Up | PointerPhase::Cancel) => {
                self.tracker_release(&mut out)
            }
        }
        out
    }

    pub fn on_idle_timeout(&mut self) -> Vec<CursorCommand> {
        let mut out = Vec::new();
        tracing::debug!("idle timeout, hiding overlay");
        self.hide_overlay(&mut out);
        out
    }

    /// Hides every element and forgets the interaction in progress.
    pub fn shutdown(&mut self) -> Vec<CursorCommand> {
        self.state.reset();
        self.forget_positions();
        ElementId::ALL.into_iter().map(CursorCommand::Hide).collect()
    }

    fn pad_down(&mut self, side: Side, out: &mut Vec<CursorCommand>) {
        let other_pad_busy = matches!(self.state.pad_sequence, Some(active) if active != side);
        if other_pad_busy || self.state.tracker_sequence {
            tracing::debug!(?side, "pad down ignored, another sequence is active");
            return;
        }

        self.state.pad_sequence = Some(side);
        self.enter(GesturePhase::Idle);
        out.push(CursorCommand::CancelIdleTimer);
    }

    fn pad_move(&mut self, side: Side, sample: PointerSample, out: &mut Vec<CursorCommand>) {
        if self.state.pad_sequence != Some(side) {
            return;
        }
        if !self.enter(GesturePhase::PadDragging(side)) {
            return;
        }

        self.state.active_side = Some(side);

        match map_pad_drag_to_cursor(sample.raw, side, self.screen, &self.metrics) {
            CursorMapping::Place { tracker, cursor } => {
                let show = !self.state.first_move_done;
                self.state.first_move_done = true;
                self.place_overlay(tracker, cursor, show, out);
            }
            CursorMapping::Hide => {
                tracing::debug!(?side, y = sample.raw.y, "pad drag left the reachable range");
                self.hide_overlay(out);
            }
        }
    }

    fn pad_release(&mut self, side: Side, out: &mut Vec<CursorCommand>) {
        if self.state.pad_sequence != Some(side) {
            return;
        }

        self.state.pad_sequence = None;
        self.state.first_move_done = false;
        self.enter(GesturePhase::Idle);
        out.push(CursorCommand::ArmIdleTimer);
    }

    fn tracker_down(&mut self, sample: PointerSample, out: &mut Vec<CursorCommand>) {
        if self.state.pad_sequence.is_some() {
            tracing::debug!("tracker down ignored during pad drag");
            return;
        }
        if !self.state.has_visible_overlay {
            tracing::debug!("tracker down ignored, overlay hidden");
            return;
        }

        self.enter(GesturePhase::Idle);
        self.enter(GesturePhase::TrackerArmed);
        self.state.tracker_sequence = true;
        self.state.press_origin = sample.raw;
        self.state.press_local_origin = sample.local;
        self.state.passed_click_threshold = false;
        out.push(CursorCommand::CancelIdleTimer);
    }

    fn tracker_move(&mut self, sample: PointerSample, out: &mut Vec<CursorCommand>) {
        if !self.state.tracker_sequence {
            return;
        }

        if !self.state.passed_click_threshold {
            let distance = euclidean_distance(self.state.press_origin, sample.raw);
            if distance >= CLICK_THRESHOLD {
                tracing::debug!(distance, "tracker drag started");
                self.state.passed_click_threshold = true;
                self.enter(GesturePhase::TrackerDragging);
            }
            return;
        }

        let Some(side) = self.state.active_side else {
            return;
        };

        let mapping = map_tracker_drag_to_cursor(
            sample.raw,
            self.state.press_local_origin,
            side,
            self.screen,
            &self.metrics,
        );
        match mapping {
            CursorMapping::Place { tracker, cursor } => {
                let show = !self.state.has_visible_overlay;
                self.place_overlay(tracker, cursor, show, out);
            }
            CursorMapping::Hide => {
                tracing::debug!(y = sample.raw.y, "tracker drag left the reachable range");
                self.hide_overlay(out);
            }
        }
    }

    fn tracker_release(&mut self, out: &mut Vec<CursorCommand>) {
        if !self.state.tracker_sequence {
            return;
        }

        if !self.state.passed_click_threshold {
            match self.cursor_center() {
                Some(center) if center.x > 0 && center.y > 0 => {
                    tracing::debug!(x = center.x, y = center.y, "tracker tap");
                    out.push(CursorCommand::ActivateAt(center));
                }
                _ => tracing::debug!("tracker tap suppressed, cursor not placed"),
            }
        }

        self.state.tracker_sequence = false;
        self.enter(GesturePhase::Idle);
        out.push(CursorCommand::ArmIdleTimer);
    }

    /// Placement always precedes visibility so nothing appears at a stale spot.
    fn place_overlay(
        &mut self,
        tracker: Point,
        cursor: Point,
        show: bool,
        out: &mut Vec<CursorCommand>,
    ) {
        self.tracker = Some(tracker);
        self.cursor = Some(cursor);
        out.push(CursorCommand::Place(ElementId::Tracker, tracker));
        out.push(CursorCommand::Place(ElementId::Cursor, cursor));

        if show {
            out.push(CursorCommand::Show(ElementId::Tracker));
            out.push(CursorCommand::Show(ElementId::Cursor));
            self.state.has_visible_overlay = true;
        }
    }

    fn hide_overlay(&mut self, out: &mut Vec<CursorCommand>) {
        if self.state.has_visible_overlay {
            out.push(CursorCommand::Hide(ElementId::Tracker));
            out.push(CursorCommand::Hide(ElementId::Cursor));
        }
        self.state.reset();
        self.forget_positions();
    }

    fn forget_positions(&mut self) {
        self.tracker = None;
        self.cursor = None;
    }

    fn enter(&mut self, to: GesturePhase) -> bool {
        let from = self.state.phase;
        if !can_transition(from, to) {
            tracing::debug!(?from, ?to, "gesture transition rejected");
            return false;
        }
        if from != to {
            tracing::trace!(?from, ?to, "gesture transition");
        }
        self.state.phase = to;
        true
    }
}
