use crate::cursor::geometry::{Point, Zone};
use crate::cursor::input::{PointerPhase, PointerSample, Surface};
use crate::cursor::machine::GestureMachine;

/// Routes raw screen touches to the surface that received the Down.
///
/// The tracker sits above the pads, so it wins the hit test while shown. The
/// surface stays captured until Up or Cancel, even when the finger leaves it.
#[derive(Debug, Default)]
pub struct InputRouter {
    captured: Option<(Surface, Zone)>,
}

impl InputRouter {
    pub fn captured(&self) -> Option<Surface> {
        self.captured.map(|(surface, _)| surface)
    }

    pub fn route(
        &mut self,
        machine: &GestureMachine,
        raw: Point,
        phase: PointerPhase,
    ) -> Option<(Surface, PointerSample)> {
        if phase == PointerPhase::Down {
            self.captured = hit_test(machine, raw);
            if self.captured.is_none() {
                tracing::trace!(x = raw.x, y = raw.y, "touch outside every surface");
            }
        }

        let (surface, zone) = self.captured?;
        if phase.ends_sequence() {
            self.captured = None;
        }
        Some((surface, PointerSample::new(raw, zone.local(raw), phase)))
    }
}

fn hit_test(machine: &GestureMachine, raw: Point) -> Option<(Surface, Zone)> {
    if let Some(zone) = machine.tracker_zone() {
        if zone.contains(raw) {
            return Some((Surface::Tracker, zone));
        }
    }

    let (left, right) = machine.pad_zones();
    if left.contains(raw) {
        return Some((Surface::LEFT_PAD, left));
    }
    if right.contains(raw) {
        return Some((Surface::RIGHT_PAD, right));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::geometry::{ElementMetrics, ScreenBounds};

    fn machine() -> GestureMachine {
        GestureMachine::new(ScreenBounds::new(1080, 2400), ElementMetrics::default())
    }

    #[test]
    fn down_on_pad_captures_until_release() {
        let machine = machine();
        let mut router = InputRouter::default();

        let (surface, sample) = router
            .route(&machine, Point::new(50, 2300), PointerPhase::Down)
            .expect("left pad hit");
        assert_eq!(surface, Surface::LEFT_PAD);
        assert_eq!(sample.local, Point::new(50, 260));

        // Still routed to the pad after leaving its zone.
        let (surface, _) = router
            .route(&machine, Point::new(500, 1200), PointerPhase::Move)
            .expect("captured move");
        assert_eq!(surface, Surface::LEFT_PAD);

        router.route(&machine, Point::new(500, 1200), PointerPhase::Up);
        assert_eq!(router.captured(), None);
        assert!(router
            .route(&machine, Point::new(500, 1200), PointerPhase::Move)
            .is_none());
    }

    #[test]
    fn visible_tracker_wins_over_pad() {
        let mut machine = machine();
        machine.handle(
            Surface::LEFT_PAD,
            PointerSample::raw(Point::new(100, 2350), PointerPhase::Down),
        );
        machine.handle(
            Surface::LEFT_PAD,
            PointerSample::raw(Point::new(100, 2350), PointerPhase::Move),
        );
        machine.handle(
            Surface::LEFT_PAD,
            PointerSample::raw(Point::new(100, 2350), PointerPhase::Up),
        );

        let mut router = InputRouter::default();
        let (surface, sample) = router
            .route(&machine, Point::new(110, 2360), PointerPhase::Down)
            .expect("tracker hit");
        assert_eq!(surface, Surface::Tracker);
        assert_eq!(sample.local, Point::new(70, 70));
    }

    #[test]
    fn right_pad_and_misses() {
        let machine = machine();
        let mut router = InputRouter::default();
        let (surface, _) = router
            .route(&machine, Point::new(1000, 2100), PointerPhase::Down)
            .expect("right pad hit");
        assert_eq!(surface, Surface::RIGHT_PAD);
        router.route(&machine, Point::new(1000, 2100), PointerPhase::Cancel);

        assert!(router
            .route(&machine, Point::new(540, 1000), PointerPhase::Down)
            .is_none());
    }
}
