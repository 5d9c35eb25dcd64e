// SPDX-License-Identifier: MPL-2.0
//! One notification card: content, lifecycle state machine, and pose.
//!
//! A card moves through `Created → Mounted → Visible → Dismissing → Removed`
//! and never goes backwards. Content is rendered immutably once built; only
//! the phase, the hover flag, and the owned auto-dismiss deadline change.
//! The pose (horizontal offset, opacity, scale) is derived from the phase and
//! a monotonic clock, so rendering stays a pure function of state and time.

use super::request::{Request, DEFAULT_ICON, DEFAULT_TITLE};
use super::timing::OneShot;
use crate::ui::design_tokens::sizing;
use std::time::{Duration, Instant};

/// Length of the entry and exit transitions.
pub const TRANSITION: Duration = Duration::from_millis(300);

/// Cosmetic scale emphasis applied while the pointer is over a card.
pub const HOVER_SCALE: f32 = 1.02;

/// How a card left the screen, reported to diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The pointer was pressed on the card.
    Clicked,
    /// The auto-dismiss deadline elapsed.
    TimedOut,
    /// A caller dismissed the card through its handle.
    Requested,
}

/// Visual pose of a card at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Rightward offset from the resting position, in logical pixels.
    pub offset: f32,
    /// Overall opacity in `[0, 1]`.
    pub opacity: f32,
    /// Uniform scale factor; `1.0` at rest.
    pub scale: f32,
}

impl Pose {
    /// Off-screen, fully transparent: the pose before entry and after exit.
    pub const OFFSCREEN: Pose = Pose {
        offset: sizing::BANNER_WIDTH,
        opacity: 0.0,
        scale: 1.0,
    };

    /// In place, fully opaque: the resting pose.
    pub const SHOWN: Pose = Pose {
        offset: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    fn lerp(from: Pose, to: Pose, p: f32) -> Pose {
        Pose {
            offset: from.offset + (to.offset - from.offset) * p,
            opacity: from.opacity + (to.opacity - from.opacity) * p,
            scale: from.scale + (to.scale - from.scale) * p,
        }
    }
}

/// Standard deceleration easing, cubic-bezier(0.4, 0, 0.2, 1).
///
/// Solves the bezier x-parameter by bisection; the curve is strictly
/// monotonic in `[0, 1]` so the search always converges.
fn ease(t: f32) -> f32 {
    const X1: f32 = 0.4;
    const Y1: f32 = 0.0;
    const X2: f32 = 0.2;
    const Y2: f32 = 1.0;

    let t = t.clamp(0.0, 1.0);
    if t == 0.0 || t == 1.0 {
        return t;
    }

    let bezier = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };

    let mut lo = 0.0_f32;
    let mut hi = 1.0_f32;
    let mut s = t;
    for _ in 0..24 {
        let x = bezier(X1, X2, s);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier(Y1, Y2, s)
}

/// Lifecycle phase of a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Built, not yet attached to the container.
    Created,
    /// Attached as the container's last child, still in the off-screen pose.
    Mounted,
    /// Entry transition running (or finished) since `entered_at`.
    Visible { entered_at: Instant },
    /// Exit transition running since `started_at`, from the captured pose.
    Dismissing { started_at: Instant, from: Pose },
    /// Detached; terminal.
    Removed,
}

/// A single notification card.
#[derive(Debug, Clone)]
pub struct Card {
    id: super::NotificationId,
    icon: String,
    title: String,
    message: String,
    duration: Duration,
    phase: Phase,
    hovered: bool,
    auto_dismiss: Option<OneShot>,
}

impl Card {
    /// Builds a card from a request, applying content defaults.
    ///
    /// The returned card is in the `Created` phase and owns no timers yet;
    /// `mount` attaches it and arms the auto-dismiss deadline.
    #[must_use]
    pub fn new(request: Request, fallback_duration: Duration) -> Self {
        let duration = request.effective_duration(fallback_duration);
        Self {
            id: super::NotificationId::new(),
            icon: request.icon.unwrap_or_else(|| DEFAULT_ICON.to_string()),
            title: request.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            message: request.message.unwrap_or_default(),
            duration,
            phase: Phase::Created,
            hovered: false,
            auto_dismiss: None,
        }
    }

    /// Returns the card's unique ID.
    #[must_use]
    pub fn id(&self) -> super::NotificationId {
        self.id
    }

    /// Returns the display glyph.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Returns the title line.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the resolved display duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Marks the card as attached to the container and arms auto-dismiss.
    ///
    /// Only valid in the `Created` phase; returns `false` otherwise.
    pub fn mount(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Created {
            return false;
        }
        self.phase = Phase::Mounted;
        self.auto_dismiss = Some(OneShot::arm(now, self.duration));
        true
    }

    /// Starts the entry transition on the first tick after mounting.
    fn begin_entry(&mut self, now: Instant) {
        if self.phase == Phase::Mounted {
            self.phase = Phase::Visible { entered_at: now };
        }
    }

    /// Transitions into `Dismissing`, starting the exit transition.
    ///
    /// Idempotent: a card that is already dismissing or removed is left
    /// untouched and `false` is returned, so a click racing the auto-dismiss
    /// deadline (or a duplicate click) cannot double-remove the card. The
    /// exit starts from the pose at this instant, retargeting mid-entry
    /// dismissals the way an interrupted transition would.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Dismissing { .. } | Phase::Removed => false,
            _ => {
                let from = self.pose(now);
                self.phase = Phase::Dismissing {
                    started_at: now,
                    from,
                };
                true
            }
        }
    }

    /// Toggles the cosmetic hover emphasis. No phase transition.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Returns whether the pointer is currently over the card.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Returns whether the card reached its terminal phase.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.phase == Phase::Removed
    }

    /// Advances time-driven transitions.
    ///
    /// Ordering per tick: a freshly mounted card starts its entry (the
    /// deferred-to-next-frame transition), then the auto-dismiss deadline is
    /// polled, then a finished exit is collapsed into `Removed`. Returns
    /// `Some(DismissReason::TimedOut)` when this tick started the exit.
    pub fn tick(&mut self, now: Instant) -> Option<DismissReason> {
        self.begin_entry(now);

        let due = self
            .auto_dismiss
            .as_mut()
            .is_some_and(|timer| timer.fire_if_due(now));
        let mut reason = None;
        if due && self.dismiss(now) {
            reason = Some(DismissReason::TimedOut);
        }

        if let Phase::Dismissing { started_at, .. } = self.phase {
            if now.duration_since(started_at) >= TRANSITION {
                self.phase = Phase::Removed;
            }
        }
        reason
    }

    /// Computes the visual pose at `now`.
    #[must_use]
    pub fn pose(&self, now: Instant) -> Pose {
        let mut pose = match self.phase {
            Phase::Created | Phase::Mounted => Pose::OFFSCREEN,
            Phase::Visible { entered_at } => {
                let p = ease(progress(entered_at, now));
                Pose::lerp(Pose::OFFSCREEN, Pose::SHOWN, p)
            }
            Phase::Dismissing { started_at, from } => {
                let p = ease(progress(started_at, now));
                Pose::lerp(from, Pose::OFFSCREEN, p)
            }
            Phase::Removed => Pose::OFFSCREEN,
        };
        if self.hovered && !matches!(self.phase, Phase::Removed) {
            pose.scale *= HOVER_SCALE;
        }
        pose
    }
}

fn progress(since: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(since);
    (elapsed.as_secs_f32() / TRANSITION.as_secs_f32()).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn card_with_duration(ms: u64) -> Card {
        Card::new(
            Request::new().duration_ms(ms),
            Duration::from_millis(super::super::request::DEFAULT_DURATION_MS),
        )
    }

    #[test]
    fn defaults_fill_missing_content() {
        let card = Card::new(Request::new(), Duration::from_millis(60_000));
        assert_eq!(card.icon(), DEFAULT_ICON);
        assert_eq!(card.title(), DEFAULT_TITLE);
        assert_eq!(card.message(), "");
        assert_eq!(card.duration(), Duration::from_millis(60_000));
    }

    #[test]
    fn starts_created_and_offscreen() {
        let card = card_with_duration(1_000);
        let now = Instant::now();
        assert_eq!(card.phase(), Phase::Created);
        assert_eq!(card.pose(now), Pose::OFFSCREEN);
    }

    #[test]
    fn mount_only_succeeds_once() {
        let mut card = card_with_duration(1_000);
        let now = Instant::now();
        assert!(card.mount(now));
        assert!(!card.mount(now));
        assert_eq!(card.phase(), Phase::Mounted);
    }

    #[test]
    fn entry_waits_for_next_tick() {
        let mut card = card_with_duration(1_000);
        let t0 = Instant::now();
        card.mount(t0);
        // Still in the off-screen pose until a tick runs.
        assert_eq!(card.pose(t0), Pose::OFFSCREEN);

        let t1 = t0 + Duration::from_millis(16);
        card.tick(t1);
        assert!(matches!(card.phase(), Phase::Visible { .. }));

        let mid = t1 + Duration::from_millis(150);
        let pose = card.pose(mid);
        assert!(pose.opacity > 0.0 && pose.opacity < 1.0);
        assert!(pose.offset > 0.0 && pose.offset < sizing::BANNER_WIDTH);
    }

    #[test]
    fn entry_settles_at_shown_pose() {
        let mut card = card_with_duration(60_000);
        let t0 = Instant::now();
        card.mount(t0);
        card.tick(t0 + Duration::from_millis(16));

        let settled = card.pose(t0 + Duration::from_millis(500));
        assert_abs_diff_eq!(settled.offset, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(settled.opacity, 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut card = card_with_duration(60_000);
        let t0 = Instant::now();
        card.mount(t0);
        card.tick(t0 + Duration::from_millis(16));

        let t1 = t0 + Duration::from_millis(600);
        assert!(card.dismiss(t1));
        assert!(!card.dismiss(t1));
        assert!(!card.dismiss(t1 + Duration::from_millis(10)));
        assert!(matches!(card.phase(), Phase::Dismissing { .. }));

        // Exactly one removal, after the exit transition elapses.
        card.tick(t1 + TRANSITION);
        assert!(card.is_removed());
        assert!(!card.dismiss(t1 + TRANSITION));
    }

    #[test]
    fn auto_dismiss_fires_at_deadline() {
        let mut card = card_with_duration(100);
        let t0 = Instant::now();
        card.mount(t0);
        card.tick(t0 + Duration::from_millis(16));

        assert_eq!(card.tick(t0 + Duration::from_millis(99)), None);
        assert_eq!(
            card.tick(t0 + Duration::from_millis(100)),
            Some(DismissReason::TimedOut)
        );
        card.tick(t0 + Duration::from_millis(100) + TRANSITION);
        assert!(card.is_removed());
    }

    #[test]
    fn click_before_timeout_wins_and_late_deadline_is_inert() {
        let mut card = card_with_duration(60_000);
        let t0 = Instant::now();
        card.mount(t0);
        card.tick(t0 + Duration::from_millis(16));

        // Click at 1s, far before the 60s deadline.
        let click = t0 + Duration::from_secs(1);
        assert!(card.dismiss(click));
        card.tick(click + TRANSITION);
        assert!(card.is_removed());

        // The original deadline arriving later has no further effect.
        assert_eq!(card.tick(t0 + Duration::from_secs(61)), None);
        assert!(card.is_removed());
    }

    #[test]
    fn exit_retargets_from_current_pose() {
        let mut card = card_with_duration(60_000);
        let t0 = Instant::now();
        card.mount(t0);
        card.tick(t0);

        // Dismiss halfway through the entry transition.
        let mid_entry = t0 + Duration::from_millis(150);
        let before = card.pose(mid_entry);
        card.dismiss(mid_entry);
        let after = card.pose(mid_entry);
        assert_abs_diff_eq!(before.offset, after.offset, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(before.opacity, after.opacity, epsilon = F32_EPSILON);
    }

    #[test]
    fn hover_scales_without_phase_change() {
        let mut card = card_with_duration(60_000);
        let t0 = Instant::now();
        card.mount(t0);
        card.tick(t0);
        let settled = t0 + Duration::from_millis(400);

        card.set_hovered(true);
        let phase_before = card.phase();
        assert_abs_diff_eq!(card.pose(settled).scale, HOVER_SCALE, epsilon = F32_EPSILON);

        card.set_hovered(false);
        assert_abs_diff_eq!(card.pose(settled).scale, 1.0, epsilon = F32_EPSILON);
        assert_eq!(card.phase(), phase_before);
    }

    #[test]
    fn easing_is_monotonic_with_fixed_endpoints() {
        assert_abs_diff_eq!(ease(0.0), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(ease(1.0), 1.0, epsilon = F32_EPSILON);

        let mut last = 0.0_f32;
        for i in 1..=100 {
            let y = ease(i as f32 / 100.0);
            assert!(y >= last, "easing must not decrease");
            last = y;
        }

        // Deceleration curve: past the halfway mark well before half time.
        let mid = ease(0.5);
        assert!(mid > 0.6 && mid < 0.9, "unexpected midpoint {mid}");
    }
}
