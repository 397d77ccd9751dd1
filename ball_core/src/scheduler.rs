use crate::collaborators::{DeferredAction, Scheduler, TimerToken};

// Absorbs float drift from summing many fixed steps
const DUE_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy)]
struct Pending {
    token: TimerToken,
    t_left: f32,
    action: DeferredAction,
}

/// Single-threaded one-shot timer queue, advanced once per fixed tick
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    pending: Vec<Pending>,
    next_token: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|p| p.token == token)
    }

    /// Advance all timers by `dt` and return the ones that came due,
    /// earliest first (ties in scheduling order).
    pub fn advance(&mut self, dt: f32) -> Vec<(TimerToken, DeferredAction)> {
        let mut fired = Vec::new();
        self.pending.retain_mut(|p| {
            p.t_left -= dt;
            if p.t_left <= DUE_EPSILON {
                fired.push(*p);
                false
            } else {
                true
            }
        });
        fired.sort_by(|a, b| a.t_left.total_cmp(&b.t_left).then(a.token.cmp(&b.token)));
        fired.into_iter().map(|p| (p.token, p.action)).collect()
    }
}

impl Scheduler for TimerQueue {
    fn schedule_once(&mut self, delay: f32, action: DeferredAction) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending.push(Pending {
            token,
            t_left: delay,
            action,
        });
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|p| p.token != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let mut queue = TimerQueue::new();
        let token = queue.schedule_once(1.0, DeferredAction::EnableBallCamera);

        assert!(queue.advance(0.5).is_empty());
        assert!(queue.is_pending(token));

        let fired = queue.advance(0.5);
        assert_eq!(fired, vec![(token, DeferredAction::EnableBallCamera)]);
        assert!(queue.is_empty());

        assert!(queue.advance(5.0).is_empty(), "One-shot must not repeat");
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut queue = TimerQueue::new();
        let token = queue.schedule_once(1.0, DeferredAction::EnableBallCamera);
        queue.advance(0.5);
        queue.cancel(token);

        assert!(queue.advance(2.0).is_empty());
        assert!(!queue.is_pending(token));
    }

    #[test]
    fn test_cancel_unknown_token_is_noop() {
        let mut queue = TimerQueue::new();
        let keep = queue.schedule_once(1.0, DeferredAction::EnableBallCamera);
        queue.cancel(TimerToken(999));
        assert_eq!(queue.len(), 1);
        assert!(queue.is_pending(keep));
    }

    #[test]
    fn test_tokens_are_unique() {
        let mut queue = TimerQueue::new();
        let a = queue.schedule_once(1.0, DeferredAction::EnableBallCamera);
        let b = queue.schedule_once(1.0, DeferredAction::EnableBallCamera);
        assert_ne!(a, b);
    }

    #[test]
    fn test_due_timers_fire_in_order() {
        let mut queue = TimerQueue::new();
        let late = queue.schedule_once(0.3, DeferredAction::EnableBallCamera);
        let early = queue.schedule_once(0.1, DeferredAction::EnableBallCamera);
        let fired: Vec<TimerToken> = queue.advance(1.0).into_iter().map(|(t, _)| t).collect();
        assert_eq!(fired, vec![early, late]);
    }

    #[test]
    fn test_fifty_fixed_steps_reach_one_second() {
        let mut queue = TimerQueue::new();
        queue.schedule_once(1.0, DeferredAction::EnableBallCamera);
        for _ in 0..49 {
            assert!(queue.advance(0.02).is_empty());
        }
        assert_eq!(queue.advance(0.02).len(), 1);
    }

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let mut queue = TimerQueue::new();
        let token = queue.schedule_once(0.0, DeferredAction::EnableBallCamera);
        assert_eq!(queue.advance(0.0).len(), 1);
        assert!(!queue.is_pending(token));
    }
}
