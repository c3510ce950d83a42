//! スクロール表示トリガー
//!
//! 要素ごとに一度だけ「revealed」へ遷移する。戻ることはない。

use std::collections::HashSet;

pub const REVEAL_CLASS: &str = "reveal";

/// 交差率の丸め誤差の許容幅
const RATIO_TOLERANCE: f64 = 1e-3;

/// 交差監視の判定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealDecision {
    /// 今回表示状態にした。監視を外す
    Reveal,
    /// 既に表示済み
    AlreadyRevealed,
    /// まだ見えていない
    Pending,
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: HashSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// IntersectionObserverEntry の値で判定する
    pub fn observe(&mut self, key: &str, is_intersecting: bool, ratio: f64) -> RevealDecision {
        if self.revealed.contains(key) {
            return RevealDecision::AlreadyRevealed;
        }
        if is_intersecting && ratio + RATIO_TOLERANCE >= self.threshold {
            self.revealed.insert(key.to_string());
            log::trace!("revealed {}", key);
            RevealDecision::Reveal
        } else {
            RevealDecision::Pending
        }
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_once() {
        let mut tracker = RevealTracker::new(0.12);

        assert_eq!(tracker.observe("p1", false, 0.0), RevealDecision::Pending);
        assert_eq!(tracker.observe("p1", true, 0.05), RevealDecision::Pending);
        assert_eq!(tracker.observe("p1", true, 0.12), RevealDecision::Reveal);
        assert_eq!(tracker.observe("p1", true, 1.0), RevealDecision::AlreadyRevealed);
        // 画面外に出ても戻らない
        assert_eq!(tracker.observe("p1", false, 0.0), RevealDecision::AlreadyRevealed);
        assert!(tracker.is_revealed("p1"));
    }

    #[test]
    fn test_ratio_just_below_threshold_counts() {
        let mut tracker = RevealTracker::new(0.12);
        assert_eq!(tracker.observe("p1", true, 0.1199999), RevealDecision::Reveal);
    }

    #[test]
    fn test_elements_are_independent() {
        let mut tracker = RevealTracker::new(0.5);
        tracker.observe("a", true, 0.9);

        assert!(tracker.is_revealed("a"));
        assert!(!tracker.is_revealed("b"));
        assert_eq!(tracker.observe("b", true, 0.4), RevealDecision::Pending);
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(RevealTracker::new(3.0).threshold(), 1.0);
        assert_eq!(RevealTracker::new(-1.0).threshold(), 0.0);
    }
}
