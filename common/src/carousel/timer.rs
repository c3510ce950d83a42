//! 自動再生タイマー
//!
//! コントローラはタイマーを所有し、開始・停止だけを指示する。
//! 発火時の処理（autoplay_tick の呼び出し）は実装側の責務。

use std::time::Duration;

pub trait AutoplayTimer {
    /// 一定間隔の発火を開始する。既に動作中なら経過時間をリセットして再開
    fn start(&mut self, interval: Duration);

    fn cancel(&mut self);

    fn is_running(&self) -> bool;
}

/// 手動で時間を進めるタイマー（テスト・ヘッドレス用）
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    interval: Option<Duration>,
    elapsed: Duration,
    starts: usize,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 時間を進め、その間の発火回数を返す（u32::MAX で頭打ち）。
    /// 間隔 0 のタイマーは発火しない
    pub fn advance(&mut self, by: Duration) -> u32 {
        let Some(interval) = self.interval.filter(|i| !i.is_zero()) else {
            return 0;
        };

        let elapsed = self.elapsed.saturating_add(by).as_nanos();
        let step = interval.as_nanos();
        self.elapsed = Duration::from_nanos(u64::try_from(elapsed % step).unwrap_or(u64::MAX));
        u32::try_from(elapsed / step).unwrap_or(u32::MAX)
    }

    /// start が呼ばれた累計回数
    pub fn start_count(&self) -> usize {
        self.starts
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }
}

impl AutoplayTimer for ManualTimer {
    fn start(&mut self, interval: Duration) {
        self.interval = Some(interval);
        self.elapsed = Duration::ZERO;
        self.starts += 1;
    }

    fn cancel(&mut self) {
        self.interval = None;
        self.elapsed = Duration::ZERO;
    }

    fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Duration = Duration::from_millis(5000);

    #[test]
    fn test_not_running_never_fires() {
        let mut timer = ManualTimer::new();
        assert_eq!(timer.advance(Duration::from_secs(60)), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_fires_per_interval() {
        let mut timer = ManualTimer::new();
        timer.start(T);

        assert_eq!(timer.advance(Duration::from_millis(4999)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
        assert_eq!(timer.advance(T * 3), 3);
    }

    #[test]
    fn test_restart_resets_elapsed() {
        let mut timer = ManualTimer::new();
        timer.start(T);
        timer.advance(Duration::from_millis(4000));
        timer.start(T);

        assert_eq!(timer.advance(Duration::from_millis(4000)), 0);
        assert_eq!(timer.start_count(), 2);
    }

    #[test]
    fn test_long_advance_keeps_remainder() {
        let mut timer = ManualTimer::new();
        timer.start(T);

        assert_eq!(timer.advance(T * 1000 + Duration::from_millis(1)), 1000);
        assert_eq!(timer.advance(Duration::from_millis(4998)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn test_huge_advance_saturates() {
        let mut timer = ManualTimer::new();
        timer.start(Duration::from_millis(1));

        assert_eq!(timer.advance(Duration::from_secs(10_000_000)), u32::MAX);
        assert_eq!(timer.advance(Duration::MAX), u32::MAX);
    }

    #[test]
    fn test_zero_interval_never_fires() {
        let mut timer = ManualTimer::new();
        timer.start(Duration::ZERO);

        assert_eq!(timer.advance(T), 0);
    }

    #[test]
    fn test_cancel() {
        let mut timer = ManualTimer::new();
        timer.start(T);
        timer.cancel();

        assert!(!timer.is_running());
        assert_eq!(timer.advance(T), 0);
    }
}
