//! setInterval による自動再生タイマー

use leptos::prelude::*;
use portfolio_gallery_common::AutoplayTimer;
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
pub struct IntervalTimer {
    handle: Option<IntervalHandle>,
    on_tick: Option<Rc<dyn Fn()>>,
}

impl IntervalTimer {
    /// 発火時のコールバックを設定する（コントローラ生成後に一度だけ）
    pub fn bind<F>(&mut self, on_tick: F)
    where
        F: Fn() + 'static,
    {
        self.on_tick = Some(Rc::new(on_tick));
    }
}

impl AutoplayTimer for IntervalTimer {
    fn start(&mut self, interval: Duration) {
        self.cancel();

        let Some(on_tick) = self.on_tick.clone() else {
            log::warn!("autoplay timer started before a tick callback was bound");
            return;
        };

        match set_interval_with_handle(move || on_tick(), interval) {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => log::warn!("setInterval failed: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.clear();
        }
    }

    fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
