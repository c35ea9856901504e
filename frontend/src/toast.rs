//! 通知服务
//!
//! 队列本身是 `serenova_shared::ToastQueue`，这里负责：
//! - 把队列放进信号，供 `Toaster` 渲染
//! - 为每条通知安排自动过期

use std::time::Duration;

use leptos::prelude::*;
use serenova_shared::{Notice, ToastQueue};

#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
    duration: Duration,
}

impl ToastContext {
    pub fn new(limit: usize, duration: Duration) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(limit)),
            duration,
        }
    }

    /// 弹出一条通知，到期后自动关闭
    pub fn toast(&self, notice: Notice) {
        let Some(id) = self.queue.try_update(|q| q.push(notice)) else {
            return;
        };

        let queue = self.queue;
        set_timeout(
            move || {
                queue.try_update(|q| q.dismiss(id));
            },
            self.duration,
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }
}

/// 从 Context 获取通知服务
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}
