//! Scripted member pool for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use thiserror::Error;

use crate::config::PoolSettings;
use crate::member::{MemberConfig, MemberPool, Priority};

#[derive(Debug, Error)]
#[error("backend {0} unreachable")]
pub struct Unreachable(pub &'static str);

/// Member pool whose counts are set directly by the test.
/// A producer named `"down"` fails every acquire.
#[derive(Debug)]
pub struct ScriptedPool {
    pub server: &'static str,
    pub settings: PoolSettings,
    pub waiting: AtomicUsize,
    pub launched: AtomicUsize,
    pub available: AtomicUsize,
    acquired: AtomicUsize,
    priorities: Mutex<Vec<Option<Priority>>>,
    released: Mutex<Vec<String>>,
}

impl ScriptedPool {
    pub fn set_counts(&self, waiting: usize, launched: usize, available: usize) {
        self.waiting.store(waiting, Ordering::SeqCst);
        self.launched.store(launched, Ordering::SeqCst);
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn priorities(&self) -> Vec<Option<Priority>> {
        self.priorities.lock().unwrap().clone()
    }

    pub fn released(&self) -> Vec<String> {
        self.released.lock().unwrap().clone()
    }
}

impl MemberPool for ScriptedPool {
    type Resource = String;
    type Error = Unreachable;
    type Producer = &'static str;

    fn construct(config: MemberConfig<&'static str>) -> Self {
        Self {
            server: config.producer,
            settings: config.settings,
            waiting: AtomicUsize::new(0),
            launched: AtomicUsize::new(0),
            available: AtomicUsize::new(0),
            acquired: AtomicUsize::new(0),
            priorities: Mutex::new(Vec::new()),
            released: Mutex::new(Vec::new()),
        }
    }

    async fn acquire(&self, priority: Option<Priority>) -> Result<String, Unreachable> {
        self.priorities.lock().unwrap().push(priority);
        if self.server == "down" {
            return Err(Unreachable(self.server));
        }
        let n = self.acquired.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("{}#{}", self.server, n))
    }

    fn release(&self, resource: String) {
        self.released.lock().unwrap().push(resource);
    }

    fn waiting_count(&self) -> usize {
        self.waiting.load(Ordering::SeqCst)
    }

    fn launched_count(&self) -> usize {
        self.launched.load(Ordering::SeqCst)
    }

    fn available_count(&self) -> usize {
        self.available.load(Ordering::SeqCst)
    }
}
