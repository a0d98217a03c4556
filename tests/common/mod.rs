//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use pool_cluster::{ClusterPool, MemberConfig, MemberPool, PoolSettings, Priority, Produce};
use thiserror::Error;
use tokio::sync::Notify;

/// Stand-in for a database connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub server: &'static str,
    pub id: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("connection to {0} refused")]
pub struct ConnectError(pub &'static str);

/// Producer that "opens" connections to one server.
pub struct Connector {
    pub server: &'static str,
    pub refuse: bool,
    opened: AtomicUsize,
}

impl Connector {
    pub fn new(server: &'static str) -> Self {
        Self { server, refuse: false, opened: AtomicUsize::new(0) }
    }

    pub fn refusing(server: &'static str) -> Self {
        Self { server, refuse: true, opened: AtomicUsize::new(0) }
    }
}

impl Produce for Connector {
    type Resource = Connection;
    type Error = ConnectError;

    async fn produce(&self) -> Result<Connection, ConnectError> {
        tokio::task::yield_now().await;
        if self.refuse {
            return Err(ConnectError(self.server));
        }
        let id = self.opened.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Connection { server: self.server, id })
    }
}

/// Minimal bounded member pool: idle list, `max_size` cap, FIFO-ish waiters.
pub struct QueuePool<F: Produce> {
    max_size: usize,
    producer: F,
    state: Mutex<QueueState<F::Resource>>,
    released: Notify,
}

struct QueueState<R> {
    idle: Vec<R>,
    launched: usize,
    waiting: usize,
    priorities: Vec<Option<Priority>>,
}

impl<F: Produce> QueuePool<F> {
    pub fn priorities(&self) -> Vec<Option<Priority>> {
        self.state.lock().unwrap().priorities.clone()
    }
}

impl<F> MemberPool for QueuePool<F>
where
    F: Produce,
    F::Error: std::error::Error + Send + Sync + 'static,
{
    type Resource = F::Resource;
    type Error = F::Error;
    type Producer = F;

    fn construct(config: MemberConfig<F>) -> Self {
        Self {
            max_size: config.settings.max_size,
            producer: config.producer,
            state: Mutex::new(QueueState {
                idle: Vec::new(),
                launched: 0,
                waiting: 0,
                priorities: Vec::new(),
            }),
            released: Notify::new(),
        }
    }

    async fn acquire(&self, priority: Option<Priority>) -> Result<F::Resource, F::Error> {
        self.state.lock().unwrap().priorities.push(priority);

        let mut queued = false;
        loop {
            {
                let mut state = self.state.lock().unwrap();
                if let Some(resource) = state.idle.pop() {
                    if queued {
                        state.waiting -= 1;
                    }
                    return Ok(resource);
                }
                if state.launched < self.max_size {
                    if queued {
                        state.waiting -= 1;
                    }
                    state.launched += 1;
                    break;
                }
                if !queued {
                    state.waiting += 1;
                    queued = true;
                }
            }
            self.released.notified().await;
        }

        match self.producer.produce().await {
            Ok(resource) => Ok(resource),
            Err(e) => {
                self.state.lock().unwrap().launched -= 1;
                Err(e)
            }
        }
    }

    fn release(&self, resource: F::Resource) {
        self.state.lock().unwrap().idle.push(resource);
        self.released.notify_one();
    }

    fn waiting_count(&self) -> usize {
        self.state.lock().unwrap().waiting
    }

    fn launched_count(&self) -> usize {
        self.state.lock().unwrap().launched
    }

    fn available_count(&self) -> usize {
        self.state.lock().unwrap().idle.len()
    }
}

pub type ReplicaPool = QueuePool<Connector>;

/// Cluster of healthy connectors, one per server.
pub fn replica_cluster(name: &str, max_size: usize, servers: &[&'static str]) -> ClusterPool<ReplicaPool> {
    let cluster = ClusterPool::new(PoolSettings {
        name: name.to_string(),
        max_size,
        ..PoolSettings::default()
    });
    for &server in servers {
        cluster.add(Connector::new(server));
    }
    cluster
}

/// Yield to spawned tasks until `condition` holds.
pub async fn wait_until<C: Fn() -> bool>(condition: C) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !condition() {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("condition not reached in time");
}

/// Park `count` acquires on the member at `index`, bypassing the cluster.
pub fn park_waiters<F>(cluster: &ClusterPool<QueuePool<F>>, index: usize, count: usize)
where
    F: Produce,
    F::Error: std::error::Error + Send + Sync + 'static,
{
    let member = cluster.members()[index].clone();
    for _ in 0..count {
        let member = member.clone();
        tokio::spawn(async move {
            let _ = member.pool().acquire(None).await;
        });
    }
}

/// Hold one resource per member so further acquires queue.
pub async fn saturate(cluster: &ClusterPool<ReplicaPool>) -> Vec<Connection> {
    let mut held = Vec::new();
    for member in cluster.members() {
        held.push(member.pool().acquire(None).await.unwrap());
    }
    held
}

pub fn waiting_counts<P: MemberPool>(cluster: &ClusterPool<P>) -> Vec<usize> {
    cluster.members().iter().map(|m| m.waiting_count()).collect()
}
