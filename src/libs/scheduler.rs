//! The tick loop.
//!
//! A single task owns the store, the liveness monitor, the dispatcher
//! and the notifier, and advances them together once per tick. Ticks
//! that fall behind are skipped, not replayed: occurrence keys make
//! catching up pointless since a cycle is announced at most once anyway.

use anyhow::Result;
use chrono::{DateTime, Local};
use std::time::Duration;
use tokio::time::MissedTickBehavior;

use super::config::SchedulerConfig;
use super::dispatcher::NotificationDispatcher;
use super::liveness::{LivenessMonitor, ProcessProbe};
use super::notifier::Notifier;
use super::store::TaskStore;
use crate::libs::messages::Message;
use crate::msg_info;

/// Wall-clock source. Swapped for a fixed function in tests.
pub type Clock = fn() -> DateTime<Local>;

pub struct Scheduler {
    store: TaskStore,
    monitor: LivenessMonitor,
    dispatcher: NotificationDispatcher,
    notifier: Box<dyn Notifier + Send>,
    clock: Clock,
    tick_interval: Duration,
}

impl Scheduler {
    pub fn new(
        config: &SchedulerConfig,
        store: TaskStore,
        probe: Box<dyn ProcessProbe + Send>,
        notifier: Box<dyn Notifier + Send>,
    ) -> Self {
        Scheduler {
            store,
            monitor: LivenessMonitor::new(probe),
            dispatcher: NotificationDispatcher::new(),
            notifier,
            clock: Local::now,
            tick_interval: Duration::from_secs(config.tick_interval_secs.max(1)),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Runs one evaluation round: poll liveness, then dispatch whatever
    /// became due.
    pub fn run_tick(&mut self) {
        let now = (self.clock)();
        self.monitor.check_and_update_statuses(&mut self.store, now);
        for notification in self.dispatcher.collect(&self.store, &self.monitor, now) {
            self.notifier.notify(&notification);
        }
    }

    /// Runs ticks forever at the configured interval.
    pub async fn run(&mut self) -> Result<()> {
        msg_info!(Message::SchedulerStarted(self.tick_interval.as_secs()));
        let mut interval = tokio::time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            self.run_tick();
        }
    }
}
