use adsim_engine::{SimulationRun, SimulationSession};
use adsim_types::ScenarioInput;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::ApiError;

/// Held run plus the time it was stored; always updated together
#[derive(Debug, Default)]
pub struct SessionSlot {
    session: SimulationSession,
    last_run_at: Option<DateTime<Utc>>,
}

impl SessionSlot {
    pub fn run(&mut self, scenario_a: ScenarioInput, scenario_b: ScenarioInput, at: DateTime<Utc>) -> &SimulationRun {
        self.last_run_at = Some(at);
        self.session.run(scenario_a, scenario_b)
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.last_run_at = None;
    }

    pub fn session(&self) -> &SimulationSession {
        &self.session
    }

    pub fn last_run_at(&self) -> Option<DateTime<Utc>> {
        self.last_run_at
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub slot: Arc<Mutex<SessionSlot>>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            slot: Arc::new(Mutex::new(SessionSlot::default())),
            started_at: Utc::now(),
        }
    }

    pub fn slot(&self) -> Result<MutexGuard<'_, SessionSlot>, ApiError> {
        self.slot
            .lock()
            .map_err(|_| ApiError::Internal("session lock poisoned".to_string()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_run_and_timestamp_together() {
        let mut slot = SessionSlot::default();
        slot.run(ScenarioInput::default(), ScenarioInput::default(), Utc::now());
        assert!(slot.session().has_results());
        assert!(slot.last_run_at().is_some());

        slot.reset();
        assert!(!slot.session().has_results());
        assert_eq!(slot.last_run_at(), None);
    }

    #[test]
    fn test_concurrent_run_and_reset_stay_consistent() {
        let state = AppState::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let state = state.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        let mut slot = state.slot().unwrap();
                        if i % 2 == 0 {
                            slot.run(ScenarioInput::default(), ScenarioInput::default(), Utc::now());
                        } else {
                            slot.reset();
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let slot = state.slot().unwrap();
        assert_eq!(slot.session().has_results(), slot.last_run_at().is_some());
    }
}
