use std::collections::HashSet;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use crate::action::{SurfaceResponse, UserAction};
use crate::booster::Booster;
use crate::catalog::Catalog;
use crate::selection::select_next;
use crate::view_config::{ViewConfiguration, ViewConfigurations};
use crate::view_state::{ViewStateError, ViewStateStore};

/// Something that can put a booster card in front of the user.
pub trait PresentationSurface {
    /// Show `booster` and wait for the user's answer.
    ///
    /// Returns `None` if the surface went away before the user answered.
    fn present(
        &mut self,
        booster: &Booster,
        config: Option<&ViewConfiguration>,
    ) -> impl Future<Output = Option<SurfaceResponse>>;
}

/// Where a presentation attempt currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Selecting,
    Presenting,
}

/// Result of one [`BoosterManager::show_booster_if_needed`] trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShowOutcome {
    /// No booster was eligible.
    NothingToShow,
    /// Another presentation was already running; this trigger was ignored.
    Busy,
    /// The surface was torn down before the user answered.
    Abandoned,
    Presented(UserAction),
}

/// Decides whether to show a booster and dispatches it to a surface.
///
/// One instance per process: construct it at startup and pass it by reference.
/// Only one presentation runs at a time; a trigger that arrives while another
/// is selecting or presenting returns [`ShowOutcome::Busy`] without queueing.
pub struct BoosterManager<S> {
    storage: S,
    catalog: Catalog,
    view_configurations: ViewConfigurations,
    dev_mode: bool,
    phase: Mutex<Phase>,
}

impl<S: ViewStateStore> BoosterManager<S> {
    pub fn new(
        storage: S,
        catalog: Catalog,
        view_configurations: ViewConfigurations,
        dev_mode: bool,
    ) -> Self {
        Self {
            storage,
            catalog,
            view_configurations,
            dev_mode,
            phase: Mutex::new(Phase::Idle),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn phase(&self) -> Phase {
        *lock_phase(&self.phase)
    }

    pub fn view_configuration(&self, booster_id: &str) -> Option<&ViewConfiguration> {
        self.view_configurations.get(booster_id)
    }

    /// Select the next eligible booster and present it on `surface`.
    ///
    /// Does not record the booster as viewed; call [`Self::acknowledge`]
    /// with the returned action for that.
    pub async fn show_booster_if_needed<P: PresentationSurface>(
        &self,
        surface: &mut P,
    ) -> Result<ShowOutcome, ViewStateError> {
        let Some(phase) = PhaseGuard::enter(&self.phase) else {
            tracing::debug!("presentation already in progress, ignoring trigger");
            return Ok(ShowOutcome::Busy);
        };

        let viewed = if self.dev_mode {
            HashSet::new()
        } else {
            self.storage.viewed_ids().await?
        };

        let Some(booster) = select_next(&self.catalog, &viewed, self.dev_mode) else {
            tracing::info!(
                catalog = self.catalog.len(),
                viewed = viewed.len(),
                "no eligible booster"
            );
            return Ok(ShowOutcome::NothingToShow);
        };

        tracing::info!(booster = %booster.id, priority = booster.priority, "presenting booster");
        phase.set(Phase::Presenting);

        let config = self.view_configuration(&booster.id);
        match surface.present(booster, config).await {
            Some(response) => {
                let action = response.into_action(&booster.id);
                tracing::debug!(?action, "booster presentation finished");
                Ok(ShowOutcome::Presented(action))
            }
            None => {
                tracing::info!(booster = %booster.id, "presentation abandoned");
                Ok(ShowOutcome::Abandoned)
            }
        }
    }

    /// Record that the user has seen the booster behind `action`.
    ///
    /// Returns `false` without touching storage in dev mode.
    pub async fn acknowledge(&self, action: &UserAction) -> Result<bool, ViewStateError> {
        if self.dev_mode {
            tracing::debug!(booster = action.booster_id(), "dev mode: not marking viewed");
            return Ok(false);
        }
        self.storage.mark_viewed(action.booster_id()).await?;
        Ok(true)
    }
}

fn lock_phase(phase: &Mutex<Phase>) -> MutexGuard<'_, Phase> {
    phase.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Holds the manager out of `Idle` and puts it back on drop, including when
/// the presentation future is dropped mid-flight.
struct PhaseGuard<'a> {
    phase: &'a Mutex<Phase>,
}

impl<'a> PhaseGuard<'a> {
    fn enter(phase: &'a Mutex<Phase>) -> Option<Self> {
        let mut current = lock_phase(phase);
        if *current != Phase::Idle {
            return None;
        }
        *current = Phase::Selecting;
        Some(Self { phase })
    }

    fn set(&self, next: Phase) {
        *lock_phase(self.phase) = next;
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        *lock_phase(self.phase) = Phase::Idle;
    }
}
