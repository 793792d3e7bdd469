//! Application controller.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::Config;
use crate::device::DeviceProfiler;
use crate::export::{write_report, Report, ReportRenderer};
use crate::history::HistoryStore;
use crate::initialization::InitializationError;
use crate::lookup::{GeoClient, LookupResult, Target};
use crate::present::{DisplaySlots, MapView, Presenter};
use crate::storage::KeyValueStore;
use crate::validate::is_valid_ipv4;

use super::error::AppError;

/// Wires user actions to the validator, lookup client, history store, and
/// presenter, and owns the current-result state.
///
/// The current result starts empty, becomes populated on the first
/// successful lookup or history replay, and is only ever replaced, never
/// cleared. Actions that fail leave both the current result and the
/// history exactly as they were.
pub struct AppController<M: MapView> {
    client: GeoClient,
    history: HistoryStore,
    presenter: Presenter<M>,
    renderer: Option<Box<dyn ReportRenderer>>,
    current: Option<LookupResult>,
    // Request generation: a lookup response is applied only if no newer
    // lookup was issued while it was in flight.
    generation: u64,
}

impl<M: MapView> AppController<M> {
    /// Creates a controller from the library configuration.
    ///
    /// Opens the durable store under the configured data directory and
    /// loads the persisted history.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the HTTP client or the durable
    /// store cannot be set up.
    pub fn new(config: &Config, map: M) -> Result<Self, InitializationError> {
        let client = GeoClient::new(config)?;
        let store = KeyValueStore::open(&config.data_dir)?;
        let history = HistoryStore::load(store);
        let presenter = Presenter::new(map, config.user_agent.as_str());
        Ok(Self {
            client,
            history,
            presenter,
            renderer: None,
            current: None,
            generation: 0,
        })
    }

    /// Installs an external user-agent-parsing capability.
    pub fn with_profiler(mut self, profiler: Box<dyn DeviceProfiler>) -> Self {
        self.presenter = self.presenter.with_profiler(profiler);
        self
    }

    /// Installs a document-generation capability for report export.
    ///
    /// Without one, [`AppController::export_report`] reports export as
    /// unavailable.
    pub fn with_renderer(mut self, renderer: Box<dyn ReportRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Looks up a manually entered address.
    ///
    /// The input must pass IPv4 validation before any request is issued.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput`/`InvalidInput` without issuing a lookup, or the
    /// underlying [`AppError::Lookup`] when the provider call fails.
    pub async fn search(&mut self, raw_input: &str) -> Result<&LookupResult, AppError> {
        if raw_input.is_empty() {
            return Err(AppError::EmptyInput);
        }
        if !is_valid_ipv4(raw_input) {
            return Err(AppError::InvalidInput(raw_input.to_string()));
        }
        self.run_lookup(Target::Addr(raw_input.to_string())).await
    }

    /// Detects and looks up the current device's own address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Lookup`] with `DetectionFailed` when both the
    /// direct path and the echo fallback fail.
    pub async fn detect_current(&mut self) -> Result<&LookupResult, AppError> {
        self.run_lookup(Target::SelfAddr).await
    }

    async fn run_lookup(&mut self, target: Target) -> Result<&LookupResult, AppError> {
        let generation = self.next_generation();
        let result = self.client.lookup(&target).await?;
        self.apply_if_current(generation, result)
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn apply_if_current(
        &mut self,
        generation: u64,
        result: LookupResult,
    ) -> Result<&LookupResult, AppError> {
        if generation != self.generation {
            debug!("Discarding stale lookup response for request {generation}");
            return Err(AppError::Superseded);
        }
        info!("Lookup succeeded for {}", result.ip);
        self.history.add(&result);
        Ok(&*self.current.insert(result))
    }

    /// Replays a past lookup from the history without re-querying.
    ///
    /// # Errors
    ///
    /// Returns `UnknownHistoryEntry` if no entry exists for `ip`; the
    /// current result is left unchanged.
    pub fn select_history(&mut self, ip: &str) -> Result<&LookupResult, AppError> {
        let entry = self
            .history
            .find_by_ip(ip)
            .ok_or_else(|| AppError::UnknownHistoryEntry(ip.to_string()))?;
        let result = entry.result.clone();
        Ok(&*self.current.insert(result))
    }

    /// Returns the current IP for the caller to place on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns `NothingToCopy` when no lookup has succeeded yet.
    pub fn copy_current_ip(&self) -> Result<String, AppError> {
        self.current
            .as_ref()
            .map(|result| result.ip.clone())
            .ok_or(AppError::NothingToCopy)
    }

    /// Exports a report for the current result into `out_dir`.
    ///
    /// The report carries the same display slots the presenter renders,
    /// including the device slots, and is named with the looked-up address
    /// and the export timestamp.
    ///
    /// # Errors
    ///
    /// Returns `NothingToExport` with no current result,
    /// `ExportUnavailable` without a configured renderer, or `Export` when
    /// the document cannot be produced or written.
    pub fn export_report(&self, out_dir: &Path) -> Result<PathBuf, AppError> {
        let result = self.current.as_ref().ok_or(AppError::NothingToExport)?;
        let renderer = self.renderer.as_deref().ok_or(AppError::ExportUnavailable)?;

        let report = Report::new(self.presenter.slots(result));
        write_report(&report, out_dir, renderer).map_err(AppError::Export)
    }

    /// Empties the lookup history and persists the empty state.
    ///
    /// Confirmation is the caller's responsibility.
    pub fn clear_history(&mut self) {
        self.history.clear();
        info!("Lookup history cleared");
    }

    /// Renders the current result, if any, through the presenter.
    pub fn render_current(&mut self) -> Option<DisplaySlots> {
        let result = self.current.clone()?;
        Some(self.presenter.render(&result))
    }

    /// The current lookup result, if any.
    pub fn current(&self) -> Option<&LookupResult> {
        self.current.as_ref()
    }

    /// The lookup history.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }
}
