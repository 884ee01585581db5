use crate::care::CareLookup;
use crate::error::{AppError, Result as AppErrorResult};
use crate::page::Page;
use crate::state::{AppState, Records};

use std::sync::Arc;

use log::{info, warn};
use podia_config::Config;
use podia_core::{Appointment, HealthLogData, HealthLogEntry, Identity, Profile};
use podia_session::{AuthClient, SessionManager, TokenCache};
use podia_store::RecordStoreClient;
use podia_vision::{AnalysisClient, AnalysisResult};
use tokio::sync::watch;

/// What one analysis produced.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub result: AnalysisResult,
    /// Present when the result carries the consultation conclusion.
    pub care: Option<CareLookup>,
    /// True for anonymous sessions: the result was held in memory and will
    /// be written to history on the next registered sign-in.
    pub held_for_account: bool,
}

/// Drives the view state machine and mediates every record mutation.
///
/// The controller reacts to identity transitions from the session manager's
/// watch channel; the embedding shell pumps them through
/// `next_identity_change()` and reads `state()`/`records()` after each
/// action. Anonymous identities never reach the record store: the gate lives
/// here, not in the store client.
pub struct AppController {
    session: Arc<SessionManager>,
    analysis: AnalysisClient,
    store: RecordStoreClient,
    identity_rx: watch::Receiver<Option<Identity>>,
    state: AppState,
    records: Records,
    pending_analysis: Option<String>,
    compact_layout: bool,
    nav_open: bool,
}

impl AppController {
    pub fn new(session: Arc<SessionManager>, store_endpoint: &str, analysis: AnalysisClient) -> Self {
        let identity_rx = session.subscribe();
        Self {
            session,
            analysis,
            store: RecordStoreClient::new(store_endpoint, None),
            identity_rx,
            state: AppState::Unauthenticated,
            records: Records::default(),
            pending_analysis: None,
            compact_layout: false,
            nav_open: false,
        }
    }

    /// Wire up all three service clients from loaded configuration.
    pub fn from_config(config: &Config) -> AppErrorResult<Self> {
        let auth = AuthClient::new(&config.auth.endpoint, &config.auth.api_key);
        let cache = TokenCache::new(config.session_cache_path()?);
        let session = Arc::new(SessionManager::new(auth, cache));
        let analysis = AnalysisClient::new(
            &config.inference.endpoint,
            &config.inference.api_key,
            &config.inference.model,
        );

        Ok(Self::new(session, &config.store.endpoint, analysis))
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn nav_open(&self) -> bool {
        self.nav_open
    }

    pub fn set_compact_layout(&mut self, compact: bool) {
        self.compact_layout = compact;
        if !compact {
            self.nav_open = false;
        }
    }

    pub fn open_nav(&mut self) {
        self.nav_open = true;
    }

    // ========================================================================
    // Identity transitions
    // ========================================================================

    /// Await the next identity transition and apply it. Returns false when
    /// the session manager is gone.
    pub async fn next_identity_change(&mut self) -> bool {
        if self.identity_rx.changed().await.is_err() {
            return false;
        }

        let identity = self.identity_rx.borrow_and_update().clone();
        self.apply_identity(identity).await;
        true
    }

    /// React to an identity transition.
    pub async fn apply_identity(&mut self, identity: Option<Identity>) {
        // One store client for the controller's lifetime; only the session
        // token changes with the identity
        self.store.set_bearer(self.session.id_token().as_deref());

        match identity {
            None => {
                self.records = Records::default();
                self.pending_analysis = None;
                self.nav_open = false;
                self.state = AppState::Unauthenticated;
            }
            Some(identity) if identity.is_anonymous => {
                // Guests get the analyzer and nothing backed by records
                self.records = Records::default();
                self.state = AppState::Ready(Page::Analyze);
            }
            Some(identity) => {
                self.state = AppState::Loading;
                self.load_records(&identity.uid).await;
                self.persist_pending_analysis(&identity.uid).await;
                self.state = AppState::Ready(Page::Dashboard);
            }
        }
    }

    /// Fetch all four record kinds concurrently. A missing singleton is the
    /// normal first-run state; any other failure degrades to empty with a
    /// warning rather than blocking sign-in.
    async fn load_records(&mut self, uid: &str) {
        let store = &self.store;

        let (profile, history, health_log, appointment) = tokio::join!(
            store.get_profile(uid),
            store.list_history(uid),
            store.list_health_log(uid),
            store.get_appointment(uid),
        );

        self.records.profile = match profile {
            Ok(profile) => profile,
            Err(e) if e.is_not_found() => Profile::default(),
            Err(e) => {
                warn!("Profile fetch failed, using defaults: {e}");
                Profile::default()
            }
        };

        self.records.history = history.unwrap_or_else(|e| {
            warn!("History fetch failed, starting empty: {e}");
            Vec::new()
        });

        self.records.health_log = health_log.unwrap_or_else(|e| {
            warn!("Health log fetch failed, starting empty: {e}");
            Vec::new()
        });

        self.records.appointment = match appointment {
            Ok(appointment) => Some(appointment),
            Err(e) if e.is_not_found() => None,
            Err(e) => {
                warn!("Appointment fetch failed, treating as unset: {e}");
                None
            }
        };
    }

    /// Write a held guest analysis into the freshly signed-in account.
    async fn persist_pending_analysis(&mut self, uid: &str) {
        if let Some(prediction) = self.pending_analysis.take() {
            match self.store.append_history(uid, &prediction).await {
                Ok(entry) => {
                    info!("Persisted guest analysis into new session history");
                    self.records.history.insert(0, entry);
                }
                Err(e) => warn!("Could not persist held guest analysis: {e}"),
            }
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Switch pages. Only a signed-in session can leave `Unauthenticated`,
    /// and anonymous identities are refused record-bearing pages with a
    /// policy notice; no request is made either way.
    pub fn navigate(&mut self, page: Page) -> AppErrorResult<()> {
        let identity = self
            .session
            .current()
            .ok_or_else(|| AppError::policy_gate("Sign in to continue"))?;

        if page.record_bearing() && identity.is_anonymous {
            return Err(AppError::policy_gate(
                "Create an account to save and view your records",
            ));
        }

        self.state = AppState::Ready(page);

        // Overlay nav panels cover the page content on compact viewports
        if self.compact_layout {
            self.nav_open = false;
        }

        Ok(())
    }

    // ========================================================================
    // Analysis flow
    // ========================================================================

    /// Run one image analysis for the current identity.
    ///
    /// Registered sessions get the result appended to history immediately.
    /// Anonymous sessions hold it in memory until they register. A flagged
    /// conclusion attaches a nearby-care lookup either way.
    pub async fn submit_analysis(
        &mut self,
        image_bytes: &[u8],
        mime_type: &str,
        coords: Option<(f64, f64)>,
    ) -> AppErrorResult<AnalysisOutcome> {
        let identity = self
            .session
            .current()
            .ok_or_else(|| AppError::policy_gate("Sign in or continue as a guest to analyze"))?;

        let result = self.analysis.analyze(image_bytes, mime_type).await?;

        let care = result
            .requires_consultation()
            .then(|| CareLookup::new(coords));

        let held_for_account = if identity.is_anonymous {
            self.pending_analysis = Some(result.text.clone());
            true
        } else {
            let entry = self
                .store
                .append_history(&identity.uid, &result.text)
                .await?;
            self.records.history.insert(0, entry);
            false
        };

        Ok(AnalysisOutcome {
            result,
            care,
            held_for_account,
        })
    }

    // ========================================================================
    // Record mutations
    // ========================================================================

    /// Merge the submitted profile fields into the stored profile.
    pub async fn save_profile(&mut self, patch: &Profile) -> AppErrorResult<()> {
        let uid = self.registered_uid()?;
        let merged = self.store.put_profile(&uid, patch).await?;
        self.records.profile = merged;
        Ok(())
    }

    pub async fn log_symptom(
        &mut self,
        pain_level: u8,
        swelling: bool,
        redness: bool,
        notes: Option<String>,
    ) -> AppErrorResult<HealthLogEntry> {
        let data = HealthLogData::symptom(pain_level, swelling, redness, notes)?;
        self.append_health_log(data).await
    }

    pub async fn log_blood_sugar(&mut self, level: f64) -> AppErrorResult<HealthLogEntry> {
        self.append_health_log(HealthLogData::blood_sugar(level)).await
    }

    async fn append_health_log(&mut self, data: HealthLogData) -> AppErrorResult<HealthLogEntry> {
        let uid = self.registered_uid()?;
        let entry = self.store.append_health_log(&uid, &data).await?;
        self.records.health_log.insert(0, entry.clone());
        Ok(entry)
    }

    pub async fn delete_history_entry(&mut self, entry_id: &str) -> AppErrorResult<()> {
        let uid = self.registered_uid()?;
        self.store.delete_history_entry(&uid, entry_id).await?;
        self.records.history.retain(|e| e.id != entry_id);
        Ok(())
    }

    /// Delete every history entry. The in-memory list only clears when the
    /// whole fan-out succeeds; a partial failure leaves it untouched so the
    /// next sign-in re-syncs from the store.
    pub async fn clear_history(&mut self) -> AppErrorResult<usize> {
        let uid = self.registered_uid()?;
        let count = self.store.delete_all_history(&uid).await?;
        self.records.history.clear();
        Ok(count)
    }

    pub async fn delete_health_log_entry(&mut self, entry_id: &str) -> AppErrorResult<()> {
        let uid = self.registered_uid()?;
        self.store.delete_health_log_entry(&uid, entry_id).await?;
        self.records.health_log.retain(|e| e.id != entry_id);
        Ok(())
    }

    pub async fn clear_health_log(&mut self) -> AppErrorResult<usize> {
        let uid = self.registered_uid()?;
        let count = self.store.delete_all_health_log(&uid).await?;
        self.records.health_log.clear();
        Ok(count)
    }

    pub async fn set_appointment(&mut self, appointment: Appointment) -> AppErrorResult<()> {
        let uid = self.registered_uid()?;
        let stored = self.store.put_appointment(&uid, &appointment).await?;
        self.records.appointment = Some(stored);
        Ok(())
    }

    pub async fn delete_appointment(&mut self) -> AppErrorResult<()> {
        let uid = self.registered_uid()?;
        self.store.delete_appointment(&uid).await?;
        self.records.appointment = None;
        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// The uid allowed to touch the record store. Anonymous and signed-out
    /// sessions are refused locally.
    fn registered_uid(&self) -> AppErrorResult<String> {
        match self.session.current() {
            Some(identity) if identity.is_anonymous => Err(AppError::policy_gate(
                "Create an account to save and view your records",
            )),
            Some(identity) => Ok(identity.uid),
            None => Err(AppError::policy_gate("Sign in to manage your records")),
        }
    }
}
