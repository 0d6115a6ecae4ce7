use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use time::OffsetDateTime;

use crate::models::{AppState, CookedSession, GroceryList, ImportQuota, Recipe, month_key};

/// Fixed file name of the single persisted record.
const STATE_FILE_NAME: &str = "cookturn_state.json";

/// Free-plan monthly import cap.
pub const FREE_MONTHLY_LIMIT: u32 = 5;

/// Number of cooked sessions visible to free accounts.
pub const FREE_HISTORY_LIMIT: usize = 3;

/// Persistent store for the single [`AppState`] record.
///
/// All mutation goes through load-modify-save of the whole aggregate; the
/// last writer wins. That is safe under the intended single-threaded,
/// event-at-a-time usage. Anything sharing the same file across real
/// concurrent writers would need a revision field and compare-and-swap on
/// top of this.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Store backed by `cookturn_state.json` inside `dir`.
    pub fn open<P: AsRef<Path>>(dir: P) -> Self {
        StateStore {
            path: dir.as_ref().join(STATE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current state. Fails closed: a missing, unreadable, or
    /// corrupt record yields the default empty state rather than an error.
    /// The month-rollover correction is applied in memory on every load and
    /// reaches disk with the next save.
    pub fn load(&self) -> AppState {
        let now = OffsetDateTime::now_utc();
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return AppState::empty(now),
        };
        match serde_json::from_str::<AppState>(&raw) {
            Ok(state) => correct_for_current_month(state, now),
            Err(_) => AppState::empty(now),
        }
    }

    /// Overwrite the persisted record wholesale.
    pub fn save(&self, state: &AppState) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create state directory {:?}", parent))?;
        }
        let raw = serde_json::to_string(state)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write state file {:?}", self.path))?;
        Ok(())
    }

    /// Prepend an imported recipe and bump the monthly import counter.
    ///
    /// Quota enforcement is the caller's job via [`StateStore::can_import`];
    /// the store itself appends unconditionally.
    pub fn append_recipe(&self, recipe: Recipe) -> anyhow::Result<AppState> {
        let mut state = self.load();
        state.recipes.insert(0, recipe);
        state.monthly_imports += 1;
        self.save(&state)?;
        Ok(state)
    }

    /// Prepend a grocery-list snapshot.
    pub fn append_grocery_list(&self, list: GroceryList) -> anyhow::Result<AppState> {
        let mut state = self.load();
        state.grocery_lists.insert(0, list);
        self.save(&state)?;
        Ok(state)
    }

    /// Prepend a cooked session. The free-plan history cap is a read-side
    /// policy; writes are never refused here.
    pub fn append_cooked_session(&self, session: CookedSession) -> anyhow::Result<AppState> {
        let mut state = self.load();
        state.cooked_sessions.insert(0, session);
        self.save(&state)?;
        Ok(state)
    }

    pub fn set_pro_status(&self, is_pro: bool) -> anyhow::Result<AppState> {
        let mut state = self.load();
        state.is_pro = is_pro;
        self.save(&state)?;
        Ok(state)
    }

    /// Whether another import is allowed this month. Pro accounts are
    /// unbounded; the reported `limit` is the free cap either way.
    pub fn can_import(&self) -> ImportQuota {
        let state = self.load();
        ImportQuota {
            allowed: state.is_pro || state.monthly_imports < FREE_MONTHLY_LIMIT,
            count: state.monthly_imports,
            limit: FREE_MONTHLY_LIMIT,
        }
    }

    /// Cook history, most recent first. Free accounts see only the three
    /// most recent sessions.
    pub fn history(&self, is_pro: bool) -> Vec<CookedSession> {
        let state = self.load();
        if is_pro {
            state.cooked_sessions
        } else {
            state.cooked_sessions.into_iter().take(FREE_HISTORY_LIMIT).collect()
        }
    }
}

/// Reset the monthly import counter if the stored month key no longer matches
/// the calendar month of `now`. Pure so rollover is testable with a fixed
/// instant instead of a mocked clock.
pub fn correct_for_current_month(mut state: AppState, now: OffsetDateTime) -> AppState {
    let current = month_key(now);
    if state.month_key != current {
        state.monthly_imports = 0;
        state.month_key = current;
    }
    state
}
