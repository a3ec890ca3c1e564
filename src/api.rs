//! HTTP API for the college advisor.

mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::connectivity::ConnectivityMonitor;
use crate::conversation::ConversationLog;
use crate::profile::UserProfile;
use crate::resolver::Resolver;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A single advising session: who the student is plus everything said so far.
pub struct Session {
    pub profile: UserProfile,
    pub log: ConversationLog,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub resolver: Resolver,
    pub connectivity: ConnectivityMonitor,
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl AppState {
    pub fn new(resolver: Resolver, connectivity: ConnectivityMonitor) -> Self {
        Self {
            resolver,
            connectivity,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}
