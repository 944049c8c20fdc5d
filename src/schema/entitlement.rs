//! Entitlement gate boundary contract.
//!
//! Session and subscription lookups are network calls owned by the host
//! application; the engine only models the record shapes and the pure
//! decision of which view to render.

use serde::{Deserialize, Serialize};

/// An authenticated session, as reported by the host's auth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
}

/// Subscription record keyed by user identity. Only `status == "active"`
/// is meaningful to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entitlement {
    pub status: String,
    pub plan: Option<String>,
}

impl Entitlement {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// Which subtree the host should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateView {
    /// Session lookup still in flight; leave prior UI state unchanged.
    Loading,
    /// No session: show the auth collaborator.
    SignedOut,
    /// Session but no active entitlement: show the upsell view.
    /// Carries the status to display ("sem cadastro" when absent).
    Locked { status: String },
    /// Active entitlement: render the generator subtree.
    Open,
}

/// Resolve the gate decision from the current lookups. Re-run whenever the
/// host receives an asynchronous session-change notification.
pub fn resolve_gate(
    loading: bool,
    session: Option<&Session>,
    entitlement: Option<&Entitlement>,
) -> GateView {
    if loading {
        return GateView::Loading;
    }
    match session {
        None => GateView::SignedOut,
        Some(_) => match entitlement {
            Some(ent) if ent.is_active() => GateView::Open,
            Some(ent) => GateView::Locked {
                status: ent.status.clone(),
            },
            None => GateView::Locked {
                status: "sem cadastro".to_string(),
            },
        },
    }
}

/// Initial tab hint taken from the URL fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialView {
    #[default]
    Story,
    Prompt,
}

impl InitialView {
    /// Accepts the fragment with or without the leading `#`; anything
    /// unrecognized falls back to the story view.
    pub fn from_fragment(fragment: &str) -> InitialView {
        match fragment.trim_start_matches('#') {
            "prompt" => InitialView::Prompt,
            _ => InitialView::Story,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            user_id: "u-1".to_string(),
        }
    }

    #[test]
    fn loading_wins_over_everything() {
        let ent = Entitlement {
            status: "active".to_string(),
            plan: Some("pro".to_string()),
        };
        assert_eq!(
            resolve_gate(true, Some(&session()), Some(&ent)),
            GateView::Loading
        );
    }

    #[test]
    fn no_session_is_signed_out() {
        assert_eq!(resolve_gate(false, None, None), GateView::SignedOut);
    }

    #[test]
    fn active_entitlement_opens_the_gate() {
        let ent = Entitlement {
            status: "active".to_string(),
            plan: None,
        };
        assert_eq!(resolve_gate(false, Some(&session()), Some(&ent)), GateView::Open);
    }

    #[test]
    fn inactive_entitlement_locks_with_status() {
        let ent = Entitlement {
            status: "canceled".to_string(),
            plan: Some("basic".to_string()),
        };
        assert_eq!(
            resolve_gate(false, Some(&session()), Some(&ent)),
            GateView::Locked {
                status: "canceled".to_string()
            }
        );
    }

    #[test]
    fn missing_entitlement_locks_with_placeholder() {
        assert_eq!(
            resolve_gate(false, Some(&session()), None),
            GateView::Locked {
                status: "sem cadastro".to_string()
            }
        );
    }

    #[test]
    fn fragment_selects_initial_view() {
        assert_eq!(InitialView::from_fragment("#prompt"), InitialView::Prompt);
        assert_eq!(InitialView::from_fragment("prompt"), InitialView::Prompt);
        assert_eq!(InitialView::from_fragment("#story"), InitialView::Story);
        assert_eq!(InitialView::from_fragment(""), InitialView::Story);
        assert_eq!(InitialView::from_fragment("#unknown"), InitialView::Story);
    }
}
