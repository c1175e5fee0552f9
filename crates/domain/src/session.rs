//! Session navigation state machine
//!
//! ```text
//! Unselected --select_profile--> IntroPlaying --finish_intro--> Home
//!      ^                              |                          |
//!      +---------- reset_profile -----+--------------------------+
//! ```
//!
//! Route navigation is orthogonal: `/` renders the profile picker while
//! unselected and the home view otherwise. Detail routes do not consult the
//! session at all.

use crate::entities::Profile;

/// Discriminant of [`NavigationSession`], for logging and matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    Unselected,
    IntroPlaying,
    Home,
}

/// Why the intro overlay went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntroExit {
    /// The video reached its natural end
    Ended,
    /// The viewer tapped to skip
    Dismissed,
}

/// Result of requesting a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Transition {
    Applied,
    /// The request does not apply in the current phase; state is unchanged
    Ignored,
}

impl Transition {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// What the root route (`/`) should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootView<'a> {
    ProfileSelect,
    Home {
        profile: &'a Profile,
        intro_playing: bool,
    },
}

/// Session state owned by the root controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavigationSession {
    #[default]
    Unselected,
    IntroPlaying(Profile),
    Home(Profile),
}

impl NavigationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        match self {
            Self::Unselected => SessionPhase::Unselected,
            Self::IntroPlaying(_) => SessionPhase::IntroPlaying,
            Self::Home(_) => SessionPhase::Home,
        }
    }

    pub fn selected_profile(&self) -> Option<&Profile> {
        match self {
            Self::Unselected => None,
            Self::IntroPlaying(profile) | Self::Home(profile) => Some(profile),
        }
    }

    pub fn is_intro_playing(&self) -> bool {
        matches!(self, Self::IntroPlaying(_))
    }

    pub fn root_view(&self) -> RootView<'_> {
        match self {
            Self::Unselected => RootView::ProfileSelect,
            Self::IntroPlaying(profile) => RootView::Home {
                profile,
                intro_playing: true,
            },
            Self::Home(profile) => RootView::Home {
                profile,
                intro_playing: false,
            },
        }
    }

    /// `Unselected → IntroPlaying`. Ignored once a profile is chosen.
    pub fn select_profile(&mut self, profile: Profile) -> Transition {
        match self {
            Self::Unselected => {
                *self = Self::IntroPlaying(profile);
                Transition::Applied
            }
            _ => Transition::Ignored,
        }
    }

    /// `IntroPlaying → Home`. Both exit paths share this transition, so a
    /// second signal for the same playback is ignored.
    pub fn finish_intro(&mut self, _exit: IntroExit) -> Transition {
        match std::mem::take(self) {
            Self::IntroPlaying(profile) => {
                *self = Self::Home(profile);
                Transition::Applied
            }
            other => {
                *self = other;
                Transition::Ignored
            }
        }
    }

    /// Any phase → `Unselected`, forgetting the profile.
    pub fn reset_profile(&mut self) -> Transition {
        match std::mem::take(self) {
            Self::Unselected => Transition::Ignored,
            _ => Transition::Applied,
        }
    }
}
