//! Intro overlay playback policy
//!
//! The overlay first tries to autoplay with sound. Browsers may reject that;
//! the overlay then retries muted and asks the viewer to tap for sound. A tap
//! either grants sound (when waiting for it) or skips the intro. The natural
//! end of the video also dismisses. Dismissal is latched so the view reports
//! it to the session exactly once.

/// What the view should do with the video element after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntroCommand {
    Nothing,
    /// Autoplay was refused; restart playback muted
    RetryMuted,
    /// Viewer granted sound; unmute and play again
    Unmute,
    /// Stop, rewind, release media and close the overlay
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroPlayback {
    muted: bool,
    awaiting_enable: bool,
    dismissed: bool,
}

impl Default for IntroPlayback {
    fn default() -> Self {
        Self::new()
    }
}

impl IntroPlayback {
    /// Fresh playback: attempt with sound.
    pub fn new() -> Self {
        Self {
            muted: false,
            awaiting_enable: false,
            dismissed: false,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_awaiting_enable(&self) -> bool {
        self.awaiting_enable
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// A `play()` attempt was rejected by the runtime.
    pub fn autoplay_rejected(&mut self) -> IntroCommand {
        if self.dismissed {
            return IntroCommand::Nothing;
        }
        self.awaiting_enable = true;
        if self.muted {
            // Even muted playback is blocked; wait for a tap
            IntroCommand::Nothing
        } else {
            self.muted = true;
            IntroCommand::RetryMuted
        }
    }

    /// Tap or click anywhere on the overlay.
    pub fn tap(&mut self) -> IntroCommand {
        if self.dismissed {
            return IntroCommand::Nothing;
        }
        if self.awaiting_enable {
            self.awaiting_enable = false;
            self.muted = false;
            return IntroCommand::Unmute;
        }
        self.dismissed = true;
        IntroCommand::Dismiss
    }

    /// The video fired `ended`.
    pub fn ended(&mut self) -> IntroCommand {
        if self.dismissed {
            return IntroCommand::Nothing;
        }
        self.dismissed = true;
        IntroCommand::Dismiss
    }

    pub fn hint(&self) -> &'static str {
        if self.awaiting_enable {
            "Tap to enable sound"
        } else if self.muted {
            "Tap to unmute • Tap again to continue"
        } else {
            "Tap to continue"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unblocked_tap_dismisses() {
        let mut intro = IntroPlayback::new();
        assert_eq!(intro.hint(), "Tap to continue");
        assert_eq!(intro.tap(), IntroCommand::Dismiss);
        assert!(intro.is_dismissed());
    }

    #[test]
    fn test_blocked_autoplay_falls_back_to_muted() {
        let mut intro = IntroPlayback::new();
        assert_eq!(intro.autoplay_rejected(), IntroCommand::RetryMuted);
        assert!(intro.is_muted());
        assert!(intro.is_awaiting_enable());
        assert_eq!(intro.hint(), "Tap to enable sound");

        // First tap grants sound instead of dismissing
        assert_eq!(intro.tap(), IntroCommand::Unmute);
        assert!(!intro.is_muted());
        assert!(!intro.is_dismissed());

        // Second tap dismisses
        assert_eq!(intro.tap(), IntroCommand::Dismiss);
    }

    #[test]
    fn test_muted_retry_also_blocked_waits_for_tap() {
        let mut intro = IntroPlayback::new();
        let _ = intro.autoplay_rejected();
        assert_eq!(intro.autoplay_rejected(), IntroCommand::Nothing);
        assert!(intro.is_awaiting_enable());
    }

    #[test]
    fn test_rejected_unmute_returns_to_muted_and_waits() {
        let mut intro = IntroPlayback::new();
        let _ = intro.autoplay_rejected();
        assert_eq!(intro.tap(), IntroCommand::Unmute);

        // Unmuted play refused again: back to muted playback
        assert_eq!(intro.autoplay_rejected(), IntroCommand::RetryMuted);
        assert!(intro.is_muted());
        assert!(intro.is_awaiting_enable());
        assert!(!intro.is_dismissed());
        assert_eq!(intro.hint(), "Tap to enable sound");

        // The next tap tries sound again rather than dismissing
        assert_eq!(intro.tap(), IntroCommand::Unmute);
    }

    #[test]
    fn test_dismiss_fires_once_across_paths() {
        let mut intro = IntroPlayback::new();
        assert_eq!(intro.ended(), IntroCommand::Dismiss);
        assert_eq!(intro.tap(), IntroCommand::Nothing);
        assert_eq!(intro.ended(), IntroCommand::Nothing);
        assert_eq!(intro.autoplay_rejected(), IntroCommand::Nothing);

        let mut intro = IntroPlayback::new();
        assert_eq!(intro.tap(), IntroCommand::Dismiss);
        assert_eq!(intro.ended(), IntroCommand::Nothing);
    }

    #[test]
    fn test_muted_hint_without_pending_enable() {
        let intro = IntroPlayback {
            muted: true,
            awaiting_enable: false,
            dismissed: false,
        };
        assert_eq!(intro.hint(), "Tap to unmute • Tap again to continue");
    }
}
