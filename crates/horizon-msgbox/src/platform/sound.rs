//! System notification sounds.
//!
//! The dialog asks for a sound by alias; producing audio is the host's
//! concern. Install a [`SoundPlayer`] via [`set_sound_player`] to route
//! aliases to the platform mixer; with no player installed, playback is a
//! traced no-op.

use std::sync::Arc;

use parking_lot::RwLock;

/// A system event-sound alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemSound {
    /// The default notification sound.
    Default,
    /// The information sound.
    Asterisk,
    /// The warning sound.
    Exclamation,
    /// The critical-error sound.
    Hand,
}

impl SystemSound {
    /// The platform alias string for this sound.
    pub fn alias(&self) -> &'static str {
        match self {
            SystemSound::Default => "SystemDefault",
            SystemSound::Asterisk => "SystemAsterisk",
            SystemSound::Exclamation => "SystemExclamation",
            SystemSound::Hand => "SystemHand",
        }
    }
}

/// Plays system event sounds.
///
/// Implementations must not block: playback is fire-and-forget from the
/// dialog's point of view.
pub trait SoundPlayer: Send + Sync {
    /// Play the given system sound.
    fn play(&self, sound: SystemSound);
}

static SOUND_PLAYER: RwLock<Option<Arc<dyn SoundPlayer>>> = RwLock::new(None);

/// Install (or remove, with `None`) the process-wide sound player.
pub fn set_sound_player(player: Option<Arc<dyn SoundPlayer>>) {
    *SOUND_PLAYER.write() = player;
}

/// Play a system sound through the installed player, if any.
pub(crate) fn play(sound: SystemSound) {
    let player = SOUND_PLAYER.read().clone();
    match player {
        Some(player) => player.play(sound),
        None => {
            tracing::debug!(target: "horizon_msgbox::sound", alias = sound.alias(), "no sound player installed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    struct Recorder {
        played: Mutex<Vec<SystemSound>>,
    }

    impl SoundPlayer for Recorder {
        fn play(&self, sound: SystemSound) {
            self.played.lock().push(sound);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(SystemSound::Default.alias(), "SystemDefault");
        assert_eq!(SystemSound::Asterisk.alias(), "SystemAsterisk");
        assert_eq!(SystemSound::Exclamation.alias(), "SystemExclamation");
        assert_eq!(SystemSound::Hand.alias(), "SystemHand");
    }

    #[test]
    fn test_play_routes_to_installed_player() {
        let recorder = Arc::new(Recorder {
            played: Mutex::new(Vec::new()),
        });
        set_sound_player(Some(recorder.clone()));
        play(SystemSound::Exclamation);
        set_sound_player(None);

        // With no player installed, play is a no-op.
        play(SystemSound::Hand);

        assert_eq!(*recorder.played.lock(), vec![SystemSound::Exclamation]);
    }
}
