//! Multi-turn domain tracking.
//!
//! An [`ActiveDomain`] is a skill-created field effect with a lifetime
//! measured in turn-end events. Permanent domains (the witch coven) are a
//! tagged variant rather than a sentinel turn count, so they can never be
//! decremented by accident.

use serde::{Deserialize, Serialize};

use crate::catalog::SkillId;
use crate::core::player::Player;
use crate::engine::draw::DrawnEffects;

/// Unique id for one tracked domain within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DomainId(pub u64);

/// Domain lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainDuration {
    /// Expires after this many turn-end events. Always > 0 while tracked.
    Turns(u8),
    /// Never decremented, never expires, never punished.
    Permanent,
}

impl DomainDuration {
    #[must_use]
    pub const fn is_permanent(self) -> bool {
        matches!(self, Self::Permanent)
    }

    /// Turns remaining, if finite.
    #[must_use]
    pub const fn turns(self) -> Option<u8> {
        match self {
            Self::Turns(n) => Some(n),
            Self::Permanent => None,
        }
    }
}

/// One in-flight domain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveDomain {
    pub id: DomainId,
    pub skill: SkillId,
    pub name: String,
    pub duration: DomainDuration,
    /// Effect option ids drawn at activation (empty for the coven).
    pub effects: DrawnEffects,
    pub owner: Player,
}

impl ActiveDomain {
    /// Decrement a finite duration by one turn. Returns `true` if the
    /// domain expired.
    pub fn tick(&mut self) -> bool {
        match self.duration {
            DomainDuration::Permanent => false,
            DomainDuration::Turns(n) => {
                let left = n.saturating_sub(1);
                self.duration = DomainDuration::Turns(left);
                left == 0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::registry::skills;

    fn domain(duration: DomainDuration) -> ActiveDomain {
        ActiveDomain {
            id: DomainId(1),
            skill: skills::JACKPOT,
            name: "Jackpot".into(),
            duration,
            effects: DrawnEffects::new(),
            owner: Player::One,
        }
    }

    #[test]
    fn test_finite_domain_expires() {
        let mut d = domain(DomainDuration::Turns(2));
        assert!(!d.tick());
        assert_eq!(d.duration, DomainDuration::Turns(1));
        assert!(d.tick());
        assert_eq!(d.duration, DomainDuration::Turns(0));
    }

    #[test]
    fn test_permanent_domain_never_expires() {
        let mut d = domain(DomainDuration::Permanent);
        for _ in 0..100 {
            assert!(!d.tick());
        }
        assert!(d.duration.is_permanent());
    }

    #[test]
    fn test_turns_accessor() {
        assert_eq!(DomainDuration::Turns(3).turns(), Some(3));
        assert_eq!(DomainDuration::Permanent.turns(), None);
    }
}
