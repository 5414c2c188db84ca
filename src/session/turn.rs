//! Whose turn it is.
//!
//! Classic games walk the roster in seat order with wrap-around. Wheel and
//! bottle games have no fixed order: each round starts with a spin that
//! picks any player uniformly, including the previous one.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameVariant, PlayerId};

/// Turn tracker for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOrder {
    variant: GameVariant,
    player_count: usize,
    current: Option<PlayerId>,
}

impl TurnOrder {
    /// Create a tracker. Classic games start with the first seat; spin
    /// variants start with nobody selected.
    pub fn new(variant: GameVariant, player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            variant,
            player_count,
            current: Self::initial(variant),
        }
    }

    fn initial(variant: GameVariant) -> Option<PlayerId> {
        if variant.spins() {
            None
        } else {
            Some(PlayerId::new(0))
        }
    }

    #[must_use]
    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Player whose turn it is, if one has been chosen.
    #[must_use]
    pub fn current(&self) -> Option<PlayerId> {
        self.current
    }

    /// Pick a random player.
    pub fn spin(&mut self, rng: &mut GameRng) -> PlayerId {
        let picked = PlayerId::new(rng.gen_range_usize(0..self.player_count) as u8);
        self.current = Some(picked);
        picked
    }

    /// End the current turn.
    ///
    /// Classic: the next seat, wrapping to the first. Spin variants: nobody
    /// until the next spin.
    pub fn advance(&mut self) -> Option<PlayerId> {
        self.current = if self.variant.spins() {
            None
        } else {
            let index = self.current.map_or(0, |p| (p.index() + 1) % self.player_count);
            Some(PlayerId::new(index as u8))
        };
        self.current
    }

    /// Back to the start of the session.
    pub fn reset(&mut self) {
        self.current = Self::initial(self.variant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_wraps_around() {
        let mut turns = TurnOrder::new(GameVariant::Classic, 3);
        assert_eq!(turns.current(), Some(PlayerId::new(0)));

        let order: Vec<_> = (0..3).map(|_| turns.advance().unwrap().index()).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_spin_variant_has_no_fixed_player() {
        let mut turns = TurnOrder::new(GameVariant::Wheel, 4);
        assert_eq!(turns.current(), None);

        let mut rng = GameRng::new(42);
        let picked = turns.spin(&mut rng);
        assert!(picked.index() < 4);
        assert_eq!(turns.current(), Some(picked));

        assert_eq!(turns.advance(), None);
    }

    #[test]
    fn test_spin_reaches_every_player() {
        let mut turns = TurnOrder::new(GameVariant::Bottle, 3);
        let mut rng = GameRng::new(7);

        let mut hit = [false; 3];
        for _ in 0..100 {
            hit[turns.spin(&mut rng).index()] = true;
        }
        assert!(hit.iter().all(|h| *h));
    }

    #[test]
    fn test_reset() {
        let mut turns = TurnOrder::new(GameVariant::Classic, 3);
        turns.advance();
        turns.advance();
        turns.reset();
        assert_eq!(turns.current(), Some(PlayerId::new(0)));
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_zero_players() {
        TurnOrder::new(GameVariant::Classic, 0);
    }

    #[test]
    #[should_panic(expected = "At most 255 players supported")]
    fn test_too_many_players() {
        TurnOrder::new(GameVariant::Wheel, 300);
    }

    #[test]
    fn test_last_seat_wraps() {
        let mut turns = TurnOrder::new(GameVariant::Classic, 255);
        for _ in 0..254 {
            turns.advance();
        }
        assert_eq!(turns.current(), Some(PlayerId::new(254)));
        assert_eq!(turns.advance(), Some(PlayerId::new(0)));
    }
}
