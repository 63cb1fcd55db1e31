use rand::Rng;

use crate::controller::Controller;

pub const BOT_NAME: &str = "Sup_Bot";

/// Points riding on the current turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Turn {
    pub score: u32,
    pub rolls: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PigPlayer {
    pub name: String,
    pub controller: Controller,
    pub score: u32,
    /// Die rolled to decide the seating order
    pub roll_order: u8,
}

impl PigPlayer {
    pub fn new(name: impl Into<String>, controller: Controller) -> Self {
        Self {
            name: name.into(),
            controller,
            score: 0,
            roll_order: 0,
        }
    }
}

/// Roll one six-sided die
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=6)
}

/// Name every seat: humans by seat number, bots as `Sup_Bot`, numbered when
/// there is more than one of them.
pub fn name_seats(seats: &[Controller]) -> Vec<PigPlayer> {
    let bots = seats.iter().filter(|seat| seat.is_bot()).count();
    let mut bot_number = 0;

    seats
        .iter()
        .enumerate()
        .map(|(index, controller)| {
            let name = match controller {
                Controller::Human => format!("Player {}", index + 1),
                Controller::Bot if bots > 1 => {
                    bot_number += 1;
                    format!("{BOT_NAME} #{bot_number}")
                }
                Controller::Bot => BOT_NAME.to_string(),
            };
            PigPlayer::new(name, *controller)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_die_faces() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            assert!((1..=6).contains(&roll_die(&mut rng)));
        }
    }

    #[test]
    fn test_seat_names() {
        let players = name_seats(&[Controller::Human, Controller::Bot]);
        assert_eq!(players[0].name, "Player 1");
        assert_eq!(players[1].name, "Sup_Bot");

        let players = name_seats(&[Controller::Bot, Controller::Human, Controller::Bot]);
        assert_eq!(players[0].name, "Sup_Bot #1");
        assert_eq!(players[1].name, "Player 2");
        assert_eq!(players[2].name, "Sup_Bot #2");
    }
}
