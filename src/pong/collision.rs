//! Ball collision resolution on the grid
//!
//! The ball moves diagonally one cell per step. A paddle is tested one row
//! ahead of the ball in its direction of vertical travel, which approximates
//! where the ball would be at the moment of contact.

use serde::{Deserialize, Serialize};

use super::state::{PongState, Side};

/// What the ball touched during one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    /// Paddle that returned the ball
    pub paddle: Option<Side>,
    /// Top or bottom wall bounce
    pub wall: bool,
    /// Ball left the field, round over
    pub out: bool,
}

/// Resolve paddle, wall and boundary contacts for the ball's current cell
pub fn resolve_collisions(state: &mut PongState) -> Contacts {
    let mut contacts = Contacts::default();
    let grid = state.grid;
    let ball = &mut state.ball;

    if ball.vel.x == -1 && ball.pos.x == 1 {
        // Human side: look one row ahead in either vertical direction
        if state.left.covers_row(ball.pos.y + ball.vel.y) {
            ball.vel.x = -ball.vel.x;
            state.score += 1;
            contacts.paddle = Some(Side::Left);
        }
    } else if ball.vel.x == 1 && ball.pos.x == grid.width - 2 {
        // Computer side only looks one row below
        if state.right.covers_row(ball.pos.y + 1) {
            ball.vel.x = -ball.vel.x;
            contacts.paddle = Some(Side::Right);
        }
    }

    // Flip only while heading into the wall, the ball may sit on the edge row
    // for several ticks before its next move
    let into_top = ball.pos.y == 0 && ball.vel.y < 0;
    let into_bottom = ball.pos.y == grid.height - 1 && ball.vel.y > 0;
    if into_top || into_bottom {
        ball.vel.y = -ball.vel.y;
        contacts.wall = true;
    }

    if ball.pos.x == 0 || ball.pos.x == grid.width {
        state.game_over = true;
        contacts.out = true;
    }

    contacts
}
