use hecs::World;
use log::debug;

use crate::params::Params;
use crate::table::Table;
use crate::{Ball, CollisionKind, Events, Paddle, Side};

/// Reverse a ball whose edge left the table sideways. The wall also flips spin.
///
/// There is no approach-direction check: a ball deeper past the edge than one
/// step of `|vx|` flips again (and emits another event) every step until it
/// works its way back.
pub fn bounce_off_walls(ball: &mut Ball, table: &Table, events: &mut Events) -> bool {
    let hit = ball.pos.x - ball.radius < table.left() || ball.pos.x + ball.radius > table.right();
    if hit {
        ball.vel.x = -ball.vel.x;
        ball.spin = -ball.spin;
        events.push_collision(CollisionKind::Wall, ball.pos);
        debug!("Ball hit side wall at {:?}", ball.pos);
    }
    hit
}

/// Bounce off the net: reverse horizontally and send the ball back toward
/// the half it is in.
///
/// Like the walls, this fires on every step the ball is inside the net band,
/// whichever way it is moving.
pub fn bounce_off_net(ball: &mut Ball, table: &Table, events: &mut Events) -> bool {
    let near_net = (ball.pos.x - table.net_x()).abs() < ball.radius + Params::NET_HALF_THICKNESS;
    let within_net_span =
        ball.pos.y >= table.top() - table.net_height() && ball.pos.y <= table.bottom();
    if !(near_net && within_net_span) {
        return false;
    }

    ball.vel.x = -ball.vel.x;
    ball.vel.y = if ball.pos.y < table.mid_y() {
        -ball.vel.y.abs()
    } else {
        ball.vel.y.abs()
    };
    events.push_collision(CollisionKind::Net, ball.pos);
    debug!("Ball hit net at {:?}", ball.pos);
    true
}

/// Player return. Only a ball travelling toward the player can be hit.
///
/// The gap between pointer and paddle center stands in for swing speed: it
/// pushes the ball sideways and sets its spin.
pub fn hit_player_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    pointer_x: f32,
    events: &mut Events,
) -> bool {
    if !(ball.vel.y > 0.0 && paddle.bounds().overlaps_circle(ball.pos, ball.radius)) {
        return false;
    }

    ball.vel.y = -ball.vel.y.abs() - Params::PADDLE_BOOST;

    let swing = (pointer_x - paddle.pos.x - paddle.width / 2.0) * Params::PLAYER_SWING_FACTOR;
    ball.vel.x += swing * Params::PLAYER_SWING_TO_VX;
    ball.spin = swing * Params::PLAYER_SWING_TO_SPIN;

    ball.last_hit_by = Some(Side::Player);
    events.push_collision(CollisionKind::Paddle(Side::Player), ball.pos);
    debug!("Player returned ball, swing {:.2}", swing);
    true
}

/// AI return. Only a ball travelling toward the AI can be hit.
///
/// Where the ball meets the paddle, from -1 (left edge) to 1 (right edge),
/// sets the outgoing angle and spin.
pub fn hit_ai_paddle(ball: &mut Ball, paddle: &Paddle, events: &mut Events) -> bool {
    if !(ball.vel.y < 0.0 && paddle.bounds().overlaps_circle(ball.pos, ball.radius)) {
        return false;
    }

    ball.vel.y = ball.vel.y.abs() + Params::PADDLE_BOOST;

    let half_width = paddle.width / 2.0;
    let hit_offset = if half_width > 0.0 {
        ((ball.pos.x - paddle.center_x()) / half_width).clamp(-1.0, 1.0)
    } else {
        0.0
    };
    ball.vel.x += hit_offset * Params::AI_OFFSET_TO_VX;
    ball.spin = hit_offset * Params::AI_OFFSET_TO_SPIN;

    ball.last_hit_by = Some(Side::Ai);
    events.push_collision(CollisionKind::Paddle(Side::Ai), ball.pos);
    debug!("AI returned ball, offset {:.2}", hit_offset);
    true
}

/// Find a paddle by side
pub fn find_paddle(world: &World, side: Side) -> Option<Paddle> {
    let mut query = world.query::<&Paddle>();
    let found = query.iter().map(|(_e, p)| *p).find(|p| p.side == side);
    found
}

/// Check ball collisions with walls, net and paddles, in that order
pub fn check_collisions(world: &mut World, table: &Table, pointer_x: f32, events: &mut Events) {
    // Paddles are read-only here; copy them out before borrowing the ball
    let player = find_paddle(world, Side::Player);
    let ai = find_paddle(world, Side::Ai);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        bounce_off_walls(ball, table, events);
        bounce_off_net(ball, table, events);
        if let Some(paddle) = &player {
            hit_player_paddle(ball, paddle, pointer_x, events);
        }
        if let Some(paddle) = &ai {
            hit_ai_paddle(ball, paddle, events);
        }
    }
}
