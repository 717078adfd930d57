use game_core::{RoundState, Snapshot, Winner};
use proto::{CoreMsg, Frame, Outcome, Phase, SIDE_LEFT, SIDE_RIGHT};

/// Messages to publish for one tick: the frame first, then its events.
pub fn messages(snap: &Snapshot) -> Vec<CoreMsg> {
    let mut msgs = vec![CoreMsg::Frame(frame(snap))];
    let events = &snap.events;

    if events.left_paddle_hit {
        msgs.push(CoreMsg::PaddleHit { side: SIDE_LEFT });
    }
    if events.right_paddle_hit {
        msgs.push(CoreMsg::PaddleHit { side: SIDE_RIGHT });
    }
    if events.ball_hit_wall {
        msgs.push(CoreMsg::WallHit);
    }
    if events.left_scored {
        msgs.push(CoreMsg::Scored { side: SIDE_LEFT });
    }
    if events.right_scored {
        msgs.push(CoreMsg::Scored { side: SIDE_RIGHT });
    }
    if events.game_over {
        if let Some(winner) = snap.winner {
            msgs.push(CoreMsg::GameOver {
                outcome: outcome(winner),
            });
        }
    }
    msgs
}

pub fn frame(snap: &Snapshot) -> Frame {
    Frame {
        tick: snap.tick,
        phase: phase(snap.state),
        ball_x: snap.ball.pos.x,
        ball_y: snap.ball.pos.y,
        ball_dx: snap.ball.vel.x,
        ball_dy: snap.ball.vel.y,
        ball_radius: snap.ball.radius,
        paddle_left_y: snap.left_paddle.y,
        paddle_right_y: snap.right_paddle.y,
        paddle_width: snap.left_paddle.width,
        paddle_height: snap.left_paddle.height,
        score_left: snap.left_score,
        score_right: snap.right_score,
        max_score: snap.max_score,
        time_remaining_ms: snap.time_remaining_ms,
    }
}

fn phase(state: RoundState) -> Phase {
    match state {
        RoundState::Idle => Phase::Idle,
        RoundState::Running => Phase::Running,
        RoundState::Paused => Phase::Paused,
        RoundState::Over => Phase::Over,
    }
}

fn outcome(winner: Winner) -> Outcome {
    match winner {
        Winner::Left => Outcome::Left,
        Winner::Right => Outcome::Right,
        Winner::Tie => Outcome::Tie,
    }
}
