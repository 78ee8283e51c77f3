criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        scoring_maximum_break,
        scoring_random_actions,
        snapshotting_undo_cycle,
        serializing_frame_document,
        restoring_frame_document,
}

fn players() -> [PlayerInfo; 2] {
    [
        PlayerInfo::new("Player 1", "P1", 0),
        PlayerInfo::new("Player 2", "P2", 0),
    ]
}

fn frame() -> Frame {
    Frame::new(players(), Settings::default(), 0).expect("valid settings")
}

fn scoring_maximum_break(c: &mut criterion::Criterion) {
    c.bench_function("score a 147 clearance", |b| {
        let start = frame();
        b.iter(|| {
            let mut frame = start.clone();
            while frame.reds_remaining() > 0 {
                frame = frame.apply(Action::Pot(Ball::Red)).unwrap();
                frame = frame.apply(Action::Pot(Ball::Black)).unwrap();
            }
            for ball in Ball::colours() {
                frame = frame.apply(Action::Pot(ball)).unwrap();
            }
            frame
        })
    });
}

fn scoring_random_actions(c: &mut criterion::Criterion) {
    c.bench_function("apply 100 random pots and misses", |b| {
        let start = frame();
        b.iter(|| {
            let mut frame = start.clone();
            for _ in 0..100 {
                if frame.is_frame_over() {
                    break;
                }
                let action = Action::Pot(Ball::random());
                frame = frame.apply(action).unwrap_or_else(|_| frame.clone());
            }
            frame
        })
    });
}

fn snapshotting_undo_cycle(c: &mut criterion::Criterion) {
    c.bench_function("snapshot and undo a pot", |b| {
        let state = FrameState::new(players(), Settings::default(), 0).expect("valid settings");
        b.iter(|| {
            let mut state = state.clone();
            state.pot(Ball::Red).unwrap();
            state.undo();
            state
        })
    });
}

fn serializing_frame_document(c: &mut criterion::Criterion) {
    let frame = frame()
        .apply(Action::Pot(Ball::Red))
        .and_then(|f| f.apply(Action::Pot(Ball::Black)))
        .and_then(|f| f.apply(Action::Foul(4)))
        .expect("legal sequence");
    c.bench_function("serialize a frame to JSON", |b| {
        b.iter(|| serde_json::to_string(&FrameDoc::from(&frame)).unwrap())
    });
}

fn restoring_frame_document(c: &mut criterion::Criterion) {
    let frame = frame()
        .apply(Action::Pot(Ball::Red))
        .and_then(|f| f.apply(Action::Pot(Ball::Black)))
        .and_then(|f| f.apply(Action::Foul(4)))
        .expect("legal sequence");
    let json = serde_json::to_string(&FrameDoc::from(&frame)).unwrap();
    c.bench_function("restore a frame from JSON", |b| {
        b.iter(|| {
            let doc: FrameDoc = serde_json::from_str(&json).unwrap();
            Frame::try_from(doc).unwrap()
        })
    });
}

use baize::scoring::Action;
use baize::scoring::Ball;
use baize::scoring::Frame;
use baize::scoring::FrameDoc;
use baize::scoring::FrameState;
use baize::scoring::PlayerInfo;
use baize::scoring::Settings;
use baize::Arbitrary;
